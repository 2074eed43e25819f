use unicode_segmentation::UnicodeSegmentation;

use crate::model::item::single_line;

/// Single-line text buffer for the item being composed.
///
/// `cursor` is a byte offset that always sits on a grapheme boundary.
/// `max_chars` caps the number of chars; input past the cap is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
    max_chars: usize,
}

impl TextInput {
    pub fn new(max_chars: usize) -> Self {
        TextInput {
            value: String::new(),
            cursor: 0,
            max_chars,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Take the text out, leaving the buffer empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    fn room(&self) -> usize {
        self.max_chars.saturating_sub(self.value.chars().count())
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' || c == '\r' {
            return self.insert_char(' ');
        }
        if self.room() == 0 {
            return;
        }
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text at the cursor. Line breaks become spaces and the
    /// text is cut at the char limit.
    pub fn insert_str(&mut self, text: &str) {
        let clean = single_line(text).replace('\t', " ");
        let fitted: String = clean.chars().take(self.room()).collect();
        self.value.insert_str(self.cursor, &fitted);
        self.cursor += fitted.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.value[self.cursor..]
            .graphemes(true)
            .next()
            .map(|g| self.cursor + g.len())
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.value.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.value.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Start of the word left of the cursor (whitespace-delimited)
    fn word_left(&self) -> usize {
        let mut pos = self.cursor;
        let mut in_word = false;
        for (i, g) in self.value[..self.cursor].grapheme_indices(true).rev() {
            let blank = g.chars().all(char::is_whitespace);
            if blank && in_word {
                break;
            }
            in_word |= !blank;
            pos = i;
        }
        pos
    }

    /// Start of the next word right of the cursor
    fn word_right(&self) -> usize {
        let mut seen_blank = false;
        for (i, g) in self.value[self.cursor..].grapheme_indices(true) {
            let blank = g.chars().all(char::is_whitespace);
            if !blank && seen_blank {
                return self.cursor + i;
            }
            seen_blank |= blank;
        }
        self.value.len()
    }

    pub fn move_word_left(&mut self) {
        self.cursor = self.word_left();
    }

    pub fn move_word_right(&mut self) {
        self.cursor = self.word_right();
    }

    /// Delete the word before the cursor (Ctrl+W / Alt+Backspace)
    pub fn delete_word_back(&mut self) {
        let start = self.word_left();
        self.value.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Delete from the start of the line to the cursor (Ctrl+U)
    pub fn kill_to_start(&mut self) {
        self.value.drain(..self.cursor);
        self.cursor = 0;
    }

    /// Delete from the cursor to the end of the line (Ctrl+K)
    pub fn kill_to_end(&mut self) {
        self.value.truncate(self.cursor);
    }
}
