use serde::{Deserialize, Serialize};

/// Deepest indentation level an item can reach
pub const MAX_LEVEL: usize = 32;

/// One entry in the outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item text (always a single line)
    pub text: String,
    /// Indentation depth (0 = top-level)
    pub level: usize,
    /// Whether the item is checked off
    pub completed: bool,
}

impl Item {
    /// Create an open item, replacing any line breaks in `text` with spaces
    pub fn new(text: &str, level: usize) -> Self {
        Item {
            text: single_line(text),
            level,
            completed: false,
        }
    }

    /// The character used inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.completed { 'x' } else { ' ' }
    }
}

/// Collapse line breaks so the text fits on one line of the list file.
pub fn single_line(text: &str) -> String {
    if !text.contains(['\n', '\r']) {
        return text.to_string();
    }
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_is_open() {
        let item = Item::new("Buy milk", 2);
        assert_eq!(item.text, "Buy milk");
        assert_eq!(item.level, 2);
        assert!(!item.completed);
        assert_eq!(item.checkbox_char(), ' ');
    }

    #[test]
    fn line_breaks_become_spaces() {
        assert_eq!(single_line("a\nb"), "a b");
        assert_eq!(single_line("a\r\nb"), "a b");
        assert_eq!(single_line("a\rb\n"), "a b ");
        assert_eq!(Item::new("one\ntwo", 0).text, "one two");
    }
}
