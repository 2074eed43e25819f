use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let gw = display_width(g);
        if width + gw > budget {
            break;
        }
        width += gw;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte range of `s` to show in a field `width` cells wide so that the
/// grapheme under the cursor (byte `cursor`) stays visible. A cursor at the
/// end of the text needs one cell of its own.
pub fn visible_window(s: &str, cursor: usize, width: usize) -> (usize, usize) {
    let cursor = cursor.min(s.len());
    if width == 0 {
        return (cursor, cursor);
    }
    if display_width(s) < width {
        return (0, s.len());
    }

    let under = s[cursor..].graphemes(true).next().unwrap_or("");
    let mut used = display_width(under).max(1);
    let mut end = cursor + under.len();

    // Walk left from the cursor until the field is full
    let mut start = cursor;
    for (i, g) in s[..cursor].grapheme_indices(true).rev() {
        let gw = display_width(g);
        if used + gw > width {
            break;
        }
        used += gw;
        start = i;
    }

    // Then fill the rest of the field to the right
    for g in s[end..].graphemes(true) {
        let gw = display_width(g);
        if used + gw > width {
            break;
        }
        used += gw;
        end += g.len();
    }
    (start, end)
}
