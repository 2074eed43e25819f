use crate::model::Item;

/// Plain-text view of a list, used by `--print`:
///
/// ```text
/// Tasks: groceries
///
///  [ ] Buy milk
///      [x] 2% or whole
/// ```
///
/// `cursor` marks one row with `>`.
pub fn render_plain(title: &str, items: &[Item], cursor: Option<usize>, indent_width: usize) -> String {
    let mut out = format!("Tasks: {}\n", title);
    if items.is_empty() {
        return out;
    }
    out.push('\n');
    for (i, item) in items.iter().enumerate() {
        let marker = if cursor == Some(i) { '>' } else { ' ' };
        out.push_str(&" ".repeat(item.level.saturating_mul(indent_width)));
        out.push_str(&format!("{} [{}] {}\n", marker, item.checkbox_char(), item.text));
    }
    out
}
