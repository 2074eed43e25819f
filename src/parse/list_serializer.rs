use crate::model::{Item, single_line};
use crate::parse::list_parser::INDENT;

/// Serialize a list to its markdown checklist form, headed by `# title`.
pub fn serialize_list(title: &str, items: &[Item]) -> String {
    let mut lines = Vec::new();

    let title = single_line(title);
    if !title.trim().is_empty() {
        lines.push(format!("# {}", title.trim()));
        if !items.is_empty() {
            lines.push(String::new());
        }
    }

    lines.extend(items.iter().map(serialize_item));

    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// `<indent>- [x] text`; an empty text leaves no trailing space
fn serialize_item(item: &Item) -> String {
    let mut line = format!(
        "{}- [{}]",
        " ".repeat(item.level * INDENT),
        item.checkbox_char()
    );
    if !item.text.is_empty() {
        line.push(' ');
        line.push_str(&item.text);
    }
    line
}
