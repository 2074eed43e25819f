use std::fmt;

use crate::model::{Item, MAX_LEVEL};
use crate::parse::legacy::parse_legacy_list;

/// Spaces per indentation level in the list file
pub const INDENT: usize = 2;

/// A line (or legacy entry) that could not be read as a list item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based source line, when the warning points at one
    pub line: Option<usize>,
    pub message: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {}", line, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Error for list sources that cannot be read at all
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("could not parse legacy JSON list: {0}")]
    Legacy(#[from] serde_json::Error),
}

/// Parse a list file.
///
/// Markdown checklists are the native format. A source whose first non-blank
/// character is `{` is read as a legacy JSON list instead. `#` headings are
/// allowed before the first item. Unrecognized lines are skipped and reported
/// as warnings.
pub fn parse_list(source: &str) -> Result<(Vec<Item>, Vec<ParseWarning>), ParseError> {
    if source.trim_start().starts_with('{') {
        return Ok(parse_legacy_list(source)?);
    }

    let mut items = Vec::new();
    let mut warnings = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let trimmed = line.trim();

        // Headings are only a title before the first item
        if trimmed.is_empty() || (items.is_empty() && trimmed.starts_with('#')) {
            continue;
        }

        match parse_item_line(line) {
            Some(mut item) => {
                if item.level > MAX_LEVEL {
                    warnings.push(ParseWarning {
                        line: Some(idx + 1),
                        message: format!("indented deeper than level {}", MAX_LEVEL),
                    });
                    item.level = MAX_LEVEL;
                }
                items.push(item);
            }
            None => warnings.push(ParseWarning {
                line: Some(idx + 1),
                message: format!("not a list item: {}", trimmed),
            }),
        }
    }

    Ok((items, warnings))
}

/// Parse `<indent>- [c] text` into an item.
fn parse_item_line(line: &str) -> Option<Item> {
    let indent = count_indent(line);
    let rest = line[indent..].strip_prefix("- [")?;

    let mut chars = rest.chars();
    let completed = match chars.next()? {
        ' ' => false,
        'x' | 'X' => true,
        _ => return None,
    };
    let rest = chars.as_str().strip_prefix(']')?;

    // Exactly one space separates the checkbox from the text; the rest is verbatim
    let text = if rest.is_empty() {
        ""
    } else {
        rest.strip_prefix(' ')?
    };

    Some(Item {
        text: text.to_string(),
        level: indent / INDENT,
        completed,
    })
}

/// Count leading spaces
fn count_indent(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}
