use std::collections::HashMap;

use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::model::{Item, MAX_LEVEL, single_line};
use crate::parse::list_parser::ParseWarning;

/// The JSON record written by earlier versions of the tool: item texts,
/// a set of completed indices (`{"2": {}}`), and a parallel array of levels.
#[derive(Debug, Deserialize)]
struct LegacyList {
    #[serde(rename = "Tasks", default)]
    tasks: Option<Vec<String>>,
    #[serde(rename = "Completed", default)]
    completed: Option<HashMap<String, IgnoredAny>>,
    #[serde(rename = "IndentationLevels", default)]
    indentation_levels: Option<Vec<i64>>,
}

/// Read a legacy JSON list into items.
///
/// Levels missing for an item default to 0 and extra levels are dropped.
/// Levels deeper than `MAX_LEVEL` are clamped with a warning.
/// Completed indices that are not numbers or point past the last item are
/// skipped with a warning.
pub fn parse_legacy_list(source: &str) -> Result<(Vec<Item>, Vec<ParseWarning>), serde_json::Error> {
    let legacy: LegacyList = serde_json::from_str(source)?;
    let mut warnings = Vec::new();

    let levels = legacy.indentation_levels.unwrap_or_default();
    let mut items = Vec::new();
    for (i, text) in legacy.tasks.unwrap_or_default().iter().enumerate() {
        let raw = levels.get(i).copied().unwrap_or(0);
        let level = usize::try_from(raw).unwrap_or(0);
        if level > MAX_LEVEL {
            warnings.push(ParseWarning {
                line: None,
                message: format!("level {} of item {} is deeper than {}", raw, i, MAX_LEVEL),
            });
        }
        items.push(Item {
            text: single_line(text),
            level: level.min(MAX_LEVEL),
            completed: false,
        });
    }

    let mut keys: Vec<String> = legacy.completed.unwrap_or_default().into_keys().collect();
    keys.sort();
    for key in keys {
        match key.parse::<usize>() {
            Ok(idx) if idx < items.len() => items[idx].completed = true,
            Ok(idx) => warnings.push(ParseWarning {
                line: None,
                message: format!("completed index {} is past the last item", idx),
            }),
            Err(_) => warnings.push(ParseWarning {
                line: None,
                message: format!("completed index {:?} is not a number", key),
            }),
        }
    }

    Ok((items, warnings))
}
