use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// What confirming a new item does next
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmBehavior {
    /// Commit the item and go back to navigating
    #[default]
    Single,
    /// Commit the item and start typing the next one
    Rapid,
}

impl ConfirmBehavior {
    /// The behavior bound to the alternate confirm key
    pub fn other(self) -> Self {
        match self {
            ConfirmBehavior::Single => ConfirmBehavior::Rapid,
            ConfirmBehavior::Rapid => ConfirmBehavior::Single,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub confirm: ConfirmBehavior,
    /// Items moved by `{` / `}`
    #[serde(default = "default_jump")]
    pub jump: usize,
    /// New items start at the level of the selected item instead of 0
    #[serde(default)]
    pub inherit_indent: bool,
    /// Maximum characters in one item
    #[serde(default = "default_max_item_len")]
    pub max_item_len: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            confirm: ConfirmBehavior::default(),
            jump: default_jump(),
            inherit_indent: false,
            max_item_len: default_max_item_len(),
        }
    }
}

fn default_jump() -> usize {
    3
}

fn default_max_item_len() -> usize {
    200
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesConfig {
    /// Directory that relative list names resolve against
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// strftime pattern for the default (dated) list name
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            dir: None,
            date_format: default_date_format(),
        }
    }
}

fn default_date_format() -> String {
    "%m-%d-%Y".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Screen cells per indentation level
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            indent_width: default_indent_width(),
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_indent_width() -> usize {
    4
}

fn default_true() -> bool {
    true
}
