use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::format::{Item as FormatItem, StrftimeItems};

use crate::model::config::Config;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// Get the config file path, respecting XDG_CONFIG_HOME
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    config_dir.join("ttdo").join("config.toml")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read and validate the config at `path`. A missing file yields defaults.
pub fn read_config_from(path: &Path) -> Result<Config, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate_config(&config)?;
    Ok(config)
}

/// Reject values the editor cannot work with
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.editor.jump == 0 {
        return Err(ConfigError::InvalidValue {
            key: "editor.jump",
            reason: "must be at least 1".to_string(),
        });
    }
    if config.editor.max_item_len == 0 {
        return Err(ConfigError::InvalidValue {
            key: "editor.max_item_len",
            reason: "must be at least 1".to_string(),
        });
    }

    let date_format = &config.files.date_format;
    if date_format.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "files.date_format",
            reason: "must not be empty".to_string(),
        });
    }
    if StrftimeItems::new(date_format).any(|item| matches!(item, FormatItem::Error)) {
        return Err(ConfigError::InvalidValue {
            key: "files.date_format",
            reason: format!("{:?} is not a valid strftime pattern", date_format),
        });
    }
    if date_format.contains(['/', '\\']) {
        return Err(ConfigError::InvalidValue {
            key: "files.date_format",
            reason: "must not contain path separators".to_string(),
        });
    }
    Ok(())
}
