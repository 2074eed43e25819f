use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::model::Item;
use crate::parse::{ParseWarning, parse_list, serialize_list};

/// Extension every list file carries
pub const LIST_EXTENSION: &str = "ttdo";

/// Error type for list file I/O
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not back up {path} before overwriting it: {source}")]
    BackupError {
        path: PathBuf,
        source: io::Error,
    },
}

/// How the list file looked when it was loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No file yet
    New,
    /// Every line was read
    Loaded,
    /// Some lines could not be read and were skipped
    Recovered { warnings: Vec<ParseWarning> },
    /// Nothing could be read
    Unreadable { reason: String },
}

impl LoadStatus {
    /// The file on disk holds data the in-memory list does not, so it is
    /// copied aside before the first save overwrites it.
    pub fn needs_backup(&self) -> bool {
        matches!(
            self,
            LoadStatus::Recovered { .. } | LoadStatus::Unreadable { .. }
        )
    }

    /// A one-line notice for the status row, if the user should know
    pub fn notice(&self) -> Option<String> {
        match self {
            LoadStatus::New | LoadStatus::Loaded => None,
            LoadStatus::Recovered { warnings } => Some(format!(
                "skipped {} unreadable line{}; the original is kept as .bak on save",
                warnings.len(),
                if warnings.len() == 1 { "" } else { "s" }
            )),
            LoadStatus::Unreadable { reason } => Some(format!(
                "could not parse existing data ({}); the original is kept as .bak on save",
                reason
            )),
        }
    }
}

/// A list read from disk
#[derive(Debug, Clone)]
pub struct LoadedList {
    pub items: Vec<Item>,
    pub status: LoadStatus,
}

/// What `save_list` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Written,
    /// Empty list and no file on disk: nothing worth creating
    Skipped,
}

/// Normalize an explicit list name: strip the extension if present, then
/// append it. Idempotent.
pub fn normalize_list_name(name: &str) -> String {
    let suffix = format!(".{}", LIST_EXTENSION);
    let stem = name.strip_suffix(suffix.as_str()).unwrap_or(name);
    format!("{}{}", stem, suffix)
}

/// The default list name for a day, e.g. `10-16-2026.ttdo`
pub fn dated_list_name(date: NaiveDate, date_format: &str) -> String {
    format!("{}.{}", date.format(date_format), LIST_EXTENSION)
}

/// Resolve the list file: an explicit name (normalized) or today's dated
/// name, relative to `dir` unless already absolute.
pub fn resolve_list_path(
    name: Option<&str>,
    dir: &Path,
    today: NaiveDate,
    date_format: &str,
) -> PathBuf {
    let file_name = match name {
        Some(name) => normalize_list_name(name),
        None => dated_list_name(today, date_format),
    };
    let path = Path::new(&file_name);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        dir.join(path)
    }
}

/// Display name of a list: the file name without its extension
pub fn list_title(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = format!(".{}", LIST_EXTENSION);
    file_name
        .strip_suffix(suffix.as_str())
        .map(str::to_string)
        .unwrap_or(file_name)
}

/// Where a list is copied before a lossy file is overwritten
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// Load a list file. Never fails: a missing file is a new list, and a file
/// that cannot be read or parsed yields whatever items could be recovered
/// together with a status describing the problem.
pub fn load_list(path: &Path) -> LoadedList {
    let (items, status) = match fs::read_to_string(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => (Vec::new(), LoadStatus::New),
        Err(e) => (
            Vec::new(),
            LoadStatus::Unreadable {
                reason: e.to_string(),
            },
        ),
        Ok(source) => match parse_list(&source) {
            Ok((items, warnings)) if warnings.is_empty() => (items, LoadStatus::Loaded),
            Ok((items, warnings)) => (items, LoadStatus::Recovered { warnings }),
            Err(e) => (
                Vec::new(),
                LoadStatus::Unreadable {
                    reason: e.to_string(),
                },
            ),
        },
    };

    match &status {
        LoadStatus::New => info!(path = %path.display(), "starting new list"),
        LoadStatus::Loaded => info!(path = %path.display(), items = items.len(), "list loaded"),
        LoadStatus::Recovered { warnings } => {
            for w in warnings {
                warn!(path = %path.display(), "{}", w);
            }
            warn!(
                path = %path.display(),
                items = items.len(),
                skipped = warnings.len(),
                "list loaded with unreadable lines"
            );
        }
        LoadStatus::Unreadable { reason } => {
            warn!(path = %path.display(), %reason, "list unreadable, starting empty")
        }
    }

    LoadedList {
        items,
        status,
    }
}

/// Save a list. An empty list is only written when a file already exists
/// (so deleting every item sticks). A lossy original is copied to
/// `<file>.bak` first; if that copy fails nothing is written.
pub fn save_list(
    path: &Path,
    title: &str,
    items: &[Item],
    status: &LoadStatus,
) -> Result<SaveOutcome, ListError> {
    let exists = path.exists();
    if items.is_empty() && !exists {
        info!(path = %path.display(), "empty list, nothing to save");
        return Ok(SaveOutcome::Skipped);
    }

    if exists && status.needs_backup() {
        let bak = backup_path(path);
        fs::copy(path, &bak).map_err(|e| ListError::BackupError {
            path: path.to_path_buf(),
            source: e,
        })?;
        warn!(path = %path.display(), backup = %bak.display(), "original list backed up");
    }

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).map_err(|e| ListError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let content = serialize_list(title, items);
    atomic_write(path, content.as_bytes()).map_err(|e| ListError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), items = items.len(), "list saved");
    Ok(SaveOutcome::Written)
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
