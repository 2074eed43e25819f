use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `ttdo=trace`)
pub const LOG_ENV: &str = "TTDO_LOG";

/// Pick the log file: an explicit path, or `<temp>/ttdo.log` when the filter
/// variable is set. None means logging stays off.
pub fn log_path(explicit: Option<&Path>, env_set: bool) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None if env_set => Some(std::env::temp_dir().join("ttdo.log")),
        None => None,
    }
}

/// Install a file-backed tracing subscriber. The terminal belongs to the
/// TUI, so log output never goes to stdout/stderr.
pub fn init_logging(explicit: Option<&Path>) -> io::Result<Option<PathBuf>> {
    let Some(path) = log_path(explicit, std::env::var_os(LOG_ENV).is_some()) else {
        return Ok(None);
    };

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be installed (tests); keep that one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(Some(path))
}
