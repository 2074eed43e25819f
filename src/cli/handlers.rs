use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::commands::Cli;
use crate::io::config_io::{ConfigError, config_path, read_config_from};
use crate::io::list_io::{
    LoadStatus, SaveOutcome, list_title, load_list, resolve_list_path, save_list,
};
use crate::model::{Config, ConfirmBehavior};
use crate::tui::render::plain::render_plain;
use crate::tui::{self, App, ExitAction, RunOutcome};

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&cli)?;
    let path = list_path(&cli, &config)?;

    if cli.print {
        cmd_print(&config, &path);
        Ok(())
    } else {
        cmd_edit(&config, &path)
    }
}

/// Read the config file and apply command-line overrides
pub fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let path = cli.config.clone().unwrap_or_else(config_path);
    let mut config = read_config_from(&path)?;
    info!(path = %path.display(), "config loaded");

    if cli.rapid {
        config.editor.confirm = ConfirmBehavior::Rapid;
    } else if cli.single {
        config.editor.confirm = ConfirmBehavior::Single;
    }
    if let Some(dir) = &cli.dir {
        config.files.dir = Some(dir.clone());
    }
    Ok(config)
}

/// The list file this run works on
fn list_path(cli: &Cli, config: &Config) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let dir = match &config.files.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let today = chrono::Local::now().date_naive();
    Ok(resolve_list_path(
        cli.name.as_deref(),
        &dir,
        today,
        &config.files.date_format,
    ))
}

fn cmd_print(config: &Config, path: &Path) {
    let loaded = load_list(path);
    if let Some(notice) = loaded.status.notice() {
        eprintln!("warning: {}", notice);
    }
    print!(
        "{}",
        render_plain(&list_title(path), &loaded.items, None, config.ui.indent_width)
    );
}

fn cmd_edit(config: &Config, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = load_list(path);
    let title = list_title(path);

    let mut app = App::new(loaded.items, config, title.as_str());
    if let Some(notice) = loaded.status.notice() {
        app.set_error(notice);
    }

    let outcome = tui::run(app)?;
    finish_session(path, &title, &loaded.status, outcome)
}

/// Persist exactly once, even if the event loop or terminal teardown failed,
/// then report that failure.
fn finish_session(
    path: &Path,
    title: &str,
    status: &LoadStatus,
    outcome: RunOutcome,
) -> Result<(), Box<dyn std::error::Error>> {
    match outcome.exit {
        ExitAction::SaveAndQuit => {
            match save_list(path, title, outcome.outline.items(), status)? {
                SaveOutcome::Written => info!(path = %path.display(), "saved on quit"),
                SaveOutcome::Skipped => info!("nothing to save"),
            }
        }
        ExitAction::DiscardAndQuit => info!(path = %path.display(), "quit without saving"),
    }

    match outcome.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
