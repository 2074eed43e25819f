use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Config, EditorConfig, Item, Outline};

use super::input;
use super::render;
use super::text_input::TextInput;
use super::theme::Theme;

/// Minimum time a status message stays up before a keypress clears it
const STATUS_MIN_DISPLAY: Duration = Duration::from_secs(3);

/// The item being typed: its text buffer and the level it will get
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub input: TextInput,
    pub level: usize,
}

/// Current interaction mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Compose(Composition),
}

/// How the session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitAction {
    SaveAndQuit,
    DiscardAndQuit,
}

/// Main application state
pub struct App {
    pub outline: Outline,
    pub mode: Mode,
    pub theme: Theme,
    pub editor: EditorConfig,
    /// Screen cells per indentation level
    pub indent_width: usize,
    pub show_key_hints: bool,
    /// Help panel visible
    pub show_help: bool,
    /// List name shown in the header
    pub title: String,
    /// First visible row of the list
    pub scroll_offset: usize,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    status_at: Option<Instant>,
    /// Set when a quit key was pressed; the event loop stops on the next turn
    pub exit: Option<ExitAction>,
}

impl App {
    /// Build the app for a loaded list. An empty list starts in compose mode.
    pub fn new(items: Vec<Item>, config: &Config, title: impl Into<String>) -> Self {
        let mut app = App {
            outline: Outline::from_items(items),
            mode: Mode::Navigate,
            theme: Theme::from_config(&config.ui),
            editor: config.editor.clone(),
            indent_width: config.ui.indent_width,
            show_key_hints: config.ui.show_key_hints,
            show_help: false,
            title: title.into(),
            scroll_offset: 0,
            status_message: None,
            status_is_error: false,
            status_at: None,
            exit: None,
        };
        if app.outline.is_empty() {
            app.start_composing();
        }
        app
    }

    /// Enter compose mode with an empty buffer
    pub fn start_composing(&mut self) {
        let level = self.outline.start_composition(self.editor.inherit_indent);
        self.mode = Mode::Compose(Composition {
            input: TextInput::new(self.editor.max_item_len),
            level,
        });
        tracing::debug!(level, "compose mode");
    }

    /// Leave compose mode without adding an item. With nothing to go back
    /// to, compose mode stays on with a cleared buffer.
    pub fn cancel_composing(&mut self) {
        self.outline.cancel_composition();
        if self.outline.is_composing() {
            if let Mode::Compose(comp) = &mut self.mode {
                comp.input.clear();
            }
            return;
        }
        self.mode = Mode::Navigate;
        tracing::debug!("navigate mode");
    }

    /// Commit the pending item. With `rapid` a fresh composition starts at
    /// the same level, otherwise the cursor stays on the new item.
    pub fn confirm_composing(&mut self, rapid: bool) {
        let Mode::Compose(comp) = &mut self.mode else {
            return;
        };
        let text = comp.input.take();
        let level = comp.level;
        let index = self.outline.commit_composition(&text, level);
        tracing::debug!(index, level, rapid, "item added");

        if rapid {
            self.outline.start_composition(false);
            self.mode = Mode::Compose(Composition {
                input: TextInput::new(self.editor.max_item_len),
                level,
            });
        } else {
            self.mode = Mode::Navigate;
        }
    }

    pub fn is_composing(&self) -> bool {
        matches!(self.mode, Mode::Compose(_))
    }

    pub fn composition(&self) -> Option<&Composition> {
        match &self.mode {
            Mode::Compose(comp) => Some(comp),
            Mode::Navigate => None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = false;
        self.status_at = Some(Instant::now());
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.set_status(message);
        self.status_is_error = true;
    }

    /// Drop the status message once it has been up long enough
    pub fn expire_status(&mut self) {
        if self
            .status_at
            .is_some_and(|at| at.elapsed() >= STATUS_MIN_DISPLAY)
        {
            self.status_message = None;
            self.status_is_error = false;
            self.status_at = None;
        }
    }

    pub fn quit(&mut self, action: ExitAction) {
        tracing::debug!(?action, "quit requested");
        self.exit = Some(action);
    }
}

/// What the session left behind for the caller to persist
pub struct RunOutcome {
    pub outline: Outline,
    pub exit: ExitAction,
    /// The event loop or terminal teardown failed; the list as it stood is
    /// still returned
    pub error: Option<Box<dyn std::error::Error>>,
}

/// Run the TUI application until a quit key is pressed
pub fn run(mut app: App) -> Result<RunOutcome, Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);
    let restored = restore_terminal(&mut terminal);

    Ok(finish(app, result, restored))
}

/// Leave raw mode and the alternate screen, trying every step even when an
/// earlier one fails. Returns the first failure.
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = disable_raw_mode();
    let screen = execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    );
    let cursor = terminal.show_cursor();
    raw?;
    screen?;
    cursor?;
    Ok(())
}

/// Build the outcome of a session. The list is always handed back so the
/// caller can persist it; a loop error wins over a teardown error.
fn finish(
    app: App,
    result: Result<(), Box<dyn std::error::Error>>,
    restored: Result<(), Box<dyn std::error::Error>>,
) -> RunOutcome {
    if let Err(e) = &result {
        tracing::error!(error = %e, "event loop failed");
    }
    if let Err(e) = &restored {
        tracing::error!(error = %e, "could not restore terminal");
    }
    RunOutcome {
        exit: app.exit.unwrap_or(ExitAction::SaveAndQuit),
        outline: app.outline,
        error: result.err().or(restored.err()),
    }
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.exit.is_some() {
            break;
        }
    }
    Ok(())
}
