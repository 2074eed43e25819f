use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, ExitAction};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    let jump = isize::try_from(app.editor.jump).unwrap_or(isize::MAX);
    let cursor = app.outline.cursor();

    match (key.modifiers, key.code) {
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => {
            app.quit(ExitAction::SaveAndQuit);
        }
        // No other chords are bound here
        (m, _) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}

        (_, KeyCode::Char('j') | KeyCode::Down) => app.outline.move_cursor(1),
        (_, KeyCode::Char('k') | KeyCode::Up) => app.outline.move_cursor(-1),
        (_, KeyCode::Char('}') | KeyCode::PageDown) => app.outline.move_cursor(jump),
        (_, KeyCode::Char('{') | KeyCode::PageUp) => app.outline.move_cursor(-jump),
        (_, KeyCode::Char('g') | KeyCode::Home) => app.outline.move_to(0),
        (_, KeyCode::Char('G') | KeyCode::End) => app.outline.move_to(usize::MAX),

        (_, KeyCode::Enter | KeyCode::Char(' ')) => {
            app.outline.toggle_complete(cursor);
        }
        (m, KeyCode::Tab) if m.contains(KeyModifiers::SHIFT) => app.outline.outdent(cursor),
        (_, KeyCode::Tab) => app.outline.indent(cursor),
        (_, KeyCode::BackTab) => app.outline.outdent(cursor),

        (_, KeyCode::Char('n')) => app.start_composing(),
        (_, KeyCode::Char('d')) => {
            if let Some(item) = app.outline.delete_at(cursor) {
                tracing::debug!(index = cursor, text = %item.text, "item deleted");
            }
            // Nothing left to navigate
            if app.outline.is_empty() {
                app.start_composing();
            }
        }

        (_, KeyCode::Char('h') | KeyCode::Char('?')) => app.show_help = !app.show_help,
        (_, KeyCode::Char('q')) => app.quit(ExitAction::SaveAndQuit),
        (_, KeyCode::Char('Q')) => app.quit(ExitAction::DiscardAndQuit),
        _ => {}
    }
}
