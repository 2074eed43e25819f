use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{ConfirmBehavior, MAX_LEVEL};
use crate::tui::app::{App, ExitAction, Mode};
use crate::tui::text_input::TextInput;

pub(super) fn handle_compose(app: &mut App, key: KeyEvent) {
    let confirm = app.editor.confirm;

    match (key.modifiers, key.code) {
        // Alt+Enter confirms with the behavior not configured for Enter
        (m, KeyCode::Enter) if m.contains(KeyModifiers::ALT) => {
            app.confirm_composing(confirm.other() == ConfirmBehavior::Rapid);
        }
        (_, KeyCode::Enter) => {
            app.confirm_composing(confirm == ConfirmBehavior::Rapid);
        }
        (_, KeyCode::Esc) => app.cancel_composing(),
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => {
            app.cancel_composing();
            app.quit(ExitAction::SaveAndQuit);
        }
        (m, KeyCode::Char('q')) if m.contains(KeyModifiers::CONTROL) => {
            app.quit(ExitAction::DiscardAndQuit);
        }
        _ => {
            let Mode::Compose(comp) = &mut app.mode else {
                return;
            };
            match key.code {
                KeyCode::Tab if !key.modifiers.contains(KeyModifiers::SHIFT) => {
                    comp.level = (comp.level + 1).min(MAX_LEVEL)
                }
                KeyCode::Tab | KeyCode::BackTab => comp.level = comp.level.saturating_sub(1),
                _ => edit_text(&mut comp.input, key),
            }
        }
    }
}

/// Readline-style single-line editing
fn edit_text(input: &mut TextInput, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Home / Ctrl+A (macOS Cmd+Left sends ^A)
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => input.move_home(),
        // End / Ctrl+E (macOS Cmd+Right sends ^E)
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => input.move_end(),
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => input.kill_to_start(),
        (m, KeyCode::Char('k')) if m.contains(KeyModifiers::CONTROL) => input.kill_to_end(),
        (m, KeyCode::Char('w')) if m.contains(KeyModifiers::CONTROL) => input.delete_word_back(),
        (m, KeyCode::Backspace)
            if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::CONTROL) =>
        {
            input.delete_word_back();
        }
        // Word movement; Warp and other terminals send Alt+B / Alt+F for Alt+arrows
        (m, KeyCode::Left | KeyCode::Char('b')) if m.contains(KeyModifiers::ALT) => {
            input.move_word_left();
        }
        (m, KeyCode::Right | KeyCode::Char('f')) if m.contains(KeyModifiers::ALT) => {
            input.move_word_right();
        }
        (_, KeyCode::Home) => input.move_home(),
        (_, KeyCode::End) => input.move_end(),
        (_, KeyCode::Left) => input.move_left(),
        (_, KeyCode::Right) => input.move_right(),
        (_, KeyCode::Backspace) => input.backspace(),
        (_, KeyCode::Delete) => input.delete(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => input.insert_char(c),
        _ => {}
    }
}
