use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::ConfirmBehavior;
use crate::tui::app::{App, Mode};
use crate::util::text::{display_width, truncate_to_width};

/// Key hints for the right side of the status row
fn key_hints(app: &App) -> &'static str {
    match (&app.mode, app.editor.confirm) {
        (Mode::Navigate, _) => "n new  d delete  h help  q quit",
        (Mode::Compose(_), ConfirmBehavior::Single) => "Enter add  Alt+Enter add & next  Esc cancel",
        (Mode::Compose(_), ConfirmBehavior::Rapid) => "Enter add & next  Alt+Enter add  Esc cancel",
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();
    if let Some(message) = &app.status_message {
        let fg = if app.status_is_error {
            app.theme.red
        } else {
            app.theme.text_bright
        };
        spans.push(Span::styled(
            truncate_to_width(&format!(" {}", message), width),
            Style::default().fg(fg).bg(bg),
        ));
    } else if let Mode::Compose(comp) = &app.mode
        && comp.level > 0
    {
        spans.push(Span::styled(
            format!(" level {}", comp.level),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    if app.show_key_hints {
        let hint = key_hints(app);
        let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let hint_width = display_width(hint) + 1;
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(
                hint,
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
