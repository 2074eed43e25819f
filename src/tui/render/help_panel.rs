use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};

type Binding = (&'static str, &'static str);

const NAVIGATE_BINDINGS: &[Binding] = &[
    (" \u{2191}\u{2193}/jk", "Move cursor up/down"),
    (" {}/PgUp PgDn", "Jump up/down"),
    (" g/G", "First/last item"),
    (" Enter/Space", "Toggle done"),
    (" Tab/S-Tab", "Indent/outdent"),
    (" n", "New item"),
    (" d", "Delete item"),
    (" h/?", "Toggle this help"),
    (" q/Ctrl+C", "Save and quit"),
    (" Q", "Quit without saving"),
];

const COMPOSE_BINDINGS: &[Binding] = &[
    (" Enter", "Add item"),
    (" Alt+Enter", "Add item (other mode)"),
    (" Esc", "Cancel"),
    (" Tab/S-Tab", "Indent/outdent new item"),
    (" Alt+\u{2190}\u{2192}", "Move by word"),
    (" Ctrl+W", "Delete word"),
    (" Ctrl+U/K", "Delete to start/end"),
    (" Ctrl+C", "Save and quit"),
    (" Ctrl+Q", "Quit without saving"),
];

fn bindings(app: &App) -> &'static [Binding] {
    match app.mode {
        Mode::Navigate => NAVIGATE_BINDINGS,
        Mode::Compose(_) => COMPOSE_BINDINGS,
    }
}

/// Rows the panel needs: border plus one per binding
pub fn panel_height(app: &App) -> u16 {
    bindings(app).len() as u16 + 1
}

/// Render the key reference under the list (toggled with h / ?)
pub fn render_help_panel(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);

    let mut lines: Vec<Line> = Vec::new();
    for &(key, desc) in bindings(app) {
        add_binding(&mut lines, key, desc, key_style, desc_style);
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .title(Span::styled(
            " Keys ",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 16;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}
