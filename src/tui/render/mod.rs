pub mod header;
pub mod help_panel;
pub mod list_view;
pub mod plain;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function: header, list, optional help panel, status row
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let help_height = if app.show_help {
        help_panel::panel_height(app)
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),           // title + separator
            Constraint::Min(1),              // list
            Constraint::Length(help_height), // help panel
            Constraint::Length(1),           // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    list_view::render_list_view(frame, app, chunks[1]);
    if app.show_help {
        help_panel::render_help_panel(frame, app, chunks[2]);
    }
    status_row::render_status_row(frame, app, chunks[3]);
}
