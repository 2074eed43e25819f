use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::text::{display_width, truncate_to_width};

/// Render the title row and the separator under it
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let count = format!(
        "{}/{} done ",
        app.outline.completed_count(),
        app.outline.len()
    );
    let title_budget = width.saturating_sub(display_width(&count) + 1);
    let title = truncate_to_width(&format!(" Tasks: {}", app.title), title_budget);

    let mut spans = vec![Span::styled(
        title,
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    if used + display_width(&count) <= width {
        let padding = width - used - display_width(&count);
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(count, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let separator = Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    );

    let paragraph =
        Paragraph::new(vec![Line::from(spans), Line::from(separator)]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
