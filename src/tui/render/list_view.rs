use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_segmentation::UnicodeSegmentation;

use crate::model::Item;
use crate::tui::app::{App, Composition};
use crate::util::text::{display_width, truncate_to_width, visible_window};

/// Shown in the compose line while the buffer is empty
pub const PLACEHOLDER: &str = "Task Name";

/// Render the outline: one row per item, plus the compose line at the end
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let composing = app.composition().is_some();
    let row_count = app.outline.len() + usize::from(composing);
    let cursor = app.outline.cursor().min(row_count.saturating_sub(1));

    // Keep the cursor row on screen
    let visible_height = area.height as usize;
    if cursor < app.scroll_offset {
        app.scroll_offset = cursor;
    } else if cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = cursor.saturating_sub(visible_height.saturating_sub(1));
    }
    app.scroll_offset = app.scroll_offset.min(row_count.saturating_sub(1));

    let bg = app.theme.background;
    if row_count == 0 {
        let empty = Paragraph::new(" No items")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width as usize;
    let scroll = app.scroll_offset;
    let end = row_count.min(scroll + visible_height);
    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);

    for row in scroll..end {
        match app.outline.items().get(row) {
            Some(item) => lines.push(render_item_line(app, item, row == cursor, width)),
            None => {
                if let Some(comp) = app.composition() {
                    lines.push(render_compose_line(app, comp, width));
                }
            }
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// `<indent><marker> [<c>] ` in front of every row
fn row_prefix(level: usize, indent_width: usize, is_cursor: bool, checkbox: char) -> (String, String) {
    let indent = " ".repeat(level.saturating_mul(indent_width));
    let marker = if is_cursor { ">" } else { " " };
    (format!("{}{}", indent, marker), format!(" [{}] ", checkbox))
}

fn render_item_line<'a>(app: &App, item: &'a Item, is_cursor: bool, width: usize) -> Line<'a> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let (lead, checkbox) = row_prefix(item.level, app.indent_width, is_cursor, item.checkbox_char());

    let marker_style = Style::default().fg(app.theme.highlight).bg(bg);
    let checkbox_style = if item.completed {
        Style::default().fg(app.theme.green).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let text_style = match (item.completed, is_cursor) {
        (true, _) => Style::default()
            .fg(app.theme.done)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT),
        (false, true) => Style::default().fg(app.theme.text_bright).bg(bg),
        (false, false) => Style::default().fg(app.theme.text).bg(bg),
    };

    let prefix_width = display_width(&lead) + display_width(&checkbox);
    let text = truncate_to_width(&item.text, width.saturating_sub(prefix_width));

    let mut spans = vec![
        Span::styled(lead, marker_style),
        Span::styled(checkbox, checkbox_style),
        Span::styled(text, text_style),
    ];

    // Fill the rest of the cursor row so the highlight spans the width
    let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    if is_cursor && content_width < width {
        spans.push(Span::styled(
            " ".repeat(width - content_width),
            Style::default().bg(bg),
        ));
    }
    Line::from(spans)
}

fn render_compose_line<'a>(app: &App, comp: &'a Composition, width: usize) -> Line<'a> {
    let bg = app.theme.background;
    let (lead, checkbox) = row_prefix(comp.level, app.indent_width, true, ' ');
    let prefix_width = display_width(&lead) + display_width(&checkbox);

    let mut spans = vec![
        Span::styled(lead, Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(checkbox, Style::default().fg(app.theme.dim).bg(bg)),
    ];

    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let cursor_style = Style::default()
        .fg(app.theme.background)
        .bg(app.theme.text_bright);
    let field_width = width.saturating_sub(prefix_width);

    let value = comp.input.value();
    if value.is_empty() {
        // Cursor sits on the first placeholder char
        let mut chars = PLACEHOLDER.chars();
        let first = chars.next().map(String::from).unwrap_or_default();
        spans.push(Span::styled(first, cursor_style));
        spans.push(Span::styled(
            truncate_to_width(chars.as_str(), field_width.saturating_sub(1)),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        return Line::from(spans);
    }

    let cursor = comp.input.cursor();
    let (start, end) = visible_window(value, cursor, field_width);
    let before = &value[start..cursor];
    if !before.is_empty() {
        spans.push(Span::styled(before, text_style));
    }
    match value[cursor..].graphemes(true).next() {
        Some(under) if cursor < end => {
            spans.push(Span::styled(under, cursor_style));
            let after = &value[cursor + under.len()..end.max(cursor + under.len())];
            if !after.is_empty() {
                spans.push(Span::styled(after, text_style));
            }
        }
        _ => spans.push(Span::styled(" ", cursor_style)),
    }
    Line::from(spans)
}
