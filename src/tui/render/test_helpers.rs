use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Config, Item};
use crate::parse::parse_list;
use crate::tui::app::App;

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 16;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Build an App from list-file markdown with default config.
pub fn app_with_list(md: &str) -> App {
    let (items, _warnings) = parse_list(md).unwrap();
    App::new(items, &Config::default(), "groceries")
}

/// Build an App with flat, open items.
pub fn app_with_items(texts: &[&str]) -> App {
    let items = texts.iter().map(|t| Item::new(t, 0)).collect();
    App::new(items, &Config::default(), "groceries")
}

/// A short nested list with one completed item.
pub const GROCERIES_MD: &str = "\
# groceries

- [ ] Buy milk
  - [x] 2% or whole
- [ ] Eggs
";
