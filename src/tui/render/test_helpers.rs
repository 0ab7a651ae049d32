use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::Config;
use crate::tui::app::App;

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

/// An app with no tabs and no storage path. The default "Today" tab is
/// removed so the store is genuinely empty.
pub fn empty_app() -> App {
    let mut app = App::new(Config::default(), None);
    if let Some(id) = app.store.active() {
        app.store.remove_tab(id);
    }
    app.store.clear_dirty();
    app
}

/// Build an app from `(name, pending, completed)` triples, first tab
/// active, no storage path.
pub fn app_with_tabs(tabs: &[(&str, &[&str], &[&str])]) -> App {
    let mut app = empty_app();
    for (name, pending, completed) in tabs {
        let id = app.store.create_tab(name).unwrap();
        app.store.set_tasks(
            id,
            pending.iter().map(|s| s.to_string()).collect(),
            completed.iter().map(|s| s.to_string()).collect(),
        );
    }
    let first = app.store.list_tabs().next().map(|(id, _)| id);
    if let Some(first) = first {
        app.store.activate(first);
    }
    app.store.clear_dirty();
    app
}
