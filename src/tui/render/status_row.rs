use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen) with key hints for the
/// current mode.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let hint = match app.mode {
        Mode::Navigate => {
            "a add \u{2502} t new tab \u{2502} r remove tab \u{2502} space toggle \u{2502} q delete \u{2502} d theme \u{2502} ctrl-q quit"
        }
        Mode::TaskInput => "Enter add task  Esc done",
        Mode::TabInput => "Enter create tab  Esc cancel",
    };

    let mut spans = vec![Span::styled(
        format!(" {}", hint),
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    if content_width < width {
        spans.push(Span::styled(
            " ".repeat(width - content_width),
            Style::default().bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
