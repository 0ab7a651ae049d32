use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};

/// Render the bottom input box. Shows the live edit buffer with a block
/// cursor while capturing task text, a dim placeholder otherwise.
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let editing = app.mode == Mode::TaskInput;
    let border_color = if editing {
        app.theme.accent
    } else {
        app.theme.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let line = if editing {
        edit_line(app, bg)
    } else {
        Line::from(Span::styled(
            " Enter a new todo item...",
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    };
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), inner);
}

/// The edit buffer split at the cursor, with a `▌` cursor glyph between.
pub(super) fn edit_line(app: &App, bg: ratatui::style::Color) -> Line<'static> {
    let before = &app.edit_buffer[..app.edit_cursor];
    let after = &app.edit_buffer[app.edit_cursor..];
    Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            before.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
        Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.accent).bg(bg),
        ),
        Span::styled(
            after.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
    ])
}
