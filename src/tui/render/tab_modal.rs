use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::input_row::edit_line;

/// Render the centered new-tab modal on top of everything else.
pub fn render_tab_modal(frame: &mut Frame, app: &App, area: Rect) {
    let popup_w: u16 = 36.min(area.width.saturating_sub(2));
    let popup_h: u16 = 4.min(area.height.saturating_sub(2));
    let overlay = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay);

    let bg = app.theme.background;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let lines = vec![
        Line::from(Span::styled(
            " Create New Tab",
            Style::default()
                .fg(app.theme.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        edit_line(app, bg),
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}

fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Mode;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn modal_shows_title_and_typed_name() {
        let mut app = app_with_tabs(&[("today", &[], &[])]);
        app.mode = Mode::TabInput;
        app.edit_buffer = "errands".into();
        app.edit_cursor = app.edit_buffer.len();
        let out = render_to_string(60, 12, |frame, area| {
            render_tab_modal(frame, &app, area);
        });
        assert!(out.contains("Create New Tab"));
        assert!(out.contains("errands"));
    }
}
