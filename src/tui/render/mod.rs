pub mod input_row;
pub mod status_row;
pub mod tab_bar;
pub mod tab_modal;
pub mod task_panes;
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: tab bar (2 rows) | panes | input box (3 rows) | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tab bar + separator
            Constraint::Min(2),    // task panes
            Constraint::Length(3), // bordered input box
            Constraint::Length(1), // status row
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);
    task_panes::render_task_panes(frame, app, chunks[1]);
    input_row::render_input_row(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // New-tab modal (rendered on top of everything)
    if app.mode == Mode::TabInput {
        tab_modal::render_tab_modal(frame, app, frame.area());
    }
}
