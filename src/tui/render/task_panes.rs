use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Task;
use crate::tui::app::App;
use crate::util::unicode;

/// Render the two stacked task panes: To-Do on top, Completed below.
pub fn render_task_panes(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Min(1)])
        .split(area);

    let (pending, completed) = match app.store.active_tab() {
        Some(tab) => (tab.pending.clone(), tab.completed.clone()),
        None => (Vec::new(), Vec::new()),
    };

    let mut pending_scroll = app.pending_scroll;
    render_pane(
        frame,
        app,
        chunks[0],
        " \u{25A1} To-Do ",
        &pending,
        false,
        &mut pending_scroll,
    );
    app.pending_scroll = pending_scroll;

    let mut completed_scroll = app.completed_scroll;
    render_pane(
        frame,
        app,
        chunks[1],
        " \u{2713} Completed ",
        &completed,
        true,
        &mut completed_scroll,
    );
    app.completed_scroll = completed_scroll;
}

/// Render one pane of rows, adjusting its scroll offset to keep the
/// focused row visible.
fn render_pane(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    tasks: &[Task],
    completed: bool,
    scroll: &mut usize,
) {
    let bg = app.theme.background;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(app.theme.accent).bg(bg),
        ))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let focused = app.focused_task();
    let cursor_line = tasks
        .iter()
        .position(|t| Some(t.id) == focused);

    // Keep the focused row inside the visible window
    let visible_height = inner.height as usize;
    if let Some(cl) = cursor_line {
        if cl < *scroll {
            *scroll = cl;
        } else if cl >= *scroll + visible_height {
            *scroll = cl + 1 - visible_height;
        }
    }
    if *scroll > tasks.len().saturating_sub(1) {
        *scroll = 0;
    }

    let checkbox = if completed { "[x] " } else { "[ ] " };
    let lines: Vec<Line> = tasks
        .iter()
        .enumerate()
        .skip(*scroll)
        .take(visible_height)
        .map(|(i, task)| {
            let is_focused = cursor_line == Some(i);
            let row_bg = if is_focused { app.theme.selection_bg } else { bg };
            let box_style = if completed {
                Style::default().fg(app.theme.done).bg(row_bg)
            } else {
                Style::default().fg(app.theme.text).bg(row_bg)
            };
            let mut text_style = if completed {
                Style::default()
                    .fg(app.theme.dim)
                    .bg(row_bg)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(app.theme.text).bg(row_bg)
            };
            if is_focused {
                text_style = text_style
                    .fg(app.theme.text_bright)
                    .add_modifier(Modifier::BOLD);
            }
            let available = (inner.width as usize).saturating_sub(1 + checkbox.len());
            let text = unicode::truncate_to_width(&task.text, available);
            Line::from(vec![
                Span::styled(" ", Style::default().bg(row_bg)),
                Span::styled(checkbox, box_style),
                Span::styled(text, text_style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, inner);
}
