use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::task_ops;
use crate::tui::app::{App, Focus, Mode};
use crate::util::unicode;

/// Handle a key in either input mode: the bottom task input or the
/// new-tab modal. Both share the app's single line-editor buffer.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => cancel(app),
        KeyCode::Enter => submit(app),
        KeyCode::Backspace => {
            if let Some(start) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor)
            {
                app.edit_buffer.replace_range(start..app.edit_cursor, "");
                app.edit_cursor = start;
            }
        }
        KeyCode::Delete => {
            if let Some(end) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(app.edit_cursor..end, "");
            }
        }
        KeyCode::Left => {
            if let Some(pos) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = pos;
            }
        }
        KeyCode::Right => {
            if let Some(pos) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = pos;
            }
        }
        KeyCode::Home => app.edit_cursor = 0,
        KeyCode::End => app.edit_cursor = app.edit_buffer.len(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_buffer.insert(app.edit_cursor, c);
            app.edit_cursor += c.len_utf8();
        }
        _ => {}
    }
}

/// Enter submits the buffer. The task input stays open (clearing its
/// buffer) so several tasks can be added in a row; the tab modal closes
/// once a tab was actually created, and stays open on an empty name.
fn submit(app: &mut App) {
    match app.mode {
        Mode::TaskInput => {
            if task_ops::add_task(&mut app.store, &app.edit_buffer).is_some() {
                app.schedule_save();
            }
            app.clear_edit();
        }
        Mode::TabInput => {
            if app.store.create_tab(&app.edit_buffer).is_some() {
                app.clear_edit();
                app.mode = Mode::Navigate;
                app.focus = Focus::Tabs;
                app.pending_scroll = 0;
                app.completed_scroll = 0;
                app.schedule_save();
            }
        }
        Mode::Navigate => {}
    }
}

/// Esc leaves the input. Leaving the task input focuses the first pending
/// row when there is one; closing the modal returns focus to the tab bar.
fn cancel(app: &mut App) {
    let was_task_input = app.mode == Mode::TaskInput;
    app.clear_edit();
    app.mode = Mode::Navigate;
    if was_task_input {
        let first_pending = app
            .store
            .active_tab()
            .and_then(|t| t.pending.first())
            .map(|t| t.id);
        app.focus = match first_pending {
            Some(id) => Focus::Task(id),
            None => Focus::Tabs,
        };
    } else {
        app.focus = Focus::Tabs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::app_with_tabs;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_edit(app, KeyEvent::from(KeyCode::Char(c)));
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_edit(app, KeyEvent::from(code));
    }

    #[test]
    fn submit_adds_task_and_keeps_input_open() {
        let mut app = app_with_tabs(&[("today", &[], &[])]);
        app.mode = Mode::TaskInput;
        type_text(&mut app, "buy milk");
        press(&mut app, KeyCode::Enter);

        let tab = app.store.active_tab().unwrap();
        assert_eq!(tab.pending[0].text, "buy milk");
        assert_eq!(app.mode, Mode::TaskInput);
        assert!(app.edit_buffer.is_empty());
        assert!(app.scheduler.is_armed());
    }

    #[test]
    fn submit_of_blank_task_changes_nothing() {
        let mut app = app_with_tabs(&[("today", &[], &[])]);
        app.mode = Mode::TaskInput;
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert!(app.store.active_tab().unwrap().pending.is_empty());
        assert!(!app.scheduler.is_armed());
    }

    #[test]
    fn submit_creates_tab_and_closes_modal() {
        let mut app = app_with_tabs(&[("today", &[], &[])]);
        app.mode = Mode::TabInput;
        type_text(&mut app, "work");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Navigate);
        let names: Vec<&str> = app.store.list_tabs().map(|(_, n)| n).collect();
        assert_eq!(names, ["today", "work"]);
        // The new tab became active.
        assert_eq!(app.store.active_tab().unwrap().name, "work");
    }

    #[test]
    fn blank_tab_name_keeps_modal_open_and_active_tab_unchanged() {
        let mut app = app_with_tabs(&[("today", &[], &[])]);
        let active = app.store.active();
        app.mode = Mode::TabInput;
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::TabInput);
        assert_eq!(app.store.tabs().len(), 1);
        assert_eq!(app.store.active(), active);
    }

    #[test]
    fn esc_from_task_input_focuses_first_pending_row() {
        let mut app = app_with_tabs(&[("today", &["first", "second"], &[])]);
        let first = app.row_order()[0];
        app.mode = Mode::TaskInput;
        type_text(&mut app, "unfinished");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.focus, Focus::Task(first));
        assert!(app.edit_buffer.is_empty());
    }

    #[test]
    fn esc_from_modal_returns_to_tab_bar() {
        let mut app = app_with_tabs(&[("today", &[], &[])]);
        app.mode = Mode::TabInput;
        type_text(&mut app, "half-typed");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.focus, Focus::Tabs);
        assert_eq!(app.store.tabs().len(), 1);
    }

    #[test]
    fn editor_moves_by_graphemes() {
        let mut app = app_with_tabs(&[("today", &[], &[])]);
        app.mode = Mode::TaskInput;
        type_text(&mut app, "a🎉b");

        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.edit_cursor, 1);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.edit_buffer, "🎉b");
        assert_eq!(app.edit_cursor, 0);
    }

    #[test]
    fn editor_inserts_at_cursor() {
        let mut app = app_with_tabs(&[("today", &[], &[])]);
        app.mode = Mode::TaskInput;
        type_text(&mut app, "ac");
        press(&mut app, KeyCode::Left);
        type_text(&mut app, "b");
        assert_eq!(app.edit_buffer, "abc");

        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.edit_buffer, "bc");
        press(&mut app, KeyCode::End);
        assert_eq!(app.edit_cursor, 2);
    }
}
