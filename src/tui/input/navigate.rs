use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::TabId;
use crate::ops::{focus, task_ops};
use crate::tui::app::{App, Focus, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Quit: Ctrl+Q
        (m, KeyCode::Char('q')) if m.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // Focus the task input
        (_, KeyCode::Char('a')) => {
            app.clear_edit();
            app.mode = Mode::TaskInput;
        }

        // Open the new-tab modal
        (_, KeyCode::Char('t')) => {
            app.clear_edit();
            app.mode = Mode::TabInput;
        }

        // Remove the active tab and its tasks
        (_, KeyCode::Char('r')) => {
            if let Some(id) = app.store.active() {
                app.store.remove_tab(id);
                app.focus = Focus::Tabs;
                app.schedule_save();
            }
        }

        // Toggle dark/light theme
        (_, KeyCode::Char('d')) => {
            app.toggle_theme();
        }

        (_, KeyCode::Left | KeyCode::Char('h')) => switch_tab(app, Step::Prev),
        (_, KeyCode::Right | KeyCode::Char('l')) => switch_tab(app, Step::Next),
        (_, KeyCode::Up | KeyCode::Char('k')) => move_task_focus(app, Step::Prev),
        (_, KeyCode::Down | KeyCode::Char('j')) => move_task_focus(app, Step::Next),

        // Toggle the focused task between pending and completed
        (_, KeyCode::Char(' ') | KeyCode::Enter) => {
            if let Focus::Task(id) = app.focus {
                task_ops::toggle_task(&mut app.store, id);
                app.schedule_save();
            }
        }

        // Delete the focused task
        (_, KeyCode::Char('q')) => delete_focused(app),

        _ => {}
    }
}

enum Step {
    Prev,
    Next,
}

fn switch_tab(app: &mut App, step: Step) {
    let ids: Vec<TabId> = app.store.list_tabs().map(|(id, _)| id).collect();
    let target = match step {
        Step::Prev => focus::prev(app.store.active(), &ids),
        Step::Next => focus::next(app.store.active(), &ids),
    };
    if let Some(id) = target
        && Some(id) != app.store.active()
    {
        app.store.activate(id);
        // The old tab's rows are gone from view; focus returns to the bar.
        app.focus = Focus::Tabs;
        app.pending_scroll = 0;
        app.completed_scroll = 0;
    }
}

fn move_task_focus(app: &mut App, step: Step) {
    let order = app.row_order();
    let target = match step {
        Step::Prev => focus::prev(app.focused_task(), &order),
        Step::Next => focus::next(app.focused_task(), &order),
    };
    if let Some(id) = target {
        app.focus = Focus::Task(id);
    }
}

/// Delete the focused row, keeping focus on the row that slid into its
/// place (or the new last row, or the tab bar when the tab emptied).
fn delete_focused(app: &mut App) {
    let Focus::Task(id) = app.focus else {
        return;
    };
    let idx = app.row_order().iter().position(|r| *r == id);
    task_ops::delete_task(&mut app.store, id);
    let order = app.row_order();
    app.focus = match (idx, order.as_slice()) {
        (_, []) => Focus::Tabs,
        (Some(i), rows) => Focus::Task(rows[i.min(rows.len() - 1)]),
        (None, rows) => Focus::Task(rows[0]),
    };
    app.schedule_save();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::app_with_tabs;

    fn press(app: &mut App, code: KeyCode) {
        handle_navigate(app, KeyEvent::from(code));
    }

    #[test]
    fn down_enters_first_row_then_wraps() {
        let mut app = app_with_tabs(&[("today", &["a", "b"], &["c"])]);
        let order = app.row_order();

        press(&mut app, KeyCode::Down);
        assert_eq!(app.focus, Focus::Task(order[0]));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.focus, Focus::Task(order[2]));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.focus, Focus::Task(order[0]));
    }

    #[test]
    fn up_enters_at_the_last_row() {
        let mut app = app_with_tabs(&[("today", &["a"], &["b"])]);
        let order = app.row_order();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.focus, Focus::Task(order[1]));
    }

    #[test]
    fn right_cycles_tabs_and_wraps() {
        let mut app = app_with_tabs(&[("t1", &[], &[]), ("t2", &[], &[]), ("t3", &[], &[])]);
        let ids: Vec<TabId> = app.store.list_tabs().map(|(id, _)| id).collect();
        app.store.activate(ids[2]);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.store.active(), Some(ids[0]));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.store.active(), Some(ids[2]));
    }

    #[test]
    fn tab_switch_resets_row_focus() {
        let mut app = app_with_tabs(&[("t1", &["a"], &[]), ("t2", &[], &[])]);
        let ids: Vec<TabId> = app.store.list_tabs().map(|(id, _)| id).collect();
        app.store.activate(ids[0]);
        press(&mut app, KeyCode::Down);
        assert!(matches!(app.focus, Focus::Task(_)));

        press(&mut app, KeyCode::Right);
        assert_eq!(app.focus, Focus::Tabs);
    }

    #[test]
    fn space_toggles_focused_row_and_keeps_focus() {
        let mut app = app_with_tabs(&[("today", &["a"], &[])]);
        let id = app.row_order()[0];
        app.focus = Focus::Task(id);

        press(&mut app, KeyCode::Char(' '));
        let tab = app.store.active_tab().unwrap();
        assert!(tab.is_completed(id));
        assert_eq!(app.focus, Focus::Task(id));
        assert!(app.scheduler.is_armed());
    }

    #[test]
    fn q_deletes_focused_row_and_moves_focus_to_successor() {
        let mut app = app_with_tabs(&[("today", &["a", "b"], &[])]);
        let order = app.row_order();
        app.focus = Focus::Task(order[0]);

        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.row_order(), vec![order[1]]);
        assert_eq!(app.focus, Focus::Task(order[1]));
    }

    #[test]
    fn deleting_the_last_row_returns_focus_to_tabs() {
        let mut app = app_with_tabs(&[("today", &["only"], &[])]);
        let id = app.row_order()[0];
        app.focus = Focus::Task(id);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.row_order().is_empty());
        assert_eq!(app.focus, Focus::Tabs);
    }

    #[test]
    fn r_removes_active_tab_and_schedules_save() {
        let mut app = app_with_tabs(&[("t1", &[], &[]), ("t2", &[], &[])]);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.store.tabs().len(), 1);
        assert!(app.scheduler.is_armed());
    }

    #[test]
    fn a_and_t_enter_input_modes() {
        let mut app = app_with_tabs(&[("today", &[], &[])]);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode, Mode::TaskInput);

        app.mode = Mode::Navigate;
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.mode, Mode::TabInput);
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = app_with_tabs(&[("today", &[], &[])]);
        handle_navigate(
            &mut app,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
