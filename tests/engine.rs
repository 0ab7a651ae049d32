use pretty_assertions::assert_eq;

use tally::model::TabStore;
use tally::ops::{focus, task_ops};

fn texts(tasks: &[tally::model::Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn no_text_lives_in_both_lists() {
    let mut store = TabStore::new();
    let tab = store.create_tab("today").unwrap();

    // Drive a mixed sequence of mutations and check the invariant after
    // every step.
    let a = task_ops::add_task(&mut store, "alpha").unwrap();
    let b = task_ops::add_task(&mut store, "beta").unwrap();
    let steps: Vec<Box<dyn Fn(&mut TabStore)>> = vec![
        Box::new(move |s| task_ops::toggle_task(s, a)),
        Box::new(move |s| task_ops::toggle_task(s, b)),
        Box::new(move |s| task_ops::toggle_task(s, a)),
        Box::new(|s| {
            task_ops::add_task(s, "gamma");
        }),
        Box::new(move |s| task_ops::delete_task(s, b)),
    ];
    for step in steps {
        step(&mut store);
        let (pending, completed) = store.get_tasks(tab).unwrap();
        for task in pending {
            assert!(
                !completed.iter().any(|t| t.text == task.text),
                "{:?} appears in both lists",
                task.text
            );
        }
    }
}

#[test]
fn toggle_twice_restores_pane_and_text() {
    let mut store = TabStore::new();
    let tab = store.create_tab("today").unwrap();
    let id = task_ops::add_task(&mut store, "write report").unwrap();

    task_ops::toggle_task(&mut store, id);
    task_ops::toggle_task(&mut store, id);

    let (pending, completed) = store.get_tasks(tab).unwrap();
    assert_eq!(texts(pending), ["write report"]);
    assert!(completed.is_empty());
}

#[test]
fn stale_ids_are_tolerated_silently() {
    let mut store = TabStore::new();
    let tab = store.create_tab("today").unwrap();
    task_ops::add_task(&mut store, "keep me").unwrap();
    let ghost = task_ops::add_task(&mut store, "ghost").unwrap();
    task_ops::delete_task(&mut store, ghost);

    // The id now references nothing; both operations must be no-ops.
    task_ops::delete_task(&mut store, ghost);
    task_ops::toggle_task(&mut store, ghost);

    let (pending, completed) = store.get_tasks(tab).unwrap();
    assert_eq!(texts(pending), ["keep me"]);
    assert!(completed.is_empty());
}

#[test]
fn empty_tab_name_is_a_noop() {
    let mut store = TabStore::new();
    let before = store.create_tab("today").unwrap();

    assert_eq!(store.create_tab(""), None);
    assert_eq!(store.create_tab("  \t "), None);
    assert_eq!(store.tabs().len(), 1);
    assert_eq!(store.active(), Some(before));
}

#[test]
fn tab_navigation_wraps_around() {
    let mut store = TabStore::new();
    let t1 = store.create_tab("T1").unwrap();
    store.create_tab("T2").unwrap();
    let t3 = store.create_tab("T3").unwrap();
    store.activate(t3);

    let ids: Vec<_> = store.list_tabs().map(|(id, _)| id).collect();
    assert_eq!(focus::next(store.active(), &ids), Some(t1));
    assert_eq!(focus::prev(Some(t1), &ids), Some(t3));
}

#[test]
fn task_navigation_enters_and_wraps_in_display_order() {
    let mut store = TabStore::new();
    let tab = store.create_tab("today").unwrap();
    store.set_tasks(
        tab,
        vec!["p1".into(), "p2".into()],
        vec!["c1".into()],
    );

    let order = store.tab(tab).unwrap().row_ids();
    let (pending, completed) = store.get_tasks(tab).unwrap();
    // Pending rows come before completed rows.
    assert_eq!(order[0], pending[0].id);
    assert_eq!(order[2], completed[0].id);

    // No focus: next enters at the first row; from the last row it wraps.
    assert_eq!(focus::next(None, &order), Some(order[0]));
    assert_eq!(focus::next(Some(order[2]), &order), Some(order[0]));
    assert_eq!(focus::prev(None, &order), Some(order[2]));
}

#[test]
fn removing_tabs_walks_the_active_tab_forward() {
    let mut store = TabStore::new();
    let a = store.create_tab("a").unwrap();
    let b = store.create_tab("b").unwrap();
    let c = store.create_tab("c").unwrap();
    store.activate(a);

    store.remove_tab(a);
    assert_eq!(store.active(), Some(b));
    store.remove_tab(b);
    assert_eq!(store.active(), Some(c));
    store.remove_tab(c);
    assert_eq!(store.active(), None);
}

#[test]
fn dirty_flag_tracks_mutations_only() {
    let mut store = TabStore::new();
    let tab = store.create_tab("today").unwrap();
    assert!(store.is_dirty());
    store.clear_dirty();

    // Reads and activation do not dirty the store.
    let _ = store.get_tasks(tab);
    store.activate(tab);
    assert!(!store.is_dirty());

    task_ops::add_task(&mut store, "task").unwrap();
    assert!(store.is_dirty());
}
