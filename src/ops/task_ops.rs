use crate::model::store::TabStore;
use crate::model::tab::TaskId;

/// Append a new pending task to the active tab. Returns `None` without
/// changing anything if the trimmed text is empty or no tab is active.
pub fn add_task(store: &mut TabStore, text: &str) -> Option<TaskId> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    store.active_tab_mut()?;
    let task = store.new_task(text.to_string());
    let id = task.id;
    let tab = store.active_tab_mut()?;
    tab.pending.push(task);
    store.mark_dirty();
    Some(id)
}

/// Move a task between the active tab's pending and completed lists,
/// appending it at the end of the destination. The task keeps its id and
/// text, so toggling twice restores the original state. Ids not present
/// in the active tab are silently tolerated.
pub fn toggle_task(store: &mut TabStore, id: TaskId) {
    let Some(tab) = store.active_tab_mut() else {
        return;
    };
    if let Some(i) = tab.pending.iter().position(|t| t.id == id) {
        let task = tab.pending.remove(i);
        tab.completed.push(task);
    } else if let Some(i) = tab.completed.iter().position(|t| t.id == id) {
        let task = tab.completed.remove(i);
        tab.pending.push(task);
    } else {
        return;
    }
    store.mark_dirty();
}

/// Remove a task from whichever list of the active tab holds it, pending
/// checked first. Unknown ids are a no-op: no error, no change to other
/// tasks.
pub fn delete_task(store: &mut TabStore, id: TaskId) {
    let Some(tab) = store.active_tab_mut() else {
        return;
    };
    if let Some(i) = tab.pending.iter().position(|t| t.id == id) {
        tab.pending.remove(i);
    } else if let Some(i) = tab.completed.iter().position(|t| t.id == id) {
        tab.completed.remove(i);
    } else {
        return;
    }
    store.mark_dirty();
}
