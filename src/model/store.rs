use crate::model::tab::{Tab, TabId, Task, TaskId};

/// The single source of truth for tabs and their task lists.
///
/// Every mutating operation sets the dirty flag; the app layer watches it
/// to arm the debounced save and clears it once the store has been written
/// out. The store itself never touches the display or the filesystem.
#[derive(Debug, Default)]
pub struct TabStore {
    tabs: Vec<Tab>,
    active: Option<TabId>,
    next_tab_id: u64,
    next_task_id: u64,
    dirty: bool,
}

impl TabStore {
    pub fn new() -> Self {
        TabStore::default()
    }

    /// Create a tab and make it the active one. Empty-after-trim names are
    /// a no-op: no tab is created and `None` is returned.
    pub fn create_tab(&mut self, name: &str) -> Option<TabId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = TabId(self.next_tab_id);
        self.next_tab_id += 1;
        self.tabs.push(Tab {
            id,
            name: name.to_string(),
            pending: Vec::new(),
            completed: Vec::new(),
        });
        self.active = Some(id);
        self.dirty = true;
        Some(id)
    }

    /// Drop a tab and its tasks. Unknown ids are a no-op. Removing the
    /// active tab activates the tab now occupying its position, falling
    /// back to the last tab, or none if the store emptied.
    pub fn remove_tab(&mut self, id: TabId) {
        let Some(idx) = self.tabs.iter().position(|t| t.id == id) else {
            return;
        };
        self.tabs.remove(idx);
        if self.active == Some(id) {
            self.active = self
                .tabs
                .get(idx)
                .or_else(|| self.tabs.last())
                .map(|t| t.id);
        }
        self.dirty = true;
    }

    /// The (pending, completed) task slices for a tab.
    pub fn get_tasks(&self, id: TabId) -> Option<(&[Task], &[Task])> {
        self.tab(id)
            .map(|t| (t.pending.as_slice(), t.completed.as_slice()))
    }

    /// Unconditionally overwrite a tab's two lists with the given texts,
    /// in order, assigning fresh task ids. Unknown ids are a no-op.
    pub fn set_tasks(&mut self, id: TabId, pending: Vec<String>, completed: Vec<String>) {
        let make = |texts: Vec<String>, next: &mut u64| -> Vec<Task> {
            texts
                .into_iter()
                .map(|text| {
                    let id = TaskId(*next);
                    *next += 1;
                    Task { id, text }
                })
                .collect()
        };
        let mut next = self.next_task_id;
        let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) else {
            return;
        };
        tab.pending = make(pending, &mut next);
        tab.completed = make(completed, &mut next);
        self.next_task_id = next;
        self.dirty = true;
    }

    /// Ordered `(id, name)` pairs; document order equals display order.
    pub fn list_tabs(&self) -> impl Iterator<Item = (TabId, &str)> {
        self.tabs.iter().map(|t| (t.id, t.name.as_str()))
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active(&self) -> Option<TabId> {
        self.active
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active.and_then(|id| self.tab(id))
    }

    /// Switch the active tab. Unknown ids are a no-op. Switching does not
    /// dirty the store: tab content and order are unaffected.
    pub fn activate(&mut self, id: TabId) {
        if self.tabs.iter().any(|t| t.id == id) {
            self.active = Some(id);
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn active_tab_mut(&mut self) -> Option<&mut Tab> {
        let id = self.active?;
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    /// Allocate a task with a fresh id. The caller decides which list it
    /// joins.
    pub(crate) fn new_task(&mut self, text: String) -> Task {
        let id = TaskId(self.next_task_id);
        self.next_task_id += 1;
        Task { id, text }
    }
}
