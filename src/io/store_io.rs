use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One tab as it exists on disk: a name and two ordered text lists.
/// Document order equals display order; process-local ids are never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedTab {
    pub name: String,
    pub pending: Vec<String>,
    pub completed: Vec<String>,
}

/// Error type for data-file writes. Reads never error: a missing or
/// malformed file yields an empty collection instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreIoError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize data file: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The modern document shape: `{"tabs": [{name, tasks}]}`.
#[derive(Debug, Serialize, Deserialize)]
struct Document {
    tabs: Vec<TabDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TabDoc {
    #[serde(default)]
    name: String,
    #[serde(default)]
    tasks: TaskLists,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TaskLists {
    #[serde(default)]
    not_completed: Vec<String>,
    #[serde(default)]
    completed: Vec<String>,
}

/// The pre-migration shape, keyed by tab ids from a long-gone process.
/// IndexMap keeps the document's key order, which is all that remains of
/// the original display order.
#[derive(Debug, Deserialize)]
struct LegacyDocument {
    tasks_by_tab: IndexMap<String, TaskLists>,
    tab_names: IndexMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OnDisk {
    Modern(Document),
    Legacy(LegacyDocument),
}

/// Load saved tabs, migrating the legacy shape when found. A missing or
/// unparsable file yields an empty collection, never an error.
pub fn load(path: &Path) -> Vec<SavedTab> {
    let Ok(text) = fs::read_to_string(path) else {
        return Vec::new();
    };
    match serde_json::from_str::<OnDisk>(&text) {
        Ok(OnDisk::Modern(doc)) => doc
            .tabs
            .into_iter()
            .map(|tab| SavedTab {
                name: tab.name,
                pending: tab.tasks.not_completed,
                completed: tab.tasks.completed,
            })
            .collect(),
        Ok(OnDisk::Legacy(legacy)) => migrate(legacy),
        Err(_) => Vec::new(),
    }
}

/// Reconstruct the modern shape from the legacy one. `tab_names` drives
/// iteration: a named tab with no task lists gets empty lists, while task
/// lists with no matching name are dropped. The stale tab ids are
/// discarded entirely.
fn migrate(legacy: LegacyDocument) -> Vec<SavedTab> {
    let mut tasks_by_tab = legacy.tasks_by_tab;
    legacy
        .tab_names
        .into_iter()
        .map(|(tab_id, name)| {
            let lists = tasks_by_tab.swap_remove(&tab_id).unwrap_or_default();
            SavedTab {
                name,
                pending: lists.not_completed,
                completed: lists.completed,
            }
        })
        .collect()
}

/// Write the modern document shape, creating the data directory if needed.
/// Best effort: no atomic rename. Callers are expected to swallow the
/// error, since in-memory state survives and a later save may succeed.
pub fn save(path: &Path, tabs: &[SavedTab]) -> Result<(), StoreIoError> {
    let doc = Document {
        tabs: tabs
            .iter()
            .map(|tab| TabDoc {
                name: tab.name.clone(),
                tasks: TaskLists {
                    not_completed: tab.pending.clone(),
                    completed: tab.completed.clone(),
                },
            })
            .collect(),
    };
    let text = serde_json::to_string_pretty(&doc)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StoreIoError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(path, text).map_err(|e| StoreIoError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}
