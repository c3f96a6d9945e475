//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{CollaborativeList, Task, TaskScope};
use crate::schedule::SortCriterion;

/// Snapshot of the last deletion, recreated verbatim on undo.
/// Single slot; a new deletion overwrites the previous one.
#[derive(Clone, Debug)]
pub enum UndoEntry {
    Task(Task),
    CollabTask { list_id: u32, task: Task },
    List { name: String },
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The signed-in user's personal tasks
    pub todos: Vec<Task>,
    /// Collaborative lists the user owns or belongs to
    pub lists: Vec<CollaborativeList>,
    /// List currently open in the collaborative view
    pub open_list: Option<CollaborativeList>,
    /// Tasks of the open list
    pub list_tasks: Vec<Task>,
    /// Active sort for the personal board
    pub sort: SortCriterion,
    /// Pending undo for the toast
    pub undo: Option<UndoEntry>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a task under the given scope
pub fn store_push_task(store: &AppStore, scope: TaskScope, task: Task) {
    match scope {
        TaskScope::Personal => store.todos().write().push(task),
        TaskScope::Collaborative(_) => store.list_tasks().write().push(task),
    }
}

/// Replace a task by ID under the given scope
pub fn store_update_task(store: &AppStore, scope: TaskScope, updated: Task) {
    let field = match scope {
        TaskScope::Personal => store.todos(),
        TaskScope::Collaborative(_) => store.list_tasks(),
    };
    let mut guard = field.write();
    if let Some(task) = guard.iter_mut().find(|t| t.id == updated.id) {
        *task = updated;
    }
}

/// Remove a task by ID under the given scope
pub fn store_remove_task(store: &AppStore, scope: TaskScope, task_id: u32) {
    let field = match scope {
        TaskScope::Personal => store.todos(),
        TaskScope::Collaborative(_) => store.list_tasks(),
    };
    field.write().retain(|t| t.id != task_id);
}

/// Add a collaborative list to the store
pub fn store_push_list(store: &AppStore, list: CollaborativeList) {
    store.lists().write().push(list);
}

/// Replace a collaborative list by ID
pub fn store_update_list(store: &AppStore, updated: CollaborativeList) {
    if let Some(list) = store
        .lists()
        .write()
        .iter_mut()
        .find(|l| l.id == updated.id)
    {
        *list = updated.clone();
    }
    let open_matches = store
        .open_list()
        .read()
        .as_ref()
        .is_some_and(|l| l.id == updated.id);
    if open_matches {
        *store.open_list().write() = Some(updated);
    }
}

/// Remove a collaborative list by ID, closing it if it was open
pub fn store_remove_list(store: &AppStore, list_id: u32) {
    store.lists().write().retain(|l| l.id != list_id);
    let open_matches = store
        .open_list()
        .read()
        .as_ref()
        .is_some_and(|l| l.id == list_id);
    if open_matches {
        *store.open_list().write() = None;
        store.list_tasks().write().clear();
    }
}
