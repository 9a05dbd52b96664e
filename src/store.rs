//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The mutation
//! helpers keep every optimistic update in one place so the rollback paths
//! stay symmetrical with the mutations they undo.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Todo, TodoId};

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Client copy of the task list, in backend fetch order
    pub todos: Vec<Todo>,
    /// True while a list fetch is in flight
    pub loading: bool,
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

/// Clone the current task list as a rollback snapshot.
pub fn store_snapshot(store: &AppStore) -> Vec<Todo> {
    store.todos().get_untracked()
}

/// Restore a snapshot taken before an optimistic mutation.
pub fn store_restore(store: &AppStore, snapshot: Vec<Todo>) {
    store.todos().set(snapshot);
}

/// Insert an optimistic record at the head of the list.
pub fn store_insert_head(store: &AppStore, todo: Todo) {
    store.todos().write().insert(0, todo);
}

/// Replace a provisional record with its server-confirmed counterpart.
pub fn store_confirm(store: &AppStore, provisional: &TodoId, confirmed: Todo) {
    confirm_todo(&mut store.todos().write(), provisional, confirmed);
}

/// Remove a record by id.
pub fn store_remove(store: &AppStore, id: &TodoId) {
    remove_todo(&mut store.todos().write(), id);
}

pub fn store_set_completed(store: &AppStore, id: &TodoId, completed: bool) {
    set_completed(&mut store.todos().write(), id, completed);
}

pub fn store_set_description(store: &AppStore, id: &TodoId, description: &str) {
    set_description(&mut store.todos().write(), id, description);
}

/// Current `completed` value for a record, read without tracking.
pub fn store_completed(store: &AppStore, id: &TodoId) -> Option<bool> {
    store
        .todos()
        .with_untracked(|todos| todos.iter().find(|t| &t.id == id).map(|t| t.completed))
}

// ========================
// List Operations
// ========================

fn confirm_todo(todos: &mut Vec<Todo>, provisional: &TodoId, confirmed: Todo) {
    if let Some(slot) = todos.iter_mut().find(|t| &t.id == provisional) {
        *slot = confirmed;
    }
}

fn remove_todo(todos: &mut Vec<Todo>, id: &TodoId) {
    todos.retain(|t| &t.id != id);
}

fn set_completed(todos: &mut [Todo], id: &TodoId, completed: bool) {
    if let Some(todo) = todos.iter_mut().find(|t| &t.id == id) {
        todo.completed = completed;
    }
}

fn set_description(todos: &mut [Todo], id: &TodoId, description: &str) {
    if let Some(todo) = todos.iter_mut().find(|t| &t.id == id) {
        todo.description = description.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirmed(id: &str, description: &str) -> Todo {
        Todo {
            id: TodoId::Confirmed(id.to_string()),
            description: description.to_string(),
            completed: false,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn provisional(id: u64, description: &str) -> Todo {
        Todo {
            id: TodoId::Provisional(id),
            description: description.to_string(),
            completed: false,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn confirm_replaces_exactly_the_provisional_record() {
        let mut todos = vec![provisional(7, "draft"), confirmed("a", "older")];
        confirm_todo(&mut todos, &TodoId::Provisional(7), confirmed("srv", "draft"));

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, TodoId::Confirmed("srv".to_string()));
        assert!(!todos.iter().any(|t| matches!(t.id, TodoId::Provisional(_))));
    }

    #[test]
    fn confirm_is_a_noop_when_the_provisional_record_is_gone() {
        let mut todos = vec![confirmed("a", "older")];
        let before = todos.clone();
        confirm_todo(&mut todos, &TodoId::Provisional(7), confirmed("srv", "draft"));
        assert_eq!(todos, before);
    }

    #[test]
    fn remove_drops_only_the_target() {
        let mut todos = vec![confirmed("a", "one"), confirmed("b", "two")];
        remove_todo(&mut todos, &TodoId::Confirmed("a".to_string()));
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].description, "two");
    }

    #[test]
    fn set_completed_touches_only_the_target() {
        let mut todos = vec![confirmed("a", "one"), confirmed("b", "two")];
        set_completed(&mut todos, &TodoId::Confirmed("a".to_string()), true);
        assert!(todos[0].completed);
        assert!(!todos[1].completed);
    }

    #[test]
    fn set_description_touches_only_the_target() {
        let mut todos = vec![confirmed("a", "one"), confirmed("b", "two")];
        set_description(&mut todos, &TodoId::Confirmed("b".to_string()), "two, revised");
        assert_eq!(todos[0].description, "one");
        assert_eq!(todos[1].description, "two, revised");
    }

    #[test]
    fn snapshot_rollback_restores_the_exact_order() {
        let original = vec![confirmed("a", "one"), confirmed("b", "two"), confirmed("c", "three")];
        let snapshot = original.clone();

        // optimistic delete of the middle record, then a failed request
        let mut todos = original.clone();
        remove_todo(&mut todos, &TodoId::Confirmed("b".to_string()));
        assert_eq!(todos.len(), 2);

        todos = snapshot;
        assert_eq!(todos, original);
    }
}
