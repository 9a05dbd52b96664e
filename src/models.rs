//! Client-Side Models
//!
//! Task records and the small UI state machines attached to them.

use std::cell::Cell;

/// Task identifier.
///
/// A freshly created task carries a `Provisional` id until the backend
/// confirms the insert; only `Confirmed` ids can be addressed in request
/// paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TodoId {
    /// Optimistic insert awaiting server confirmation
    Provisional(u64),
    /// Server-assigned id
    Confirmed(String),
}

impl TodoId {
    /// The server-side id, if this record has been confirmed.
    pub fn remote(&self) -> Option<&str> {
        match self {
            TodoId::Confirmed(id) => Some(id),
            TodoId::Provisional(_) => None,
        }
    }
}

thread_local! {
    static NEXT_PROVISIONAL: Cell<u64> = Cell::new(1);
}

/// Allocate a client-side id for an optimistic insert.
pub fn next_provisional_id() -> u64 {
    NEXT_PROVISIONAL.with(|c| {
        let id = c.get();
        c.set(id + 1);
        id
    })
}

/// Task record
#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: TodoId,
    pub description: String,
    pub completed: bool,
    /// Opaque ISO-formatted timestamp, used for display and sort order only
    pub created_at: String,
}

impl Todo {
    /// Optimistic record inserted ahead of the create request.
    pub fn provisional(description: String, created_at: String) -> Self {
        Self {
            id: TodoId::Provisional(next_provisional_id()),
            description,
            completed: false,
            created_at,
        }
    }
}

/// Delete confirmation state.
///
/// At most one confirmation is pending; requesting a new one while another
/// is pending replaces it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DeleteConfirm {
    #[default]
    Idle,
    Pending { id: TodoId, description: String },
}

impl DeleteConfirm {
    pub fn request(&mut self, id: TodoId, description: String) {
        *self = DeleteConfirm::Pending { id, description };
    }

    pub fn cancel(&mut self) {
        *self = DeleteConfirm::Idle;
    }

    /// Clear the pending confirmation, returning the delete target.
    pub fn take(&mut self) -> Option<TodoId> {
        match std::mem::take(self) {
            DeleteConfirm::Pending { id, .. } => Some(id),
            DeleteConfirm::Idle => None,
        }
    }
}

/// Inline edit state.
///
/// At most one task is in edit mode at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditState {
    #[default]
    Viewing,
    Editing { id: TodoId, draft: String },
}

impl EditState {
    /// Enter edit mode, seeding the draft with the current description.
    pub fn begin(&mut self, id: TodoId, current: &str) {
        *self = EditState::Editing {
            id,
            draft: current.to_string(),
        };
    }

    /// Leave edit mode, discarding any draft.
    pub fn cancel(&mut self) {
        *self = EditState::Viewing;
    }

    pub fn set_draft(&mut self, text: String) {
        if let EditState::Editing { draft, .. } = self {
            *draft = text;
        }
    }

    pub fn is_editing(&self, target: &TodoId) -> bool {
        matches!(self, EditState::Editing { id, .. } if id == target)
    }

    /// The current draft, if `target` is the task being edited.
    pub fn draft_for(&self, target: &TodoId) -> Option<String> {
        match self {
            EditState::Editing { id, draft } if id == target => Some(draft.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirmed(id: &str) -> TodoId {
        TodoId::Confirmed(id.to_string())
    }

    #[test]
    fn provisional_ids_are_distinct() {
        let a = next_provisional_id();
        let b = next_provisional_id();
        assert_ne!(a, b);
    }

    #[test]
    fn new_confirmation_replaces_pending_one() {
        let mut confirm = DeleteConfirm::Idle;
        confirm.request(confirmed("a"), "first".into());
        confirm.request(confirmed("b"), "second".into());
        assert_eq!(
            confirm,
            DeleteConfirm::Pending {
                id: confirmed("b"),
                description: "second".into()
            }
        );
    }

    #[test]
    fn take_clears_and_returns_target() {
        let mut confirm = DeleteConfirm::Idle;
        confirm.request(confirmed("a"), "buy milk".into());
        assert_eq!(confirm.take(), Some(confirmed("a")));
        assert_eq!(confirm, DeleteConfirm::Idle);
        assert_eq!(confirm.take(), None);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut confirm = DeleteConfirm::Idle;
        confirm.request(confirmed("a"), "buy milk".into());
        confirm.cancel();
        assert_eq!(confirm, DeleteConfirm::Idle);
    }

    #[test]
    fn begin_edit_replaces_active_edit() {
        let mut edit = EditState::Viewing;
        edit.begin(confirmed("a"), "one");
        edit.begin(confirmed("b"), "two");
        assert!(!edit.is_editing(&confirmed("a")));
        assert!(edit.is_editing(&confirmed("b")));
        assert_eq!(edit.draft_for(&confirmed("b")), Some("two".into()));
    }

    #[test]
    fn set_draft_is_ignored_while_viewing() {
        let mut edit = EditState::Viewing;
        edit.set_draft("stray".into());
        assert_eq!(edit, EditState::Viewing);
    }

    #[test]
    fn cancel_discards_the_draft() {
        let mut edit = EditState::Viewing;
        edit.begin(confirmed("a"), "one");
        edit.set_draft("one and a half".into());
        edit.cancel();
        assert_eq!(edit, EditState::Viewing);
        assert_eq!(edit.draft_for(&confirmed("a")), None);
    }
}
