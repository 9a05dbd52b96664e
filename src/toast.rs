//! Toast Notifications
//!
//! Append-only queue of ephemeral messages. Entries expire on a timer unless
//! pushed sticky; a click removes them early. Identical messages coexist as
//! distinct entries.

use std::cell::Cell;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a non-sticky toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 3_800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

thread_local! {
    static NEXT_TOAST_ID: Cell<u64> = Cell::new(1);
}

fn next_toast_id() -> u64 {
    NEXT_TOAST_ID.with(|c| {
        let id = c.get();
        c.set(id + 1);
        id
    })
}

/// Handle to the toast queue, provided via context.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: ReadSignal<Vec<Toast>>,
    set_items: WriteSignal<Vec<Toast>>,
}

impl Toasts {
    /// Create the queue and provide it to the component tree.
    pub fn provide() -> Self {
        let (items, set_items) = signal(Vec::<Toast>::new());
        let toasts = Self { items, set_items };
        provide_context(toasts);
        toasts
    }

    pub fn active(&self) -> ReadSignal<Vec<Toast>> {
        self.items
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(message, ToastKind::Info, false);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message, ToastKind::Error, false);
    }

    /// Push a toast; non-sticky entries expire after [`TOAST_DURATION_MS`].
    pub fn push(&self, message: impl Into<String>, kind: ToastKind, sticky: bool) {
        let id = next_toast_id();
        self.set_items.update(|items| {
            items.push(Toast {
                id,
                message: message.into(),
                kind,
            })
        });
        if !sticky {
            let set_items = self.set_items;
            spawn_local(async move {
                TimeoutFuture::new(TOAST_DURATION_MS).await;
                set_items.update(|items| dismiss_toast(items, id));
            });
        }
    }

    /// Remove a toast immediately, regardless of its timer.
    pub fn dismiss(&self, id: u64) {
        self.set_items.update(|items| dismiss_toast(items, id));
    }
}

/// Get the toast queue from context
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

fn dismiss_toast(items: &mut Vec<Toast>, id: u64) {
    items.retain(|t| t.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_distinct() {
        let a = next_toast_id();
        let b = next_toast_id();
        assert_ne!(a, b);
    }

    #[test]
    fn identical_messages_are_distinct_entries() {
        let mut items = vec![
            Toast {
                id: 1,
                message: "Saved".into(),
                kind: ToastKind::Info,
            },
            Toast {
                id: 2,
                message: "Saved".into(),
                kind: ToastKind::Info,
            },
        ];
        dismiss_toast(&mut items, 1);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 2);
    }

    #[test]
    fn dismissing_twice_is_harmless() {
        let mut items = vec![Toast {
            id: 5,
            message: "Deleted".into(),
            kind: ToastKind::Info,
        }];
        dismiss_toast(&mut items, 5);
        dismiss_toast(&mut items, 5);
        assert!(items.is_empty());
    }
}
