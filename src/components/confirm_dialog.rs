//! Confirm Dialog Component
//!
//! Modal confirmation gating every delete. The dialog closes on Cancel,
//! Escape (handled globally), a click on the overlay, or Confirm, which
//! runs the optimistic delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::DeleteConfirm;
use crate::store::{store_remove, store_restore, store_snapshot, use_app_store};
use crate::toast::use_toasts;

#[component]
pub fn ConfirmDialog(
    confirm: ReadSignal<DeleteConfirm>,
    set_confirm: WriteSignal<DeleteConfirm>,
) -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();

    let run_delete = move |_| {
        let mut target = None;
        set_confirm.update(|c| target = c.take());
        let Some(id) = target else {
            return;
        };
        let Some(remote) = id.remote().map(str::to_string) else {
            return;
        };
        let snapshot = store_snapshot(&store);
        store_remove(&store, &id);
        spawn_local(async move {
            match commands::delete_todo(&remote).await {
                Ok(()) => toasts.info("Deleted"),
                Err(_) => {
                    store_restore(&store, snapshot);
                    toasts.error("Delete failed");
                }
            }
        });
    };

    view! {
        {move || match confirm.get() {
            DeleteConfirm::Idle => ().into_any(),
            DeleteConfirm::Pending { description, .. } => {
                view! {
                    <div
                        class="modal-overlay"
                        on:click=move |ev| {
                            // only a click on the overlay itself cancels
                            if ev.target() == ev.current_target() {
                                set_confirm.update(|c| c.cancel());
                            }
                        }
                    >
                        <div class="modal" role="dialog" aria-modal="true">
                            <div class="modal-title">"Delete"</div>
                            <div class="modal-body">
                                "Delete "
                                <strong>{format!("\u{201c}{description}\u{201d}")}</strong>
                                "?"
                                <div class="modal-note">
                                    "This action is permanent and will remove the task from storage."
                                </div>
                            </div>
                            <div class="modal-actions">
                                <button
                                    class="modal-btn"
                                    on:click=move |_| set_confirm.update(|c| c.cancel())
                                >
                                    "Cancel"
                                </button>
                                <button class="modal-btn danger" autofocus=true on:click=run_delete>
                                    "Delete"
                                </button>
                            </div>
                        </div>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
