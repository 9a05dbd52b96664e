//! Todo Card Component
//!
//! A single task row: completion checkbox, description (inline-editable),
//! edit and delete actions. Toggle and edit mutate the store optimistically
//! and restore their pre-mutation snapshot when the request fails.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, TodoPatch};
use crate::models::{DeleteConfirm, EditState, Todo};
use crate::store::{
    store_completed, store_restore, store_set_completed, store_set_description, store_snapshot,
    use_app_store,
};
use crate::toast::use_toasts;
use crate::view::format_timestamp;

/// A single task row
#[component]
pub fn TodoCard(
    todo: Todo,
    editing: ReadSignal<EditState>,
    set_editing: WriteSignal<EditState>,
    set_confirm: WriteSignal<DeleteConfirm>,
) -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();

    let Todo {
        id,
        description,
        completed,
        created_at,
    } = todo;

    let edit_ref = NodeRef::<html::Input>::new();

    // Pointer and keyboard activation share this path.
    let toggle = {
        let id = id.clone();
        move || {
            let Some(remote) = id.remote().map(str::to_string) else {
                return; // create not confirmed yet, nothing to address
            };
            let Some(current) = store_completed(&store, &id) else {
                return;
            };
            let next = !current;
            let snapshot = store_snapshot(&store);
            store_set_completed(&store, &id, next);
            spawn_local(async move {
                let patch = TodoPatch {
                    description: None,
                    completed: Some(next),
                };
                match commands::patch_todo(&remote, &patch).await {
                    Ok(()) => toasts.info("Updated"),
                    Err(_) => {
                        store_restore(&store, snapshot);
                        toasts.error("Update failed");
                    }
                }
            });
        }
    };

    let begin_edit = {
        let id = id.clone();
        let description = description.clone();
        move || {
            if id.remote().is_none() {
                return;
            }
            set_editing.update(|e| e.begin(id.clone(), &description));
        }
    };

    let commit_edit = {
        let id = id.clone();
        move || {
            let Some(draft) = editing.with_untracked(|e| e.draft_for(&id)) else {
                return;
            };
            let value = draft.trim().to_string();
            if value.is_empty() {
                // stays in edit mode; the draft is still on screen
                toasts.error("Description required");
                return;
            }
            let Some(remote) = id.remote().map(str::to_string) else {
                set_editing.update(|e| e.cancel());
                return;
            };
            // edit mode is local UI state, leave it regardless of the outcome
            set_editing.update(|e| e.cancel());
            let snapshot = store_snapshot(&store);
            store_set_description(&store, &id, &value);
            spawn_local(async move {
                let patch = TodoPatch {
                    description: Some(&value),
                    completed: None,
                };
                match commands::patch_todo(&remote, &patch).await {
                    Ok(()) => toasts.info("Saved"),
                    Err(_) => {
                        store_restore(&store, snapshot);
                        toasts.error("Save failed");
                    }
                }
            });
        }
    };

    let ask_delete = {
        let id = id.clone();
        let description = description.clone();
        move || {
            if id.remote().is_none() {
                return;
            }
            set_confirm.update(|c| c.request(id.clone(), description.clone()));
        }
    };

    let is_editing = {
        let id = id.clone();
        move || editing.with(|e| e.is_editing(&id))
    };

    // Focus the inline editor as soon as it mounts.
    {
        let is_editing = is_editing.clone();
        Effect::new(move |_| {
            if is_editing() {
                if let Some(input) = edit_ref.get() {
                    let _ = input.focus();
                }
            }
        });
    }

    let draft_value = {
        let id = id.clone();
        move || editing.with(|e| e.draft_for(&id).unwrap_or_default())
    };

    let commit_edit_save = commit_edit.clone();

    let meta = format!("Created {}", format_timestamp(&created_at));

    view! {
        <div class=if completed { "todo-card completed" } else { "todo-card" }>
            <div
                class=if completed { "todo-check done" } else { "todo-check" }
                role="button"
                tabindex="0"
                aria-label=if completed { "Mark as uncompleted" } else { "Mark as completed" }
                on:click={
                    let toggle = toggle.clone();
                    move |_| toggle()
                }
                on:keydown={
                    let toggle = toggle.clone();
                    move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            toggle();
                        }
                    }
                }
            >
                {if completed { "\u{2713}" } else { "" }}
            </div>

            <div class="todo-text">
                <Show
                    when=is_editing.clone()
                    fallback={
                        let description = description.clone();
                        let meta = meta.clone();
                        move || {
                            view! {
                                <h3 class="todo-title">{description.clone()}</h3>
                                <div class="todo-meta">{meta.clone()}</div>
                            }
                        }
                    }
                >
                    <input
                        class="edit-input"
                        node_ref=edit_ref
                        prop:value=draft_value.clone()
                        on:input=move |ev| {
                            set_editing.update(|e| e.set_draft(event_target_value(&ev)))
                        }
                        on:keydown={
                            let commit_edit = commit_edit.clone();
                            move |ev: web_sys::KeyboardEvent| {
                                match ev.key().as_str() {
                                    "Enter" => commit_edit(),
                                    "Escape" => set_editing.update(|e| e.cancel()),
                                    _ => {}
                                }
                            }
                        }
                    />
                </Show>
            </div>

            <div class="todo-actions">
                <Show
                    when=is_editing.clone()
                    fallback={
                        let begin_edit = begin_edit.clone();
                        let ask_delete = ask_delete.clone();
                        move || {
                            let begin_edit = begin_edit.clone();
                            let ask_delete = ask_delete.clone();
                            view! {
                                <button class="action-btn" title="Edit" on:click=move |_| begin_edit()>
                                    "Edit"
                                </button>
                                <button class="action-btn" title="Delete" on:click=move |_| ask_delete()>
                                    "Delete"
                                </button>
                            }
                        }
                    }
                >
                    <button
                        class="action-btn save"
                        on:click={
                            let commit_edit = commit_edit_save.clone();
                            move |_| commit_edit()
                        }
                    >
                        "Save"
                    </button>
                    <button class="action-btn" on:click=move |_| set_editing.update(|e| e.cancel())>
                        "Cancel"
                    </button>
                </Show>
            </div>
        </div>
    }
}
