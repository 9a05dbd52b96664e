//! New Todo Form Component
//!
//! Header form for creating tasks, with an optimistic insert at the head of
//! the list.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::Todo;
use crate::store::{store_confirm, store_insert_head, store_remove, use_app_store};
use crate::toast::use_toasts;

/// Form for creating new tasks
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();

    let (draft, set_draft) = signal(String::new());
    let (creating, set_creating) = signal(false);

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let description = draft.get().trim().to_string();
        // whitespace-only input: no request, no list mutation
        if description.is_empty() {
            return;
        }

        let optimistic = Todo::provisional(description.clone(), Utc::now().to_rfc3339());
        let temp_id = optimistic.id.clone();
        store_insert_head(&store, optimistic);
        set_draft.set(String::new());
        set_creating.set(true);

        spawn_local(async move {
            match commands::create_todo(&description).await {
                Ok(created) => {
                    store_confirm(&store, &temp_id, created.into());
                    toasts.info("Added");
                }
                Err(_) => {
                    store_remove(&store, &temp_id);
                    toasts.error("Create failed");
                }
            }
            set_creating.set(false);
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                aria-label="Add todo"
                placeholder="Add a task..."
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn" disabled=move || creating.get()>
                "Add"
            </button>
        </form>
    }
}
