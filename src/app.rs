//! Todo Studio App
//!
//! Root component: owns the UI state, wires the sync effects, and lays out
//! the page.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ConfirmDialog, NewTodoForm, Pager, ToastArea, TodoList};
use crate::context::AppContext;
use crate::models::{DeleteConfirm, EditState, Todo};
use crate::store::{AppState, AppStateStoreFields};
use crate::toast::Toasts;
use crate::view::{project, SortOrder};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    provide_context(store);
    let toasts = Toasts::provide();

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    let (query, set_query) = signal(String::new());
    let (sort, set_sort) = signal(SortOrder::Newest);
    let (page, set_page) = signal(1usize);
    let (confirm, set_confirm) = signal(DeleteConfirm::Idle);
    let (editing, set_editing) = signal(EditState::Viewing);

    // Load tasks on mount and whenever the trigger changes. On failure the
    // store keeps its last known contents.
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            store.loading().set(true);
            match commands::list_todos().await {
                Ok(remote) => {
                    store.todos().set(remote.into_iter().map(Todo::from).collect());
                }
                Err(_) => toasts.error("Failed to load todos"),
            }
            store.loading().set(false);
        });
    });

    // Escape cancels a pending delete confirmation
    window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            set_confirm.update(|c| c.cancel());
        }
    });

    // Derived projection of the store for display
    let page_view = Memo::new(move |_| {
        store
            .todos()
            .with(|todos| project(todos, &query.get(), sort.get(), page.get()))
    });

    view! {
        <div class="page">
            <div class="wrap">
                <header class="header-row">
                    <div class="title-wrap">
                        <h1 class="title">"Todo Studio"</h1>
                        <div class="subtitle">"Add, edit, and delete with confidence"</div>
                    </div>

                    <div class="controls">
                        <NewTodoForm />
                        <input
                            class="search-input"
                            aria-label="Search todos"
                            placeholder="Search tasks..."
                            prop:value=move || query.get()
                            on:input=move |ev| {
                                set_query.set(event_target_value(&ev));
                                set_page.set(1);
                            }
                        />
                        <select
                            class="sort-select"
                            prop:value=move || sort.get().as_str()
                            on:change=move |ev| {
                                set_sort.set(SortOrder::parse(&event_target_value(&ev)))
                            }
                        >
                            <option value="newest">"Newest"</option>
                            <option value="oldest">"Oldest"</option>
                        </select>
                    </div>
                </header>

                <div class="result-line">
                    {move || {
                        let v = page_view.get();
                        format!("Showing {} tasks \u{2022} Page {} / {}", v.filtered, v.page, v.pages)
                    }}
                </div>

                <TodoList
                    page_view=page_view
                    editing=editing
                    set_editing=set_editing
                    set_confirm=set_confirm
                />

                <Pager page_view=page_view set_page=set_page />
            </div>

            <ToastArea />
            <ConfirmDialog confirm=confirm set_confirm=set_confirm />
        </div>
    }
}
