//! Todo List Component
//!
//! The visible page of the task list, with loading and empty states.

use leptos::prelude::*;

use crate::components::TodoCard;
use crate::models::{DeleteConfirm, EditState};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view::PageView;

#[component]
pub fn TodoList(
    page_view: Memo<PageView>,
    editing: ReadSignal<EditState>,
    set_editing: WriteSignal<EditState>,
    set_confirm: WriteSignal<DeleteConfirm>,
) -> impl IntoView {
    let store = use_app_store();
    let loading = move || store.loading().get();

    view! {
        <div class="todo-list">
            <Show when=loading>
                {(0..4)
                    .map(|_| {
                        view! {
                            <div class="todo-card skeleton">
                                <div class="skeleton-box check"></div>
                                <div class="skeleton-lines">
                                    <div class="skeleton-box wide"></div>
                                    <div class="skeleton-box narrow"></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </Show>

            <Show when=move || !loading() && page_view.get().items.is_empty()>
                <div class="empty-state">
                    <div class="empty-title">"No tasks yet"</div>
                    <div>"Add your first task to get started."</div>
                </div>
            </Show>

            <Show when=move || !loading()>
                <For
                    each=move || page_view.get().items
                    // content is part of the key so an optimistic edit or
                    // toggle rebuilds the row
                    key=|todo| (todo.id.clone(), todo.description.clone(), todo.completed)
                    children=move |todo| {
                        view! {
                            <TodoCard
                                todo=todo
                                editing=editing
                                set_editing=set_editing
                                set_confirm=set_confirm
                            />
                        }
                    }
                />
            </Show>
        </div>
    }
}
