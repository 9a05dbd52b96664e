//! Pager Component
//!
//! Prev/Next page controls plus a manual refresh.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::view::PageView;

#[component]
pub fn Pager(page_view: Memo<PageView>, set_page: WriteSignal<usize>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let at_first = move || page_view.get().page <= 1;
    let at_last = move || {
        let v = page_view.get();
        v.page >= v.pages
    };

    let go_prev = move |_| {
        let v = page_view.get_untracked();
        set_page.set(v.page.saturating_sub(1).max(1));
    };
    let go_next = move |_| {
        let v = page_view.get_untracked();
        set_page.set((v.page + 1).min(v.pages));
    };

    view! {
        <div class="pager">
            <div class="pager-controls">
                <button class="pager-btn" disabled=at_first on:click=go_prev>
                    "Prev"
                </button>
                <div class="pager-info">
                    {move || {
                        let v = page_view.get();
                        format!("Page {} of {}", v.page, v.pages)
                    }}
                </div>
                <button class="pager-btn" disabled=at_last on:click=go_next>
                    "Next"
                </button>
            </div>
            <button class="pager-btn" on:click=move |_| ctx.reload()>
                "Refresh"
            </button>
        </div>
    }
}
