//! Toast Area Component
//!
//! Fixed stack of active notifications; a click dismisses one early.

use leptos::prelude::*;

use crate::toast::{use_toasts, ToastKind};

#[component]
pub fn ToastArea() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-area">
            <For
                each=move || toasts.active().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Error => "toast error",
                        ToastKind::Info => "toast info",
                    };
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id)>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
