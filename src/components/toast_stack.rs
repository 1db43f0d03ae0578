//! Toast Stack
//!
//! Notifications raised by row actions. Entries expire on their own; the
//! close button dismisses early.

use leptos::prelude::*;

use crate::services::ToastEntry;

#[component]
pub fn ToastStack(
    toasts: ReadSignal<Vec<ToastEntry>>,
    set_toasts: WriteSignal<Vec<ToastEntry>>,
) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    let class = format!("toast toast-{}", entry.toast.variant.as_str());
                    view! {
                        <div class=class role="status">
                            <strong class="toast-title">{entry.toast.title}</strong>
                            <span class="toast-message">{entry.toast.message}</span>
                            <button
                                class="toast-close"
                                on:click=move |_| set_toasts.update(|t| t.retain(|e| e.id != id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
