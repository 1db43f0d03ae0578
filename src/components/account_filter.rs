//! Account Filter Input
//!
//! Every keystroke goes to the view-model, which debounces it.

use leptos::prelude::*;

use crate::context::use_board;

#[component]
pub fn AccountFilter() -> impl IntoView {
    let board = use_board();

    view! {
        <div class="account-filter">
            <input
                type="search"
                placeholder="Filter by account name..."
                autocomplete="off"
                on:input=move |ev| board.filter_input(event_target_value(&ev))
            />
        </div>
    }
}
