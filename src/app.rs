//! Opportunity Board App
//!
//! Wires the view-model to its collaborators and lays out the page.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use opportunity_core::{Collaborators, ListConfig, ListSnapshot, OpportunityManager};

use crate::components::{AccountFilter, OpportunityTable, ToastStack};
use crate::context::BoardContext;
use crate::services::{
    GlooTimer, HashNavigation, SignalToasts, TauriDataProvider, TauriMutationService, ToastEntry,
};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (snapshot, set_snapshot) = signal(ListSnapshot::default());
    let (toasts, set_toasts) = signal(Vec::<ToastEntry>::new());

    let manager = OpportunityManager::new(
        ListConfig::default(),
        Collaborators {
            provider: Rc::new(TauriDataProvider),
            mutations: Rc::new(TauriMutationService),
            navigation: Rc::new(HashNavigation),
            notifications: Rc::new(SignalToasts::new(set_toasts)),
            timer: Rc::new(GlooTimer),
        },
    );
    manager.subscribe(move |latest| set_snapshot.set(latest.clone()));

    provide_context(BoardContext::new(manager.clone(), snapshot));

    // Initial load; a failure is already shown inline through the snapshot
    spawn_local(async move {
        if let Err(e) = manager.load().await {
            log::warn!("[APP] Initial load failed: {}", e);
        }
    });

    view! {
        <main class="opportunity-board">
            <h1>"Opportunities"</h1>
            <AccountFilter />
            <OpportunityTable />
            <p class="row-count">{move || format!("{} opportunities", snapshot.with(|s| s.rows.len()))}</p>
            <ToastStack toasts=toasts set_toasts=set_toasts />
        </main>
    }
}
