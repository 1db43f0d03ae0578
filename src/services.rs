//! Collaborator Implementations
//!
//! Binds the view-model's collaborator traits to Tauri IPC, the browser
//! location, a toast signal and gloo timers.

use std::cell::Cell;
use std::time::Duration;

use async_trait::async_trait;
use leptos::prelude::*;
use leptos::task::spawn_local;

use opportunity_core::{
    DataProvider, FetchFault, MutationFault, MutationService, NavigationService,
    NotificationService, Opportunity, OpportunityId, PageReference, Timer, Toast,
};

use crate::commands;

/// How long a toast stays on screen
const TOAST_LIFETIME: Duration = Duration::from_secs(4);

pub struct TauriDataProvider;

#[async_trait(?Send)]
impl DataProvider for TauriDataProvider {
    async fn fetch(&self) -> Result<Vec<Opportunity>, FetchFault> {
        commands::get_opportunities().await
    }
}

pub struct TauriMutationService;

#[async_trait(?Send)]
impl MutationService for TauriMutationService {
    async fn mark_closed(&self, id: &OpportunityId) -> Result<(), MutationFault> {
        commands::mark_opportunity_closed(id).await
    }
}

/// Navigates by rewriting the location hash, e.g. `#/r/Opportunity/006A/view`
pub struct HashNavigation;

impl NavigationService for HashNavigation {
    fn navigate(&self, page: PageReference) {
        let kind = page.kind();
        let PageReference::RecordPage {
            record_id,
            object_api_name,
            action_name,
        } = page;
        let hash = format!("/r/{}/{}/{}", object_api_name, record_id, action_name);
        log::info!("[Nav] {} -> #{}", kind, hash);

        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_hash(&hash) {
            log::error!("[Nav] Failed to set location hash: {:?}", e);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub id: u32,
    pub toast: Toast,
}

/// Pushes toasts into a signal rendered by `ToastStack`
pub struct SignalToasts {
    set_toasts: WriteSignal<Vec<ToastEntry>>,
    next_id: Cell<u32>,
}

impl SignalToasts {
    pub fn new(set_toasts: WriteSignal<Vec<ToastEntry>>) -> Self {
        Self {
            set_toasts,
            next_id: Cell::new(0),
        }
    }
}

impl NotificationService for SignalToasts {
    fn show(&self, toast: Toast) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.set_toasts.update(|toasts| toasts.push(ToastEntry { id, toast }));

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            gloo_timers::future::sleep(TOAST_LIFETIME).await;
            set_toasts.update(|toasts| toasts.retain(|entry| entry.id != id));
        });
    }
}

pub struct GlooTimer;

#[async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
