//! Collaborator Traits
//!
//! Defines the abstract interfaces the view-model talks to.
//! Implementations can use Tauri IPC, in-memory fakes, etc.
//!
//! All futures are `?Send`: the list runs on a single-threaded event loop.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{FetchFault, MutationFault, Opportunity, OpportunityId};

/// Source of the full, unfiltered opportunity list
#[async_trait(?Send)]
pub trait DataProvider {
    /// Pull the current list. Called on load and after every mutation.
    async fn fetch(&self) -> Result<Vec<Opportunity>, FetchFault>;
}

/// Remote state transitions on a single opportunity
#[async_trait(?Send)]
pub trait MutationService {
    /// Move the opportunity to the terminal stage
    async fn mark_closed(&self, id: &OpportunityId) -> Result<(), MutationFault>;
}

/// Page the navigation service should open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageReference {
    RecordPage {
        record_id: String,
        object_api_name: String,
        action_name: String,
    },
}

impl PageReference {
    /// Detail page of a record
    pub fn view_record(record_id: impl Into<String>, object_api_name: impl Into<String>) -> Self {
        PageReference::RecordPage {
            record_id: record_id.into(),
            object_api_name: object_api_name.into(),
            action_name: "view".to_string(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PageReference::RecordPage { .. } => "standard__recordPage",
        }
    }
}

pub trait NavigationService {
    /// Fire-and-forget
    fn navigate(&self, page: PageReference);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastVariant {
    Info,
    Success,
    Error,
}

impl ToastVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastVariant::Info => "info",
            ToastVariant::Success => "success",
            ToastVariant::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            variant,
        }
    }
}

pub trait NotificationService {
    /// Fire-and-forget
    fn show(&self, toast: Toast);
}

/// Clock used by the filter debounce
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}
