//! Opportunity List View-Model
//!
//! Layered like the rest of the workspace:
//! - domain: opportunity records and fault types
//! - services: collaborator traits (data, mutations, navigation, toasts, timer)
//! - filter / decorate / state: pure list transitions
//! - manager: the view-model the UI binds to

pub mod actions;
pub mod columns;
pub mod config;
pub mod decorate;
pub mod domain;
pub mod filter;
pub mod manager;
pub mod services;
pub mod state;

#[cfg(test)]
mod testing;

pub use actions::{DispatchOutcome, RowAction};
pub use columns::{ButtonLabel, ColumnDef, ColumnField, ColumnKind};
pub use config::{ConfigError, ListConfig, CLOSED_WON};
pub use decorate::OpportunityRow;
pub use domain::{
    AccountRef, DispatchError, Entity, FetchFault, MutationFault, Opportunity, OpportunityId,
    RemoteErrorPayload,
};
pub use manager::{Collaborators, OpportunityManager};
pub use services::{
    DataProvider, MutationService, NavigationService, NotificationService, PageReference, Timer,
    Toast, ToastVariant,
};
pub use state::ListSnapshot;
