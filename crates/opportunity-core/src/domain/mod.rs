//! Domain Layer
//!
//! Opportunity records as delivered by the data provider, and the faults
//! the provider and the mutation service can report.
//! This layer has NO dependencies on the view-model or the collaborators.

mod entity;
mod fault;
mod opportunity;

pub use entity::Entity;
pub use fault::{DispatchError, FetchFault, MutationFault, RemoteErrorBody, RemoteErrorPayload};
pub use opportunity::{AccountRef, Opportunity, OpportunityId};
