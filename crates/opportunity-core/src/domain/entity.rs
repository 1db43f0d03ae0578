//! Domain Layer - Core Entity Trait
//!
//! Everything the list tracks per row (in-flight ids, navigation targets)
//! is keyed by the entity's identifier.

use std::hash::Hash;

/// Core trait for records shown in the list
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}
