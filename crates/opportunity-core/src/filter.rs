//! Account Filter
//!
//! Case-insensitive substring match on the owning account's name, plus the
//! generation counter that lets a newer keystroke supersede a pending
//! evaluation.

use std::cell::Cell;

use crate::domain::Opportunity;

/// Normalize raw filter text into the needle used for matching
pub fn normalize_needle(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether the opportunity's account name contains `needle`.
///
/// `needle` must already be normalized. An empty needle matches everything;
/// a record without an account name never matches a non-empty needle.
pub fn matches_account(opportunity: &Opportunity, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    opportunity
        .account_name()
        .map(|name| name.to_lowercase().contains(needle))
        .unwrap_or(false)
}

/// Stable filter of `original` by raw filter text. `original` is left untouched.
pub fn filter_opportunities(original: &[Opportunity], raw: &str) -> Vec<Opportunity> {
    let needle = normalize_needle(raw);
    original
        .iter()
        .filter(|opportunity| matches_account(opportunity, &needle))
        .cloned()
        .collect()
}

/// Single-slot debounce.
///
/// Each `arm` hands out a ticket and invalidates all earlier ones, so at
/// most one pending evaluation can still fire.
#[derive(Debug, Default)]
pub struct Debouncer {
    generation: Cell<u64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.get() == ticket
    }
}
