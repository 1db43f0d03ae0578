//! List State
//!
//! The explicit state object behind the view-model. Every transition that
//! changes the displayed rows or the in-flight set ends with a decoration
//! pass, so no stale button state survives.

use std::collections::HashSet;

use crate::config::ListConfig;
use crate::decorate::{decorate_rows, OpportunityRow};
use crate::domain::{FetchFault, Opportunity, OpportunityId};
use crate::filter::filter_opportunities;

#[derive(Debug, Default)]
pub struct ListState {
    /// Last successful delivery, never filtered
    original: Vec<Opportunity>,
    /// Filtered and decorated rows currently rendered
    displayed: Vec<OpportunityRow>,
    filter_text: String,
    in_flight: HashSet<OpportunityId>,
    fault: Option<FetchFault>,
}

/// Copy of the renderable state handed to change listeners
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListSnapshot {
    pub rows: Vec<OpportunityRow>,
    pub filter_text: String,
    pub fault: Option<FetchFault>,
    /// Sorted for stable rendering
    pub in_flight: Vec<OpportunityId>,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn original(&self) -> &[Opportunity] {
        &self.original
    }

    pub fn displayed(&self) -> &[OpportunityRow] {
        &self.displayed
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn fault(&self) -> Option<&FetchFault> {
        self.fault.as_ref()
    }

    pub fn is_in_flight(&self, id: &OpportunityId) -> bool {
        self.in_flight.contains(id)
    }

    /// Apply a delivery from the data provider.
    ///
    /// Data replaces the original set wholesale and is shown through the
    /// current filter. A fault clears both sets.
    pub fn receive(&mut self, result: Result<Vec<Opportunity>, FetchFault>, config: &ListConfig) {
        match result {
            Ok(data) => {
                self.original = data;
                self.fault = None;
                self.apply_filter(config);
            }
            Err(fault) => {
                self.original.clear();
                self.displayed.clear();
                self.fault = Some(fault);
            }
        }
    }

    pub fn set_filter_text(&mut self, text: String) {
        self.filter_text = text;
    }

    /// Rebuild the displayed rows from the original set and the filter text
    pub fn apply_filter(&mut self, config: &ListConfig) {
        self.displayed = filter_opportunities(&self.original, &self.filter_text)
            .into_iter()
            .map(OpportunityRow::undecorated)
            .collect();
        self.decorate(config);
    }

    pub fn decorate(&mut self, config: &ListConfig) {
        let rows = std::mem::take(&mut self.displayed);
        self.displayed = decorate_rows(rows, &self.in_flight, &config.labels, &config.closed_stage);
    }

    /// Mark a row as dispatching. Returns `false` if it already was.
    pub fn begin_dispatch(&mut self, id: &OpportunityId, config: &ListConfig) -> bool {
        let inserted = self.in_flight.insert(id.clone());
        self.decorate(config);
        inserted
    }

    pub fn finish_dispatch(&mut self, id: &OpportunityId, config: &ListConfig) {
        self.in_flight.remove(id);
        self.decorate(config);
    }

    pub fn snapshot(&self) -> ListSnapshot {
        let mut in_flight: Vec<_> = self.in_flight.iter().cloned().collect();
        in_flight.sort();
        ListSnapshot {
            rows: self.displayed.clone(),
            filter_text: self.filter_text.clone(),
            fault: self.fault.clone(),
            in_flight,
        }
    }
}
