//! Row Decoration
//!
//! Derives the mark-closed button state of each displayed row from the
//! in-flight set and the row's stage.

use std::collections::HashSet;

use crate::config::ActionLabels;
use crate::domain::{Entity, Opportunity, OpportunityId};

/// An opportunity as rendered, with its derived button state
#[derive(Debug, Clone, PartialEq)]
pub struct OpportunityRow {
    pub opportunity: Opportunity,
    pub action_label: String,
    pub action_disabled: bool,
}

impl OpportunityRow {
    /// Row with no derived state yet; `decorate_rows` fills it in
    pub fn undecorated(opportunity: Opportunity) -> Self {
        Self {
            opportunity,
            action_label: String::new(),
            action_disabled: false,
        }
    }

    pub fn id(&self) -> &OpportunityId {
        self.opportunity.id()
    }
}

/// Recompute `action_label` and `action_disabled` for every row.
/// All other fields are carried over unchanged.
pub fn decorate_rows(
    rows: Vec<OpportunityRow>,
    in_flight: &HashSet<OpportunityId>,
    labels: &ActionLabels,
    closed_stage: &str,
) -> Vec<OpportunityRow> {
    rows.into_iter()
        .map(|mut row| {
            let is_loading = in_flight.contains(row.id());
            let already_closed = row.opportunity.is_at_stage(closed_stage);
            row.action_label = if is_loading {
                labels.loading.clone()
            } else {
                labels.mark_closed.clone()
            };
            row.action_disabled = is_loading || already_closed;
            row
        })
        .collect()
}
