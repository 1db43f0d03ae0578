//! Row Actions
//!
//! Action names carried by the table's button columns and the outcome of
//! dispatching one.

use crate::domain::DispatchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    ViewDetails,
    MarkClosed,
}

impl RowAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowAction::ViewDetails => "view_details",
            RowAction::MarkClosed => "mark_closed",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "view_details" => Some(RowAction::ViewDetails),
            "mark_closed" => Some(RowAction::MarkClosed),
            _ => None,
        }
    }
}

/// What a row action ended up doing
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    Navigated,
    /// Row was already at the terminal stage; nothing was called
    AlreadyClosed,
    /// A dispatch for the same row is still pending
    AlreadyInFlight,
    Closed,
    Failed(DispatchError),
    /// Unknown action name
    Ignored,
}
