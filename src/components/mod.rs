//! UI Components
//!
//! Leptos components of the opportunity board.

mod account_filter;
mod opportunity_table;
mod toast_stack;

pub use account_filter::AccountFilter;
pub use opportunity_table::OpportunityTable;
pub use toast_stack::ToastStack;
