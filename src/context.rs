//! Board Context
//!
//! The view-model and its latest snapshot, provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use opportunity_core::{ListSnapshot, Opportunity, OpportunityManager, RowAction};

#[derive(Clone, Copy)]
pub struct BoardContext {
    /// The view-model is `Rc`-based, so it lives in local storage
    manager: StoredValue<OpportunityManager, LocalStorage>,
    /// Latest state published by the view-model
    pub snapshot: ReadSignal<ListSnapshot>,
}

impl BoardContext {
    pub fn new(manager: OpportunityManager, snapshot: ReadSignal<ListSnapshot>) -> Self {
        Self {
            manager: StoredValue::new_local(manager),
            snapshot,
        }
    }

    pub fn manager(&self) -> OpportunityManager {
        self.manager.get_value()
    }

    /// Run a row action in the background
    pub fn dispatch(&self, action: RowAction, row: Opportunity) {
        let manager = self.manager();
        spawn_local(async move {
            let outcome = manager.handle_row_action(action.as_str(), &row).await;
            log::debug!("[Board] {} on {} -> {:?}", action.as_str(), row.id, outcome);
        });
    }

    /// Feed a keystroke to the debounced filter
    pub fn filter_input(&self, text: String) {
        let pending = self.manager().filter_input(text);
        spawn_local(async move {
            pending.await;
        });
    }
}

pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}
