//! Opportunity Manager
//!
//! The view-model behind the opportunity list. Owns the list state and the
//! collaborators, and exposes the operations the UI binds to:
//! - `receive` / `load` / `refresh`: data deliveries
//! - `filter_input` / `apply_filters`: debounced account filter
//! - `handle_row_action`: view details or mark closed
//!
//! State lives behind `Rc<RefCell<_>>`. No borrow is held across an await.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::actions::{DispatchOutcome, RowAction};
use crate::columns::{columns, ColumnDef};
use crate::config::ListConfig;
use crate::domain::{DispatchError, FetchFault, Opportunity, OpportunityId};
use crate::filter::Debouncer;
use crate::services::{
    DataProvider, MutationService, NavigationService, NotificationService, PageReference, Timer,
    Toast, ToastVariant,
};
use crate::state::{ListSnapshot, ListState};

/// Object API name used in record page references
const OPPORTUNITY_OBJECT: &str = "Opportunity";

/// Injected collaborators
#[derive(Clone)]
pub struct Collaborators {
    pub provider: Rc<dyn DataProvider>,
    pub mutations: Rc<dyn MutationService>,
    pub navigation: Rc<dyn NavigationService>,
    pub notifications: Rc<dyn NotificationService>,
    pub timer: Rc<dyn Timer>,
}

type Listener = Box<dyn Fn(&ListSnapshot)>;

struct Inner {
    config: ListConfig,
    services: Collaborators,
    state: RefCell<ListState>,
    debounce: Debouncer,
    listeners: RefCell<Vec<Listener>>,
}

/// Cheap to clone; clones share the same state
#[derive(Clone)]
pub struct OpportunityManager {
    inner: Rc<Inner>,
}

impl OpportunityManager {
    pub fn new(config: ListConfig, services: Collaborators) -> Self {
        Self {
            inner: Rc::new(Inner {
                config,
                services,
                state: RefCell::new(ListState::new()),
                debounce: Debouncer::new(),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn config(&self) -> &ListConfig {
        &self.inner.config
    }

    pub fn columns(&self) -> Vec<ColumnDef> {
        columns(&self.inner.config)
    }

    /// Register a listener called with a fresh snapshot after every state change
    pub fn subscribe(&self, listener: impl Fn(&ListSnapshot) + 'static) {
        self.inner.listeners.borrow_mut().push(Box::new(listener));
    }

    pub fn snapshot(&self) -> ListSnapshot {
        self.inner.state.borrow().snapshot()
    }

    pub fn original(&self) -> Vec<Opportunity> {
        self.inner.state.borrow().original().to_vec()
    }

    pub fn is_in_flight(&self, id: &OpportunityId) -> bool {
        self.inner.state.borrow().is_in_flight(id)
    }

    /// Mutate the state, then notify listeners once the borrow is released
    fn update<R>(&self, f: impl FnOnce(&mut ListState, &ListConfig) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.inner.state.borrow_mut();
            let result = f(&mut *state, &self.inner.config);
            (result, state.snapshot())
        };
        for listener in self.inner.listeners.borrow().iter() {
            listener(&snapshot);
        }
        result
    }

    // ========================
    // Data subscription
    // ========================

    /// Apply a push from the data provider
    pub fn receive(&self, result: Result<Vec<Opportunity>, FetchFault>) {
        match &result {
            Ok(data) => log::debug!("[Wire] Received {} opportunities", data.len()),
            Err(fault) => log::error!("[Wire] Fetch failed: {}", fault),
        }
        self.update(|state, config| state.receive(result, config));
    }

    /// Initial pull
    pub async fn load(&self) -> Result<(), FetchFault> {
        self.refresh().await
    }

    /// Force a re-pull. A failure goes through the same fault path as a
    /// failed push and is also returned to the caller.
    pub async fn refresh(&self) -> Result<(), FetchFault> {
        let provider = Rc::clone(&self.inner.services.provider);
        let result = provider.fetch().await;
        let outcome = match &result {
            Ok(_) => Ok(()),
            Err(fault) => Err(fault.clone()),
        };
        self.receive(result);
        outcome
    }

    // ========================
    // Filter
    // ========================

    /// Store the raw filter text and schedule a debounced evaluation.
    ///
    /// The text is stored right away; the returned future sleeps for the
    /// debounce window and applies the filter only if no newer input arrived
    /// in the meantime. Resolves to whether it applied the filter.
    pub fn filter_input(&self, text: impl Into<String>) -> impl Future<Output = bool> + 'static {
        let text = text.into();
        let ticket = self.inner.debounce.arm();
        self.inner.state.borrow_mut().set_filter_text(text);

        let manager = self.clone();
        let timer = Rc::clone(&self.inner.services.timer);
        let window = self.inner.config.debounce();
        async move {
            timer.sleep(window).await;
            if !manager.inner.debounce.is_current(ticket) {
                log::debug!("[Filter] Superseded evaluation #{}", ticket);
                return false;
            }
            manager.apply_filters();
            true
        }
    }

    /// Re-derive the displayed rows from the original set and filter text
    pub fn apply_filters(&self) {
        let shown = self.update(|state, config| {
            state.apply_filter(config);
            state.displayed().len()
        });
        log::debug!("[Filter] Showing {} opportunities", shown);
    }

    // ========================
    // Row actions
    // ========================

    /// Dispatch a row action by its button name
    pub async fn handle_row_action(&self, action_name: &str, row: &Opportunity) -> DispatchOutcome {
        match RowAction::from_name(action_name) {
            Some(RowAction::ViewDetails) => {
                self.view_details(row);
                DispatchOutcome::Navigated
            }
            Some(RowAction::MarkClosed) => self.mark_closed(row).await,
            None => {
                log::debug!("[Dispatch] Ignoring unknown action '{}'", action_name);
                DispatchOutcome::Ignored
            }
        }
    }

    /// Open the record page of the row
    pub fn view_details(&self, row: &Opportunity) {
        self.inner
            .services
            .navigation
            .navigate(PageReference::view_record(row.id.as_str(), OPPORTUNITY_OBJECT));
    }

    /// Move the row to the terminal stage, then refresh the list.
    ///
    /// The row is marked in flight before the remote call starts and is
    /// released exactly once when the dispatch settles, whichever way it
    /// settles (including the future being dropped).
    pub async fn mark_closed(&self, row: &Opportunity) -> DispatchOutcome {
        let texts = &self.inner.config.notifications;

        if row.is_at_stage(&self.inner.config.closed_stage) {
            self.notify(Toast::new(&texts.info_title, &texts.already_closed, ToastVariant::Info));
            return DispatchOutcome::AlreadyClosed;
        }

        let Some(_guard) = DispatchGuard::begin(self, &row.id) else {
            log::warn!("[Dispatch] {} is already being closed", row.id);
            return DispatchOutcome::AlreadyInFlight;
        };
        log::info!("[Dispatch] Marking {} as closed", row.id);

        match self.close_and_refresh(&row.id).await {
            Ok(()) => {
                self.notify(Toast::new(&texts.success_title, &texts.closed, ToastVariant::Success));
                DispatchOutcome::Closed
            }
            Err(err) => {
                log::error!("[Dispatch] Closing {} failed: {}", row.id, err);
                let message = format!("{}{}", texts.error_prefix, err.message());
                self.notify(Toast::new(&texts.error_title, message, ToastVariant::Error));
                DispatchOutcome::Failed(err)
            }
        }
    }

    async fn close_and_refresh(&self, id: &OpportunityId) -> Result<(), DispatchError> {
        let mutations = Rc::clone(&self.inner.services.mutations);
        mutations.mark_closed(id).await?;
        self.refresh().await?;
        Ok(())
    }

    fn notify(&self, toast: Toast) {
        self.inner.services.notifications.show(toast);
    }
}

/// Keeps a row in the in-flight set for as long as it lives
struct DispatchGuard {
    manager: OpportunityManager,
    id: OpportunityId,
}

impl DispatchGuard {
    fn begin(manager: &OpportunityManager, id: &OpportunityId) -> Option<Self> {
        let started = manager.update(|state, config| state.begin_dispatch(id, config));
        started.then(|| Self {
            manager: manager.clone(),
            id: id.clone(),
        })
    }
}

impl Drop for DispatchGuard {
    fn drop(&mut self) {
        let id = &self.id;
        self.manager.update(|state, config| state.finish_dispatch(id, config));
    }
}
