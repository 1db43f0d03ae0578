//! Test doubles for the collaborator traits.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::config::{ListConfig, CLOSED_WON};
use crate::domain::{FetchFault, MutationFault, Opportunity, OpportunityId};
use crate::manager::{Collaborators, OpportunityManager};
use crate::services::{
    DataProvider, MutationService, NavigationService, NotificationService, PageReference, Timer,
    Toast,
};

/// Acme and Globex are open, Initech is already won
pub fn sample() -> Vec<Opportunity> {
    vec![
        Opportunity::new("1", "Acme Deal", "Prospecting").with_account("Acme"),
        Opportunity::new("2", "Globex Deal", "Prospecting").with_account("Globex"),
        Opportunity::new("3", "Initech Deal", CLOSED_WON).with_account("Initech"),
    ]
}

#[derive(Default)]
pub struct FakeProvider {
    data: RefCell<Vec<Opportunity>>,
    fail_next: RefCell<Option<FetchFault>>,
    fetches: Cell<usize>,
}

impl FakeProvider {
    pub fn fail_next(&self, fault: FetchFault) {
        *self.fail_next.borrow_mut() = Some(fault);
    }

    pub fn fetches(&self) -> usize {
        self.fetches.get()
    }

    fn set_stage(&self, id: &OpportunityId, stage: &str) {
        if let Some(opp) = self.data.borrow_mut().iter_mut().find(|o| &o.id == id) {
            opp.stage_name = stage.to_string();
        }
    }
}

#[async_trait(?Send)]
impl DataProvider for FakeProvider {
    async fn fetch(&self) -> Result<Vec<Opportunity>, FetchFault> {
        self.fetches.set(self.fetches.get() + 1);
        if let Some(fault) = self.fail_next.borrow_mut().take() {
            return Err(fault);
        }
        Ok(self.data.borrow().clone())
    }
}

/// Closes opportunities in the backing provider on success
pub struct FakeMutations {
    backing: Rc<FakeProvider>,
    failures: RefCell<VecDeque<MutationFault>>,
    gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
    calls: RefCell<Vec<OpportunityId>>,
}

impl FakeMutations {
    fn new(backing: Rc<FakeProvider>) -> Self {
        Self {
            backing,
            failures: RefCell::default(),
            gates: RefCell::default(),
            calls: RefCell::default(),
        }
    }

    pub fn fail_next(&self, fault: MutationFault) {
        self.failures.borrow_mut().push_back(fault);
    }

    /// Make the next call wait until the returned sender fires (or is dropped)
    pub fn hold_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<OpportunityId> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl MutationService for FakeMutations {
    async fn mark_closed(&self, id: &OpportunityId) -> Result<(), MutationFault> {
        self.calls.borrow_mut().push(id.clone());
        let gate = self.gates.borrow_mut().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        let failure = self.failures.borrow_mut().pop_front();
        if let Some(fault) = failure {
            return Err(fault);
        }
        self.backing.set_stage(id, CLOSED_WON);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNavigation {
    pub pages: RefCell<Vec<PageReference>>,
}

impl NavigationService for RecordingNavigation {
    fn navigate(&self, page: PageReference) {
        self.pages.borrow_mut().push(page);
    }
}

#[derive(Default)]
pub struct RecordingNotifications {
    pub toasts: RefCell<Vec<Toast>>,
}

impl NotificationService for RecordingNotifications {
    fn show(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }
}

pub struct TokioTimer;

#[async_trait(?Send)]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

pub struct Harness {
    pub manager: OpportunityManager,
    pub provider: Rc<FakeProvider>,
    pub mutations: Rc<FakeMutations>,
    pub navigation: Rc<RecordingNavigation>,
    pub notifications: Rc<RecordingNotifications>,
}

impl Harness {
    pub fn with_data(data: Vec<Opportunity>) -> Self {
        let provider = Rc::new(FakeProvider::default());
        *provider.data.borrow_mut() = data;
        let mutations = Rc::new(FakeMutations::new(Rc::clone(&provider)));
        let navigation = Rc::new(RecordingNavigation::default());
        let notifications = Rc::new(RecordingNotifications::default());
        let manager = OpportunityManager::new(
            ListConfig::default(),
            Collaborators {
                provider: provider.clone(),
                mutations: mutations.clone(),
                navigation: navigation.clone(),
                notifications: notifications.clone(),
                timer: Rc::new(TokioTimer),
            },
        );
        Self {
            manager,
            provider,
            mutations,
            navigation,
            notifications,
        }
    }

    /// Harness whose manager already holds `sample()`
    pub async fn loaded() -> Self {
        let harness = Self::with_data(sample());
        harness.manager.load().await.expect("initial load");
        harness
    }

    pub fn displayed_ids(&self) -> Vec<String> {
        self.manager
            .snapshot()
            .rows
            .iter()
            .map(|row| row.id().to_string())
            .collect()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.notifications.toasts.borrow().clone()
    }
}
