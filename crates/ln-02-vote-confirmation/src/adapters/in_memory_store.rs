//! In-memory wallet state store.
//!
//! Stands in for the application store in headless runs and tests: it keeps
//! the pending votes and records every notification it was asked to show.

use parking_lot::RwLock;

use crate::domain::VoteSelection;
use crate::ports::VoteStateStore;

/// Notification the store was asked to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    Success,
    Failure(String),
}

#[derive(Debug, Default)]
struct StoreState {
    pending: Vec<VoteSelection>,
    alerts: Vec<Alert>,
    pending_added_calls: usize,
    clear_calls: usize,
    close_calls: usize,
}

/// In-memory `VoteStateStore`.
#[derive(Debug, Default)]
pub struct InMemoryVoteStore {
    state: RwLock<StoreState>,
}

impl InMemoryVoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selections currently marked as in flight.
    pub fn pending_votes(&self) -> Vec<VoteSelection> {
        self.state.read().pending.clone()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.state.read().alerts.clone()
    }

    pub fn pending_added_calls(&self) -> usize {
        self.state.read().pending_added_calls
    }

    pub fn success_alerts(&self) -> usize {
        self.state
            .read()
            .alerts
            .iter()
            .filter(|a| matches!(a, Alert::Success))
            .count()
    }

    pub fn failure_alerts(&self) -> usize {
        self.state
            .read()
            .alerts
            .iter()
            .filter(|a| matches!(a, Alert::Failure(_)))
            .count()
    }

    pub fn clear_calls(&self) -> usize {
        self.state.read().clear_calls
    }

    pub fn close_calls(&self) -> usize {
        self.state.read().close_calls
    }
}

impl VoteStateStore for InMemoryVoteStore {
    fn pending_votes_added(&self, selection: &VoteSelection) {
        let mut state = self.state.write();
        state.pending_added_calls += 1;
        state.pending.push(selection.clone());
    }

    fn show_success_alert(&self) {
        self.state.write().alerts.push(Alert::Success);
    }

    fn show_failure_alert(&self, reason: &str) {
        self.state
            .write()
            .alerts
            .push(Alert::Failure(reason.to_string()));
    }

    fn clear_vote_lists(&self) {
        self.state.write().clear_calls += 1;
    }

    fn close_dialog(&self) {
        self.state.write().close_calls += 1;
    }
}
