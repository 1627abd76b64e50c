//! Outbound (Driven) ports for the vote confirmation workflow.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{ConfirmationRequest, VoteSelection};

/// Response of the delegate API to a vote transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteReceipt {
    pub success: bool,
}

/// Blockchain RPC client, delegate side.
///
/// The workflow treats `Err` and `success == false` alike: both are failures.
#[async_trait]
pub trait DelegateApi: Send + Sync {
    /// Broadcast a vote transaction for the request's selection.
    async fn vote(&self, request: &ConfirmationRequest) -> Result<VoteReceipt, String>;
}

/// Wallet state store and notification surface.
///
/// Calls are fire-and-forget; the workflow never waits on them.
pub trait VoteStateStore: Send + Sync {
    /// Mark the submitted selection as in flight.
    fn pending_votes_added(&self, selection: &VoteSelection);

    fn show_success_alert(&self);

    /// Tell the user the submission failed. Wording is up to the store.
    fn show_failure_alert(&self, reason: &str);

    /// Empty the vote and unvote lists held by the store.
    fn clear_vote_lists(&self);

    fn close_dialog(&self);
}
