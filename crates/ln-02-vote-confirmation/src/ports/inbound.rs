//! Inbound (Driving) port for the vote confirmation workflow.

use async_trait::async_trait;
use shared_types::{Account, DelegateRef};

use crate::domain::{VoteError, WorkflowState};
use crate::service::Confirmation;

/// API driven by the confirm-votes dialog.
#[async_trait]
pub trait VoteConfirmationApi: Send + Sync {
    /// Submit the current selection.
    ///
    /// Resolves once the delegate API answered. On success the returned
    /// [`Confirmation`] holds the cooldown task that will clear the selection.
    async fn confirm(&self) -> Result<Confirmation, VoteError>;

    /// Close the dialog, discarding the selection if nothing was submitted.
    fn cancel(&self);

    /// Capture the second passphrase input, verbatim.
    fn set_second_passphrase(&self, value: &str);

    /// Replace the selection with fresh lists from the store.
    fn update_selection(
        &self,
        to_vote: Vec<DelegateRef>,
        to_unvote: Vec<DelegateRef>,
    ) -> Result<(), VoteError>;

    fn update_account(&self, account: Account);

    /// Whether the confirm control is enabled right now.
    fn is_confirm_enabled(&self) -> bool;

    fn state(&self) -> WorkflowState;
}
