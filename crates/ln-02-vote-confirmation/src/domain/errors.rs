//! Error types for the vote confirmation workflow.

use thiserror::Error;

/// Vote workflow errors.
///
/// Validation variants never reach the network; `SubmissionFailed` is raised
/// only after the failure was already shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoteError {
    #[error("Nothing selected to vote or unvote")]
    EmptySelection,

    #[error("Second passphrase required by this account")]
    MissingSecondPassphrase,

    #[error("Account is locked: passphrase not available")]
    MissingPassphrase,

    #[error("Delegate {0} cannot be both voted and unvoted")]
    ConflictingSelection(String),

    #[error("A vote submission is already in flight")]
    SubmissionInFlight,

    #[error("Vote submission failed: {0}")]
    SubmissionFailed(String),
}

impl VoteError {
    /// Whether the error was caught before any network call.
    pub fn is_validation(&self) -> bool {
        !matches!(self, VoteError::SubmissionFailed(_))
    }
}
