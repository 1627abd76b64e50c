//! # Confirmation Request
//!
//! The payload handed to the delegate API: the selection plus the account
//! credentials needed to sign it.

use serde::Serialize;
use shared_types::{Account, Passphrase, PublicKey};

use super::errors::VoteError;
use super::selection::VoteSelection;

/// Guard shared by the confirm control and `ConfirmationRequest::build`.
///
/// Pure: depends only on its arguments.
pub fn validate(
    account: &Account,
    selection: &VoteSelection,
    second_passphrase: &Passphrase,
) -> Result<(), VoteError> {
    if selection.is_empty() {
        return Err(VoteError::EmptySelection);
    }
    if account.requires_second_passphrase() && second_passphrase.is_empty() {
        return Err(VoteError::MissingSecondPassphrase);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationRequest {
    pub public_key: PublicKey,
    pub passphrase: Passphrase,
    /// Present only for accounts with a second signature.
    pub second_passphrase: Option<Passphrase>,
    pub selection: VoteSelection,
}

impl ConfirmationRequest {
    pub fn build(
        account: &Account,
        selection: &VoteSelection,
        second_passphrase: &Passphrase,
    ) -> Result<Self, VoteError> {
        validate(account, selection, second_passphrase)?;
        let passphrase = account
            .passphrase
            .clone()
            .ok_or(VoteError::MissingPassphrase)?;

        Ok(Self {
            public_key: account.public_key.clone(),
            passphrase,
            second_passphrase: account
                .requires_second_passphrase()
                .then(|| second_passphrase.clone()),
            selection: selection.clone(),
        })
    }

    /// Votes in the network's notation: `+key` to vote, `-key` to unvote.
    pub fn delegates(&self) -> Vec<String> {
        let votes = self
            .selection
            .to_vote()
            .iter()
            .map(|d| format!("+{}", d.vote_key()));
        let unvotes = self
            .selection
            .to_unvote()
            .iter()
            .map(|d| format!("-{}", d.vote_key()));
        votes.chain(unvotes).collect()
    }
}
