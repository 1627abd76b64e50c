//! # Vote Selection Set
//!
//! Two disjoint lists of delegates: the ones to vote for and the ones to
//! withdraw a vote from. Identity is the delegate username.

use serde::{Deserialize, Serialize};
use shared_types::DelegateRef;

use super::errors::VoteError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteSelection {
    to_vote: Vec<DelegateRef>,
    to_unvote: Vec<DelegateRef>,
}

impl VoteSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from two lists, rejecting a delegate present in both.
    pub fn from_lists(
        to_vote: Vec<DelegateRef>,
        to_unvote: Vec<DelegateRef>,
    ) -> Result<Self, VoteError> {
        if let Some(conflict) = to_vote
            .iter()
            .find(|d| to_unvote.iter().any(|u| u.username == d.username))
        {
            return Err(VoteError::ConflictingSelection(conflict.username.clone()));
        }
        Ok(Self { to_vote, to_unvote })
    }

    /// Select a delegate for voting, withdrawing any pending unvote for it.
    pub fn vote(&mut self, delegate: DelegateRef) {
        self.to_unvote.retain(|d| d.username != delegate.username);
        if !self.to_vote.iter().any(|d| d.username == delegate.username) {
            self.to_vote.push(delegate);
        }
    }

    /// Select a delegate for unvoting, withdrawing any pending vote for it.
    pub fn unvote(&mut self, delegate: DelegateRef) {
        self.to_vote.retain(|d| d.username != delegate.username);
        if !self.to_unvote.iter().any(|d| d.username == delegate.username) {
            self.to_unvote.push(delegate);
        }
    }

    pub fn to_vote(&self) -> &[DelegateRef] {
        &self.to_vote
    }

    pub fn to_unvote(&self) -> &[DelegateRef] {
        &self.to_unvote
    }

    pub fn is_empty(&self) -> bool {
        self.to_vote.is_empty() && self.to_unvote.is_empty()
    }

    pub fn len(&self) -> usize {
        self.to_vote.len() + self.to_unvote.len()
    }

    /// Empty both lists. Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        let had_entries = !self.is_empty();
        self.to_vote.clear();
        self.to_unvote.clear();
        had_entries
    }
}
