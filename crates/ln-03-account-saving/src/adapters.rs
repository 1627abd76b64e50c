//! In-memory account store for headless runs and tests.

use parking_lot::RwLock;

use crate::domain::SavedAccount;
use crate::ports::AccountStore;

#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<Vec<SavedAccount>>,
    close_calls: RwLock<usize>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accounts(&self) -> Vec<SavedAccount> {
        self.accounts.read().clone()
    }

    /// Most recently saved account.
    pub fn last(&self) -> Option<SavedAccount> {
        self.accounts.read().last().cloned()
    }

    pub fn close_calls(&self) -> usize {
        *self.close_calls.read()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn account_saved(&self, account: SavedAccount) {
        self.accounts.write().push(account);
    }

    fn close_dialog(&self) {
        *self.close_calls.write() += 1;
    }
}
