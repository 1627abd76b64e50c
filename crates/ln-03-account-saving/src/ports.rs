//! Outbound (Driven) port for account saving.

use crate::domain::SavedAccount;

/// Persistent account storage plus the dialog that triggered the save.
pub trait AccountStore: Send + Sync {
    fn account_saved(&self, account: SavedAccount);

    fn close_dialog(&self);
}
