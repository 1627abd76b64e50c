//! Saved account record and errors.

use serde::{Deserialize, Serialize};
use shared_types::{Address, NetworkError, PublicKey};
use thiserror::Error;

/// What gets persisted for a saved account. Never carries a passphrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAccount {
    /// Index into the known network list.
    pub network: usize,
    pub address: Address,
    pub public_key: PublicKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveAccountError {
    #[error(transparent)]
    Network(#[from] NetworkError),
}
