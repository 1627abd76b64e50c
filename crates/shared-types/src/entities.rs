//! # Core Wallet Entities
//!
//! ## Clusters
//!
//! - **Credentials**: `Passphrase`, `Account`
//! - **Delegates**: `DelegateRef`

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Lisk address, e.g. `16313739661670634666L`.
pub type Address = String;

/// A hex-encoded Ed25519 public key.
pub type PublicKey = String;

// =============================================================================
// CLUSTER A: CREDENTIALS
// =============================================================================

/// A secret mnemonic passphrase.
///
/// The inner value is only reachable through [`Passphrase::expose`]; `Debug`
/// prints a fixed placeholder.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Passphrase(String);

impl Passphrase {
    /// Wrap a passphrase exactly as typed. No trimming or normalisation.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw secret.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Passphrase(<redacted>)")
    }
}

/// The active wallet account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Account {
    pub address: Address,
    pub public_key: PublicKey,
    /// Present only while the account is unlocked.
    pub passphrase: Option<Passphrase>,
    /// Whether the account registered a second signature. Transactions then
    /// need the second passphrase as well.
    pub second_signature: bool,
}

impl Account {
    pub fn new(address: impl Into<Address>, public_key: impl Into<PublicKey>) -> Self {
        Self {
            address: address.into(),
            public_key: public_key.into(),
            passphrase: None,
            second_signature: false,
        }
    }

    #[must_use]
    pub fn with_passphrase(mut self, passphrase: Passphrase) -> Self {
        self.passphrase = Some(passphrase);
        self
    }

    #[must_use]
    pub fn with_second_signature(mut self, enabled: bool) -> Self {
        self.second_signature = enabled;
        self
    }

    pub fn requires_second_passphrase(&self) -> bool {
        self.second_signature
    }
}

// =============================================================================
// CLUSTER B: DELEGATES
// =============================================================================

/// A delegate as it appears in a vote selection.
///
/// The username is the identity used for selection bookkeeping; the public key
/// is what ends up in the vote transaction when known.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DelegateRef {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<PublicKey>,
}

impl DelegateRef {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            public_key: None,
        }
    }

    #[must_use]
    pub fn with_public_key(mut self, public_key: impl Into<PublicKey>) -> Self {
        self.public_key = Some(public_key.into());
        self
    }

    /// Key used in vote notation. Falls back to the username.
    pub fn vote_key(&self) -> &str {
        self.public_key.as_deref().unwrap_or(&self.username)
    }
}
