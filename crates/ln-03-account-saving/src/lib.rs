//! # Account Saving
//!
//! Stores the active account so the next session can offer it on the login
//! form. A saved account points at its network by index into
//! [`shared_types::NETWORKS`].
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Only known networks are saved | `service.rs` - `save()` |
//! | INVARIANT-2 | The dialog closes only after the account was stored | `service.rs` - `save()` |

#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::InMemoryAccountStore;
pub use domain::{SaveAccountError, SavedAccount};
pub use ports::AccountStore;
pub use service::SaveAccountService;
