//! # Shared Types Crate
//!
//! Wallet entities used by more than one crate in the workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: accounts, delegates and networks are defined
//!   once here and never redefined by a consumer crate.
//! - **Secrets stay redacted**: passphrases never appear in `Debug` output, so
//!   structured logs can carry whole entities safely.

pub mod entities;
pub mod errors;
pub mod networks;

pub use entities::*;
pub use errors::*;
pub use networks::{Network, NETWORKS};
