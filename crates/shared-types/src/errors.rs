//! # Error Types
//!
//! Errors shared by more than one crate.

use thiserror::Error;

/// Errors resolving a network by name or index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// No known network carries this display name.
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
}
