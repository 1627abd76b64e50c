//! Router error types.

use thiserror::Error;

/// Errors raised by a render surface when it refuses an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// The receiving side of the surface is gone (window destroyed).
    #[error("Render surface closed")]
    Closed,

    /// The surface rejected the event.
    #[error("Render surface rejected event: {0}")]
    Rejected(String),
}

/// Errors from router lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// `attach` was called before the first readiness signal.
    #[error("Render surface attached before the UI signalled readiness")]
    NotReady,
}
