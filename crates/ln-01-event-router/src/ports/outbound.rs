//! Outbound (Driven) ports for the event router.

use crate::domain::{DeferredEvent, DeliveryError};

/// The UI side of the host window.
///
/// Delivery is a one-way push: the router never waits for an answer and never
/// retries an event the surface refused.
pub trait RenderSurface: Send + Sync {
    /// Push one event to the UI.
    fn deliver(&self, event: &DeferredEvent) -> Result<(), DeliveryError>;
}
