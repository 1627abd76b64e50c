//! Inbound (Driving) port for the event router.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{EventKind, RouterError};
use crate::ports::RenderSurface;
use crate::service::{Dispatch, FlushReport};

/// Operations the host process drives the router with.
pub trait EventRouterApi {
    /// Deliver now if a live surface is ready, otherwise queue.
    fn notify(&mut self, kind: EventKind, payload: Value) -> Dispatch;

    /// One-time readiness transition. Flushes the queue in FIFO order.
    ///
    /// Returns `None` when the router was already ready.
    fn mark_ready(&mut self, surface: Arc<dyn RenderSurface>) -> Option<FlushReport>;

    /// Re-attach a re-created surface after the first readiness signal.
    fn attach(&mut self, surface: Arc<dyn RenderSurface>) -> Result<FlushReport, RouterError>;

    /// The live surface went away (window closed).
    fn detach(&mut self);

    fn is_ready(&self) -> bool;

    /// Number of events waiting for a surface.
    fn pending(&self) -> usize;
}
