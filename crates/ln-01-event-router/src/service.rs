//! Event Router Service
//!
//! Owns the readiness state and the pending queue. It is meant to have a
//! single owner (the host shell's signal loop), so every mutating operation
//! takes `&mut self` and no locking is involved.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::{DeferredEvent, EventKind, EventQueue, RouterError};
use crate::ports::{EventRouterApi, RenderSurface};

/// Readiness of the render surface, with the data each state needs.
enum Readiness {
    /// The UI has not finished its first load yet.
    NotReady(EventQueue),
    /// A loaded surface is attached.
    Ready(Arc<dyn RenderSurface>),
    /// The UI was ready once but its surface is gone.
    Detached(EventQueue),
}

/// Snapshot of the router state, for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessState {
    NotReady,
    Ready,
    Detached,
}

/// What happened to a notified event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Pushed to the live surface.
    Delivered,
    /// Held until a surface is ready.
    Queued,
    /// The live surface refused it. Not retried.
    Failed,
}

/// Outcome of flushing a queue to a surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushReport {
    pub delivered: usize,
    pub failed: usize,
}

/// The deferred event router.
pub struct EventRouter {
    readiness: Readiness,
}

impl EventRouter {
    pub fn new() -> Self {
        Self {
            readiness: Readiness::NotReady(EventQueue::new()),
        }
    }

    pub fn state(&self) -> ReadinessState {
        match self.readiness {
            Readiness::NotReady(_) => ReadinessState::NotReady,
            Readiness::Ready(_) => ReadinessState::Ready,
            Readiness::Detached(_) => ReadinessState::Detached,
        }
    }

    fn flush(queue: EventQueue, surface: &dyn RenderSurface) -> FlushReport {
        let mut report = FlushReport::default();
        for event in queue {
            if deliver(surface, &event) {
                report.delivered += 1;
            } else {
                report.failed += 1;
            }
        }
        report
    }
}

impl Default for EventRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRouter")
            .field("state", &self.state())
            .field("pending", &self.pending())
            .finish()
    }
}

fn deliver(surface: &dyn RenderSurface, event: &DeferredEvent) -> bool {
    match surface.deliver(event) {
        Ok(()) => {
            debug!(event_id = %event.id(), kind = %event.kind(), "Event delivered");
            true
        }
        Err(e) => {
            warn!(
                event_id = %event.id(),
                kind = %event.kind(),
                error = %e,
                "Event delivery failed, dropping"
            );
            false
        }
    }
}

impl EventRouterApi for EventRouter {
    fn notify(&mut self, kind: EventKind, payload: Value) -> Dispatch {
        let event = DeferredEvent::new(kind, payload);
        match &mut self.readiness {
            Readiness::Ready(surface) => {
                if deliver(surface.as_ref(), &event) {
                    Dispatch::Delivered
                } else {
                    Dispatch::Failed
                }
            }
            Readiness::NotReady(queue) | Readiness::Detached(queue) => {
                debug!(
                    event_id = %event.id(),
                    kind = %event.kind(),
                    queued = queue.len() + 1,
                    "No live surface, event queued"
                );
                queue.push(event);
                Dispatch::Queued
            }
        }
    }

    fn mark_ready(&mut self, surface: Arc<dyn RenderSurface>) -> Option<FlushReport> {
        if !matches!(self.readiness, Readiness::NotReady(_)) {
            debug!("Readiness already signalled, ignoring");
            return None;
        }

        let previous = std::mem::replace(&mut self.readiness, Readiness::Ready(surface.clone()));
        let Readiness::NotReady(queue) = previous else {
            return None;
        };

        let queued = queue.len();
        let report = Self::flush(queue, surface.as_ref());
        info!(
            queued,
            delivered = report.delivered,
            failed = report.failed,
            "UI ready, deferred events flushed"
        );
        Some(report)
    }

    fn attach(&mut self, surface: Arc<dyn RenderSurface>) -> Result<FlushReport, RouterError> {
        match &self.readiness {
            Readiness::NotReady(_) => Err(RouterError::NotReady),
            Readiness::Ready(_) => {
                self.readiness = Readiness::Ready(surface);
                debug!("Render surface replaced");
                Ok(FlushReport::default())
            }
            Readiness::Detached(_) => {
                let previous =
                    std::mem::replace(&mut self.readiness, Readiness::Ready(surface.clone()));
                let backlog = match previous {
                    Readiness::Detached(queue) => queue,
                    _ => EventQueue::new(),
                };
                let report = Self::flush(backlog, surface.as_ref());
                info!(
                    delivered = report.delivered,
                    failed = report.failed,
                    "Render surface re-attached"
                );
                Ok(report)
            }
        }
    }

    fn detach(&mut self) {
        if matches!(self.readiness, Readiness::Ready(_)) {
            self.readiness = Readiness::Detached(EventQueue::new());
            debug!("Render surface detached");
        }
    }

    fn is_ready(&self) -> bool {
        !matches!(self.readiness, Readiness::NotReady(_))
    }

    fn pending(&self) -> usize {
        match &self.readiness {
            Readiness::NotReady(queue) | Readiness::Detached(queue) => queue.len(),
            Readiness::Ready(_) => 0,
        }
    }
}
