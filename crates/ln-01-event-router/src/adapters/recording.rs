//! In-memory render surface that records what it receives.

use parking_lot::Mutex;

use crate::domain::{DeferredEvent, DeliveryError};
use crate::ports::RenderSurface;

/// Records delivered events in order. Useful for headless runs and tests.
pub struct RecordingSurface {
    events: Mutex<Vec<DeferredEvent>>,
    attempts: Mutex<usize>,
    refuse: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            attempts: Mutex::new(0),
            refuse: false,
        }
    }

    /// A surface that refuses every event.
    pub fn failing() -> Self {
        Self {
            refuse: true,
            ..Self::new()
        }
    }

    pub fn events(&self) -> Vec<DeferredEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Deliveries attempted, accepted or not.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock()
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for RecordingSurface {
    fn deliver(&self, event: &DeferredEvent) -> Result<(), DeliveryError> {
        *self.attempts.lock() += 1;
        if self.refuse {
            return Err(DeliveryError::Rejected("surface refuses events".to_string()));
        }
        self.events.lock().push(event.clone());
        Ok(())
    }
}
