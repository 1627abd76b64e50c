//! Domain layer for the event router.

pub mod errors;
pub mod event;
pub mod queue;

pub use errors::{DeliveryError, RouterError};
pub use event::{DeferredEvent, EventKind};
pub use queue::EventQueue;
