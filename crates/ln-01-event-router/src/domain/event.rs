//! # Deferred Events
//!
//! An event is built once when the host signal arrives and is never mutated
//! afterwards; all fields are private and exposed through accessors.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Symbolic name of an event pushed to the render surface.
///
/// The wire names match the channel names the UI listens on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    /// A deep-link URL or a launch argument vector.
    OpenUrl,
    /// The host window lost focus.
    Blur,
    /// The host window gained focus.
    Focus,
    /// A proxy asked for credentials.
    ProxyLogin,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::OpenUrl => "openUrl",
            EventKind::Blur => "blur",
            EventKind::Focus => "focus",
            EventKind::ProxyLogin => "proxyLogin",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An activation event waiting for, or being pushed to, the render surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeferredEvent {
    id: Uuid,
    kind: EventKind,
    payload: Value,
    received_at_ms: u64,
}

impl DeferredEvent {
    pub fn new(kind: EventKind, payload: impl Into<Value>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            payload: payload.into(),
            received_at_ms: now_ms(),
        }
    }

    /// Correlation id for logs; not part of what the UI interprets.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// The opaque value associated with the event.
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Unix milliseconds at which the host signal arrived.
    pub fn received_at_ms(&self) -> u64 {
        self.received_at_ms
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
