//! # Deferred Event Router
//!
//! Buffers host activation events (deep-link URLs, second-instance argument
//! vectors, focus changes) until the render surface has finished loading, then
//! flushes them to it in order.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Delivery order equals enqueue order | `domain/queue.rs` - `VecDeque` push back / drain front |
//! | INVARIANT-2 | Each event is consumed exactly once | `service.rs` - queue is moved out of the state before flushing |
//! | INVARIANT-3 | Readiness only moves false → true | `service.rs` - no transition back to `NotReady` exists |
//! | INVARIANT-4 | `mark_ready` is idempotent | `service.rs` - `mark_ready()` ignores every state but `NotReady` |
//!
//! ## Readiness Lifecycle
//!
//! ```text
//! [NotReady(queue)] ──mark_ready──→ [Ready(surface)] ──detach──→ [Detached(backlog)]
//!                                          ↑                           │
//!                                          └─────────attach────────────┘
//! ```
//!
//! The readiness transition happens once per process. A window that is closed
//! and re-created later re-attaches without re-running it, and anything
//! notified while no window was live is flushed on attach.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! adapters/  - ChannelSurface (tokio mpsc), RecordingSurface (in-memory)
//! ports/     - EventRouterApi (inbound), RenderSurface (outbound)
//! domain/    - DeferredEvent, EventKind, EventQueue, errors
//! service.rs - EventRouter
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{ChannelSurface, RecordingSurface, SurfaceReceiver};
pub use domain::{DeferredEvent, DeliveryError, EventKind, EventQueue, RouterError};
pub use ports::{EventRouterApi, RenderSurface};
pub use service::{Dispatch, EventRouter, FlushReport, ReadinessState};
