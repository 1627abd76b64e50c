//! # Vote Confirmation Workflow
//!
//! Submits a batch of delegate votes and unvotes for the active account,
//! reflects it optimistically in the wallet state, and clears the selection
//! a fixed time after the network accepted it.
//!
//! ## Workflow States
//!
//! ```text
//!            confirm()                 success                 schedule timer
//! [Idle] ──────────────→ [Submitting] ─────────→ [Confirmed] ─────────────────→ [CoolingDown]
//!   ↑  ↑                      │                                                      │
//!   │  └──── failure ─────────┘                                                      │
//!   └─────────────────────────────── timer fired (selection cleared) ────────────────┘
//!
//! [Invalid] = Idle while the selection is empty or a required second
//!             passphrase is missing; confirm() is refused without a network call.
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | A delegate is in at most one of `to_vote` / `to_unvote` | `domain/selection.rs` |
//! | INVARIANT-2 | No dispatch with an empty selection | `domain/request.rs` - `validate()` |
//! | INVARIANT-3 | No dispatch without a required second passphrase | `domain/request.rs` - `validate()` |
//! | INVARIANT-4 | Success side effects fire once, on resolution | `service/mod.rs` - `on_confirmed()` |
//! | INVARIANT-5 | Failure leaves the selection untouched | `service/mod.rs` - `on_failed()` |
//! | INVARIANT-6 | Clearing is idempotent | `service/mod.rs` - `clear_after_cooldown()` |
//!
//! ## Outbound Dependencies
//!
//! | Collaborator | Trait | Purpose |
//! |--------------|-------|---------|
//! | Delegate API | `DelegateApi` | Broadcast the vote transaction |
//! | Wallet state store | `VoteStateStore` | Pending votes, alerts, list clearing, dialog |

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::InMemoryVoteStore;
pub use domain::{
    ConfirmationRequest, VoteConfirmationConfig, VoteError, VoteSelection, WorkflowState,
};
pub use ports::{DelegateApi, VoteConfirmationApi, VoteReceipt, VoteStateStore};
pub use service::{Confirmation, VoteConfirmationDependencies, VoteConfirmationService};
