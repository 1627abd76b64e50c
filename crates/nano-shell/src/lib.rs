//! # Nano Shell
//!
//! Host process of the Lisk Nano wallet. It owns the main window, feeds OS
//! activations into the deferred event router and keeps the app updated.
//!
//! ## Window Lifecycle
//!
//! ```text
//! Ready ──→ create window ──→ DidFinishLoad ──→ router.mark_ready(surface)
//!                                   ↑
//! WindowClosed ──→ router.detach()  │  (events queue meanwhile)
//!        │                          │
//!        └── Activate ──→ create window ──→ DidFinishLoad ──→ router.attach(surface)
//! ```
//!
//! ## Platform Rules
//!
//! | Behaviour | Windows | macOS | Linux |
//! |-----------|---------|-------|-------|
//! | Deep links arrive as | argv | `open-url` | argv (not forwarded) |
//! | Quit when last window closes | yes | no | yes |
//! | About panel | no | yes | no |
//!
//! ## Outbound Dependencies
//!
//! | Collaborator | Trait | Purpose |
//! |--------------|-------|---------|
//! | Native app | `HostApp` | Protocol registration, about panel, quit |
//! | Main window | `HostWindow` | Create, restore, focus, context menus |
//! | Update feed | `UpdateTransport` | Check, download, install |
//! | Restart prompt | `UpdateDialog` | Restart / Later |

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod adapters;
pub mod container;
pub mod domain;
pub mod ports;
pub mod runtime;
pub mod updater;

pub use container::{ConfigError, ShellConfig};
pub use domain::ShellError;
pub use runtime::{HostSignal, LoopControl, ShellRuntime};
pub use updater::Updater;
