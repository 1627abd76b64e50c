//! Ports layer for the host shell.
//!
//! The shell drives the native host through these traits. Adapters for a
//! headless host and an HTTP update feed live in `adapters/`.

pub mod outbound;

pub use outbound::*;
