//! Ports layer for the event router.
//!
//! - Inbound (Driving) port: what the host shell calls
//! - Outbound (Driven) port: the render surface events are pushed to

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
