//! Ports layer for the vote confirmation workflow.
//!
//! - Inbound (Driving) port: what the confirm dialog calls
//! - Outbound (Driven) ports: the delegate API and the wallet state store

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
