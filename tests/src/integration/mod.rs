//! Integration flows across the shell, router and workflow crates.

pub mod deep_links;
pub mod wallet_flows;
