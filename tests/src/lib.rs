//! # Lisk Nano Test Suite
//!
//! Cross-crate flows that no single crate can test on its own.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── deep_links.rs   # OS activation → shell → router → UI
//!     └── wallet_flows.rs # vote confirmation, account saving, metrics
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ln-tests
//! cargo test -p ln-tests integration::deep_links
//! ```

pub mod integration;
