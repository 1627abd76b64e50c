//! Adapters for the shell's outbound ports.

pub mod dialog;
pub mod headless;
pub mod http_update;

pub use dialog::DeferringDialog;
pub use headless::HeadlessHost;
pub use http_update::HttpUpdateTransport;
