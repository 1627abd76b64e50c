//! Domain layer for the host shell.

pub mod about;
pub mod activation;
pub mod errors;
pub mod geometry;
pub mod menu;
pub mod platform;
pub mod proxy;
pub mod update;

pub use about::AboutPanel;
pub use activation::{forwarded_argv, DeepLink};
pub use errors::ShellError;
pub use geometry::{WindowOptions, WorkArea};
pub use menu::{ContextMenu, ContextTarget, MenuItem};
pub use platform::Platform;
pub use proxy::{ProxyAuthInfo, ProxyCredentials, ProxyLoginSlot};
pub use update::{feed_url, UpdateChoice, UpdateInfo, UpdateOutcome, UPDATE_READY_MESSAGE};
