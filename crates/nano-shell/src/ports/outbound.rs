//! Outbound (Driven) ports for the host shell.

use std::sync::Arc;

use async_trait::async_trait;
use ln_01_event_router::RenderSurface;

use crate::domain::{AboutPanel, ContextMenu, UpdateChoice, UpdateInfo, WindowOptions, WorkArea};

/// Application-level host services.
pub trait HostApp: Send + Sync {
    /// Register the app as the default handler of `scheme` URLs.
    fn register_protocol(&self, scheme: &str);

    fn set_about_panel(&self, about: &AboutPanel);

    fn quit(&self);
}

/// The main window.
pub trait HostWindow: Send + Sync {
    fn work_area(&self) -> WorkArea;

    /// Create the window and start loading the UI. The returned surface
    /// reaches the UI once it finished loading.
    fn create_window(&self, options: &WindowOptions) -> Arc<dyn RenderSurface>;

    fn is_minimized(&self) -> bool;

    fn restore(&self);

    fn focus(&self);

    fn popup_menu(&self, menu: ContextMenu);
}

/// Update feed client.
#[async_trait]
pub trait UpdateTransport: Send + Sync {
    /// Ask the feed for a newer release. `None` means up to date.
    async fn check(&self, feed_url: &str) -> Result<Option<UpdateInfo>, String>;

    /// Fetch and stage the release.
    async fn download(&self, update: &UpdateInfo) -> Result<(), String>;

    /// Quit and apply the staged release.
    fn quit_and_install(&self) -> Result<(), String>;
}

/// Restart prompt shown once an update is staged.
#[async_trait]
pub trait UpdateDialog: Send + Sync {
    async fn prompt(&self, update: &UpdateInfo) -> UpdateChoice;
}
