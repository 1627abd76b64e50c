//! Restart prompt for hosts without a dialog toolkit.

use async_trait::async_trait;
use tracing::info;

use crate::domain::{UpdateChoice, UpdateInfo, UPDATE_READY_MESSAGE};
use crate::ports::UpdateDialog;

/// Logs the prompt and always answers `Later`, so a headless host never
/// restarts on its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeferringDialog;

#[async_trait]
impl UpdateDialog for DeferringDialog {
    async fn prompt(&self, update: &UpdateInfo) -> UpdateChoice {
        info!(
            title = "Lisk Nano",
            buttons = ?UpdateChoice::BUTTONS,
            detail = %update.detail(),
            "{}",
            UPDATE_READY_MESSAGE
        );
        UpdateChoice::Later
    }
}
