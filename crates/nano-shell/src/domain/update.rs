//! Auto-update feed and prompt.

use serde::{Deserialize, Serialize};

/// Message shown once an update has been downloaded.
pub const UPDATE_READY_MESSAGE: &str =
    "The new version has been downloaded. Please restart the application to apply the updates.";

/// Build the feed URL for this version and platform.
pub fn feed_url(base: &str, version: &str, platform: &str) -> String {
    format!(
        "{}/?version={}&platform={}",
        base.trim_end_matches('/'),
        version,
        platform
    )
}

/// A release announced by the update feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInfo {
    /// Download location of the release.
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub pub_date: Option<String>,
}

impl UpdateInfo {
    /// Secondary text of the restart prompt.
    pub fn detail(&self) -> String {
        format!("{}\n\n{}", self.name, self.notes)
    }
}

/// Buttons of the restart prompt, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateChoice {
    Restart,
    Later,
}

impl UpdateChoice {
    pub const BUTTONS: [&'static str; 2] = ["Restart", "Later"];

    /// Map a clicked button index. Anything but `Later` restarts.
    pub fn from_button_index(index: usize) -> Self {
        if index == 1 {
            UpdateChoice::Later
        } else {
            UpdateChoice::Restart
        }
    }
}

/// Result of one update check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    UpToDate,
    /// Downloaded, user picked `Later`.
    Deferred,
    /// Downloaded, user picked `Restart`.
    Installing,
    Failed,
}

impl UpdateOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateOutcome::UpToDate => "up_to_date",
            UpdateOutcome::Deferred => "deferred",
            UpdateOutcome::Installing => "installing",
            UpdateOutcome::Failed => "failed",
        }
    }
}
