//! Main window sizing.

use serde::{Deserialize, Serialize};

/// Usable area of the primary display, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkArea {
    pub width: u32,
    pub height: u32,
}

impl Default for WorkArea {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Options the main window is created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowOptions {
    pub width: u32,
    pub height: u32,
    pub center: bool,
    /// Off so timers keep running while the window is in the background.
    pub background_throttling: bool,
    /// Entry page of the UI.
    pub url: String,
}

impl WindowOptions {
    /// Half the width on very wide screens, otherwise 250px narrower than
    /// the work area. 70% of the height on tall screens, otherwise 150px
    /// shorter.
    pub fn for_work_area(area: WorkArea, url: impl Into<String>) -> Self {
        let width = if area.width > 2000 {
            area.width / 2
        } else {
            area.width.saturating_sub(250)
        };
        let height = if area.height > 1000 {
            (u64::from(area.height) * 7 / 10) as u32
        } else {
            area.height.saturating_sub(150)
        };

        Self {
            width,
            height,
            center: true,
            background_throttling: false,
            url: url.into(),
        }
    }
}
