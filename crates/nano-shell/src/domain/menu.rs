//! Context menus offered by the main window.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItem {
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,
    Separator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContextMenu {
    /// Shown over editable fields.
    Input,
    /// Shown over selected, non-editable text.
    Selection,
}

impl ContextMenu {
    /// Pick the menu for a right-click target, if any.
    pub fn for_target(target: &ContextTarget) -> Option<Self> {
        if target.is_editable {
            Some(ContextMenu::Input)
        } else if !target.selection_text.trim().is_empty() {
            Some(ContextMenu::Selection)
        } else {
            None
        }
    }

    pub fn items(&self) -> &'static [MenuItem] {
        use MenuItem::*;
        match self {
            ContextMenu::Input => &[Undo, Redo, Separator, Cut, Copy, Paste, Separator, SelectAll],
            ContextMenu::Selection => &[Copy, Separator, SelectAll],
        }
    }
}

/// What the user right-clicked on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextTarget {
    pub is_editable: bool,
    #[serde(default)]
    pub selection_text: String,
}
