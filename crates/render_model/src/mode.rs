//! Edit and view rendering modes

use serde::{Deserialize, Serialize};

/// How the paper is presented. Switching modes never changes the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Input fields, delete and add buttons, drag handles
    #[default]
    Edit,
    /// Read-only typeset text with math and colon line breaks
    View,
}

impl RenderMode {
    /// Get display name for the mode
    pub fn display_name(&self) -> &'static str {
        match self {
            RenderMode::Edit => "Edit",
            RenderMode::View => "View",
        }
    }

    /// Label of the toolbar button that switches away from this mode
    pub fn toggle_label(&self) -> &'static str {
        match self {
            RenderMode::Edit => "Finish Editing",
            RenderMode::View => "Edit Paper",
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, RenderMode::Edit)
    }

    /// The other mode
    pub fn toggled(&self) -> Self {
        match self {
            RenderMode::Edit => RenderMode::View,
            RenderMode::View => RenderMode::Edit,
        }
    }
}
