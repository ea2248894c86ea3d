//! macOS pbcopy clipboard tool.

use crate::clipboard::tool::{ClipboardTool, ToolError};
use crate::clipboard::tools::{binary_exists, pipe_text};

/// macOS pasteboard tool.
pub struct Pbcopy;

impl Pbcopy {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for Pbcopy {
    fn name(&self) -> &'static str {
        "pbcopy"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos") && binary_exists("pbcopy")
    }

    fn copy_text(&self, text: &str) -> Result<(), ToolError> {
        pipe_text("pbcopy", &[], text)
    }
}

impl Default for Pbcopy {
    fn default() -> Self {
        Self::new()
    }
}
