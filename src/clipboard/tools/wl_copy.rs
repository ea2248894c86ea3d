//! Linux Wayland wl-copy clipboard tool.

use crate::clipboard::tool::{ClipboardTool, ToolError};
use crate::clipboard::tools::{binary_exists, pipe_text};

/// Wayland clipboard tool using wl-copy.
pub struct WlCopy;

impl WlCopy {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for WlCopy {
    fn name(&self) -> &'static str {
        "wl-copy"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && binary_exists("wl-copy")
    }

    fn copy_text(&self, text: &str) -> Result<(), ToolError> {
        pipe_text("wl-copy", &[], text)
    }
}

impl Default for WlCopy {
    fn default() -> Self {
        Self::new()
    }
}
