//! Linux xclip clipboard tool.

use crate::clipboard::tool::{ClipboardTool, ToolError};
use crate::clipboard::tools::{binary_exists, pipe_text};

/// Linux X11 clipboard tool using xclip.
pub struct Xclip;

impl Xclip {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for Xclip {
    fn name(&self) -> &'static str {
        "xclip"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && binary_exists("xclip")
    }

    fn copy_text(&self, text: &str) -> Result<(), ToolError> {
        pipe_text("xclip", &["-selection", "clipboard"], text)
    }
}

impl Default for Xclip {
    fn default() -> Self {
        Self::new()
    }
}
