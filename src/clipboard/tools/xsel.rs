//! Linux xsel clipboard tool.

use crate::clipboard::tool::{ClipboardTool, ToolError};
use crate::clipboard::tools::{binary_exists, pipe_text};

/// Linux X11 clipboard tool using xsel.
pub struct Xsel;

impl Xsel {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for Xsel {
    fn name(&self) -> &'static str {
        "xsel"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && binary_exists("xsel")
    }

    fn copy_text(&self, text: &str) -> Result<(), ToolError> {
        pipe_text("xsel", &["--clipboard", "--input"], text)
    }
}

impl Default for Xsel {
    fn default() -> Self {
        Self::new()
    }
}
