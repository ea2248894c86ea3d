//! Copy orchestrator for clipboard operations.

use super::error::ClipboardError;
use super::tool::{ClipboardTool, ToolError};
use super::tools::platform_tools;

/// Orchestrates clipboard copies over the available tools.
///
/// Tools are tried in platform priority order; the first available tool
/// that succeeds wins.
pub struct Clipboard {
    tools: Vec<Box<dyn ClipboardTool>>,
}

impl Clipboard {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn ClipboardTool>>) -> Self {
        Self { tools }
    }

    /// Copy text to the clipboard.
    ///
    /// Returns the name of the tool that performed the copy.
    pub fn copy_text(&self, text: &str) -> Result<&'static str, ClipboardError> {
        let mut last_failure = None;

        for tool in &self.tools {
            if !tool.is_available() {
                continue;
            }
            match tool.copy_text(text) {
                Ok(()) => return Ok(tool.name()),
                Err(ToolError::NotFound) => continue,
                Err(ToolError::Failed(message)) => {
                    last_failure = Some(ClipboardError::ToolFailed {
                        tool: tool.name(),
                        message,
                    });
                }
            }
        }

        Err(last_failure.unwrap_or(ClipboardError::NoToolAvailable))
    }
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new()
    }
}
