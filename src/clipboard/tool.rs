//! ClipboardTool trait and per-invocation errors.

/// A tool that can place text on the system clipboard.
///
/// Each implementation wraps one OS binary and knows how to invoke it.
pub trait ClipboardTool: Send + Sync {
    /// Binary name, for status and error messages.
    fn name(&self) -> &'static str;

    /// Check if this tool is usable on the system.
    ///
    /// Should be fast - typically checks that the binary exists.
    fn is_available(&self) -> bool;

    /// Try to copy text to the clipboard.
    fn copy_text(&self, text: &str) -> Result<(), ToolError>;
}

/// Error from a single tool invocation.
#[derive(Debug, Clone)]
pub enum ToolError {
    /// Tool not found on this system.
    NotFound,
    /// Tool execution failed.
    Failed(String),
}
