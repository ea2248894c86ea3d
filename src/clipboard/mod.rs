//! System clipboard integration for converted themes.
//!
//! Copies text through external OS tools (pbcopy, xclip, xsel, wl-copy)
//! tried in priority order, keeping the converter free of display-server
//! linkage.

mod copy;
mod error;
mod tool;
mod tools;

pub use copy::Clipboard;
pub use error::ClipboardError;
pub use tool::{ClipboardTool, ToolError};
pub use tools::{platform_tools, Pbcopy, WlCopy, Xclip, Xsel};
