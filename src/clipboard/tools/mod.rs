//! Platform-specific clipboard tools.

mod pbcopy;
mod wl_copy;
mod xclip;
mod xsel;

pub use pbcopy::Pbcopy;
pub use wl_copy::WlCopy;
pub use xclip::Xclip;
pub use xsel::Xsel;

use std::io::Write;
use std::process::{Command, Stdio};

use super::tool::{ClipboardTool, ToolError};

/// Get the platform-appropriate tools in priority order.
pub fn platform_tools() -> Vec<Box<dyn ClipboardTool>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(Pbcopy::new())]
    }

    #[cfg(target_os = "linux")]
    {
        vec![
            Box::new(Xclip::new()),
            Box::new(Xsel::new()),
            Box::new(WlCopy::new()),
        ]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        vec![]
    }
}

/// Check that a binary resolves on PATH.
pub(crate) fn binary_exists(binary: &str) -> bool {
    Command::new("which")
        .arg(binary)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Spawn a binary and feed `text` to its stdin.
pub(crate) fn pipe_text(binary: &str, args: &[&str], text: &str) -> Result<(), ToolError> {
    let mut child = Command::new(binary)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ToolError::Failed(e.to_string()))?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| ToolError::Failed(e.to_string()))?;
    }

    // wait() closes the child's stdin first, so the tool sees EOF.
    let status = child
        .wait()
        .map_err(|e| ToolError::Failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(ToolError::Failed(format!("{} exited with {}", binary, status)))
    }
}
