//! Convert subcommand handler.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use itc::clipboard::{Clipboard, ClipboardError};

/// Run a conversion from file or stdin to stdout, file, and/or clipboard.
pub fn handle(file: Option<PathBuf>, output: Option<PathBuf>, copy: bool) -> Result<()> {
    let source = read_source(file.as_deref())?;
    let theme = itc::convert(&source).context("Conversion failed")?;

    match &output {
        Some(path) => {
            fs::write(path, &theme)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote theme to {}", path.display());
        }
        None => print!("{}", theme),
    }

    if copy {
        copy_to_clipboard(&theme);
    }

    Ok(())
}

/// Read the source document from a file, or from stdin when piped.
fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            if atty::is(atty::Stream::Stdin) {
                bail!("No input: pass a .itermcolors file or pipe the document to stdin");
            }
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}

/// Copy with graceful degradation: the theme already reached stdout or the
/// output file, so a missing clipboard tool downgrades to a warning.
fn copy_to_clipboard(theme: &str) {
    match Clipboard::new().copy_text(theme) {
        Ok(tool) => eprintln!("Copied theme to clipboard ({})", tool),
        Err(err @ ClipboardError::NoToolAvailable) => eprintln!("Warning: {}", err),
        Err(err) => eprintln!("Warning: clipboard copy failed: {}", err),
    }
}
