//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// iTerm2 Theme Converter.
#[derive(Debug, Parser)]
#[command(
    name = "itc",
    version,
    about = "Convert iTerm2 color schemes to YAML themes"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert an iTerm2 color scheme to a YAML theme
    Convert {
        /// Path to the .itermcolors file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Write the theme to a file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Also copy the theme to the system clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
