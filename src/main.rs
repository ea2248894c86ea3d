//! itc - iTerm2 Theme Converter entry point.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Convert { file, output, copy } => commands::convert::handle(file, output, copy),
        Command::Completions { shell } => commands::completions::handle(shell),
    }
}
