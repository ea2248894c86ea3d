//! Subcommand handlers.

pub mod completions;
pub mod convert;
