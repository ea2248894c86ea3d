//! iTerm2 Theme Converter library.
//!
//! Converts iTerm2 `.itermcolors` property lists into indented YAML theme
//! documents. The conversion core lives in [`convert`]; [`clipboard`] covers
//! placing converted output on the system clipboard.

pub mod clipboard;
pub mod convert;

pub use convert::{convert, ParseError};
