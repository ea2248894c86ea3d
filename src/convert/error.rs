//! Conversion errors.

/// Errors raised while parsing the source document.
///
/// Only structural malformation is an error. Unrecognized color keys and
/// out-of-range components are tolerated upstream (skipped and clamped).
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The input is not a well-formed property list document.
    #[error("Malformed source document: {0}")]
    MalformedDocument(String),

    /// A color key is not followed by a component dictionary.
    #[error("Color key '{key}' has no value dictionary")]
    MissingValueContainer { key: String },

    /// A component dictionary holds none of the four color components.
    #[error("Color key '{key}' has no usable color components")]
    EmptyColorValue { key: String },
}
