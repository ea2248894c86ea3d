//! Source document parsing for iTerm2 color schemes.
//!
//! The generic XML plist parse is delegated to the `plist` crate; this module
//! owns the domain-specific extraction of color dictionaries from the parsed
//! value tree, so the extraction logic stays independently testable.

use std::collections::HashMap;
use std::io::Cursor;

use plist::Value;
use tracing::debug;

use super::error::ParseError;

const RED_COMPONENT: &str = "Red Component";
const GREEN_COMPONENT: &str = "Green Component";
const BLUE_COMPONENT: &str = "Blue Component";
const ALPHA_COMPONENT: &str = "Alpha Component";

/// A color extracted from the source document, channels as fractions in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

/// Parse an iTerm2 `.itermcolors` document into a map of color keys.
///
/// All keys are kept, recognized or not; deciding which ones matter is the
/// mapper's job. A key occurring more than once resolves to its last
/// occurrence in document order.
pub fn parse(source: &str) -> Result<HashMap<String, Rgba>, ParseError> {
    let value = Value::from_reader_xml(Cursor::new(source.as_bytes()))
        .map_err(|e| ParseError::MalformedDocument(e.to_string()))?;

    let root = value.as_dictionary().ok_or_else(|| {
        ParseError::MalformedDocument("root element is not a dictionary".to_string())
    })?;

    let mut colors = HashMap::with_capacity(root.len());
    for (key, entry) in root.iter() {
        let components = entry
            .as_dictionary()
            .ok_or_else(|| ParseError::MissingValueContainer {
                key: key.to_string(),
            })?;
        colors.insert(key.to_string(), color_from_dict(key, components)?);
    }

    debug!(keys = colors.len(), "parsed source document");
    Ok(colors)
}

/// Assemble a color from a component dictionary.
///
/// Components are identified by name, not position. Missing red/green/blue
/// default to 0.0 and missing alpha to 1.0; only a dictionary with zero of
/// the four components is rejected.
fn color_from_dict(key: &str, dict: &plist::Dictionary) -> Result<Rgba, ParseError> {
    let red = component(dict, RED_COMPONENT);
    let green = component(dict, GREEN_COMPONENT);
    let blue = component(dict, BLUE_COMPONENT);
    let alpha = component(dict, ALPHA_COMPONENT);

    if red.is_none() && green.is_none() && blue.is_none() && alpha.is_none() {
        return Err(ParseError::EmptyColorValue {
            key: key.to_string(),
        });
    }

    Ok(Rgba {
        red: clamp_unit(red.unwrap_or(0.0)),
        green: clamp_unit(green.unwrap_or(0.0)),
        blue: clamp_unit(blue.unwrap_or(0.0)),
        alpha: clamp_unit(alpha.unwrap_or(1.0)),
    })
}

/// Look up one named numeric component.
///
/// iTerm2 writes `<real>` elements, but `<integer>` and numeric `<string>`
/// values occur in exported files and are accepted too.
fn component(dict: &plist::Dictionary, name: &str) -> Option<f64> {
    match dict.get(name)? {
        Value::Real(v) => Some(*v),
        Value::Integer(v) => v.as_signed().map(|v| v as f64),
        Value::String(v) => v.trim().parse().ok(),
        _ => None,
    }
}

/// Slightly out-of-range components occur in real exports due to float
/// serialization; clamp instead of rejecting.
fn clamp_unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}
