//! iTerm2 color scheme to YAML theme conversion pipeline.
//!
//! Three sequential, pure stages:
//!
//! - [`parser`] extracts color keys and fractional RGBA components from the
//!   source plist
//! - [`mapper`] translates recognized keys into the target schema through the
//!   static Mapping Table and encodes channels as `RRGGBBAA` hex
//! - [`serializer`] renders the result as deterministic indented text
//!
//! Conversion is all-or-nothing: any parse failure aborts with no partial
//! output. Unrecognized color keys are skipped, not rejected, so documents
//! from newer iTerm2 versions keep converting.

mod error;
mod mapper;
mod parser;
mod serializer;

pub use error::ParseError;
pub use mapper::{
    hex_rgba, map_all, mapping_table, Field, FieldValue, Group, MappingEntry, TargetDocument,
    TargetSlot,
};
pub use parser::{parse, Rgba};
pub use serializer::serialize;

/// Convert an iTerm2 color scheme document into its YAML theme text.
pub fn convert(source: &str) -> Result<String, ParseError> {
    let parsed = parse(source)?;
    let doc = map_all(&parsed);
    Ok(serialize(&doc))
}
