//! Mapping Table and target document construction.
//!
//! The Mapping Table is the single source of truth for which source keys are
//! recognized and where they land in the output schema. It is built once and
//! read-only afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use super::parser::Rgba;

/// Group holding the named theme colors.
const COLORS_GROUP: &str = "colors";
/// Group holding the terminal palette.
const TERMINAL_GROUP: &str = "terminal";
/// Field name of the ANSI palette list.
const ANSI_FIELD: &str = "ansi";
/// Number of ANSI palette slots.
const ANSI_SLOTS: usize = 16;

/// Where a recognized source key lands in the target schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSlot {
    /// A named scalar field inside a group.
    Field {
        group: &'static str,
        field: &'static str,
    },
    /// One index of the ordered ANSI palette list.
    Ansi(usize),
}

/// One rule of the Mapping Table.
#[derive(Debug, Clone)]
pub struct MappingEntry {
    pub source_key: String,
    pub slot: TargetSlot,
}

/// The Mapping Table, in declared output order.
pub fn mapping_table() -> &'static [MappingEntry] {
    static TABLE: OnceLock<Vec<MappingEntry>> = OnceLock::new();
    TABLE.get_or_init(build_table).as_slice()
}

fn build_table() -> Vec<MappingEntry> {
    let named = [
        ("Background Color", "background"),
        ("Foreground Color", "foreground"),
        ("Bold Color", "bold"),
        ("Cursor Color", "cursor"),
        ("Cursor Text Color", "cursor_text"),
        ("Selection Color", "selection"),
        ("Selected Text Color", "selected_text"),
    ];

    let mut table: Vec<MappingEntry> = named
        .into_iter()
        .map(|(source_key, field)| MappingEntry {
            source_key: source_key.to_string(),
            slot: TargetSlot::Field {
                group: COLORS_GROUP,
                field,
            },
        })
        .collect();

    for index in 0..ANSI_SLOTS {
        table.push(MappingEntry {
            source_key: format!("Ansi {} Color", index),
            slot: TargetSlot::Ansi(index),
        });
    }

    table
}

/// A field value: scalar or ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<String>),
}

/// A named field in a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: FieldValue,
}

/// A named group of fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub fields: Vec<Field>,
}

/// The converted theme before serialization: ordered groups of ordered fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetDocument {
    pub groups: Vec<Group>,
}

impl TargetDocument {
    fn push_field(&mut self, group: &str, field: &str, value: FieldValue) {
        if self.groups.iter().all(|g| g.name != group) {
            self.groups.push(Group {
                name: group.to_string(),
                fields: Vec::new(),
            });
        }
        if let Some(g) = self.groups.iter_mut().find(|g| g.name == group) {
            g.fields.push(Field {
                name: field.to_string(),
                value,
            });
        }
    }
}

/// Build the target document from the parsed colors.
///
/// Table entries absent from the input are omitted (no zero-fill); parsed
/// keys outside the table are ignored. Field order follows the table, and
/// the ANSI palette keeps strict index order 0..16 regardless of how the
/// source document ordered its keys. Total function; cannot fail.
pub fn map_all(parsed: &HashMap<String, Rgba>) -> TargetDocument {
    let mut doc = TargetDocument::default();
    let mut palette = Vec::new();

    for entry in mapping_table() {
        let Some(color) = parsed.get(&entry.source_key) else {
            continue;
        };
        let hex = hex_rgba(*color);
        match entry.slot {
            TargetSlot::Field { group, field } => {
                doc.push_field(group, field, FieldValue::Scalar(hex));
            }
            // Table order is index order, so the palette stays 0..16 sorted.
            TargetSlot::Ansi(_) => palette.push(hex),
        }
    }

    if !palette.is_empty() {
        doc.push_field(TERMINAL_GROUP, ANSI_FIELD, FieldValue::List(palette));
    }

    debug!(groups = doc.groups.len(), "mapped target document");
    doc
}

/// Encode a color as fixed-width uppercase `RRGGBBAA`.
pub fn hex_rgba(color: Rgba) -> String {
    format!(
        "{:02X}{:02X}{:02X}{:02X}",
        hex_channel(color.red),
        hex_channel(color.green),
        hex_channel(color.blue),
        hex_channel(color.alpha)
    )
}

/// Scale one fractional channel to [0, 255], rounding to nearest.
fn hex_channel(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}
