//! Deterministic renderer for the target document syntax.

use super::mapper::{FieldValue, TargetDocument};

/// Indent width per nesting level.
const INDENT: &str = "  ";

/// Characters that force a value into quotes.
const RESERVED: &[char] = &[':', '#', '"', '\'', '{', '}', '[', ']', ',', '&', '*'];

/// Render the document as indented `key: value` text.
///
/// Group and field order is exactly the order the document declares (the
/// Mapping Table's order), never alphabetical and never source order, so the
/// output is byte-stable for the same logical input. Groups with no fields
/// are omitted entirely.
pub fn serialize(doc: &TargetDocument) -> String {
    let mut out = String::new();

    for group in &doc.groups {
        if group.fields.is_empty() {
            continue;
        }
        out.push_str(&group.name);
        out.push_str(":\n");

        for field in &group.fields {
            match &field.value {
                FieldValue::Scalar(value) => {
                    out.push_str(INDENT);
                    out.push_str(&field.name);
                    out.push_str(": ");
                    out.push_str(&render_value(value));
                    out.push('\n');
                }
                FieldValue::List(items) => {
                    out.push_str(INDENT);
                    out.push_str(&field.name);
                    out.push_str(":\n");
                    for item in items {
                        out.push_str(INDENT);
                        out.push_str(INDENT);
                        out.push_str("- ");
                        out.push_str(&render_value(item));
                        out.push('\n');
                    }
                }
            }
        }
    }

    out
}

/// Quote a value only when the plain spelling would be ambiguous.
fn render_value(value: &str) -> String {
    if needs_quoting(value) {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{}\"", escaped)
    } else {
        value.to_string()
    }
}

fn needs_quoting(value: &str) -> bool {
    value.is_empty()
        || value.starts_with(|c: char| c.is_whitespace() || c == '-')
        || value.ends_with(char::is_whitespace)
        || value.contains('\n')
        || value.contains(RESERVED)
}
