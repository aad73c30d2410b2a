// src/defaults.rs

//! Maps a resource's declared type, units and range to a normalized value
//! kind and a synthesized default value.

use std::str::FromStr;

use crate::types::{DefaultValue, ValueKind};

/// The synthesized, inventory-facing value of one resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSpec {
    pub kind: ValueKind,
    /// `None` marks an execute (action) resource.
    pub default: Option<DefaultValue>,
}

/// Synthesizes the default value for a resource.
///
/// Pure: the result depends only on the three inputs. The type is matched
/// case-insensitively; an empty or unrecognized type yields an execute
/// marker (`ValueKind::Function`) with no value.
pub fn synthesize(data_type: &str, units: Option<&str>, range: Option<&str>) -> ValueSpec {
    match data_type.trim().to_ascii_lowercase().as_str() {
        "boolean" => value(ValueKind::Boolean, DefaultValue::Boolean(false)),
        "integer" => value(
            ValueKind::Integer,
            DefaultValue::Integer(lower_bound(range).unwrap_or(0)),
        ),
        "float" => value(
            ValueKind::Float,
            DefaultValue::Float(lower_bound(range).unwrap_or(0.0)),
        ),
        "string" => value(
            ValueKind::String,
            DefaultValue::Text(units.filter(|u| !u.is_empty()).unwrap_or("").to_string()),
        ),
        // Consumers interpret the integer as a Unix timestamp.
        "time" => value(ValueKind::Integer, DefaultValue::Integer(0)),
        "objlnk" => value(ValueKind::ObjectLink, DefaultValue::Text("0:0".to_string())),
        _ => ValueSpec {
            kind: ValueKind::Function,
            default: None,
        },
    }
}

fn value(kind: ValueKind, default: DefaultValue) -> ValueSpec {
    ValueSpec {
        kind,
        default: Some(default),
    }
}

/// Lower bound of a `<min>..<max>` range, split on the literal `..`.
///
/// The upper bound is not used by synthesis. An unparseable or missing
/// lower bound falls back to the type's zero default at the call site.
fn lower_bound<T: FromStr>(range: Option<&str>) -> Option<T> {
    let (min, _) = range?.split_once("..")?;
    min.trim().parse().ok()
}
