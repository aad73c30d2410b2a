// src/types.rs

//! Public data structures for the compiled object inventory.
//!
//! These are the types serialized into the persisted JSON artifact, so their
//! field names (via serde renames) are part of the wire format consumed by
//! the device-management client runtime and the presentation surface.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The persisted inventory artifact: object identifier -> compiled definition.
///
/// A `BTreeMap` keeps serialization order deterministic, which in turn keeps
/// repeated runs byte-identical.
pub type Inventory = BTreeMap<String, ObjectDefinition>;

// --- Object Definition ---

/// One compiled object definition, produced from a single definition file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDefinition {
    /// Numeric object identifier, string-encoded (`<ObjectID>`).
    pub object_id: String,

    /// Display name (`<Name>`), falling back to `Object <id>`.
    pub name: String,

    /// Free text (`<Description1>`), trimmed; empty when absent.
    pub description: String,

    /// True only when the source explicitly says
    /// `<MultipleInstances>Single</MultipleInstances>`. An absent tag means
    /// *not* singleton; see the resource model notes in DESIGN.md.
    pub is_singleton: bool,

    /// Resources keyed by resource identifier, unique within the object.
    pub resources: BTreeMap<String, ResourceDefinition>,
}

/// One compiled resource, with the synthesized value spec merged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDefinition {
    /// `@ID` of the `<Item>` element.
    pub id: String,

    /// `<Name>`
    pub name: String,

    /// `<Type>`, as written in the source. Empty only for retained execute
    /// markers.
    #[serde(rename = "type", default)]
    pub data_type: String,

    /// True iff `<Mandatory>` equals `mandatory` (case-insensitive).
    pub mandatory: bool,

    /// Access-control string (`<Operations>`), e.g. `R`, `RW`, `E`.
    /// Value-bearing resources with no source operations default to `R`.
    pub operations: String,

    /// `<Units>`; absent when the tag is missing or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,

    /// `<RangeEnumeration>` in `<min>..<max>` form; only the lower bound
    /// participates in default synthesis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_enumeration: Option<String>,

    /// `<Description>`, carried through unchanged when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Normalized type tag of the synthesized value.
    pub kind: ValueKind,

    /// Synthesized default; absent for execute markers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
}

// --- Synthesized Values ---

/// Normalized value type tags understood by the downstream consumers.
///
/// `time` resources normalize to [`ValueKind::Integer`] (a Unix timestamp);
/// execute-only resources normalize to [`ValueKind::Function`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueKind {
    Boolean,
    Integer,
    Float,
    String,
    ObjectLink,
    Function,
}

/// A synthesized default value, serialized as a bare JSON scalar
/// (`false`, `5`, `0.0`, `"Cel"`, `"0:0"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}
