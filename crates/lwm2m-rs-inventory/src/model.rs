// src/model.rs

//! Intermediate parse results, before default synthesis and aggregation
//! policy are applied.
//!
//! The parser fills these with whatever the extractors captured; the
//! resolver decides what ends up in the public inventory types.

/// Raw fields extracted from one definition document.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedObject {
    pub object_id: String,
    pub name: String,
    pub description: String,
    pub is_singleton: bool,
    /// Resource items in document order, state-bearing and execute-only
    /// alike.
    pub resources: Vec<ParsedResource>,
}

/// Raw fields extracted from one `<Item>` element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedResource {
    pub id: String,
    pub name: String,
    /// Empty for execute-only items.
    pub data_type: String,
    pub mandatory: bool,
    /// Empty when the source has no `<Operations>` tag.
    pub operations: String,
    pub units: Option<String>,
    pub range_enumeration: Option<String>,
    pub description: Option<String>,
}
