// src/parser.rs

//! Tolerant field extraction from one definition document.
//!
//! The definition documents are uniform enough that a handful of independent
//! per-tag extractors beats a structural XML model: a missing or malformed
//! field degrades that field only, never the whole document. Only the tag
//! shapes that actually occur in the published definition files are
//! recognized; arbitrary nesting is out of scope.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{ParsedObject, ParsedResource};

// --- Object-level extractors ---

static OBJECT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<ObjectID>(\d+)</ObjectID>").unwrap());
static NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<Name>([^<]+)</Name>").unwrap());
static DESCRIPTION1: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<Description1>(?:<!\[CDATA\[)?(.*?)(?:\]\]>)?</Description1>").unwrap()
});
static MULTIPLE_INSTANCES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<MultipleInstances>(Single|Multiple)</MultipleInstances>").unwrap()
});

// --- Resource-level extractors ---

// Non-greedy body so nested tags inside one item never leak into the next.
static ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)<Item ID="([^"]+)".*?</Item>"#).unwrap());
static TYPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<Type>([^<]*)</Type>").unwrap());
static MANDATORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<Mandatory>([^<]+)</Mandatory>").unwrap());
static OPERATIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<Operations>([^<]+)</Operations>").unwrap());
static UNITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<Units>([^<]*)</Units>").unwrap());
static RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<RangeEnumeration>([^<]*)</RangeEnumeration>").unwrap());
static DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<Description>(?:<!\[CDATA\[)?(.*?)(?:\]\]>)?</Description>").unwrap()
});

/// First capture of `re` in `source`, untrimmed.
fn capture<'a>(re: &Regex, source: &'a str) -> Option<&'a str> {
    re.captures(source).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Empty captures collapse to absence.
fn optional(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Parses one definition document into its raw extracted form.
///
/// Returns `None` when the document has no recognizable `<ObjectID>`, the
/// one field nothing can be compiled without. Every other field is optional
/// and falls back individually.
pub(crate) fn parse_definition(content: &str) -> Option<ParsedObject> {
    let object_id = capture(&OBJECT_ID, content)?.to_string();

    let name = capture(&NAME, content)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Object {object_id}"));
    let description = capture(&DESCRIPTION1, content)
        .map(str::trim)
        .unwrap_or_default()
        .to_string();
    let is_singleton = capture(&MULTIPLE_INSTANCES, content) == Some("Single");

    let resources = ITEM
        .captures_iter(content)
        .filter_map(|c| {
            let id = c.get(1)?.as_str();
            let item = c.get(0)?.as_str();
            parse_item(id, item)
        })
        .collect();

    Some(ParsedObject {
        object_id,
        name,
        description,
        is_singleton,
        resources,
    })
}

/// Extracts one resource item. Returns `None` when the item has no `<Name>`;
/// the `ID` is guaranteed by the item pattern itself.
fn parse_item(id: &str, item: &str) -> Option<ParsedResource> {
    let name = capture(&NAME, item)?;

    Some(ParsedResource {
        id: id.to_string(),
        name: name.to_string(),
        data_type: capture(&TYPE, item).unwrap_or_default().to_string(),
        mandatory: capture(&MANDATORY, item).is_some_and(|m| m.eq_ignore_ascii_case("mandatory")),
        operations: capture(&OPERATIONS, item).unwrap_or_default().to_string(),
        units: optional(capture(&UNITS, item)),
        range_enumeration: optional(capture(&RANGE, item)),
        description: capture(&DESCRIPTION, item).map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_is_required() {
        assert!(parse_definition("<Name>No Id</Name>").is_none());
    }

    #[test]
    fn test_object_fields_extracted() {
        let doc = "<Name>Temperature</Name>\
                   <Description1>  Reports a measurement.  </Description1>\
                   <ObjectID>3303</ObjectID>\
                   <MultipleInstances>Single</MultipleInstances>";
        let parsed = parse_definition(doc).unwrap();
        assert_eq!(parsed.object_id, "3303");
        assert_eq!(parsed.name, "Temperature");
        assert_eq!(parsed.description, "Reports a measurement.");
        assert!(parsed.is_singleton);
        assert!(parsed.resources.is_empty());
    }

    #[test]
    fn test_name_falls_back_to_object_id() {
        let parsed = parse_definition("<ObjectID>42</ObjectID>").unwrap();
        assert_eq!(parsed.name, "Object 42");
    }

    #[test]
    fn test_cdata_description_spans_lines() {
        let doc = "<ObjectID>1</ObjectID>\
                   <Description1><![CDATA[line one\nline two\n]]></Description1>";
        let parsed = parse_definition(doc).unwrap();
        assert_eq!(parsed.description, "line one\nline two");
    }

    #[test]
    fn test_multiple_instances_other_value_is_not_singleton() {
        let doc = "<ObjectID>1</ObjectID>\
                   <MultipleInstances>Double</MultipleInstances>";
        assert!(!parse_definition(doc).unwrap().is_singleton);
    }

    #[test]
    fn test_item_fields_are_independent() {
        let doc = r#"<ObjectID>1</ObjectID>
            <Item ID="5700">
              <Name>Sensor Value</Name>
              <Operations>R</Operations>
              <Mandatory>Mandatory</Mandatory>
              <Type>Float</Type>
              <RangeEnumeration></RangeEnumeration>
              <Units>Cel</Units>
            </Item>"#;
        let parsed = parse_definition(doc).unwrap();
        assert_eq!(parsed.resources.len(), 1);
        let resource = &parsed.resources[0];
        assert_eq!(resource.id, "5700");
        assert_eq!(resource.name, "Sensor Value");
        assert_eq!(resource.data_type, "Float");
        assert!(resource.mandatory);
        assert_eq!(resource.operations, "R");
        assert_eq!(resource.units.as_deref(), Some("Cel"));
        // Empty tag collapses to absence.
        assert_eq!(resource.range_enumeration, None);
        assert_eq!(resource.description, None);
    }

    #[test]
    fn test_items_do_not_leak_into_each_other() {
        let doc = r#"<ObjectID>1</ObjectID>
            <Item ID="0"><Name>First</Name></Item>
            <Item ID="1"><Name>Second</Name><Type>Integer</Type></Item>"#;
        let parsed = parse_definition(doc).unwrap();
        assert_eq!(parsed.resources.len(), 2);
        // The first item must not capture the second item's <Type>.
        assert_eq!(parsed.resources[0].data_type, "");
        assert_eq!(parsed.resources[1].data_type, "Integer");
    }

    #[test]
    fn test_item_without_name_is_dropped() {
        let doc = r#"<ObjectID>1</ObjectID>
            <Item ID="9"><Type>Integer</Type></Item>"#;
        assert!(parse_definition(doc).unwrap().resources.is_empty());
    }
}
