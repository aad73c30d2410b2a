// src/resolver.rs

//! Turns raw parse results into inventory-facing object definitions by
//! running the default-value synthesizer per resource and applying the
//! execute-marker aggregation policy.

use std::collections::BTreeMap;

use crate::defaults::synthesize;
use crate::model::{ParsedObject, ParsedResource};
use crate::parser;
use crate::types::{ObjectDefinition, ResourceDefinition, ValueKind};

/// Compiles one definition document, excluding execute-only resources from
/// the resources map. This is the shape the managed-object store consumes.
pub fn load_definition_from_str(content: &str) -> Option<ObjectDefinition> {
    parser::parse_definition(content).map(|parsed| resolve_object(parsed, false))
}

/// Compiles one definition document, retaining execute-only resources as
/// `FUNCTION` markers with no value.
pub fn load_definition_with_markers_from_str(content: &str) -> Option<ObjectDefinition> {
    parser::parse_definition(content).map(|parsed| resolve_object(parsed, true))
}

/// Applies default synthesis and the execute-marker policy to one parsed
/// object. A resource id duplicated within one document keeps the last
/// occurrence.
pub(crate) fn resolve_object(
    parsed: ParsedObject,
    retain_execute_markers: bool,
) -> ObjectDefinition {
    let mut resources = BTreeMap::new();
    for resource in parsed.resources {
        if resource.data_type.trim().is_empty() && !retain_execute_markers {
            continue;
        }
        resources.insert(resource.id.clone(), resolve_resource(resource));
    }

    ObjectDefinition {
        object_id: parsed.object_id,
        name: parsed.name,
        description: parsed.description,
        is_singleton: parsed.is_singleton,
        resources,
    }
}

fn resolve_resource(resource: ParsedResource) -> ResourceDefinition {
    let spec = synthesize(
        &resource.data_type,
        resource.units.as_deref(),
        resource.range_enumeration.as_deref(),
    );

    // Value-bearing resources are readable by default; markers keep the
    // operations string as written (usually "E").
    let operations = if spec.kind != ValueKind::Function && resource.operations.is_empty() {
        "R".to_string()
    } else {
        resource.operations
    };

    ResourceDefinition {
        id: resource.id,
        name: resource.name,
        data_type: resource.data_type,
        mandatory: resource.mandatory,
        operations,
        units: resource.units,
        range_enumeration: resource.range_enumeration,
        description: resource.description,
        kind: spec.kind,
        default_value: spec.default,
    }
}
