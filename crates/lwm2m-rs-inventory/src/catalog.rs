// src/catalog.rs

//! Human-readable per-object report, derived from the same scan as the
//! inventory but independent of the inventory's internal shape.

use std::path::Path;

use crate::builder::write_artifact;
use crate::error::InventoryError;
use crate::types::ObjectDefinition;

/// Renders the catalog: one section per object, in scan order.
///
/// An object id that occurs in more than one source file gets one section
/// per file; deduplication is the inventory's concern, not the report's.
pub fn render_catalog(objects: &[ObjectDefinition]) -> String {
    let mut report = String::from("# LwM2M Objects\n\n");
    for object in objects {
        report.push_str(&format!(
            "## Object {}: {}\n\n",
            object.object_id, object.name
        ));
        report.push_str(&format!("{}\n\n", object.description));
    }
    report
}

/// Writes the rendered catalog to `path`.
pub fn write_catalog(objects: &[ObjectDefinition], path: &Path) -> Result<(), InventoryError> {
    write_artifact(path, &render_catalog(objects))
}
