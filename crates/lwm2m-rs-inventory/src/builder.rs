// src/builder.rs

//! Aggregates compiled objects into the inventory artifact and persists it
//! to the primary and mirror destinations.

use std::io;
use std::path::Path;

use log::{debug, info};

use crate::error::InventoryError;
use crate::types::{Inventory, ObjectDefinition};

/// Aggregates objects into one inventory keyed by object identifier.
///
/// Objects arrive in scan order; a duplicated identifier keeps the last
/// occurrence, which is deterministic because the scanner sorts its result.
pub fn build_inventory(objects: &[ObjectDefinition]) -> Inventory {
    let mut inventory = Inventory::new();
    for object in objects {
        if inventory
            .insert(object.object_id.clone(), object.clone())
            .is_some()
        {
            debug!(
                "object {} defined more than once, keeping the later definition",
                object.object_id
            );
        }
    }
    inventory
}

/// Writes the serialized inventory to both destinations.
///
/// The same byte buffer is written to the primary and the mirror; the two
/// must stay byte-identical, so a failure on either write is fatal for the
/// run and surfaces the failing path.
pub fn persist_inventory(
    inventory: &Inventory,
    primary: &Path,
    mirror: &Path,
) -> Result<(), InventoryError> {
    let content = serde_json::to_string_pretty(inventory)?;

    write_artifact(primary, &content)?;
    write_artifact(mirror, &content)?;
    info!(
        "inventory with {} objects written to {} and {}",
        inventory.len(),
        primary.display(),
        mirror.display()
    );
    Ok(())
}

/// Reads a previously persisted inventory back.
///
/// A missing file is an empty inventory ("nothing compiled yet"); anything
/// else that goes wrong is a real error.
pub fn load_inventory(path: &Path) -> Result<Inventory, InventoryError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("no inventory at {}", path.display());
            return Ok(Inventory::new());
        }
        Err(source) => {
            return Err(InventoryError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    Ok(serde_json::from_str(&content)?)
}

pub(crate) fn write_artifact(path: &Path, content: &str) -> Result<(), InventoryError> {
    std::fs::write(path, content).map_err(|source| InventoryError::Io {
        path: path.to_path_buf(),
        source,
    })
}
