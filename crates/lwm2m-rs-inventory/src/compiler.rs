// src/compiler.rs

//! The batch entry operation: one synchronous pass over a definitions
//! directory, producing the inventory (written twice) and the catalog.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::builder;
use crate::catalog;
use crate::error::InventoryError;
use crate::parser;
use crate::resolver;
use crate::scanner;
use crate::types::ObjectDefinition;

/// Options for one compiler run.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Primary destination of the inventory artifact.
    pub inventory_path: PathBuf,

    /// Mirror destination, consumed by a separate presentation surface.
    /// `None` means `<definitions dir>/../public/<inventory file name>`,
    /// the layout of the original deployment.
    pub mirror_path: Option<PathBuf>,

    /// Destination of the catalog report. `None` means
    /// `<definitions dir>/README.md`.
    pub catalog_path: Option<PathBuf>,

    /// Keep execute-only resources in the inventory as `FUNCTION` markers
    /// instead of dropping them.
    pub retain_execute_markers: bool,
}

impl CompileOptions {
    /// Options with the default mirror and catalog locations and execute
    /// markers dropped.
    pub fn new(inventory_path: impl Into<PathBuf>) -> Self {
        CompileOptions {
            inventory_path: inventory_path.into(),
            mirror_path: None,
            catalog_path: None,
            retain_execute_markers: false,
        }
    }
}

/// Compiles every definition file in `definitions_dir` into the inventory at
/// `inventory_path`, with the default mirror and catalog locations.
///
/// # Errors
/// Returns an `InventoryError` only when persisting an output artifact
/// fails. Definition files that cannot be read or lack an `ObjectID` are
/// skipped with a warning and the run continues.
pub fn compile(definitions_dir: &Path, inventory_path: &Path) -> Result<(), InventoryError> {
    compile_with_options(definitions_dir, &CompileOptions::new(inventory_path))
}

/// Compiles one batch run with explicit options.
///
/// Zero discovered definition files is "nothing to do", not an error: the
/// run logs the condition and ends without writing any artifact.
pub fn compile_with_options(
    definitions_dir: &Path,
    options: &CompileOptions,
) -> Result<(), InventoryError> {
    let files = scanner::discover_definition_files(definitions_dir);
    if files.is_empty() {
        warn!(
            "no definition files found in {}",
            definitions_dir.display()
        );
        return Ok(());
    }
    info!(
        "found {} definition files in {}",
        files.len(),
        definitions_dir.display()
    );

    let mut objects: Vec<ObjectDefinition> = Vec::new();
    for file in &files {
        let content = match std::fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                warn!("skipping unreadable {}: {}", file.display(), e);
                continue;
            }
        };
        let Some(parsed) = parser::parse_definition(&content) else {
            warn!("no ObjectID found in {}, skipping", file.display());
            continue;
        };
        let object = resolver::resolve_object(parsed, options.retain_execute_markers);
        info!(
            "parsed object {} ({}) with {} resources",
            object.object_id,
            object.name,
            object.resources.len()
        );
        objects.push(object);
    }

    let inventory = builder::build_inventory(&objects);
    let mirror = match &options.mirror_path {
        Some(path) => path.clone(),
        None => default_mirror_path(definitions_dir, &options.inventory_path),
    };
    builder::persist_inventory(&inventory, &options.inventory_path, &mirror)?;

    let catalog_path = match &options.catalog_path {
        Some(path) => path.clone(),
        None => definitions_dir.join("README.md"),
    };
    catalog::write_catalog(&objects, &catalog_path)?;

    info!(
        "compiled {} objects into {}",
        inventory.len(),
        options.inventory_path.display()
    );
    Ok(())
}

/// Loads a single object definition by identifier, straight from its file.
///
/// Returns `None` when the file does not exist, cannot be read, or has no
/// recognizable `ObjectID`.
pub fn object_info(definitions_dir: &Path, object_id: &str) -> Option<ObjectDefinition> {
    let path = definitions_dir.join(format!("lwm2m-object-{object_id}.xml"));
    let content = std::fs::read_to_string(&path).ok()?;
    resolver::load_definition_from_str(&content)
}

/// Mirror layout of the original deployment: a `public/` directory beside
/// the definitions directory, same file name as the primary.
fn default_mirror_path(definitions_dir: &Path, inventory_path: &Path) -> PathBuf {
    let file_name = inventory_path
        .file_name()
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "lwm2m-object-inventory.json".into());
    definitions_dir.join("..").join("public").join(file_name)
}
