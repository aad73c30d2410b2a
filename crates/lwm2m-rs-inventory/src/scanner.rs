// src/scanner.rs

//! Filename-convention discovery of definition files.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::warn;
use regex::Regex;

/// `lwm2m-object-<digits>.xml`, prefix and extension exact.
static DEFINITION_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^lwm2m-object-(\d+)\.xml$").unwrap());

/// Lists the definition files in `dir`, non-recursively.
///
/// The result is sorted numerically by the identifier in the filename, with
/// a lexicographic filename tiebreak, so downstream aggregation order does
/// not depend on platform directory-listing order. A missing or unreadable
/// directory yields an empty list and a warning, never an error.
pub fn discover_definition_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("cannot read definitions directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut files: Vec<(u64, String)> = entries
        .filter_map(|entry| {
            let entry = entry.ok()?;
            if !entry.file_type().ok()?.is_file() {
                return None;
            }
            let name = entry.file_name().into_string().ok()?;
            let id = definition_file_id(&name)?;
            Some((id, name))
        })
        .collect();
    files.sort();

    files.into_iter().map(|(_, name)| dir.join(name)).collect()
}

/// Object identifiers captured from matching filenames, in scan order.
///
/// These are the identifier *segments* of the filenames, string-encoded as
/// written (leading zeros preserved); the authoritative identifier of a
/// compiled object is still the `ObjectID` inside the document.
pub fn definition_file_ids(dir: &Path) -> Vec<String> {
    discover_definition_files(dir)
        .iter()
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?;
            let id = DEFINITION_FILE.captures(name)?.get(1)?.as_str();
            Some(id.to_string())
        })
        .collect()
}

/// The numeric identifier segment of a matching filename, or `None` when the
/// name does not follow the convention.
fn definition_file_id(name: &str) -> Option<u64> {
    DEFINITION_FILE
        .captures(name)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}
