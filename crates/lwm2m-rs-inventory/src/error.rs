// src/error.rs

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while compiling or persisting an object inventory.
///
/// Per-file problems (an unreadable definition file, a document without an
/// `ObjectID`) are not represented here: they are logged and the file is
/// skipped. Only failures that must abort the run surface as errors.
#[derive(Debug)]
pub enum InventoryError {
    /// A filesystem read or write on one of the output artifacts failed.
    ///
    /// Carries the destination path so a failed mirror write can be told
    /// apart from a failed primary write.
    Io { path: PathBuf, source: io::Error },

    /// The inventory could not be serialized to, or deserialized from, JSON.
    Json(serde_json::Error),
}

impl From<serde_json::Error> for InventoryError {
    fn from(e: serde_json::Error) -> Self {
        InventoryError::Json(e)
    }
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            InventoryError::Json(e) => write!(f, "inventory JSON error: {}", e),
        }
    }
}

impl std::error::Error for InventoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InventoryError::Io { source, .. } => Some(source),
            InventoryError::Json(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::InventoryError;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_from_json_error() {
        // Create a dummy serde_json error by failing to parse
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: InventoryError = json_err.into();
        assert!(matches!(err, InventoryError::Json(_)));
    }

    #[test]
    fn test_io_display_includes_path() {
        let err = InventoryError::Io {
            path: PathBuf::from("/tmp/inventory.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("/tmp/inventory.json"), "got: {}", rendered);
        assert!(rendered.contains("denied"), "got: {}", rendered);
    }

    #[test]
    fn test_error_source_is_preserved() {
        let err = InventoryError::Io {
            path: PathBuf::from("x"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let source = std::error::Error::source(&err).expect("source must be set");
        assert!(source.to_string().contains("gone"));
    }
}
