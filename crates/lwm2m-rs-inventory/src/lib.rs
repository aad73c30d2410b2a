// src/lib.rs

//! Compiles LwM2M object definition files into a normalized object inventory.
//!
//! One definition file describes one object: a numeric identifier, a display
//! name, a singleton/multiple-instance flag and a set of numbered resources
//! with primitive types, access operations, optional units and numeric
//! ranges. The compiler discovers the definition files in one directory,
//! extracts the well-known fields from each document, synthesizes a default
//! value per resource and aggregates everything into a single JSON inventory
//! written to two destinations, plus a human-readable catalog.
//!
//! It supports:
//! - `compile`: one synchronous batch run over a definitions directory.
//! - `load_definition_from_str`: compiling a single document from a string.
//! - `load_inventory`: reading a persisted inventory back.

// --- Crate Modules ---

mod builder;
mod catalog;
mod compiler;
mod defaults;
mod error;
mod model;
mod parser;
mod resolver;
mod scanner;
mod types;

// --- Public API Re-exports ---

pub use builder::{build_inventory, load_inventory, persist_inventory};
pub use catalog::{render_catalog, write_catalog};
pub use compiler::{CompileOptions, compile, compile_with_options, object_info};
pub use defaults::{ValueSpec, synthesize};
pub use error::InventoryError;
pub use resolver::{load_definition_from_str, load_definition_with_markers_from_str};
pub use scanner::{definition_file_ids, discover_definition_files};
pub use types::{DefaultValue, Inventory, ObjectDefinition, ResourceDefinition, ValueKind};
