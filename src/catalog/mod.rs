//! Field schema catalog for report-page filter forms.
//!
//! This module provides:
//! - `FieldDescriptor` / `FieldKind`: typed filter-control definitions
//! - `PageSchema`: ordered primary + advanced field lists for one page
//! - `SchemaCatalog`: registration and lookup of page schemas
//! - Built-in schemas for the seven report pages

mod builtins;
mod registry;
mod types;

pub use builtins::*;
pub use registry::SchemaCatalog;
pub use types::*;
