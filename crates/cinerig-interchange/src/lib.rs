//! Cinerig Interchange - JSON document exchange with the runtime
//!
//! This crate handles encoding a spline registry into the runtime's
//! interchange document and rebuilding a scene from one.

mod export;
mod format;
mod import;

pub use export::{export_file, export_registry, export_string};
pub use format::{validate_document, ExportDocument, SplineExport, DEFAULT_DURATION};
pub use import::{import_document, load_document, parse_document};
