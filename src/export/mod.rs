//! Flat-file export of generated datasets
//!
//! - **ExportRow**: the exported column layout, derived from a reading
//! - **DatasetExporter**: CSV (default) or JSON Lines writer

pub mod row;
pub mod writer;

pub use row::*;
pub use writer::*;
