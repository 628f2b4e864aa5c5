//! Descriptive report over a generated dataset
//!
//! - **summary**: single-pass aggregation into a [`SummaryReport`]
//! - **render**: text rendering of the report and of a sample table

pub mod render;
pub mod summary;

pub use render::render_sample;
pub use summary::*;
