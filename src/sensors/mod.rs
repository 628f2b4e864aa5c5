//! Sensor roster and value generation
//!
//! - **bands**: hour-band tables for temperature, light and occupancy
//! - **roster**: the fixed set of office sensors (3 temperature, 3 light, 5 occupancy)
//! - **generator**: per-type value generators driven by the band tables

pub mod bands;
pub mod generator;
pub mod roster;

pub use bands::{Band, LightRule};
pub use generator::*;
pub use roster::*;
