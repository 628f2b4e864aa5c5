//! Sensor readings and the dataset they form
//!
//! - **SensorReading**: one immutable (timestamp, sensor) value record
//! - **ReadingValue**: continuous measurement or presence flag
//! - **Dataset**: ordered readings of one simulation run

pub mod dataset;
pub mod reading;

pub use dataset::*;
pub use reading::*;
