//! Simulation orchestration and control
//!
//! This module contains the simulation driver, the time grid, logging setup and
//! error handling.
//!
//! # Overview
//!
//! - **SimulationDriver**: walks the time grid and assembles the dataset
//! - **TimeGrid**: fixed-spacing ticks with hour and weekday lookups
//! - **LoggingConfig**: tracing subscriber setup
//! - **SimulationError**: error handling for simulation operations
//!
//! # Usage Example
//!
//! ```rust
//! use smart_office_simulator::simulation::*;
//! use smart_office_simulator::types::*;
//!
//! let config = SimulationConfig {
//!     days: 1,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut driver = SimulationDriver::new(config).unwrap();
//! let dataset = driver.run().unwrap();
//! assert_eq!(dataset.len(), 96 * 11);
//! ```

pub mod driver;
pub mod error;
pub mod logging;
pub mod time_grid;

// Re-export all public types for convenience
pub use driver::*;
pub use error::*;
pub use logging::*;
pub use time_grid::*;
