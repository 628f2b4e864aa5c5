//! Core types and identifiers for the smart office simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation system.
//!
//! # Overview
//!
//! - **Identifiers**: roster-based sensor identifiers (`TEMP_01`, `LUX_02`, ...)
//! - **Enums**: sensor types, output formats and weekday helpers
//! - **Configuration**: simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use smart_office_simulator::types::*;
//!
//! let sensor = SensorId::new(SensorType::Temperature, 1);
//! assert_eq!(sensor.to_string(), "TEMP_01");
//!
//! let config = SimulationConfig {
//!     days: 1,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! assert_eq!(config.total_ticks(), 96);
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
