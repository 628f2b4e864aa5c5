//! Smart Office Simulator
//!
//! A synthetic sensor dataset generator for a small smart office: temperature, light
//! and occupancy sensors sampled on a regular time grid, with values shaped by the
//! hour of day and the day of the week.
//!
//! # Overview
//!
//! The simulator walks a fixed-spacing time grid and, at every tick, asks each
//! sensor of the office roster for one reading. Readings follow hour-band tables:
//! temperature follows a daily curve with Gaussian noise, light is zero outside
//! working bands and uniform inside them, and occupancy is a Bernoulli draw whose
//! probability depends on the band. The resulting dataset can be exported as CSV
//! or JSON Lines and summarized in a text report.
//!
//! ## Key Features
//!
//! - **Deterministic runs**: an optional seed drives a single explicit RNG handle
//! - **Data-driven bands**: hour-band tables instead of inline conditionals
//! - **Flat export**: CSV with a fixed column layout, or JSON Lines
//! - **Reporting**: per-type statistics, occupancy by weekday and peak hour
//!
//! ## Quick Start
//!
//! ```rust
//! use smart_office_simulator::*;
//!
//! let config = SimulationConfig {
//!     days: 1,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let dataset = simulate(&config)?;
//! assert_eq!(dataset.len(), 1056);
//!
//! let report = SummaryReport::from_dataset(&dataset);
//! println!("{}", report);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Core types, identifiers, and configuration
//! - [`sensors`]: Sensor roster, hour bands and value generators
//! - [`readings`]: Readings and the in-memory dataset
//! - [`simulation`]: Time grid, driver, logging and errors
//! - [`export`]: CSV and JSON Lines export
//! - [`report`]: Summary statistics and text rendering
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │   Sensors   │    │  Readings   │
//! │             │    │             │    │             │
//! │ Identifiers │◄───┤ Roster      │◄───┤ Reading     │
//! │ Enums       │    │ Bands       │    │ Dataset     │
//! │ Config      │    │ Generators  │    │             │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        ▲                   ▲                   ▲
//!        │                   │                   │
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Export    │    │ Simulation  │    │   Report    │
//! │             │    │             │    │             │
//! │ CSV         │    │ Time Grid   │    │ Summary     │
//! │ JSON Lines  │    │ Driver      │    │ Sample      │
//! └─────────────┘    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod export;
pub mod readings;
pub mod report;
pub mod sensors;
pub mod simulation;

pub mod types;

// Core types and identifiers
pub use types::{
    ConfigError,
    ConfigValidationError,
    OutputFormat,
    // Identifiers
    SensorId,
    // Enums
    SensorType,
    // Configuration
    SimulationConfig,
};

// Sensors and value generation
pub use sensors::{SensorRoster, ValueGenerator};

// Readings
pub use readings::{Dataset, ReadingValue, SensorReading};

// Simulation types and functionality
pub use simulation::{simulate, SimulationDriver, SimulationError, SimulationResult, TimeGrid};

// Export and reporting
pub use export::{DatasetExporter, ExportRow};
pub use report::{render_sample, SummaryReport};
