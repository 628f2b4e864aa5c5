//! Error types and handling
//!
//! This module contains error types and error handling for the simulation.

use crate::types::{ConfigError, ConfigValidationError};
use thiserror::Error;

/// Errors that can occur during simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ConfigurationError(String),

    /// Dataset export failed
    #[error("Export failed: {0}")]
    ExportError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// CSV writer error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl From<ConfigValidationError> for SimulationError {
    fn from(error: ConfigValidationError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl From<ConfigError> for SimulationError {
    fn from(error: ConfigError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl SimulationError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create an export error
    pub fn export_error(msg: impl Into<String>) -> Self {
        Self::ExportError(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::ConfigurationError(_) => "Configuration",
            SimulationError::ExportError(_) => "Export",
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
            SimulationError::CsvError(_) => "CSV",
        }
    }

    /// Whether the error was caused by the user's configuration
    pub fn is_configuration(&self) -> bool {
        matches!(self, SimulationError::ConfigurationError(_))
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(SimulationError::configuration_error("bad").category(), "Configuration");
        assert_eq!(SimulationError::export_error("disk").category(), "Export");

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(SimulationError::from(io).category(), "IO");
    }

    #[test]
    fn test_validation_error_conversion() {
        let error: SimulationError = ConfigValidationError::InvalidIntervalMinutes(0).into();
        assert!(error.is_configuration());
        assert!(error.to_string().contains("Interval must be greater than 0"));
    }

    #[test]
    fn test_config_error_conversion() {
        let error: SimulationError = ConfigError::InvalidStartTime("soon".to_string()).into();
        assert!(error.is_configuration());
        assert!(error.to_string().contains("soon"));
    }
}
