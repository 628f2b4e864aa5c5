//! Enumeration types for the smart office simulator
//!
//! This module contains the enumeration types used throughout the simulation system,
//! including sensor types, output formats, and weekday naming helpers.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of sensors installed in the office
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorType {
    /// Ambient temperature in degrees Celsius
    Temperature,
    /// Light level in lux
    Light,
    /// Presence detector reporting 0 or 1
    Occupancy,
}

impl SensorType {
    /// All sensor types in roster order
    pub const ALL: [SensorType; 3] =
        [SensorType::Temperature, SensorType::Light, SensorType::Occupancy];

    /// Label used in exported data
    pub fn label(&self) -> &'static str {
        match self {
            SensorType::Temperature => "temperature",
            SensorType::Light => "light",
            SensorType::Occupancy => "occupancy",
        }
    }

    /// Measurement unit reported by sensors of this type
    pub fn unit(&self) -> &'static str {
        match self {
            SensorType::Temperature => "°C",
            SensorType::Light => "lux",
            SensorType::Occupancy => "boolean",
        }
    }

    /// Prefix used when rendering sensor identifiers
    pub fn id_prefix(&self) -> &'static str {
        match self {
            SensorType::Temperature => "TEMP",
            SensorType::Light => "LUX",
            SensorType::Occupancy => "OCUP",
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SensorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "temperature" | "temp" => Ok(SensorType::Temperature),
            "light" | "lux" => Ok(SensorType::Light),
            "occupancy" | "ocup" => Ok(SensorType::Occupancy),
            _ => Err(format!("Unknown sensor type: {}", s)),
        }
    }
}

/// Output format for the exported dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with a header row
    #[default]
    Csv,
    /// One JSON object per line
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Full English name of a weekday ("Monday" .. "Sunday")
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Whether the weekday falls on the weekend
pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_type_labels_and_units() {
        assert_eq!(SensorType::Temperature.label(), "temperature");
        assert_eq!(SensorType::Light.label(), "light");
        assert_eq!(SensorType::Occupancy.label(), "occupancy");

        assert_eq!(SensorType::Temperature.unit(), "°C");
        assert_eq!(SensorType::Light.unit(), "lux");
        assert_eq!(SensorType::Occupancy.unit(), "boolean");
    }

    #[test]
    fn test_sensor_type_from_str() {
        assert_eq!("temperature".parse::<SensorType>().unwrap(), SensorType::Temperature);
        assert_eq!("LUX".parse::<SensorType>().unwrap(), SensorType::Light);
        assert_eq!("Occupancy".parse::<SensorType>().unwrap(), SensorType::Occupancy);
        assert!("humidity".parse::<SensorType>().is_err());
    }

    #[test]
    fn test_sensor_type_serialization() {
        let json = serde_json::to_string(&SensorType::Light).unwrap();
        assert_eq!(json, "\"light\"");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("parquet".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default(), OutputFormat::Csv);
    }

    #[test]
    fn test_weekday_helpers() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
        assert!(is_weekend(Weekday::Sat));
        assert!(is_weekend(Weekday::Sun));
        assert!(!is_weekend(Weekday::Fri));
    }
}
