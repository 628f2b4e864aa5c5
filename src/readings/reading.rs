//! Sensor reading record
//!
//! A reading is created once by the simulation driver and never modified.

use crate::types::{SensorId, SensorType};
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value reported by a sensor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReadingValue {
    /// Continuous measurement (°C or lux), rounded to 2 decimals
    Measurement(f64),
    /// Presence flag, exported as 0 or 1
    Presence(bool),
}

impl ReadingValue {
    /// Numeric view of the value; presence maps to 0.0 / 1.0
    pub fn as_f64(&self) -> f64 {
        match self {
            ReadingValue::Measurement(value) => *value,
            ReadingValue::Presence(true) => 1.0,
            ReadingValue::Presence(false) => 0.0,
        }
    }
}

impl fmt::Display for ReadingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadingValue::Measurement(value) => write!(f, "{}", value),
            ReadingValue::Presence(present) => write!(f, "{}", u8::from(*present)),
        }
    }
}

/// One (timestamp, sensor) value record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Tick at which the value was sampled
    pub timestamp: NaiveDateTime,
    /// Sensor that produced the value
    pub sensor_id: SensorId,
    /// Kind of sensor
    pub sensor_type: SensorType,
    /// Sampled value
    pub value: ReadingValue,
    /// Measurement unit
    pub unit: String,
}

impl SensorReading {
    /// Create a reading; type and unit are derived from the sensor id
    pub fn new(timestamp: NaiveDateTime, sensor_id: SensorId, value: ReadingValue) -> Self {
        let sensor_type = sensor_id.sensor_type();
        Self { timestamp, sensor_id, sensor_type, value, unit: sensor_type.unit().to_string() }
    }

    /// Hour of day of the reading (0-23)
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Day of week of the reading
    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }
}
