//! Ordered collection of readings produced by one simulation run

use super::SensorReading;
use crate::types::SensorType;
use chrono::NaiveDateTime;

/// Readings in generation order: tick-major, roster order within a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    readings: Vec<SensorReading>,
}

impl Dataset {
    /// Wrap already-generated readings
    pub fn from_readings(readings: Vec<SensorReading>) -> Self {
        Self { readings }
    }

    /// All readings in order
    pub fn readings(&self) -> &[SensorReading] {
        &self.readings
    }

    /// Iterate over readings in order
    pub fn iter(&self) -> std::slice::Iter<'_, SensorReading> {
        self.readings.iter()
    }

    /// Number of readings
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the dataset has no readings
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Readings of one sensor type, in order
    pub fn by_type(&self, sensor_type: SensorType) -> impl Iterator<Item = &SensorReading> + '_ {
        self.readings.iter().filter(move |r| r.sensor_type == sensor_type)
    }

    /// First and last timestamps covered, if any
    pub fn period(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let first = self.readings.iter().map(|r| r.timestamp).min()?;
        let last = self.readings.iter().map(|r| r.timestamp).max()?;
        Some((first, last))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a SensorReading;
    type IntoIter = std::slice::Iter<'a, SensorReading>;

    fn into_iter(self) -> Self::IntoIter {
        self.readings.iter()
    }
}
