//! Fixed sensor roster of the simulated office

use crate::types::{SensorId, SensorType};

/// Number of sensors installed per type, in roster order
pub const ROSTER_LAYOUT: [(SensorType, u8); 3] = [
    (SensorType::Temperature, 3),
    (SensorType::Light, 3),
    (SensorType::Occupancy, 5),
];

/// Ordered list of the sensors sampled at every tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorRoster {
    sensors: Vec<SensorId>,
}

impl SensorRoster {
    /// Build the office roster: TEMP_01..03, LUX_01..03, OCUP_01..05
    pub fn office() -> Self {
        let sensors = ROSTER_LAYOUT
            .iter()
            .flat_map(|&(sensor_type, count)| {
                (1..=count).map(move |index| SensorId::new(sensor_type, index))
            })
            .collect();

        Self { sensors }
    }

    /// Sensors in sampling order
    pub fn sensors(&self) -> &[SensorId] {
        &self.sensors
    }

    /// Total number of sensors
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    /// Whether the roster has no sensors
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Number of sensors of a given type
    pub fn count_of(&self, sensor_type: SensorType) -> usize {
        self.sensors.iter().filter(|id| id.sensor_type() == sensor_type).count()
    }
}

impl Default for SensorRoster {
    fn default() -> Self {
        Self::office()
    }
}
