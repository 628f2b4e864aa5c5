//! Sensor identifier type
//!
//! Sensors are identified by their type and a 1-based position in the roster,
//! rendered as `TEMP_01`, `LUX_02`, `OCUP_05` and so on.

use super::SensorType;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a sensor in the office roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SensorId {
    sensor_type: SensorType,
    index: u8,
}

impl SensorId {
    /// Create an identifier for the `index`-th sensor (1-based) of a type
    pub fn new(sensor_type: SensorType, index: u8) -> Self {
        Self { sensor_type, index }
    }

    /// Type of the identified sensor
    pub fn sensor_type(&self) -> SensorType {
        self.sensor_type
    }

    /// 1-based position of the sensor within its type
    pub fn index(&self) -> u8 {
        self.index
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{:02}", self.sensor_type.id_prefix(), self.index)
    }
}

impl FromStr for SensorId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, number) =
            s.split_once('_').ok_or_else(|| format!("Malformed sensor id: {}", s))?;

        let sensor_type = SensorType::ALL
            .into_iter()
            .find(|t| t.id_prefix() == prefix)
            .ok_or_else(|| format!("Unknown sensor id prefix: {}", prefix))?;

        let index = number
            .parse::<u8>()
            .map_err(|e| format!("Invalid sensor index in {}: {}", s, e))?;

        Ok(Self::new(sensor_type, index))
    }
}

impl Serialize for SensorId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SensorId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_id_display() {
        assert_eq!(SensorId::new(SensorType::Temperature, 1).to_string(), "TEMP_01");
        assert_eq!(SensorId::new(SensorType::Light, 3).to_string(), "LUX_03");
        assert_eq!(SensorId::new(SensorType::Occupancy, 5).to_string(), "OCUP_05");
    }

    #[test]
    fn test_sensor_id_parsing() {
        let id: SensorId = "OCUP_04".parse().unwrap();
        assert_eq!(id.sensor_type(), SensorType::Occupancy);
        assert_eq!(id.index(), 4);

        assert!("HUM_01".parse::<SensorId>().is_err());
        assert!("TEMP".parse::<SensorId>().is_err());
        assert!("TEMP_xx".parse::<SensorId>().is_err());
    }

    #[test]
    fn test_sensor_id_serializes_as_string() {
        let id = SensorId::new(SensorType::Light, 2);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"LUX_02\"");

        let back: SensorId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
