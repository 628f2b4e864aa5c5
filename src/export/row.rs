//! Flat export row
//!
//! The column names and order are part of the file format consumed downstream:
//! `timestamp, sensor_id, tipo_sensor, valor, unidade, weekday_num, dia_semana, hora, data`.

use chrono::Datelike;
use serde::Serialize;

use crate::readings::SensorReading;
use crate::types::weekday_name;

/// Header of the CSV export, in column order
pub const EXPORT_COLUMNS: [&str; 9] = [
    "timestamp",
    "sensor_id",
    "tipo_sensor",
    "valor",
    "unidade",
    "weekday_num",
    "dia_semana",
    "hora",
    "data",
];

/// One exported row, derived from a reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    /// `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
    /// Sensor identifier such as `TEMP_01`
    pub sensor_id: String,
    /// Sensor type label
    pub tipo_sensor: &'static str,
    /// Value; presence is written as 0 or 1
    pub valor: String,
    /// Measurement unit
    pub unidade: String,
    /// Day of week, Monday = 0
    pub weekday_num: u32,
    /// English weekday name
    pub dia_semana: &'static str,
    /// Hour of day
    pub hora: u32,
    /// `YYYY-MM-DD`
    pub data: String,
}

impl From<&SensorReading> for ExportRow {
    fn from(reading: &SensorReading) -> Self {
        let weekday = reading.weekday();

        Self {
            timestamp: reading.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            sensor_id: reading.sensor_id.to_string(),
            tipo_sensor: reading.sensor_type.label(),
            valor: reading.value.to_string(),
            unidade: reading.unit.clone(),
            weekday_num: weekday.num_days_from_monday(),
            dia_semana: weekday_name(weekday),
            hora: reading.hour(),
            data: reading.timestamp.date().format("%Y-%m-%d").to_string(),
        }
    }
}
