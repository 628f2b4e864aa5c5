//! Per-sensor-type value generators
//!
//! Each generator maps (hour, weekday) to a sampled value using the band tables in
//! [`super::bands`]. Randomness comes exclusively from the generator handle passed
//! in by the caller, so a seeded handle yields a reproducible stream.

use chrono::Weekday;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use super::bands::{
    find_band, temperature_offset, LightRule, TEMPERATURE_BASE_CELSIUS, TEMPERATURE_NOISE_STD,
    WEEKDAY_LIGHT_BANDS, WEEKDAY_OCCUPANCY_BANDS, WEEKEND_LIGHT_BANDS, WEEKEND_OCCUPANCY_BANDS,
};
use crate::readings::ReadingValue;
use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{is_weekend, SensorType};

/// Round to two decimal places
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Value generators for the three sensor types
#[derive(Debug, Clone)]
pub struct ValueGenerator {
    temperature_noise: Normal<f64>,
}

impl ValueGenerator {
    /// Create generators with the office noise model
    pub fn new() -> SimulationResult<Self> {
        Self::with_temperature_noise(TEMPERATURE_NOISE_STD)
    }

    /// Create generators with a custom temperature noise standard deviation
    pub fn with_temperature_noise(std_dev: f64) -> SimulationResult<Self> {
        let temperature_noise = Normal::new(0.0, std_dev).map_err(|e| {
            SimulationError::configuration_error(format!(
                "Invalid temperature noise std deviation {}: {}",
                std_dev, e
            ))
        })?;

        debug!("Temperature noise model: N(0, {})", std_dev);
        Ok(Self { temperature_noise })
    }

    /// Temperature in °C for the hour: base + band offset + Gaussian noise
    pub fn temperature<R: Rng + ?Sized>(&self, hour: u32, rng: &mut R) -> f64 {
        let noise = self.temperature_noise.sample(rng);
        round_to_cents(TEMPERATURE_BASE_CELSIUS + temperature_offset(hour) + noise)
    }

    /// Light level in lux for the hour and weekday
    pub fn light<R: Rng + ?Sized>(&self, hour: u32, weekday: Weekday, rng: &mut R) -> f64 {
        let bands: &[_] =
            if is_weekend(weekday) { &WEEKEND_LIGHT_BANDS } else { &WEEKDAY_LIGHT_BANDS };

        match find_band(bands, hour).map(|band| band.rule) {
            Some(LightRule::Uniform { low, high }) => round_to_cents(rng.gen_range(low..high)),
            Some(LightRule::Dark) | None => 0.0,
        }
    }

    /// Whether a presence sensor reports occupied for the hour and weekday
    pub fn occupancy<R: Rng + ?Sized>(&self, hour: u32, weekday: Weekday, rng: &mut R) -> bool {
        let bands: &[_] =
            if is_weekend(weekday) { &WEEKEND_OCCUPANCY_BANDS } else { &WEEKDAY_OCCUPANCY_BANDS };

        match find_band(bands, hour).map(|band| band.rule) {
            Some(probability) if probability > 0.0 => rng.gen_bool(probability.min(1.0)),
            _ => false,
        }
    }

    /// Sample a value for a sensor of the given type
    pub fn sample<R: Rng + ?Sized>(
        &self,
        sensor_type: SensorType,
        hour: u32,
        weekday: Weekday,
        rng: &mut R,
    ) -> ReadingValue {
        match sensor_type {
            SensorType::Temperature => ReadingValue::Measurement(self.temperature(hour, rng)),
            SensorType::Light => ReadingValue::Measurement(self.light(hour, weekday, rng)),
            SensorType::Occupancy => ReadingValue::Presence(self.occupancy(hour, weekday, rng)),
        }
    }
}
