//! Simulation driver
//!
//! This module contains the `SimulationDriver`, which walks the time grid and
//! assembles one reading per (tick, sensor) pair.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::readings::{Dataset, SensorReading};
use crate::sensors::{SensorRoster, ValueGenerator};
use crate::simulation::{SimulationResult, TimeGrid};
use crate::types::SimulationConfig;

/// Generates the full dataset for one configuration
///
/// The driver owns the only random generator of the run. It is seeded from the
/// configuration when a seed is given and from OS entropy otherwise, and every
/// generator call draws from it in a fixed order: tick by tick, roster order
/// within a tick.
#[derive(Debug)]
pub struct SimulationDriver {
    config: SimulationConfig,
    roster: SensorRoster,
    generator: ValueGenerator,
    rng: StdRng,
}

impl SimulationDriver {
    /// Create a driver for a validated configuration
    ///
    /// # Errors
    /// Returns a configuration error if the configuration does not validate.
    #[instrument(
        skip(config),
        fields(days = config.days, interval_minutes = config.interval_minutes)
    )]
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => {
                info!("Using deterministic seed: {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => {
                debug!("Using entropy-based random seed");
                StdRng::from_entropy()
            }
        };

        Ok(Self { config, roster: SensorRoster::office(), generator: ValueGenerator::new()?, rng })
    }

    /// Configuration the driver runs with
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Sensors sampled at every tick
    pub fn roster(&self) -> &SensorRoster {
        &self.roster
    }

    /// Number of readings a full run produces
    pub fn expected_readings(&self) -> u64 {
        self.config.total_ticks() * self.roster.len() as u64
    }

    /// Walk the time grid and generate every reading
    #[instrument(
        skip(self),
        fields(total_ticks = self.config.total_ticks(), sensors = self.roster.len())
    )]
    pub fn run(&mut self) -> SimulationResult<Dataset> {
        let start_time = Instant::now();
        let grid = TimeGrid::from_config(&self.config);
        let ticks_per_day = grid.total_ticks() / u64::from(self.config.days).max(1);

        info!(
            "Generating {} readings ({} ticks x {} sensors)",
            self.expected_readings(),
            grid.total_ticks(),
            self.roster.len()
        );

        let mut readings = Vec::with_capacity(self.expected_readings() as usize);

        for tick in grid.ticks() {
            let hour = tick.hour();
            let weekday = tick.weekday();

            for &sensor_id in self.roster.sensors() {
                let value =
                    self.generator.sample(sensor_id.sensor_type(), hour, weekday, &mut self.rng);
                readings.push(SensorReading::new(tick.timestamp, sensor_id, value));
            }

            if ticks_per_day > 0 && (tick.index + 1) % ticks_per_day == 0 {
                debug!(
                    "Completed day {} ({} readings so far)",
                    (tick.index + 1) / ticks_per_day,
                    readings.len()
                );
            }
        }

        info!(
            "Generated {} readings in {:.3} seconds",
            readings.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(Dataset::from_readings(readings))
    }
}

/// Validate the configuration and generate its dataset in one call
pub fn simulate(config: &SimulationConfig) -> SimulationResult<Dataset> {
    SimulationDriver::new(config.clone())?.run()
}
