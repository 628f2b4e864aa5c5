//! Simulation time grid
//!
//! This module contains the discrete time grid the driver walks: a start timestamp,
//! a fixed spacing and a tick count derived from the simulated period.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike, Weekday};
use tracing::debug;

use crate::types::SimulationConfig;

/// Business hours used for light aggregation: 8:00 through the 18:00 hour
pub const BUSINESS_HOURS: std::ops::RangeInclusive<u32> = 8..=18;

/// One discrete timestamp of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Position in the grid, starting at 0
    pub index: u64,
    /// Timestamp of the tick
    pub timestamp: NaiveDateTime,
}

impl Tick {
    /// Hour of day (0-23)
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Day of week
    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }
}

/// Fixed-spacing time grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeGrid {
    start: NaiveDateTime,
    interval_minutes: u32,
    total_ticks: u64,
}

impl TimeGrid {
    /// Create a grid of `total_ticks` ticks spaced `interval_minutes` apart
    pub fn new(start: NaiveDateTime, interval_minutes: u32, total_ticks: u64) -> Self {
        debug!(
            "Time grid: start {}, interval {} min, {} ticks",
            start, interval_minutes, total_ticks
        );
        Self { start, interval_minutes, total_ticks }
    }

    /// Grid covering the configured period
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.start_time, config.interval_minutes, config.total_ticks())
    }

    /// Number of ticks in the grid
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Timestamp of the first tick
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Timestamp of tick `index`, `None` past the end of the calendar
    pub fn timestamp_at(&self, index: u64) -> Option<NaiveDateTime> {
        let minutes = i64::try_from(index).ok()?.checked_mul(i64::from(self.interval_minutes))?;
        self.start.checked_add_signed(Duration::try_minutes(minutes)?)
    }

    /// Iterate over the ticks in chronological order
    ///
    /// Stops early if a tick would fall outside the representable calendar; a
    /// validated configuration never reaches that point.
    pub fn ticks(&self) -> impl Iterator<Item = Tick> + '_ {
        (0..self.total_ticks).map_while(move |index| {
            self.timestamp_at(index).map(|timestamp| Tick { index, timestamp })
        })
    }
}

/// Check if the hour is inside business hours (8:00 through the 18:00 hour)
pub fn is_business_hour(hour: u32) -> bool {
    BUSINESS_HOURS.contains(&hour)
}
