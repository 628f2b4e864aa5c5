//! Time-band tables driving the value generators
//!
//! Each generator looks up the band containing the current hour and applies the
//! band's rule. Hours are half-open: a band `[start_hour, end_hour)` contains
//! `start_hour` but not `end_hour`. Hours not covered by any band fall back to the
//! generator's idle value (0 lux, unoccupied).

/// A contiguous hour range with a fixed generation rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band<R> {
    /// First hour covered by the band
    pub start_hour: u32,
    /// First hour after the band
    pub end_hour: u32,
    /// Rule applied while the band is active
    pub rule: R,
}

impl<R> Band<R> {
    /// Create a band covering `[start_hour, end_hour)`
    pub const fn new(start_hour: u32, end_hour: u32, rule: R) -> Self {
        Self { start_hour, end_hour, rule }
    }

    /// Whether the hour falls inside the band
    pub fn contains(&self, hour: u32) -> bool {
        (self.start_hour..self.end_hour).contains(&hour)
    }
}

/// Find the first band containing `hour`
pub fn find_band<R>(bands: &[Band<R>], hour: u32) -> Option<&Band<R>> {
    bands.iter().find(|band| band.contains(hour))
}

/// Light-level rule for a band
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightRule {
    /// Lights off, always 0 lux
    Dark,
    /// Uniformly distributed level in `[low, high)` lux
    Uniform {
        /// Lower bound in lux
        low: f64,
        /// Upper bound in lux
        high: f64,
    },
}

/// Centre of the temperature distribution before band offsets, in °C
pub const TEMPERATURE_BASE_CELSIUS: f64 = 22.0;

/// Standard deviation of the Gaussian temperature noise, in °C
pub const TEMPERATURE_NOISE_STD: f64 = 0.5;

/// Offsets from [`TEMPERATURE_BASE_CELSIUS`] by time of day
pub const TEMPERATURE_BANDS: [Band<f64>; 7] = [
    Band::new(0, 6, -2.0),
    Band::new(6, 9, -1.0),
    Band::new(9, 12, 0.0),
    Band::new(12, 15, 2.0),
    Band::new(15, 18, 1.0),
    Band::new(18, 21, 0.0),
    Band::new(21, 24, -1.0),
];

/// Light levels Monday to Friday
pub const WEEKDAY_LIGHT_BANDS: [Band<LightRule>; 6] = [
    Band::new(0, 6, LightRule::Dark),
    Band::new(6, 8, LightRule::Uniform { low: 100.0, high: 200.0 }),
    Band::new(8, 18, LightRule::Uniform { low: 300.0, high: 500.0 }),
    Band::new(18, 20, LightRule::Uniform { low: 100.0, high: 300.0 }),
    Band::new(20, 22, LightRule::Uniform { low: 50.0, high: 150.0 }),
    Band::new(22, 24, LightRule::Dark),
];

/// Light levels on Saturday and Sunday
pub const WEEKEND_LIGHT_BANDS: [Band<LightRule>; 3] = [
    Band::new(0, 8, LightRule::Dark),
    Band::new(8, 18, LightRule::Uniform { low: 50.0, high: 200.0 }),
    Band::new(18, 24, LightRule::Dark),
];

/// Probability that a presence sensor reports occupied, Monday to Friday
pub const WEEKDAY_OCCUPANCY_BANDS: [Band<f64>; 5] = [
    Band::new(7, 9, 0.30),
    Band::new(9, 12, 0.90),
    Band::new(12, 13, 0.40),
    Band::new(13, 18, 0.85),
    Band::new(18, 20, 0.30),
];

/// Probability that a presence sensor reports occupied on Saturday and Sunday
pub const WEEKEND_OCCUPANCY_BANDS: [Band<f64>; 1] = [Band::new(9, 17, 0.10)];

/// Temperature offset for an hour, 0.0 outside the table
pub fn temperature_offset(hour: u32) -> f64 {
    find_band(&TEMPERATURE_BANDS, hour).map(|band| band.rule).unwrap_or(0.0)
}
