//! Summary statistics over a generated dataset
//!
//! All aggregation happens in a single pass over the readings. Weekday and hourly
//! breakdowns are kept in fixed-size arrays so their iteration order, and with it
//! the peak-hour tie-break (lowest hour wins), is deterministic.

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

use crate::readings::Dataset;
use crate::simulation::is_business_hour;
use crate::types::SensorType;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Running count/sum/min/max accumulator
#[derive(Debug, Clone, Copy, PartialEq)]
struct Accumulator {
    count: usize,
    sum: f64,
    min: f64,
    max: f64,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self { count: 0, sum: 0.0, min: f64::INFINITY, max: f64::NEG_INFINITY }
    }
}

impl Accumulator {
    fn push(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    fn stats(&self) -> Option<ValueStats> {
        Some(ValueStats { count: self.count, mean: self.mean()?, min: self.min, max: self.max })
    }
}

/// Count, mean, minimum and maximum of a set of values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueStats {
    /// Number of values
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

/// Mean occupancy for one weekday
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekdayRate {
    /// Day of week
    pub weekday: Weekday,
    /// Fraction of occupied readings (0.0-1.0)
    pub rate: f64,
}

/// Mean occupancy for one hour of day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyRate {
    /// Hour of day (0-23)
    pub hour: u32,
    /// Fraction of occupied readings (0.0-1.0)
    pub rate: f64,
}

/// Descriptive statistics of a dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    /// Number of readings in the dataset
    pub total_readings: usize,
    /// First and last timestamp covered
    pub period: Option<(NaiveDateTime, NaiveDateTime)>,
    /// Per-type value statistics; types without readings are absent
    pub by_type: BTreeMap<SensorType, ValueStats>,
    /// Mean light level during business hours
    pub business_hours_light_mean: Option<f64>,
    /// Mean occupancy per weekday, Monday first, only days present in the data
    pub occupancy_by_weekday: Vec<WeekdayRate>,
    /// Mean occupancy per hour of day, ascending, only hours present in the data
    pub hourly_occupancy: Vec<HourlyRate>,
    /// Hour with the highest mean occupancy; ties resolve to the lowest hour
    pub peak_occupancy: Option<HourlyRate>,
}

impl SummaryReport {
    /// Aggregate a dataset
    #[instrument(skip(dataset), fields(readings = dataset.len()))]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut per_type: BTreeMap<SensorType, Accumulator> = BTreeMap::new();
        let mut business_light = Accumulator::default();
        let mut weekday_occupancy = [Accumulator::default(); 7];
        let mut hourly_occupancy = [Accumulator::default(); 24];

        for reading in dataset {
            let value = reading.value.as_f64();
            per_type.entry(reading.sensor_type).or_default().push(value);

            match reading.sensor_type {
                SensorType::Light if is_business_hour(reading.hour()) => business_light.push(value),
                SensorType::Occupancy => {
                    let day = reading.weekday().num_days_from_monday() as usize;
                    weekday_occupancy[day].push(value);
                    hourly_occupancy[reading.hour() as usize].push(value);
                }
                _ => {}
            }
        }

        let by_type = per_type
            .into_iter()
            .filter_map(|(sensor_type, acc)| acc.stats().map(|stats| (sensor_type, stats)))
            .collect();

        let occupancy_by_weekday = WEEKDAYS
            .iter()
            .zip(weekday_occupancy.iter())
            .filter_map(|(&weekday, acc)| acc.mean().map(|rate| WeekdayRate { weekday, rate }))
            .collect();

        let hourly_occupancy: Vec<HourlyRate> = hourly_occupancy
            .iter()
            .enumerate()
            .filter_map(|(hour, acc)| acc.mean().map(|rate| HourlyRate { hour: hour as u32, rate }))
            .collect();

        let peak_occupancy = peak_hour(&hourly_occupancy);
        debug!("Peak occupancy hour: {:?}", peak_occupancy);

        Self {
            total_readings: dataset.len(),
            period: dataset.period(),
            by_type,
            business_hours_light_mean: business_light.mean(),
            occupancy_by_weekday,
            hourly_occupancy,
            peak_occupancy,
        }
    }

    /// Statistics for one sensor type
    pub fn stats_for(&self, sensor_type: SensorType) -> Option<&ValueStats> {
        self.by_type.get(&sensor_type)
    }

    /// Overall occupancy rate (0.0-1.0)
    pub fn occupancy_rate(&self) -> Option<f64> {
        self.stats_for(SensorType::Occupancy).map(|stats| stats.mean)
    }

    /// Highest light level recorded
    pub fn max_light(&self) -> Option<f64> {
        self.stats_for(SensorType::Light).map(|stats| stats.max)
    }
}

/// First hour with the strictly highest rate, scanning in ascending hour order
fn peak_hour(hourly: &[HourlyRate]) -> Option<HourlyRate> {
    hourly.iter().copied().fold(None, |best, current| match best {
        Some(best) if best.rate >= current.rate => Some(best),
        _ => Some(current),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readings::{ReadingValue, SensorReading};
    use crate::types::SensorId;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    fn occupancy(day: u32, hour: u32, present: bool) -> SensorReading {
        let sensor = SensorId::new(SensorType::Occupancy, 1);
        SensorReading::new(at(day, hour), sensor, ReadingValue::Presence(present))
    }

    fn light(hour: u32, lux: f64) -> SensorReading {
        let sensor = SensorId::new(SensorType::Light, 1);
        SensorReading::new(at(15, hour), sensor, ReadingValue::Measurement(lux))
    }

    #[test]
    fn test_empty_dataset_report() {
        let report = SummaryReport::from_dataset(&Dataset::default());

        assert_eq!(report.total_readings, 0);
        assert!(report.period.is_none());
        assert!(report.by_type.is_empty());
        assert!(report.business_hours_light_mean.is_none());
        assert!(report.occupancy_rate().is_none());
        assert!(report.occupancy_by_weekday.is_empty());
        assert!(report.peak_occupancy.is_none());
    }

    #[test]
    fn test_business_hours_light_includes_hour_18() {
        let dataset = Dataset::from_readings(vec![
            light(7, 1000.0),
            light(8, 300.0),
            light(18, 100.0),
            light(19, 1000.0),
        ]);

        let report = SummaryReport::from_dataset(&dataset);

        assert_eq!(report.business_hours_light_mean, Some(200.0));
        assert_eq!(report.max_light(), Some(1000.0));
        let stats = report.stats_for(SensorType::Light).unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.min, 100.0);
        assert_eq!(stats.mean, 600.0);
    }

    #[test]
    fn test_occupancy_by_weekday_only_lists_present_days() {
        // 2024-01-15 is a Monday, 2024-01-17 a Wednesday
        let dataset = Dataset::from_readings(vec![
            occupancy(17, 10, true),
            occupancy(15, 10, true),
            occupancy(15, 11, false),
        ]);

        let report = SummaryReport::from_dataset(&dataset);

        assert_eq!(
            report.occupancy_by_weekday,
            vec![
                WeekdayRate { weekday: Weekday::Mon, rate: 0.5 },
                WeekdayRate { weekday: Weekday::Wed, rate: 1.0 },
            ]
        );
        assert!((report.occupancy_rate().unwrap() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_peak_hour_ties_resolve_to_lowest_hour() {
        let dataset = Dataset::from_readings(vec![
            occupancy(15, 14, true),
            occupancy(15, 9, true),
            occupancy(15, 3, false),
        ]);

        let report = SummaryReport::from_dataset(&dataset);

        assert_eq!(report.peak_occupancy, Some(HourlyRate { hour: 9, rate: 1.0 }));
    }

    #[test]
    fn test_peak_hour_all_zero_is_first_hour_present() {
        let dataset =
            Dataset::from_readings(vec![occupancy(15, 5, false), occupancy(15, 2, false)]);
        let report = SummaryReport::from_dataset(&dataset);
        assert_eq!(report.peak_occupancy.map(|p| p.hour), Some(2));
    }
}
