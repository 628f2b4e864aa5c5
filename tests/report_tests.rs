//! Tests for the summary report over complete runs

use chrono::Timelike;
use smart_office_simulator::{simulate, render_sample, SensorType, SimulationConfig, SummaryReport};

fn week(seed: u64) -> SimulationConfig {
    SimulationConfig { days: 7, seed: Some(seed), ..Default::default() }
}

/// Peak hour equals an independently computed argmax of hourly occupancy
#[test]
fn test_peak_hour_matches_independent_argmax() {
    let dataset = simulate(&week(42)).unwrap();
    let report = SummaryReport::from_dataset(&dataset);

    let mut occupied = [0u32; 24];
    let mut total = [0u32; 24];
    for reading in dataset.by_type(SensorType::Occupancy) {
        let hour = reading.timestamp.hour() as usize;
        total[hour] += 1;
        occupied[hour] += reading.value.as_f64() as u32;
    }

    let mut best_hour = 0;
    let mut best_rate = -1.0;
    for hour in 0..24 {
        let rate = occupied[hour] as f64 / total[hour] as f64;
        if rate > best_rate {
            best_rate = rate;
            best_hour = hour as u32;
        }
    }

    let peak = report.peak_occupancy.unwrap();
    assert_eq!(peak.hour, best_hour);
    assert!((peak.rate - best_rate).abs() < 1e-12);
}

/// A full week covers every weekday in Monday-first order
#[test]
fn test_weekday_breakdown_for_full_week() {
    let report = SummaryReport::from_dataset(&simulate(&week(7)).unwrap());

    let names: Vec<String> =
        report.occupancy_by_weekday.iter().map(|d| d.weekday.to_string()).collect();
    assert_eq!(names, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);

    // Weekends are far quieter than weekdays
    let monday = report.occupancy_by_weekday[0].rate;
    let sunday = report.occupancy_by_weekday[6].rate;
    assert!(monday > sunday);
}

/// Aggregates stay within the generator ranges
#[test]
fn test_report_ranges() {
    let dataset = simulate(&week(3)).unwrap();
    let report = SummaryReport::from_dataset(&dataset);

    assert_eq!(report.total_readings, dataset.len());
    assert_eq!(report.period, dataset.period());

    let temperature = report.stats_for(SensorType::Temperature).unwrap();
    // Daily curve averages to 22 - 9/24
    assert!((temperature.mean - 21.625).abs() < 0.1);
    assert!(temperature.min < temperature.max);

    let light = report.max_light().unwrap();
    assert!(light <= 500.0 && light > 300.0);
    let business = report.business_hours_light_mean.unwrap();
    assert!(business > 100.0 && business < 500.0);

    let rate = report.occupancy_rate().unwrap();
    assert!(rate > 0.0 && rate < 1.0);
}

/// Rendering a real run names every section
#[test]
fn test_render_full_run() {
    let config = SimulationConfig { days: 1, seed: Some(42), ..Default::default() };
    let dataset = simulate(&config).unwrap();
    let text = SummaryReport::from_dataset(&dataset).to_string();

    assert!(text.contains("TEMPERATURE:"));
    assert!(text.contains("LIGHT:"));
    assert!(text.contains("OCCUPANCY:"));
    assert!(text.contains("Total readings: 1056"));
    assert!(text.contains("Period: 2024-01-15 00:00:00 to 2024-01-15 23:45:00"));

    let sample = render_sample(&dataset, 10);
    assert_eq!(sample.lines().count(), 11);
}
