//! Plain-text rendering of the summary report and the sample table

use std::fmt::{self, Write as _};

use super::SummaryReport;
use crate::export::{ExportRow, EXPORT_COLUMNS};
use crate::readings::Dataset;
use crate::simulation::BUSINESS_HOURS;
use crate::types::{weekday_name, SensorType};

const RULE_WIDTH: usize = 60;

impl SummaryReport {
    /// Render the report as descriptive text
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{}", rule)?;
        writeln!(f, "SUMMARY REPORT - SMART OFFICE SENSORS")?;
        writeln!(f, "{}", rule)?;

        writeln!(f, "\nTEMPERATURE:")?;
        match self.stats_for(SensorType::Temperature) {
            Some(stats) => {
                writeln!(f, "  Mean: {:.2}°C", stats.mean)?;
                writeln!(f, "  Minimum: {:.2}°C", stats.min)?;
                writeln!(f, "  Maximum: {:.2}°C", stats.max)?;
            }
            None => writeln!(f, "  No readings")?,
        }

        writeln!(f, "\nLIGHT:")?;
        match self.stats_for(SensorType::Light) {
            Some(stats) => {
                if let Some(mean) = self.business_hours_light_mean {
                    writeln!(
                        f,
                        "  Mean during business hours ({}h-{}h): {:.2} lux",
                        BUSINESS_HOURS.start(),
                        BUSINESS_HOURS.end(),
                        mean
                    )?;
                }
                writeln!(f, "  Overall mean: {:.2} lux", stats.mean)?;
                writeln!(f, "  Minimum recorded: {:.2} lux", stats.min)?;
                writeln!(f, "  Maximum recorded: {:.2} lux", stats.max)?;
            }
            None => writeln!(f, "  No readings")?,
        }

        writeln!(f, "\nOCCUPANCY:")?;
        match self.stats_for(SensorType::Occupancy) {
            Some(stats) => {
                let occupied = (stats.mean * stats.count as f64).round() as usize;
                writeln!(f, "  Average occupancy rate: {:.1}%", stats.mean * 100.0)?;
                writeln!(f, "  Occupied readings: {} of {}", occupied, stats.count)?;
                writeln!(f, "  Range: {} to {}", stats.min, stats.max)?;
                writeln!(f, "\n  Occupancy by weekday:")?;
                for day in &self.occupancy_by_weekday {
                    writeln!(f, "    {}: {:.1}%", weekday_name(day.weekday), day.rate * 100.0)?;
                }
                if let Some(peak) = self.peak_occupancy {
                    writeln!(
                        f,
                        "\n  Peak occupancy hour: {}:00 ({:.1}% occupancy)",
                        peak.hour,
                        peak.rate * 100.0
                    )?;
                }
            }
            None => writeln!(f, "  No readings")?,
        }

        writeln!(f, "\n{}", rule)?;
        writeln!(f, "Total readings: {}", self.total_readings)?;
        match self.period {
            Some((first, last)) => writeln!(
                f,
                "Period: {} to {}",
                first.format("%Y-%m-%d %H:%M:%S"),
                last.format("%Y-%m-%d %H:%M:%S")
            )?,
            None => writeln!(f, "Period: empty")?,
        }
        write!(f, "{}", rule)
    }
}

/// Render the first `limit` readings as an aligned table using the export columns
pub fn render_sample(dataset: &Dataset, limit: usize) -> String {
    let rows: Vec<[String; 9]> = dataset
        .iter()
        .take(limit)
        .map(|reading| {
            let row = ExportRow::from(reading);
            [
                row.timestamp,
                row.sensor_id,
                row.tipo_sensor.to_string(),
                row.valor,
                row.unidade,
                row.weekday_num.to_string(),
                row.dia_semana.to_string(),
                row.hora.to_string(),
                row.data,
            ]
        })
        .collect();

    let mut widths = EXPORT_COLUMNS.map(|column| column.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, EXPORT_COLUMNS.iter().copied(), &widths);
    for row in &rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, &width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    // Writing to a String cannot fail
    let _ = writeln!(out, "{}", line.trim_end());
}
