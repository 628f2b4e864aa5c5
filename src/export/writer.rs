//! Dataset export to CSV or JSON Lines

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, instrument};

use super::{ExportRow, EXPORT_COLUMNS};
use crate::readings::Dataset;
use crate::simulation::{SimulationError, SimulationResult};
use crate::types::OutputFormat;

/// Writes a dataset as a flat file, one row per reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatasetExporter {
    format: OutputFormat,
}

impl DatasetExporter {
    /// Create an exporter for the given format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format written by this exporter
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write the dataset to `path`, creating missing parent directories
    ///
    /// Returns the number of data rows written.
    #[instrument(skip(self, dataset, path), fields(rows = dataset.len(), format = %self.format))]
    pub fn export_to_path<P: AsRef<Path>>(
        &self,
        dataset: &Dataset,
        path: P,
    ) -> SimulationResult<usize> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                SimulationError::export_error(format!(
                    "Failed to create output directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let file = File::create(path).map_err(|e| {
            SimulationError::export_error(format!(
                "Failed to create output file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let rows = self.write_to(dataset, BufWriter::new(file))?;
        info!("Wrote {} rows to {}", rows, path.display());
        Ok(rows)
    }

    /// Write the dataset to any writer
    pub fn write_to<W: Write>(&self, dataset: &Dataset, writer: W) -> SimulationResult<usize> {
        match self.format {
            OutputFormat::Csv => write_csv(dataset, writer),
            OutputFormat::Json => write_json_lines(dataset, writer),
        }
    }
}

fn write_csv<W: Write>(dataset: &Dataset, writer: W) -> SimulationResult<usize> {
    // Header is written explicitly so an empty dataset still yields a valid file
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(EXPORT_COLUMNS)?;

    let mut rows = 0;
    for reading in dataset {
        csv_writer.serialize(ExportRow::from(reading))?;
        rows += 1;
    }

    csv_writer.flush()?;
    debug!("CSV export complete: {} rows", rows);
    Ok(rows)
}

fn write_json_lines<W: Write>(dataset: &Dataset, writer: W) -> SimulationResult<usize> {
    let mut writer = writer;

    let mut rows = 0;
    for reading in dataset {
        serde_json::to_writer(&mut writer, &ExportRow::from(reading))?;
        writeln!(writer)?;
        rows += 1;
    }

    writer.flush()?;
    debug!("JSON Lines export complete: {} rows", rows);
    Ok(rows)
}
