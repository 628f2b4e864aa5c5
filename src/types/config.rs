//! Configuration structures for the smart office simulator
//!
//! This module contains the simulation configuration structure and validation logic
//! used to control the time grid, randomness, and export of the simulation.

use super::OutputFormat;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default values applied when neither a config file nor the CLI sets a field
pub mod defaults {
    /// Default export path
    pub const OUTPUT_PATH: &str = "smart_office_data.csv";

    /// Default spacing between ticks, in minutes
    pub const INTERVAL_MINUTES: u32 = 15;

    /// Default number of simulated days
    pub const DAYS: u32 = 7;

    /// Default number of rows shown in the console sample
    pub const SAMPLE_ROWS: usize = 10;

    /// Default simulation start (Monday 2024-01-15, midnight)
    pub const START_DATE: (i32, u32, u32) = (2024, 1, 15);

    /// Upper bound on time-grid ticks per run (about 28 years at 15 minutes)
    pub const MAX_TOTAL_TICKS: u64 = 1_000_000;
}

/// Accepted layouts for `--start` and the `start_time` config field
const START_TIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "smart-office-simulator",
    version = "0.1.0",
    about = "Smart Office Simulator - Generates synthetic office sensor readings",
    long_about = "Generates a time series of temperature, light and occupancy readings for a fixed roster of office sensors, exports it as a flat file and prints a summary report.

EXAMPLES:
    # Run with default settings (7 days, 15-minute interval)
    smart-office-simulator

    # Reproducible run written to a custom path
    smart-office-simulator --seed 42 -o data/office.csv

    # Use a configuration file
    smart-office-simulator --config office.json

    # Generate configuration template
    smart-office-simulator --print-config > office.json

    # Validate configuration without running
    smart-office-simulator --config office.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Output path for the generated dataset
    #[arg(short, long, help = "Output file path (default: smart_office_data.csv)")]
    pub out: Option<String>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Simulation start timestamp
    #[arg(
        long,
        help = "Start timestamp (YYYY-MM-DD HH:MM:SS)",
        long_help = "Timestamp of the first tick. Accepts 'YYYY-MM-DD HH:MM:SS', 'YYYY-MM-DDTHH:MM:SS' or 'YYYY-MM-DD HH:MM'. Default: 2024-01-15 00:00:00"
    )]
    pub start: Option<String>,

    /// Minutes between consecutive ticks
    #[arg(
        long,
        help = "Minutes between readings",
        long_help = "Spacing of the time grid in minutes. Must be greater than 0 and no longer than the simulated period. Default: 15"
    )]
    pub interval_minutes: Option<u32>,

    /// Number of days to simulate
    #[arg(
        long,
        help = "Number of days to simulate",
        long_help = "Number of days to simulate. Must be greater than 0. Default: 7"
    )]
    pub days: Option<u32>,

    /// Output format for the exported dataset
    #[arg(
        long,
        help = "Output format (csv or json)",
        long_help = "Format of the exported dataset. Supported formats: csv, json (JSON Lines). Default: csv"
    )]
    pub format: Option<String>,

    /// Number of rows printed in the data sample
    #[arg(long, help = "Number of rows shown in the data sample")]
    pub sample_rows: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Directory for rolling JSON log files
    #[arg(long, help = "Also write JSON logs to daily files in this directory")]
    pub log_dir: Option<String>,

    /// Emit console logs as JSON
    #[arg(long, help = "Write console logs as JSON lines instead of plain text")]
    pub log_json: bool,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Timestamp of the first tick
    pub start_time: Option<String>,

    /// Minutes between consecutive ticks
    pub interval_minutes: Option<u32>,

    /// Number of days to simulate
    pub days: Option<u32>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output path for the generated dataset
    pub output_path: Option<String>,

    /// Output format for the exported dataset
    pub output_format: Option<OutputFormat>,

    /// Number of rows printed in the data sample
    pub sample_rows: Option<usize>,
}

/// Configuration for the smart office simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Timestamp of the first tick
    pub start_time: NaiveDateTime,

    /// Minutes between consecutive ticks
    pub interval_minutes: u32,

    /// Number of days to simulate
    pub days: u32,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output path for the generated dataset
    pub output_path: String,

    /// Output format for the exported dataset
    pub output_format: OutputFormat,

    /// Number of rows printed in the data sample
    pub sample_rows: usize,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),

    /// Start timestamp could not be parsed
    #[error("Invalid start time '{0}' (expected YYYY-MM-DD HH:MM:SS)")]
    InvalidStartTime(String),

    /// Output format is not recognised
    #[error("{0}")]
    InvalidOutputFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Interval is invalid
    #[error("Interval must be greater than 0 minutes, got {0}")]
    InvalidIntervalMinutes(u32),

    /// Days count is invalid
    #[error("Days count must be greater than 0, got {0}")]
    InvalidDaysCount(u32),

    /// Interval longer than the simulated period would produce no ticks
    ///
    /// Rejected up front so an empty grid fails before generation starts
    /// instead of yielding a dataset with nothing to report.
    #[error("Interval of {interval_minutes} minutes exceeds the simulated period of {period_minutes} minutes")]
    IntervalExceedsPeriod {
        /// Configured interval
        interval_minutes: u32,
        /// Length of the simulated period
        period_minutes: u64,
    },

    /// The grid would need more ticks than a single run allows
    #[error("Configuration yields {ticks} time steps, more than the maximum of {max}")]
    TooManyTicks {
        /// Ticks the configuration would produce
        ticks: u64,
        /// Largest accepted tick count
        max: u64,
    },

    /// The simulated period runs past the representable calendar
    #[error("Period of {period_minutes} minutes from {start_time} exceeds the supported date range")]
    PeriodOutOfRange {
        /// Configured start
        start_time: NaiveDateTime,
        /// Length of the simulated period
        period_minutes: u64,
    },

    /// Output path is empty
    #[error("Output path must not be empty")]
    EmptyOutputPath,
}

/// Parse a start timestamp in any of the accepted layouts
pub fn parse_start_time(value: &str) -> Result<NaiveDateTime, ConfigError> {
    let trimmed = value.trim();

    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| ConfigError::InvalidStartTime(value.to_string()))
}

fn default_start_time() -> NaiveDateTime {
    let (year, month, day) = defaults::START_DATE;
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            start_time: default_start_time(),
            interval_minutes: defaults::INTERVAL_MINUTES,
            days: defaults::DAYS,
            seed: None,
            output_path: defaults::OUTPUT_PATH.to_string(),
            output_format: OutputFormat::default(),
            sample_rows: defaults::SAMPLE_ROWS,
        }
    }
}

impl SimulationConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args)?;

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Self::from_config_file(config_file)
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let start_time = match config_file.start_time {
            Some(value) => parse_start_time(&value)?,
            None => defaults.start_time,
        };

        Ok(Self {
            start_time,
            interval_minutes: config_file.interval_minutes.unwrap_or(defaults.interval_minutes),
            days: config_file.days.unwrap_or(defaults.days),
            seed: config_file.seed.or(defaults.seed),
            output_path: config_file.output_path.unwrap_or(defaults.output_path),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            sample_rows: config_file.sample_rows.unwrap_or(defaults.sample_rows),
        })
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) -> Result<(), ConfigError> {
        if let Some(value) = args.start {
            config.start_time = parse_start_time(&value)?;
        }
        if let Some(value) = args.interval_minutes {
            config.interval_minutes = value;
        }
        if let Some(value) = args.days {
            config.days = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.out {
            config.output_path = value;
        }
        if let Some(value) = args.format {
            config.output_format = value.parse().map_err(ConfigError::InvalidOutputFormat)?;
        }
        if let Some(value) = args.sample_rows {
            config.sample_rows = value;
        }
        Ok(())
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.interval_minutes == 0 {
            return Err(ConfigValidationError::InvalidIntervalMinutes(self.interval_minutes));
        }

        if self.days == 0 {
            return Err(ConfigValidationError::InvalidDaysCount(self.days));
        }

        if u64::from(self.interval_minutes) > self.period_minutes() {
            return Err(ConfigValidationError::IntervalExceedsPeriod {
                interval_minutes: self.interval_minutes,
                period_minutes: self.period_minutes(),
            });
        }

        if self.total_ticks() > defaults::MAX_TOTAL_TICKS {
            return Err(ConfigValidationError::TooManyTicks {
                ticks: self.total_ticks(),
                max: defaults::MAX_TOTAL_TICKS,
            });
        }

        if self.end_time().is_none() {
            return Err(ConfigValidationError::PeriodOutOfRange {
                start_time: self.start_time,
                period_minutes: self.period_minutes(),
            });
        }

        if self.output_path.trim().is_empty() {
            return Err(ConfigValidationError::EmptyOutputPath);
        }

        Ok(())
    }

    /// Length of the simulated period in minutes
    pub fn period_minutes(&self) -> u64 {
        u64::from(self.days) * 24 * 60
    }

    /// End of the simulated period, `None` if it overflows the calendar
    pub fn end_time(&self) -> Option<NaiveDateTime> {
        let minutes = i64::try_from(self.period_minutes()).ok()?;
        self.start_time.checked_add_signed(Duration::try_minutes(minutes)?)
    }

    /// Number of ticks in the time grid (`period / interval`, truncated)
    pub fn total_ticks(&self) -> u64 {
        if self.interval_minutes == 0 {
            return 0;
        }
        self.period_minutes() / u64::from(self.interval_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn empty_args() -> CliArgs {
        CliArgs {
            config: None,
            out: None,
            seed: None,
            start: None,
            interval_minutes: None,
            days: None,
            format: None,
            sample_rows: None,
            verbose: false,
            debug: false,
            log_dir: None,
            log_json: false,
            dry_run: false,
            print_config: false,
        }
    }

    #[test]
    fn test_simulation_config_default() {
        let config = SimulationConfig::default();

        assert_eq!(config.start_time.to_string(), "2024-01-15 00:00:00");
        assert_eq!(config.interval_minutes, 15);
        assert_eq!(config.days, 7);
        assert!(config.seed.is_none());
        assert_eq!(config.output_path, "smart_office_data.csv");
        assert_eq!(config.output_format, OutputFormat::Csv);
        assert_eq!(config.sample_rows, 10);
    }

    #[test]
    fn test_total_ticks() {
        let config = SimulationConfig::default();
        assert_eq!(config.total_ticks(), 672);

        let config = SimulationConfig { interval_minutes: 7, days: 1, ..Default::default() };
        // 1440 / 7 truncates
        assert_eq!(config.total_ticks(), 205);
    }

    #[test]
    fn test_parse_start_time_formats() {
        let expected = parse_start_time("2024-03-01 08:30:00").unwrap();
        assert_eq!(expected.hour(), 8);
        assert_eq!(expected.minute(), 30);

        assert_eq!(parse_start_time("2024-03-01T08:30:00").unwrap(), expected);
        assert_eq!(parse_start_time("2024-03-01 08:30").unwrap(), expected);
        assert_eq!(parse_start_time("2024-03-01").unwrap().hour(), 0);

        match parse_start_time("yesterday") {
            Err(ConfigError::InvalidStartTime(value)) => assert_eq!(value, "yesterday"),
            other => panic!("Expected InvalidStartTime, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_overrides() {
        let args = CliArgs {
            out: Some("out/data.csv".to_string()),
            seed: Some(42),
            start: Some("2024-02-05 06:00:00".to_string()),
            interval_minutes: Some(30),
            days: Some(2),
            format: Some("json".to_string()),
            sample_rows: Some(3),
            ..empty_args()
        };

        let config = SimulationConfig::from_cli_args(args).unwrap();

        assert_eq!(config.output_path, "out/data.csv");
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.start_time.to_string(), "2024-02-05 06:00:00");
        assert_eq!(config.interval_minutes, 30);
        assert_eq!(config.days, 2);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.sample_rows, 3);
    }

    #[test]
    fn test_cli_invalid_format_rejected() {
        let args = CliArgs { format: Some("xml".to_string()), ..empty_args() };

        match SimulationConfig::from_cli_args(args) {
            Err(ConfigError::InvalidOutputFormat(msg)) => assert!(msg.contains("xml")),
            other => panic!("Expected InvalidOutputFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_config_file_loading() {
        use std::io::Write;
        use tempfile::Builder;

        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        let config_json = r#"{
            "start_time": "2024-06-03 00:00:00",
            "interval_minutes": 60,
            "days": 3,
            "seed": 7,
            "output_format": "json"
        }"#;

        temp_file.write_all(config_json.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = SimulationConfig::from_file(temp_file.path()).unwrap();

        assert_eq!(config.start_time.to_string(), "2024-06-03 00:00:00");
        assert_eq!(config.interval_minutes, 60);
        assert_eq!(config.days, 3);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.output_format, OutputFormat::Json);
        // Fields absent from the file keep their defaults
        assert_eq!(config.output_path, "smart_office_data.csv");
        assert_eq!(config.sample_rows, 10);
    }

    #[test]
    fn test_cli_overrides_config_file() {
        use std::io::Write;
        use tempfile::Builder;

        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        temp_file.write_all(br#"{ "days": 3, "seed": 7 }"#).unwrap();
        temp_file.flush().unwrap();

        let args = CliArgs {
            config: Some(temp_file.path().display().to_string()),
            seed: Some(99),
            ..empty_args()
        };

        let config = SimulationConfig::from_cli_args(args).unwrap();
        assert_eq!(config.days, 3);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_config_file_errors() {
        match SimulationConfig::from_file("does/not/exist.json") {
            Err(ConfigError::FileNotFound(_)) => {}
            other => panic!("Expected FileNotFound, got {:?}", other),
        }

        let temp_file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        match SimulationConfig::from_file(temp_file.path()) {
            Err(ConfigError::UnsupportedFormat(ext)) => assert_eq!(ext, "yaml"),
            other => panic!("Expected UnsupportedFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = SimulationConfig { seed: Some(5), days: 2, ..Default::default() };
        config.save_to_file(&path).unwrap();

        let reloaded = SimulationConfig::from_file(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_validation_success() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_interval() {
        let config = SimulationConfig { interval_minutes: 0, ..Default::default() };

        match config.validate() {
            Err(ConfigValidationError::InvalidIntervalMinutes(0)) => {}
            other => panic!("Expected InvalidIntervalMinutes, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_days() {
        let config = SimulationConfig { days: 0, ..Default::default() };

        match config.validate() {
            Err(ConfigValidationError::InvalidDaysCount(0)) => {}
            other => panic!("Expected InvalidDaysCount, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_interval_exceeds_period() {
        let config = SimulationConfig { interval_minutes: 2000, days: 1, ..Default::default() };

        match config.validate() {
            Err(ConfigValidationError::IntervalExceedsPeriod {
                interval_minutes,
                period_minutes,
            }) => {
                assert_eq!(interval_minutes, 2000);
                assert_eq!(period_minutes, 1440);
            }
            other => panic!("Expected IntervalExceedsPeriod, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_period_past_calendar_end() {
        let start_time = NaiveDate::MAX.and_hms_opt(23, 50, 0).unwrap();
        let config = SimulationConfig { start_time, days: 1, ..Default::default() };

        assert!(config.end_time().is_none());
        match config.validate() {
            Err(ConfigValidationError::PeriodOutOfRange { period_minutes, .. }) => {
                assert_eq!(period_minutes, 1440);
            }
            other => panic!("Expected PeriodOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_huge_period_with_few_ticks() {
        // Only 33 ticks, but the period ends hundreds of millennia away
        let config = SimulationConfig {
            days: 100_000_000,
            interval_minutes: u32::MAX,
            ..Default::default()
        };

        assert_eq!(config.total_ticks(), 33);
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::PeriodOutOfRange { .. })
        ));
    }

    #[test]
    fn test_validation_tick_limit() {
        let config = SimulationConfig { days: u32::MAX, interval_minutes: 1, ..Default::default() };

        match config.validate() {
            Err(ConfigValidationError::TooManyTicks { ticks, max }) => {
                assert_eq!(ticks, u64::from(u32::MAX) * 1440);
                assert_eq!(max, defaults::MAX_TOTAL_TICKS);
            }
            other => panic!("Expected TooManyTicks, got {:?}", other),
        }

        // Ten years at the default interval stays inside the limit
        let config = SimulationConfig { days: 3650, ..Default::default() };
        assert!(config.validate().is_ok());
        assert!(config.end_time().is_some());
    }

    #[test]
    fn test_validation_empty_output_path() {
        let config = SimulationConfig { output_path: "  ".to_string(), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::EmptyOutputPath)));
    }
}
