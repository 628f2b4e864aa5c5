// Smart Office Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/smart-office-simulator
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/smart-office-simulator --out data/office.csv --seed 42 --days 14 --verbose
// ```

use anyhow::Context;
use clap::Parser;
use smart_office_simulator::report::{render_sample, SummaryReport};
use smart_office_simulator::simulation::{LoggingConfig, SimulationDriver};
use smart_office_simulator::types::config::CliArgs;
use smart_office_simulator::types::SimulationConfig;
use smart_office_simulator::DatasetExporter;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = SimulationConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging = LoggingConfig::from_cli_args(&args);
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Smart Office Simulator");

    // Load configuration from CLI arguments and optional config file
    let dry_run = args.dry_run;
    let config = match SimulationConfig::from_cli_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    if dry_run {
        println!("Configuration validation successful!");
        println!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    if let Err(e) = run(config) {
        error!("Simulation failed: {:#}", e);
        process::exit(1);
    }

    info!("Smart Office Simulator completed successfully");
}

/// Generate, export and report
fn run(config: SimulationConfig) -> anyhow::Result<()> {
    println!("Generating smart office sensor data...");
    print_configuration_summary(&config);

    let sample_rows = config.sample_rows;
    let output_path = config.output_path.clone();
    let format = config.output_format;

    let mut driver = SimulationDriver::new(config).context("failed to initialize simulation")?;
    let dataset = driver.run().context("failed to generate dataset")?;
    println!("Generated {} readings", dataset.len());

    DatasetExporter::new(format)
        .export_to_path(&dataset, &output_path)
        .with_context(|| format!("failed to export dataset to '{}'", output_path))?;
    println!("\nData saved to: {}", output_path);

    let report = SummaryReport::from_dataset(&dataset);
    println!("\n{}", report);

    if sample_rows > 0 {
        println!("\nFirst {} readings:", sample_rows.min(dataset.len()));
        print!("{}", render_sample(&dataset, sample_rows));
    }

    Ok(())
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    println!("Configuration:");
    println!("  Start: {}", config.start_time.format("%Y-%m-%d %H:%M:%S"));
    println!("  Interval: {} minutes", config.interval_minutes);
    println!("  Days: {}", config.days);
    println!("  Time Steps: {}", config.total_ticks());
    println!("  Output: {} ({})", config.output_path, config.output_format);
    if let Some(seed) = config.seed {
        println!("  Random Seed: {}", seed);
    }
}
