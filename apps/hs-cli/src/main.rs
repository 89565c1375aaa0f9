use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use hs_app::{AppError, AppResult, SeriesConfig, SweepConfig, run_series, run_sweep};
use tracing::warn;

#[derive(Parser)]
#[command(name = "hs-cli")]
#[command(about = "HeatStrain CLI - Two-node thermoregulation simulation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep wet-bulb temperature and record terminal core temperatures
    Sweep {
        /// Path for the per-condition trajectory output
        #[arg(default_value = "run.txt")]
        output: PathBuf,
        /// Path to the positional config file
        #[arg(long, default_value = "config.txt")]
        config: PathBuf,
        /// Path for the wet-bulb / terminal-core summary table
        #[arg(long, default_value = "data.txt")]
        summary: PathBuf,
    },
    /// Run a single condition and record the temperature time series
    Series {
        /// Path for the time-series output
        #[arg(default_value = "run.txt")]
        output: PathBuf,
        /// Path to the positional config file
        #[arg(long, default_value = "config.txt")]
        config: PathBuf,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sweep {
            output,
            config,
            summary,
        } => cmd_sweep(&config, &output, &summary),
        Commands::Series { output, config } => cmd_series(&config, &output),
    }
}

fn create_output(path: &Path) -> AppResult<BufWriter<File>> {
    let file = File::create(path).map_err(|source| AppError::OutputCreate {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

fn cmd_sweep(config_path: &Path, output_path: &Path, summary_path: &Path) -> AppResult<()> {
    let (config, fallbacks) = SweepConfig::load(config_path);
    for fallback in &fallbacks {
        warn!("{fallback}");
    }

    let trace = create_output(output_path)?;
    let summary = create_output(summary_path)?;
    let report = run_sweep(&config, trace, summary)?;

    println!(
        "✓ Swept {} wet-bulb conditions ({} hyperthermic): {} and {}",
        report.conditions.len(),
        report.hyperthermic_count(),
        output_path.display(),
        summary_path.display()
    );
    Ok(())
}

fn cmd_series(config_path: &Path, output_path: &Path) -> AppResult<()> {
    let (config, fallbacks) = SeriesConfig::load(config_path);
    for fallback in &fallbacks {
        warn!("{fallback}");
    }

    let out = create_output(output_path)?;
    let report = run_series(&config, out)?;

    println!(
        "✓ Series reached {} after {} steps (core {:.2} C): {}",
        report.termination,
        report.steps,
        report.terminal_core_c,
        output_path.display()
    );
    Ok(())
}
