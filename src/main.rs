//! Gas Metrics Report CLI
//!
//! Renders gas, fee and bytecode-size charts and summary tables
//! from a benchmark metrics JSON file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use gas_metrics_report::chart::ChartConfig;
use gas_metrics_report::commands::{
    default_output_dir, display_version, execute_report, validate_config, validate_metrics_file,
    ReportConfig, ReportKind,
};
use gas_metrics_report::utils::config::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_COL_WRAP, DEFAULT_METRICS_FILE,
    DEFAULT_PRICE_USD,
};

/// Gas Metrics Report - compare smart-contract variants
#[derive(Parser, Debug)]
#[command(name = "gas-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render charts and summary tables for a metrics file
    Report {
        /// Benchmark the metrics come from
        #[arg(short, long, value_enum, default_value_t = ReportKind::Oracle)]
        kind: ReportKind,

        /// Path to the metrics JSON file
        #[arg(short, long, env = "METRICS_JSON", default_value = DEFAULT_METRICS_FILE)]
        metrics: PathBuf,

        /// Output directory (defaults to the metrics file's directory)
        #[arg(short, long, env = "OUTPUT_DIR")]
        output_dir: Option<PathBuf>,

        /// ETH price in USD used for fee conversion
        #[arg(short, long, env = "PRICE_USD", default_value_t = DEFAULT_PRICE_USD)]
        price: f64,

        /// Upper bound of the cumulative cost projection (defaults per kind)
        #[arg(long, env = "MAX_CALLS")]
        max_calls: Option<u64>,

        /// Call action compared next to deploy (defaults per kind)
        #[arg(long)]
        call_action: Option<String>,

        /// Wrap width for text cells in table images
        #[arg(long, default_value_t = DEFAULT_COL_WRAP)]
        col_wrap: usize,

        /// Also write the aggregates as JSON
        #[arg(long)]
        summary_json: Option<PathBuf>,

        /// Chart width in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
        width: u32,

        /// Chart height in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
        height: u32,
    },

    /// Validate a metrics JSON file
    Validate {
        /// Path to the metrics JSON file
        #[arg(short, long, env = "METRICS_JSON", default_value = DEFAULT_METRICS_FILE)]
        metrics: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            kind,
            metrics,
            output_dir,
            price,
            max_calls,
            call_action,
            col_wrap,
            summary_json,
            width,
            height,
        } => {
            let config = ReportConfig {
                kind,
                output_dir: output_dir.unwrap_or_else(|| default_output_dir(&metrics)),
                metrics_path: metrics,
                price,
                max_calls: max_calls.unwrap_or_else(|| kind.default_max_calls()),
                call_action: call_action.unwrap_or_else(|| kind.default_call_action().to_string()),
                col_wrap,
                summary_json,
                chart: ChartConfig::new().with_size(width, height),
            };

            // Validate config first
            validate_config(&config)?;

            execute_report(config)?;
        }

        Commands::Validate { metrics } => {
            validate_metrics_file(metrics)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
