//! CLI command implementations.
//!
//! Commands orchestrate the parser, aggregator and renderers to perform user tasks.

pub mod models;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use models::{default_output_dir, ReportConfig, ReportKind};
pub use report::{execute_report, validate_config};
pub use utils::{display_version, validate_metrics_file};
