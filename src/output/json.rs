//! JSON summary output writer.
//!
//! Writes the computed aggregates to a JSON file with pretty formatting.

use crate::aggregator::{FeeSummaryRow, GasSummaryRow, SavingsTable};
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Aggregates of one report run
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    /// Report kind name ("oracle" or "reentrancy")
    pub kind: String,

    /// Fiat price used for the fee conversion
    pub price: f64,

    pub call_action: String,
    pub max_calls: u64,
    pub record_count: usize,
    pub gas: Vec<GasSummaryRow>,
    pub fees: Vec<FeeSummaryRow>,

    /// Present only for exactly two contracts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<SavingsTable>,

    /// Timestamp when the summary was generated
    pub generated_at: String,
}

/// Write a report summary to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_summary(summary: &ReportSummary, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing summary to: {}", output_path.display());

    super::validate_path(output_path)?;
    super::ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, summary).map_err(OutputError::SerializationFailed)?;

    debug!("Summary written ({} bytes)", calculate_file_size(output_path));

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
