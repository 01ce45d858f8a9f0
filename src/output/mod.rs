//! Output writers for report tables and summaries.
//!
//! This module handles:
//! - The summary table model (gas, savings, fee)
//! - Plain-text tables for stdout
//! - PNG table images
//! - JSON summary export

pub mod image;
pub mod json;
pub mod table;
pub mod text;

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

// Re-export main functions
pub use image::{layout_table, render_table_image, TableLayout};
pub use json::{write_summary, ReportSummary};
pub use table::{
    fee_summary_table, gas_summary_table, savings_summary_table, wrap_text, Cell, NumberFormat,
    SummaryTable, TableKind,
};
pub use text::{render_section, render_text_table};

/// Validate that an output path is writable
///
/// **Public** - shared by every file writer
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create the parent directories of an output path
pub fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!("Cannot create directory {}: {}", parent.display(), e))
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path_empty() {
        assert!(validate_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_path(temp_dir.path()).is_err());
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("a/b/chart.png");

        ensure_parent_dir(&nested).unwrap();
        assert!(temp_dir.path().join("a/b").is_dir());
        assert!(!nested.exists());
    }
}
