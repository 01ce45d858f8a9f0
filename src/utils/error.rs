//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the metrics file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid metrics JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during aggregation
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Missing column '{0}' in metrics data")]
    MissingColumn(&'static str),
}

/// Errors that can occur during chart or table rasterization
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Drawing failed: {0}")]
    Drawing(String),

    #[error("Nothing to draw: {0}")]
    EmptyData(&'static str),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
