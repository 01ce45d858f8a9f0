//! Metrics input parsing.
//!
//! This module handles:
//! - Defining the measurement record schema
//! - Loading metrics files from disk

pub mod loader;
pub mod schema;

// Re-export main types
pub use loader::{load_metrics, parse_metrics};
pub use schema::{MeasurementRecord, MetricsTable};
