//! Gas Metrics Report
//!
//! Gas, fee and bytecode-size reports comparing smart-contract
//! variants from benchmark measurement files.
//!
//! This crate provides the core implementation for the
//! `gas-report` CLI tool: a JSON loader, pure aggregations, and
//! PNG/text renderers.
//!
//! ## Getting Started
//!
//! ```bash
//! gas-report report --kind oracle --metrics results/metrics_output.json
//! gas-report --help
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
