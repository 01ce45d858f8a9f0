//! Aggregation of measurement records into report tables.
//!
//! This module transforms the loaded metrics into:
//! - Gas usage statistics per (contract, action)
//! - Fee averages in ETH and fiat
//! - Two-variant savings and cumulative cost projections
//! - Bytecode sizes per contract

pub mod bytecode;
pub mod fee;
pub mod gas;
pub mod metrics;
pub mod savings;

// Re-export main types and functions
pub use bytecode::bytecode_sizes;
pub use fee::{summarize_fees, wei_to_eth, FeeSummaryRow};
pub use gas::{distinct_actions, mean_by_contract, summarize_gas, GasSummaryRow};
pub use metrics::{percent_saving, sample_stats, SampleStats};
pub use savings::{
    compute_savings, project_cumulative_cost, CallRange, CostSeries, SavingsRow, SavingsTable,
};
