//! Fee conversion (wei -> ETH -> fiat) and per-group fee averages.

use super::metrics::{group_records, mean};
use crate::parser::schema::MetricsTable;
use crate::utils::config::WEI_PER_ETH;
use serde::Serialize;

/// One row of the fee summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeSummaryRow {
    pub contract: String,
    pub action: String,
    pub avg_gas: f64,
    pub avg_fee_eth: f64,
    pub avg_fee_usd: f64,
}

/// Convert a wei amount to ETH
pub fn wei_to_eth(wei: u128) -> f64 {
    wei as f64 / WEI_PER_ETH
}

/// Summarize gas and fees per (contract, action)
///
/// **Public** - `price` is the fiat value of one ETH
pub fn summarize_fees(table: &MetricsTable, price: f64) -> Vec<FeeSummaryRow> {
    group_records(table)
        .into_iter()
        .filter_map(|((contract, action), records)| {
            let avg_gas = mean(records.iter().map(|r| r.gas_used as f64))?;
            let avg_fee_eth = mean(records.iter().map(|r| wei_to_eth(r.fee_wei)))?;
            let avg_fee_usd = mean(records.iter().map(|r| wei_to_eth(r.fee_wei) * price))?;

            Some(FeeSummaryRow {
                contract,
                action,
                avg_gas,
                avg_fee_eth,
                avg_fee_usd,
            })
        })
        .collect()
}
