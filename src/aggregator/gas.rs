//! Per (contract, action) gas usage summary.

use super::metrics::{group_records, sample_stats};
use crate::parser::schema::MetricsTable;
use serde::Serialize;
use std::collections::BTreeMap;

/// One row of the gas usage summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GasSummaryRow {
    pub contract: String,
    pub action: String,
    pub mean: f64,

    /// Sample standard deviation, `None` for single-record groups
    pub std: Option<f64>,

    pub min: u64,
    pub max: u64,
}

/// Summarize gas usage per (contract, action)
///
/// **Public** - rows are ordered by contract, then action
pub fn summarize_gas(table: &MetricsTable) -> Vec<GasSummaryRow> {
    group_records(table)
        .into_iter()
        .filter_map(|((contract, action), records)| {
            let gas: Vec<u64> = records.iter().map(|r| r.gas_used).collect();
            let stats = sample_stats(&gas)?;

            Some(GasSummaryRow {
                contract,
                action,
                mean: stats.mean,
                std: stats.std_dev,
                min: stats.min,
                max: stats.max,
            })
        })
        .collect()
}

/// Distinct actions, in order of first appearance in the summary
pub fn distinct_actions(rows: &[GasSummaryRow]) -> Vec<String> {
    let mut actions: Vec<String> = Vec::new();
    for row in rows {
        if !actions.contains(&row.action) {
            actions.push(row.action.clone());
        }
    }
    actions
}

/// Mean gas of one action, keyed by contract
pub fn mean_by_contract(rows: &[GasSummaryRow], action: &str) -> BTreeMap<String, f64> {
    rows.iter()
        .filter(|r| r.action == action)
        .map(|r| (r.contract.clone(), r.mean))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_metrics;

    fn sample_table() -> MetricsTable {
        parse_metrics(
            r#"[
                {"contract":"OraMemory","action":"deploy","gasUsed":500000,"feeWei":"1"},
                {"contract":"OraMemory","action":"aggregateQuotes","iteration":1,"gasUsed":100,"feeWei":"1"},
                {"contract":"OraMemory","action":"aggregateQuotes","iteration":2,"gasUsed":110,"feeWei":"1"},
                {"contract":"OraMemory","action":"aggregateQuotes","iteration":3,"gasUsed":120,"feeWei":"1"},
                {"contract":"OraTransient","action":"deploy","gasUsed":450000,"feeWei":"1"},
                {"contract":"OraTransient","action":"aggregateQuotes","iteration":1,"gasUsed":90,"feeWei":"1"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_summarize_gas() {
        let rows = summarize_gas(&sample_table());

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].contract, "OraMemory");
        assert_eq!(rows[0].action, "aggregateQuotes");
        assert_eq!(rows[0].mean, 110.0);
        assert_eq!(rows[0].std, Some(10.0));
        assert_eq!(rows[0].min, 100);
        assert_eq!(rows[0].max, 120);

        assert_eq!(rows[1].action, "deploy");
        assert!(rows[1].std.is_none());
    }

    #[test]
    fn test_min_le_mean_le_max() {
        for row in summarize_gas(&sample_table()) {
            assert!(row.min as f64 <= row.mean, "{:?}", row);
            assert!(row.mean <= row.max as f64, "{:?}", row);
        }
    }

    #[test]
    fn test_distinct_actions_first_seen_order() {
        let rows = summarize_gas(&sample_table());
        assert_eq!(distinct_actions(&rows), vec!["aggregateQuotes", "deploy"]);
    }

    #[test]
    fn test_mean_by_contract() {
        let rows = summarize_gas(&sample_table());
        let deploy = mean_by_contract(&rows, "deploy");

        assert_eq!(deploy.len(), 2);
        assert_eq!(deploy["OraMemory"], 500000.0);
        assert_eq!(deploy["OraTransient"], 450000.0);
        assert!(mean_by_contract(&rows, "claimReward").is_empty());
    }

    #[test]
    fn test_summarize_empty_table() {
        let table = parse_metrics("[]").unwrap();
        assert!(summarize_gas(&table).is_empty());
    }
}
