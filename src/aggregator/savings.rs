//! Two-variant gas savings and cumulative cost projection.
//!
//! The comparison is only defined for exactly two contract variants:
//! the lexicographically first is the baseline, the second the candidate.

use super::gas::{mean_by_contract, GasSummaryRow};
use super::metrics::percent_saving;
use crate::utils::config::DEPLOY_ACTION;
use log::debug;
use serde::Serialize;

/// Savings of the candidate relative to the baseline for one action
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsRow {
    pub action: String,
    pub baseline_mean: Option<f64>,
    pub candidate_mean: Option<f64>,

    /// `(baseline - candidate) / baseline * 100`, positive when the candidate is cheaper
    pub percent: Option<f64>,
}

/// Savings for the deploy action and the designated call action
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsTable {
    pub baseline: String,
    pub candidate: String,
    pub rows: Vec<SavingsRow>,
}

impl SavingsTable {
    /// Row for a given action
    pub fn row(&self, action: &str) -> Option<&SavingsRow> {
        self.rows.iter().find(|r| r.action == action)
    }

    pub fn deploy(&self) -> Option<&SavingsRow> {
        self.row(DEPLOY_ACTION)
    }
}

/// Compute deploy and call savings between exactly two contracts
///
/// **Public** - returns `None` unless `contracts` has exactly two entries
///
/// # Arguments
/// * `gas` - Gas summary rows
/// * `contracts` - Distinct contract names, sorted
/// * `call_action` - The call-type action to compare besides deploy
pub fn compute_savings(
    gas: &[GasSummaryRow],
    contracts: &[String],
    call_action: &str,
) -> Option<SavingsTable> {
    let [baseline, candidate] = contracts else {
        debug!("Skipping savings: {} contracts present, need exactly 2", contracts.len());
        return None;
    };

    let rows = [DEPLOY_ACTION, call_action]
        .iter()
        .map(|action| {
            let means = mean_by_contract(gas, action);
            let baseline_mean = means.get(baseline).copied();
            let candidate_mean = means.get(candidate).copied();

            SavingsRow {
                action: action.to_string(),
                baseline_mean,
                candidate_mean,
                percent: baseline_mean
                    .zip(candidate_mean)
                    .map(|(b, c)| percent_saving(b, c)),
            }
        })
        .collect();

    Some(SavingsTable {
        baseline: baseline.clone(),
        candidate: candidate.clone(),
        rows,
    })
}

/// Range of call counts the projection covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallRange {
    /// `0..=max_calls`
    Inclusive,
    /// `0..max_calls`
    Exclusive,
}

impl CallRange {
    pub fn counts(self, max_calls: u64) -> impl Iterator<Item = u64> {
        let end = match self {
            CallRange::Inclusive => max_calls.saturating_add(1),
            CallRange::Exclusive => max_calls,
        };
        0..end
    }
}

/// Cumulative cost `deploy + n * call` for one contract
#[derive(Debug, Clone, PartialEq)]
pub struct CostSeries {
    pub contract: String,
    pub deploy_mean: f64,
    pub call_mean: f64,
    pub points: Vec<(u64, f64)>,
}

impl CostSeries {
    /// Cost after `n` calls
    pub fn cost_at(&self, n: u64) -> f64 {
        self.deploy_mean + n as f64 * self.call_mean
    }
}

/// Project the cumulative gas cost of both contracts over a number of calls
///
/// **Public** - returns `None` when any deploy or call mean is undefined,
/// or when the call range is empty
pub fn project_cumulative_cost(
    savings: &SavingsTable,
    call_action: &str,
    max_calls: u64,
    range: CallRange,
) -> Option<[CostSeries; 2]> {
    if range.counts(max_calls).next().is_none() {
        debug!("Skipping projection: empty call range for max_calls = {}", max_calls);
        return None;
    }

    let deploy = savings.deploy()?;
    let call = savings.row(call_action)?;

    let series = |contract: &str, deploy_mean: f64, call_mean: f64| {
        let mut series = CostSeries {
            contract: contract.to_string(),
            deploy_mean,
            call_mean,
            points: Vec::new(),
        };
        let points: Vec<_> = range
            .counts(max_calls)
            .map(|n| (n, series.cost_at(n)))
            .collect();
        series.points = points;
        series
    };

    Some([
        series(&savings.baseline, deploy.baseline_mean?, call.baseline_mean?),
        series(&savings.candidate, deploy.candidate_mean?, call.candidate_mean?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::gas::summarize_gas;
    use crate::parser::parse_metrics;

    fn two_contract_gas() -> (Vec<GasSummaryRow>, Vec<String>) {
        let table = parse_metrics(
            r#"[
                {"contract":"A","action":"deploy","gasUsed":1000,"feeWei":"1000000000000000","bytecodeSizeBytes":500},
                {"contract":"B","action":"deploy","gasUsed":800,"feeWei":"800000000000000","bytecodeSizeBytes":400},
                {"contract":"A","action":"claimReward","gasUsed":200,"feeWei":"1"},
                {"contract":"B","action":"claimReward","gasUsed":150,"feeWei":"1"}
            ]"#,
        )
        .unwrap();
        (summarize_gas(&table), table.contracts())
    }

    #[test]
    fn test_deploy_savings_twenty_percent() {
        let (gas, contracts) = two_contract_gas();
        let savings = compute_savings(&gas, &contracts, "claimReward").unwrap();

        assert_eq!(savings.baseline, "A");
        assert_eq!(savings.candidate, "B");

        let deploy = savings.deploy().unwrap();
        assert_eq!(deploy.baseline_mean, Some(1000.0));
        assert_eq!(deploy.candidate_mean, Some(800.0));
        assert!((deploy.percent.unwrap() - 20.0).abs() < 1e-9);

        let call = savings.row("claimReward").unwrap();
        assert!((call.percent.unwrap() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_call_action_is_undefined() {
        let (gas, contracts) = two_contract_gas();
        let savings = compute_savings(&gas, &contracts, "aggregateQuotes").unwrap();

        let call = savings.row("aggregateQuotes").unwrap();
        assert!(call.baseline_mean.is_none());
        assert!(call.percent.is_none());
        assert!(savings.deploy().unwrap().percent.is_some());
    }

    #[test]
    fn test_savings_requires_two_contracts() {
        let (gas, _) = two_contract_gas();

        let three = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        assert!(compute_savings(&gas, &three, "claimReward").is_none());

        let one = vec!["A".to_string()];
        assert!(compute_savings(&gas, &one, "claimReward").is_none());
    }

    #[test]
    fn test_equal_means_zero_savings() {
        let table = parse_metrics(
            r#"[
                {"contract":"X","action":"deploy","gasUsed":777,"feeWei":"1"},
                {"contract":"Y","action":"deploy","gasUsed":777,"feeWei":"1"}
            ]"#,
        )
        .unwrap();
        let savings = compute_savings(&summarize_gas(&table), &table.contracts(), "call").unwrap();

        assert_eq!(savings.deploy().unwrap().percent, Some(0.0));
    }

    #[test]
    fn test_call_range_bounds() {
        assert_eq!(CallRange::Inclusive.counts(3).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(CallRange::Exclusive.counts(3).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(CallRange::Exclusive.counts(0).count(), 0);
    }

    #[test]
    fn test_project_cumulative_cost() {
        let (gas, contracts) = two_contract_gas();
        let savings = compute_savings(&gas, &contracts, "claimReward").unwrap();

        let [a, b] = project_cumulative_cost(&savings, "claimReward", 100, CallRange::Inclusive).unwrap();

        assert_eq!(a.contract, "A");
        assert_eq!(a.points.len(), 101);
        assert_eq!(a.points[0], (0, 1000.0));
        assert_eq!(a.points[100], (100, 1000.0 + 100.0 * 200.0));
        assert_eq!(b.points[10], (10, 800.0 + 10.0 * 150.0));
        assert_eq!(b.cost_at(10), b.points[10].1);
    }

    #[test]
    fn test_projection_empty_range_is_none() {
        let (gas, contracts) = two_contract_gas();
        let savings = compute_savings(&gas, &contracts, "claimReward").unwrap();

        assert!(project_cumulative_cost(&savings, "claimReward", 0, CallRange::Exclusive).is_none());

        let [a, _] = project_cumulative_cost(&savings, "claimReward", 0, CallRange::Inclusive).unwrap();
        assert_eq!(a.points, vec![(0, 1000.0)]);
    }

    #[test]
    fn test_projection_skipped_when_call_missing() {
        let (gas, contracts) = two_contract_gas();
        let savings = compute_savings(&gas, &contracts, "aggregateQuotes").unwrap();

        assert!(project_cumulative_cost(&savings, "aggregateQuotes", 10, CallRange::Exclusive).is_none());
    }
}
