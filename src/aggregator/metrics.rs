//! Descriptive statistics shared by the gas and fee aggregators.
//!
//! Standard deviation is the sample statistic (ddof = 1), so a group
//! with a single observation has no defined spread.

use crate::parser::schema::{MeasurementRecord, MetricsTable};
use log::debug;
use std::collections::BTreeMap;

/// Grouping key: (contract, action)
pub type GroupKey = (String, String);

/// Group records by (contract, action)
///
/// **Public** - keys iterate in lexicographic order (contract, then action),
/// which fixes the row order of every summary table.
pub fn group_records(table: &MetricsTable) -> BTreeMap<GroupKey, Vec<&MeasurementRecord>> {
    let mut groups: BTreeMap<GroupKey, Vec<&MeasurementRecord>> = BTreeMap::new();

    for record in table.records() {
        groups
            .entry((record.contract.clone(), record.action.clone()))
            .or_default()
            .push(record);
    }

    debug!("Grouped {} records into {} (contract, action) groups", table.len(), groups.len());
    groups
}

/// Arithmetic mean, `None` for an empty input
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Summary statistics over a set of gas readings
#[derive(Debug, Clone, PartialEq)]
pub struct SampleStats {
    pub mean: f64,

    /// Sample standard deviation, `None` with fewer than two samples
    pub std_dev: Option<f64>,

    pub min: u64,
    pub max: u64,
}

/// Compute mean, sample std, min and max
///
/// **Public** - returns `None` for an empty slice
pub fn sample_stats(values: &[u64]) -> Option<SampleStats> {
    let min = *values.iter().min()?;
    let max = *values.iter().max()?;
    let mean = mean(values.iter().map(|&v| v as f64))?;

    let std_dev = if values.len() > 1 {
        let sum_sq: f64 = values
            .iter()
            .map(|&v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum();
        Some((sum_sq / (values.len() - 1) as f64).sqrt())
    } else {
        None
    };

    Some(SampleStats {
        mean,
        std_dev,
        min,
        max,
    })
}

/// Percentage by which `candidate` is lower than `baseline`
///
/// Positive when the candidate is cheaper. A zero baseline follows IEEE
/// division (infinite or NaN) rather than failing.
pub fn percent_saving(baseline: f64, candidate: f64) -> f64 {
    (baseline - candidate) / baseline * 100.0
}
