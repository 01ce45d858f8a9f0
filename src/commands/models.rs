use crate::aggregator::CallRange;
use crate::chart::ChartConfig;
use crate::utils::config::{DEFAULT_COL_WRAP, DEFAULT_PRICE_USD};
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// The benchmark a metrics file comes from
///
/// Each kind carries its own defaults; they are kept independent on
/// purpose rather than unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Oracle aggregator variants, compared on `aggregateQuotes`
    Oracle,
    /// Reentrancy guard variants, compared on `claimReward`
    Reentrancy,
}

impl ReportKind {
    pub fn name(self) -> &'static str {
        match self {
            ReportKind::Oracle => "oracle",
            ReportKind::Reentrancy => "reentrancy",
        }
    }

    /// Call-type action compared next to deploy
    pub fn default_call_action(self) -> &'static str {
        match self {
            ReportKind::Oracle => "aggregateQuotes",
            ReportKind::Reentrancy => "claimReward",
        }
    }

    /// Upper bound of the cumulative cost projection
    pub fn default_max_calls(self) -> u64 {
        match self {
            ReportKind::Oracle => 100,
            ReportKind::Reentrancy => 1_000_000,
        }
    }

    pub fn call_range(self) -> CallRange {
        match self {
            ReportKind::Oracle => CallRange::Inclusive,
            ReportKind::Reentrancy => CallRange::Exclusive,
        }
    }

    /// Suffix appended to savings figures printed on stdout
    pub fn savings_suffix(self) -> &'static str {
        match self {
            ReportKind::Oracle => "",
            ReportKind::Reentrancy => "%",
        }
    }
}

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub kind: ReportKind,

    /// Metrics JSON input
    pub metrics_path: PathBuf,

    /// Directory all charts and tables are written to
    pub output_dir: PathBuf,

    /// Fiat price of one ETH
    pub price: f64,

    /// Upper bound of the cumulative cost projection
    pub max_calls: u64,

    /// Call-type action compared next to deploy
    pub call_action: String,

    /// Wrap width for text cells in table images
    pub col_wrap: usize,

    /// Optional JSON export of the aggregates
    pub summary_json: Option<PathBuf>,

    pub chart: ChartConfig,
}

impl ReportConfig {
    /// Configuration with the kind's defaults for a given input file
    pub fn new(kind: ReportKind, metrics_path: impl Into<PathBuf>) -> Self {
        let metrics_path = metrics_path.into();
        Self {
            kind,
            output_dir: default_output_dir(&metrics_path),
            metrics_path,
            price: DEFAULT_PRICE_USD,
            max_calls: kind.default_max_calls(),
            call_action: kind.default_call_action().to_string(),
            col_wrap: DEFAULT_COL_WRAP,
            summary_json: None,
            chart: ChartConfig::default(),
        }
    }
}

/// Directory containing the metrics file, or the working directory
pub fn default_output_dir(metrics_path: &Path) -> PathBuf {
    match metrics_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_defaults_are_independent() {
        assert_eq!(ReportKind::Oracle.default_call_action(), "aggregateQuotes");
        assert_eq!(ReportKind::Oracle.default_max_calls(), 100);
        assert_eq!(ReportKind::Oracle.call_range(), CallRange::Inclusive);

        assert_eq!(ReportKind::Reentrancy.default_call_action(), "claimReward");
        assert_eq!(ReportKind::Reentrancy.default_max_calls(), 1_000_000);
        assert_eq!(ReportKind::Reentrancy.call_range(), CallRange::Exclusive);
    }

    #[test]
    fn test_config_defaults() {
        let config = ReportConfig::new(ReportKind::Reentrancy, "results/A_B/metrics_output.json");

        assert_eq!(config.output_dir, PathBuf::from("results/A_B"));
        assert_eq!(config.price, 2000.0);
        assert_eq!(config.max_calls, 1_000_000);
        assert_eq!(config.call_action, "claimReward");
        assert_eq!(config.col_wrap, 30);
        assert!(config.summary_json.is_none());
    }

    #[test]
    fn test_default_output_dir_bare_file_name() {
        assert_eq!(default_output_dir(Path::new("metrics_output.json")), PathBuf::from("."));
    }
}
