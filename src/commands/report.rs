//! Report command implementation.
//!
//! The report command:
//! 1. Loads the metrics file
//! 2. Aggregates gas, fees and savings
//! 3. Renders charts
//! 4. Prints and rasterizes summary tables
//! 5. Optionally exports the aggregates as JSON

use super::models::ReportConfig;
use crate::aggregator::{
    bytecode_sizes, compute_savings, distinct_actions, mean_by_contract, project_cumulative_cost,
    summarize_fees, summarize_gas, CostSeries, FeeSummaryRow, GasSummaryRow, SavingsRow,
    SavingsTable,
};
use crate::chart::{
    render_bar_chart, render_grouped_bar_chart, render_line_chart, render_stacked_bar_chart,
    BarChart, GroupedBarChart, LineChart, LineSeriesData, StackedBarChart,
};
use crate::output::{
    fee_summary_table, gas_summary_table, render_section, render_table_image,
    savings_summary_table, write_summary, ReportSummary, TableKind,
};
use crate::parser::load_metrics;
use crate::utils::config::{
    BYTECODE_SIZE_FILE, CUMULATIVE_COST_FILE, DEPLOY_ACTION, DEPLOY_PLUS_CALL_FILE, FEE_ETH_FILE,
    FEE_SUMMARY_TABLE_FILE, FEE_USD_FILE, GAS_PER_ACTION_PREFIX, GAS_SUMMARY_TABLE_FILE,
    SAVINGS_TABLE_FILE,
};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// Largest accepted projection bound
const MAX_CALLS_LIMIT: u64 = 100_000_000;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Paths of every file written, in write order
///
/// # Errors
/// * Missing or malformed metrics file (nothing is written)
/// * Bytecode column absent from every deploy row
/// * Chart, table or summary write failures
pub fn execute_report(config: ReportConfig) -> Result<Vec<PathBuf>> {
    let start_time = Instant::now();
    let mut written = Vec::new();

    info!("Starting {} report for: {}", config.kind.name(), config.metrics_path.display());

    // Step 1: Load metrics, before anything touches the output directory
    info!("Step 1/5: Loading metrics...");
    let table = load_metrics(&config.metrics_path).context("Failed to load metrics")?;

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("Failed to create output directory {}", config.output_dir.display())
    })?;

    // Step 2: Aggregate
    info!("Step 2/5: Aggregating {} records...", table.len());
    let gas = summarize_gas(&table);
    let fees = summarize_fees(&table, config.price);
    let contracts = table.contracts();
    let savings = compute_savings(&gas, &contracts, &config.call_action);

    debug!("{} gas groups across {} contracts", gas.len(), contracts.len());

    // Step 3: Charts
    info!("Step 3/5: Rendering charts...");
    let out = |name: &str| config.output_dir.join(name);

    for (action, chart) in gas_per_action_charts(&gas) {
        let path = out(&format!("{}{}.png", GAS_PER_ACTION_PREFIX, file_safe(&action)));
        render_bar_chart(&chart, &path, &config.chart)
            .with_context(|| format!("Failed to render gas chart for {}", action))?;
        written.push(path);
    }

    if let Some(savings) = &savings {
        println!(
            "{}",
            render_section(
                "GAS SAVINGS PERCENTAGE",
                &savings_summary_table(savings, config.kind.savings_suffix())
            )
        );
        let path = out(SAVINGS_TABLE_FILE);
        render_table_image(
            &savings_summary_table(savings, ""),
            TableKind::SavingsPercentage,
            &path,
            config.col_wrap,
        )
        .context("Failed to render savings table")?;
        written.push(path);

        let path = out(DEPLOY_PLUS_CALL_FILE);
        render_stacked_bar_chart(&deploy_plus_call_chart(savings, &config.call_action), &path, &config.chart)
            .context("Failed to render deploy + call chart")?;
        written.push(path);

        match project_cumulative_cost(savings, &config.call_action, config.max_calls, config.kind.call_range()) {
            Some(series) => {
                let path = out(CUMULATIVE_COST_FILE);
                render_line_chart(&cumulative_cost_chart(&series, &config.call_action), &path, &config.chart)
                    .context("Failed to render cumulative cost chart")?;
                written.push(path);
            }
            None => warn!(
                "Skipping cumulative cost chart: deploy or {} mean missing, or no calls in range (max_calls = {})",
                config.call_action, config.max_calls
            ),
        }
    } else {
        info!("Skipping savings: {} contracts present, need exactly 2", contracts.len());
    }

    if fees.is_empty() {
        warn!("Skipping fee charts: no records");
    } else {
        for unit in [FeeUnit::Eth, FeeUnit::Usd] {
            let path = out(unit.file_name());
            render_grouped_bar_chart(&fee_chart(&fees, unit), &path, &config.chart)
                .with_context(|| format!("Failed to render {} fee chart", unit.label()))?;
            written.push(path);
        }
    }

    let sizes = bytecode_sizes(&table).context("Failed to collect bytecode sizes")?;
    if sizes.is_empty() {
        warn!("Skipping bytecode chart: no {} records", DEPLOY_ACTION);
    } else {
        let path = out(BYTECODE_SIZE_FILE);
        render_bar_chart(&bytecode_chart(&sizes), &path, &config.chart)
            .context("Failed to render bytecode size chart")?;
        written.push(path);
    }

    // Step 4: Summary tables
    info!("Step 4/5: Writing summary tables...");
    let gas_table = gas_summary_table(&gas);
    println!("{}", render_section("GAS USAGE SUMMARY", &gas_table));
    let path = out(GAS_SUMMARY_TABLE_FILE);
    render_table_image(&gas_table, TableKind::GasSummary, &path, config.col_wrap)
        .context("Failed to render gas summary table")?;
    written.push(path);

    let fee_table = fee_summary_table(&fees);
    println!("{}", render_section("FEE SUMMARY", &fee_table));
    let path = out(FEE_SUMMARY_TABLE_FILE);
    render_table_image(&fee_table, TableKind::FeeSummary, &path, config.col_wrap)
        .context("Failed to render fee summary table")?;
    written.push(path);

    // Step 5: JSON export (if requested)
    if let Some(summary_path) = &config.summary_json {
        info!("Step 5/5: Writing JSON summary...");
        let summary = ReportSummary {
            kind: config.kind.name().to_string(),
            price: config.price,
            call_action: config.call_action.clone(),
            max_calls: config.max_calls,
            record_count: table.len(),
            gas,
            fees,
            savings,
            generated_at: chrono::Utc::now().to_rfc3339(),
        };
        write_summary(&summary, summary_path).context("Failed to write JSON summary")?;
        info!("✓ Summary written to: {}", summary_path.display());
        written.push(summary_path.clone());
    } else {
        info!("Step 5/5: Skipping JSON summary (not requested)");
    }

    let elapsed = start_time.elapsed();
    info!(
        "Report completed in {:.2}s, {} files written to {}",
        elapsed.as_secs_f64(),
        written.len(),
        config.output_dir.display()
    );

    Ok(written)
}

/// Validate report configuration
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_config(config: &ReportConfig) -> Result<()> {
    if !config.price.is_finite() || config.price < 0.0 {
        anyhow::bail!("Price must be a non-negative number, got {}", config.price);
    }

    if config.call_action.trim().is_empty() {
        anyhow::bail!("Call action cannot be empty");
    }

    if config.call_action == DEPLOY_ACTION {
        anyhow::bail!("Call action must differ from '{}'", DEPLOY_ACTION);
    }

    if config.col_wrap == 0 {
        anyhow::bail!("col_wrap must be greater than 0");
    }

    if config.max_calls > MAX_CALLS_LIMIT {
        anyhow::bail!("max_calls is too large (max {})", MAX_CALLS_LIMIT);
    }

    if config.chart.width == 0 || config.chart.height == 0 {
        anyhow::bail!("Chart dimensions must be greater than 0");
    }

    Ok(())
}

/// Currency a fee chart is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FeeUnit {
    Eth,
    Usd,
}

impl FeeUnit {
    fn label(self) -> &'static str {
        match self {
            FeeUnit::Eth => "ETH",
            FeeUnit::Usd => "USD",
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            FeeUnit::Eth => FEE_ETH_FILE,
            FeeUnit::Usd => FEE_USD_FILE,
        }
    }

    fn value(self, row: &FeeSummaryRow) -> f64 {
        match self {
            FeeUnit::Eth => row.avg_fee_eth,
            FeeUnit::Usd => row.avg_fee_usd,
        }
    }
}

/// One bar chart per action: mean gas of each contract
///
/// **Private** - actions in first-seen order of the gas summary
fn gas_per_action_charts(gas: &[GasSummaryRow]) -> Vec<(String, BarChart)> {
    distinct_actions(gas)
        .into_iter()
        .map(|action| {
            let chart = BarChart {
                title: format!("Mean gas for action {}", action),
                y_label: "Gas used".to_string(),
                bars: mean_by_contract(gas, &action).into_iter().collect(),
            };
            (action, chart)
        })
        .collect()
}

/// Deploy mean with one call mean stacked on top, per contract
fn deploy_plus_call_chart(savings: &SavingsTable, call_action: &str) -> StackedBarChart {
    let deploy = savings.deploy();
    let call = savings.row(call_action);
    let layer = |row: Option<&SavingsRow>, baseline: bool| {
        row.and_then(|r| if baseline { r.baseline_mean } else { r.candidate_mean })
            .unwrap_or(0.0)
    };

    StackedBarChart {
        title: format!("Gas for deploy + one {} call", call_action),
        y_label: "Gas used".to_string(),
        layers: vec![DEPLOY_ACTION.to_string(), call_action.to_string()],
        bars: vec![
            (savings.baseline.clone(), vec![layer(deploy, true), layer(call, true)]),
            (savings.candidate.clone(), vec![layer(deploy, false), layer(call, false)]),
        ],
    }
}

fn cumulative_cost_chart(series: &[CostSeries; 2], call_action: &str) -> LineChart {
    LineChart {
        title: "Cumulative gas cost".to_string(),
        x_label: format!("Number of {} calls", call_action),
        y_label: "Total gas".to_string(),
        series: series
            .iter()
            .map(|s| LineSeriesData {
                label: s.contract.clone(),
                points: s.points.iter().map(|&(n, cost)| (n as f64, cost)).collect(),
            })
            .collect(),
    }
}

/// Pivot fee rows into contract groups with one bar per action
///
/// **Private** - both axes sorted; missing (contract, action) pairs stay empty
fn fee_chart(fees: &[FeeSummaryRow], unit: FeeUnit) -> GroupedBarChart {
    let mut groups: Vec<String> = fees.iter().map(|r| r.contract.clone()).collect();
    groups.sort();
    groups.dedup();

    let mut series: Vec<String> = fees.iter().map(|r| r.action.clone()).collect();
    series.sort();
    series.dedup();

    let values = groups
        .iter()
        .map(|contract| {
            series
                .iter()
                .map(|action| {
                    fees.iter()
                        .find(|r| &r.contract == contract && &r.action == action)
                        .map(|r| unit.value(r))
                })
                .collect()
        })
        .collect();

    GroupedBarChart {
        title: format!("Mean fee per action ({})", unit.label()),
        y_label: format!("Fee ({})", unit.label()),
        groups,
        series,
        values,
    }
}

fn bytecode_chart(sizes: &[(String, u64)]) -> BarChart {
    BarChart {
        title: "Bytecode size".to_string(),
        y_label: "Bytes".to_string(),
        bars: sizes
            .iter()
            .map(|(contract, size)| (contract.clone(), *size as f64))
            .collect(),
    }
}

/// Action name usable inside a file name
fn file_safe(action: &str) -> String {
    action
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
