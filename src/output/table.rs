//! Summary table model shared by the text and image renderers.

use crate::aggregator::{FeeSummaryRow, GasSummaryRow, SavingsTable};

/// Which summary a table holds; selects the image title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    GasSummary,
    SavingsPercentage,
    FeeSummary,
    Untitled,
}

impl TableKind {
    pub fn title(self) -> Option<&'static str> {
        match self {
            TableKind::GasSummary => Some("Gas Usage Summary"),
            TableKind::SavingsPercentage => Some("Gas Savings Percentage"),
            TableKind::FeeSummary => Some("Fee Summary"),
            TableKind::Untitled => None,
        }
    }
}

/// How floating point cells are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub precision: usize,
    pub suffix: &'static str,
}

impl NumberFormat {
    pub const fn fixed(precision: usize) -> Self {
        Self { precision, suffix: "" }
    }

    pub const fn with_suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = suffix;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Integer(u64),

    /// `None` is an undefined value (printed as NaN)
    Float(Option<f64>),
}

impl Cell {
    pub fn format(&self, format: NumberFormat) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Integer(n) => n.to_string(),
            Cell::Float(Some(v)) if v.is_nan() => "NaN".to_string(),
            Cell::Float(Some(v)) if v.is_infinite() => {
                (if *v > 0.0 { "inf" } else { "-inf" }).to_string()
            }
            Cell::Float(Some(v)) => format!("{:.*}{}", format.precision, v, format.suffix),
            Cell::Float(None) => "NaN".to_string(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Cell::Text(_))
    }
}

/// A rendered-ready table: header plus rows of cells
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub format: NumberFormat,
}

impl SummaryTable {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cells formatted as strings, row by row
    pub fn formatted_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|c| c.format(self.format)).collect())
            .collect()
    }
}

/// Gas usage summary: contract, action, mean, std, min, max
pub fn gas_summary_table(rows: &[GasSummaryRow]) -> SummaryTable {
    SummaryTable {
        headers: ["contract", "action", "mean", "std", "min", "max"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
        rows: rows
            .iter()
            .map(|r| {
                vec![
                    Cell::Text(r.contract.clone()),
                    Cell::Text(r.action.clone()),
                    Cell::Float(Some(r.mean)),
                    Cell::Float(r.std),
                    Cell::Integer(r.min),
                    Cell::Integer(r.max),
                ]
            })
            .collect(),
        format: NumberFormat::fixed(1),
    }
}

/// Savings table: action, baseline mean, candidate mean, savings %
pub fn savings_summary_table(savings: &SavingsTable, suffix: &'static str) -> SummaryTable {
    SummaryTable {
        headers: vec![
            "action".to_string(),
            savings.baseline.clone(),
            savings.candidate.clone(),
            "savings %".to_string(),
        ],
        rows: savings
            .rows
            .iter()
            .map(|r| {
                vec![
                    Cell::Text(r.action.clone()),
                    Cell::Float(r.baseline_mean),
                    Cell::Float(r.candidate_mean),
                    Cell::Float(r.percent),
                ]
            })
            .collect(),
        format: NumberFormat::fixed(2).with_suffix(suffix),
    }
}

/// Fee summary: contract, action, avgGas, avgFeeETH, avgFeeUSD
pub fn fee_summary_table(rows: &[FeeSummaryRow]) -> SummaryTable {
    SummaryTable {
        headers: ["contract", "action", "avgGas", "avgFeeETH", "avgFeeUSD"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
        rows: rows
            .iter()
            .map(|r| {
                vec![
                    Cell::Text(r.contract.clone()),
                    Cell::Text(r.action.clone()),
                    Cell::Float(Some(r.avg_gas)),
                    Cell::Float(Some(r.avg_fee_eth)),
                    Cell::Float(Some(r.avg_fee_usd)),
                ]
            })
            .collect(),
        format: NumberFormat::fixed(6),
    }
}

/// Greedy word wrap to `width` characters
///
/// Words longer than `width` are split. Whitespace runs collapse to a
/// single space; an empty or blank input yields no lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while !word.is_empty() {
            let used = current.chars().count();
            let sep = usize::from(used > 0);

            if used + sep + word.len() <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.extend(word.drain(..));
            } else if used > 0 {
                lines.push(std::mem::take(&mut current));
            } else {
                // Word alone exceeds the width
                current.extend(word.drain(..width));
                lines.push(std::mem::take(&mut current));
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
