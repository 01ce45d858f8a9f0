//! PNG chart rendering using plotters.
//!
//! Charts are described by small data structs (bars, stacked bars,
//! grouped bars, lines) built by the report command, then rasterized
//! here. Rendering never reads back its own output.

pub mod bar;
pub mod line;

use crate::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};
use crate::utils::error::{ChartError, OutputError};
use plotters::style::RGBColor;
use std::path::Path;

// Re-export main types
pub use bar::{
    render_bar_chart, render_grouped_bar_chart, render_stacked_bar_chart, BarChart,
    GroupedBarChart, StackedBarChart,
};
pub use line::{render_line_chart, LineChart, LineSeriesData};

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Series colors, in matplotlib's default cycle order
pub const PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Color of the i-th series, cycling through the palette
pub fn series_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

/// Upper bound of a value axis starting at zero
///
/// Leaves 10% headroom above the largest finite value; falls back to 1.0
/// when nothing positive is drawn.
pub fn axis_upper_bound<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let max = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(0.0f64, f64::max);

    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

/// Compact axis tick label
pub fn format_axis_value(value: f64) -> String {
    let abs = value.abs();
    if abs == 0.0 {
        "0".to_string()
    } else if abs >= 1e9 {
        format!("{:.1}G", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if abs >= 1e3 {
        format!("{:.0}", value)
    } else if abs >= 1.0 {
        format!("{:.2}", value)
    } else {
        format!("{:.2e}", value)
    }
}

/// Map any plotters error into a `ChartError`
pub(crate) fn drawing_error<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Drawing(err.to_string())
}

/// Create the parent directory of a chart path if needed
pub(crate) fn prepare_output(path: &Path) -> Result<(), ChartError> {
    crate::output::validate_path(path)
        .and_then(|_| crate::output::ensure_parent_dir(path))
        .map_err(|e: OutputError| ChartError::Drawing(e.to_string()))
}
