//! Line charts over a numeric x axis.

use super::{
    axis_upper_bound, drawing_error, format_axis_value, prepare_output, series_color, ChartConfig,
};
use crate::utils::error::ChartError;
use log::{debug, info};
use plotters::prelude::*;
use std::path::Path;

/// One named line
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeriesData {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<LineSeriesData>,
}

impl LineChart {
    /// Largest x across all series
    pub fn x_max(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(|(x, _)| *x))
            .fold(0.0f64, f64::max)
    }
}

/// Render a line chart to PNG
pub fn render_line_chart(
    chart: &LineChart,
    output_path: impl AsRef<Path>,
    config: &ChartConfig,
) -> Result<(), ChartError> {
    let output_path = output_path.as_ref();
    if chart.series.iter().all(|s| s.points.is_empty()) {
        return Err(ChartError::EmptyData("line chart has no points"));
    }
    prepare_output(output_path)?;

    // A single point still needs a non-empty x range
    let x_max = chart.x_max().max(1.0);
    let y_max = axis_upper_bound(chart.series.iter().flat_map(|s| s.points.iter().map(|(_, y)| *y)));
    debug!("Line chart '{}': x in 0..{}, y in 0..{}", chart.title, x_max, y_max);

    let root = BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(drawing_error)?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)
        .map_err(drawing_error)?;

    let axis_formatter = |v: &f64| format_axis_value(*v);
    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .x_label_formatter(&axis_formatter)
        .y_label_formatter(&axis_formatter)
        .draw()
        .map_err(drawing_error)?;

    for (i, series) in chart.series.iter().enumerate() {
        let color = series_color(i);
        ctx.draw_series(LineSeries::new(series.points.iter().copied(), color.stroke_width(2)))
            .map_err(drawing_error)?
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(drawing_error)?;

    root.present().map_err(drawing_error)?;
    info!("Chart written to: {}", output_path.display());
    Ok(())
}
