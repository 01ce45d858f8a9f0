//! Bar chart variants: simple, stacked and grouped.
//!
//! Bars sit in a segmented integer x axis, one segment per slot. Slot
//! labels are drawn at segment centers.

use super::{
    axis_upper_bound, drawing_error, format_axis_value, prepare_output, series_color, ChartConfig,
};
use crate::utils::error::ChartError;
use log::info;
use plotters::coord::ranged1d::SegmentedCoord;
use plotters::coord::types::{RangedCoordf64, RangedCoordusize};
use plotters::prelude::*;
use std::path::Path;

/// Horizontal gap between a bar and its segment edge, in pixels
const BAR_MARGIN: u32 = 12;

type SlotChart<'a, DB> =
    ChartContext<'a, DB, Cartesian2d<SegmentedCoord<RangedCoordusize>, RangedCoordf64>>;

/// One bar per label
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub y_label: String,
    pub bars: Vec<(String, f64)>,
}

/// One bar per label, each split into stacked layers
#[derive(Debug, Clone, PartialEq)]
pub struct StackedBarChart {
    pub title: String,
    pub y_label: String,

    /// Layer names, bottom first
    pub layers: Vec<String>,

    /// Bar label and one value per layer
    pub bars: Vec<(String, Vec<f64>)>,
}

impl StackedBarChart {
    /// Height of the tallest stack
    pub fn max_total(&self) -> f64 {
        axis_upper_bound(self.bars.iter().map(|(_, v)| v.iter().sum::<f64>())) / 1.1
    }
}

/// Groups of side-by-side bars, one bar per series
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBarChart {
    pub title: String,
    pub y_label: String,
    pub groups: Vec<String>,
    pub series: Vec<String>,

    /// `values[group][series]`, `None` where there is no data
    pub values: Vec<Vec<Option<f64>>>,
}

impl GroupedBarChart {
    /// Slot index of a bar; each group is followed by one empty slot
    pub fn slot(&self, group: usize, series: usize) -> usize {
        group * (self.series.len() + 1) + series
    }

    /// Slot under which the group label is printed
    pub fn label_slot(&self, group: usize) -> usize {
        self.slot(group, self.series.len() / 2)
    }

    fn slot_count(&self) -> usize {
        self.groups.len() * (self.series.len() + 1)
    }
}

/// Render a simple bar chart to PNG
pub fn render_bar_chart(
    chart: &BarChart,
    output_path: impl AsRef<Path>,
    config: &ChartConfig,
) -> Result<(), ChartError> {
    let output_path = output_path.as_ref();
    if chart.bars.is_empty() {
        return Err(ChartError::EmptyData("bar chart has no bars"));
    }
    prepare_output(output_path)?;

    let labels: Vec<String> = chart.bars.iter().map(|(l, _)| l.clone()).collect();
    let y_max = axis_upper_bound(chart.bars.iter().map(|(_, v)| *v));

    let root = BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(drawing_error)?;

    let mut ctx = build_slot_chart(&root, &chart.title, labels.len(), y_max)?;
    draw_slot_mesh(&mut ctx, &labels, &chart.y_label)?;

    let color = series_color(0);
    ctx.draw_series(
        chart
            .bars
            .iter()
            .enumerate()
            .filter(|(_, (_, v))| v.is_finite())
            .map(|(i, (_, v))| slot_bar(i, 0.0, *v, color)),
    )
    .map_err(drawing_error)?;

    root.present().map_err(drawing_error)?;
    info!("Chart written to: {}", output_path.display());
    Ok(())
}

/// Render a stacked bar chart to PNG
pub fn render_stacked_bar_chart(
    chart: &StackedBarChart,
    output_path: impl AsRef<Path>,
    config: &ChartConfig,
) -> Result<(), ChartError> {
    let output_path = output_path.as_ref();
    if chart.bars.is_empty() || chart.layers.is_empty() {
        return Err(ChartError::EmptyData("stacked bar chart has no bars"));
    }
    prepare_output(output_path)?;

    let labels: Vec<String> = chart.bars.iter().map(|(l, _)| l.clone()).collect();
    let y_max = axis_upper_bound(std::iter::once(chart.max_total()));

    let root = BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(drawing_error)?;

    let mut ctx = build_slot_chart(&root, &chart.title, labels.len(), y_max)?;
    draw_slot_mesh(&mut ctx, &labels, &chart.y_label)?;

    let mut bottoms = vec![0.0f64; chart.bars.len()];
    for (layer, name) in chart.layers.iter().enumerate() {
        let color = series_color(layer);
        let mut rects = Vec::new();

        for (i, (_, values)) in chart.bars.iter().enumerate() {
            let value = values.get(layer).copied().filter(|v| v.is_finite()).unwrap_or(0.0);
            rects.push(slot_bar(i, bottoms[i], bottoms[i] + value, color));
            bottoms[i] += value;
        }

        ctx.draw_series(rects)
            .map_err(drawing_error)?
            .label(name.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    draw_legend(&mut ctx)?;
    root.present().map_err(drawing_error)?;
    info!("Chart written to: {}", output_path.display());
    Ok(())
}

/// Render a grouped bar chart to PNG
pub fn render_grouped_bar_chart(
    chart: &GroupedBarChart,
    output_path: impl AsRef<Path>,
    config: &ChartConfig,
) -> Result<(), ChartError> {
    let output_path = output_path.as_ref();
    if chart.groups.is_empty() || chart.series.is_empty() {
        return Err(ChartError::EmptyData("grouped bar chart has no bars"));
    }
    prepare_output(output_path)?;

    let mut labels = vec![String::new(); chart.slot_count()];
    for (g, group) in chart.groups.iter().enumerate() {
        labels[chart.label_slot(g)] = group.clone();
    }
    let y_max = axis_upper_bound(chart.values.iter().flatten().flatten().copied());

    let root = BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(drawing_error)?;

    // The last slot is the trailing gap of the last group
    let mut ctx = build_slot_chart(&root, &chart.title, labels.len() - 1, y_max)?;
    draw_slot_mesh(&mut ctx, &labels, &chart.y_label)?;

    for (s, name) in chart.series.iter().enumerate() {
        let color = series_color(s);
        let rects: Vec<_> = chart
            .values
            .iter()
            .enumerate()
            .filter_map(|(g, row)| {
                let value = row.get(s).copied().flatten().filter(|v| v.is_finite())?;
                Some(slot_bar(chart.slot(g, s), 0.0, value, color))
            })
            .collect();

        ctx.draw_series(rects)
            .map_err(drawing_error)?
            .label(name.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    draw_legend(&mut ctx)?;
    root.present().map_err(drawing_error)?;
    info!("Chart written to: {}", output_path.display());
    Ok(())
}

/// Build a chart whose x axis has one segment per slot plus a trailing one
fn build_slot_chart<'a, DB: DrawingBackend>(
    root: &'a DrawingArea<DB, plotters::coord::Shift>,
    title: &str,
    slots: usize,
    y_max: f64,
) -> Result<SlotChart<'a, DB>, ChartError> {
    ChartBuilder::on(root)
        .caption(title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d((0..slots).into_segmented(), 0f64..y_max)
        .map_err(drawing_error)
}

fn draw_slot_mesh<DB: DrawingBackend>(
    ctx: &mut SlotChart<'_, DB>,
    labels: &[String],
    y_label: &str,
) -> Result<(), ChartError> {
    let x_formatter = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
        _ => String::new(),
    };
    let y_formatter = |v: &f64| format_axis_value(*v);

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len() + 1)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .y_desc(y_label)
        .draw()
        .map_err(drawing_error)
}

fn draw_legend<'a, DB: DrawingBackend + 'a>(ctx: &mut SlotChart<'a, DB>) -> Result<(), ChartError> {
    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.75))
        .border_style(BLACK)
        .draw()
        .map_err(drawing_error)
}

fn slot_bar(
    slot: usize,
    bottom: f64,
    top: f64,
    color: RGBColor,
) -> Rectangle<(SegmentValue<usize>, f64)> {
    let mut rect = Rectangle::new(
        [(SegmentValue::Exact(slot), bottom), (SegmentValue::Exact(slot + 1), top)],
        color.filled(),
    );
    rect.set_margin(0, 0, BAR_MARGIN, BAR_MARGIN);
    rect
}
