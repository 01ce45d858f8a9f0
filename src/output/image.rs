//! Table rasterization to PNG.
//!
//! Geometry follows a 200 dpi figure: the canvas grows with the number of
//! rows and columns, and never shrinks below what the wrapped cell text
//! needs.

use super::table::{wrap_text, SummaryTable, TableKind};
use crate::chart::drawing_error;
use crate::utils::config::{
    TABLE_COL_WIDTH_IN, TABLE_DPI, TABLE_MIN_HEIGHT_IN, TABLE_MIN_WIDTH_IN, TABLE_ROW_HEIGHT_IN,
    TABLE_TITLE_HEIGHT_IN,
};
use crate::utils::error::{ChartError, OutputError};
use log::info;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

// 8pt / 10pt text at 200 dpi
const FONT_PX: f64 = 22.0;
const TITLE_FONT_PX: f64 = 28.0;
const LINE_PX: u32 = 30;
const CHAR_PX: u32 = 13;
const CELL_PAD_PX: u32 = 12;
const CANVAS_MARGIN_PX: u32 = 20;

/// Pixel geometry and wrapped text of a table image
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub width: u32,
    pub height: u32,
    pub title: Option<&'static str>,
    pub title_height: u32,

    /// Top-left corner of the header row
    pub origin: (u32, u32),

    pub col_widths: Vec<u32>,

    /// Header row first
    pub row_heights: Vec<u32>,

    /// `lines[row][col]`, header row first
    pub lines: Vec<Vec<Vec<String>>>,
}

impl TableLayout {
    pub fn table_width(&self) -> u32 {
        self.col_widths.iter().sum()
    }

    pub fn table_height(&self) -> u32 {
        self.row_heights.iter().sum()
    }
}

/// Compute the layout of a table image
///
/// **Public** - pure geometry, no drawing
pub fn layout_table(table: &SummaryTable, kind: TableKind, col_wrap: usize) -> TableLayout {
    let title = kind.title();
    let ncols = table.column_count();
    let nrows = table.row_count();

    let mut lines: Vec<Vec<Vec<String>>> = Vec::with_capacity(nrows + 1);
    lines.push(table.headers.iter().map(|h| vec![h.clone()]).collect());
    for row in &table.rows {
        lines.push(
            row.iter()
                .map(|cell| {
                    let text = cell.format(table.format);
                    if cell.is_text() {
                        wrap_text(&text, col_wrap)
                    } else {
                        vec![text]
                    }
                })
                .collect(),
        );
    }

    let col_widths: Vec<u32> = (0..ncols)
        .map(|col| {
            let chars = lines
                .iter()
                .filter_map(|row| row.get(col))
                .flatten()
                .map(|line| line.chars().count() as u32)
                .max()
                .unwrap_or(0);
            chars * CHAR_PX + 2 * CELL_PAD_PX
        })
        .collect();

    let row_heights: Vec<u32> = lines
        .iter()
        .map(|row| {
            let max_lines = row.iter().map(Vec::len).max().unwrap_or(0).max(1) as u32;
            max_lines * LINE_PX + CELL_PAD_PX
        })
        .collect();

    let width_in = TABLE_MIN_WIDTH_IN.max(ncols as f64 * TABLE_COL_WIDTH_IN);
    let title_in = if title.is_some() { TABLE_TITLE_HEIGHT_IN } else { 0.0 };
    let height_in = TABLE_MIN_HEIGHT_IN.max(1.0 + nrows as f64 * TABLE_ROW_HEIGHT_IN + title_in);

    let title_height = if title.is_some() {
        (TITLE_FONT_PX as u32) * 2 + CANVAS_MARGIN_PX
    } else {
        0
    };
    let table_width: u32 = col_widths.iter().sum();
    let table_height: u32 = row_heights.iter().sum();

    let width = ((width_in * TABLE_DPI).round() as u32).max(table_width + 2 * CANVAS_MARGIN_PX);
    let height = ((height_in * TABLE_DPI).round() as u32)
        .max(title_height + table_height + 2 * CANVAS_MARGIN_PX);

    let origin = (
        (width - table_width) / 2,
        title_height + (height - title_height - table_height) / 2,
    );

    TableLayout {
        width,
        height,
        title,
        title_height,
        origin,
        col_widths,
        row_heights,
        lines,
    }
}

/// Render a summary table to a PNG image
///
/// **Public** - the title comes from `kind`; text cells are wrapped to
/// `col_wrap` characters
pub fn render_table_image(
    table: &SummaryTable,
    kind: TableKind,
    output_path: impl AsRef<Path>,
    col_wrap: usize,
) -> Result<(), ChartError> {
    let output_path = output_path.as_ref();
    if table.column_count() == 0 {
        return Err(ChartError::EmptyData("table has no columns"));
    }
    super::validate_path(output_path)
        .and_then(|_| super::ensure_parent_dir(output_path))
        .map_err(|e: OutputError| ChartError::Drawing(e.to_string()))?;

    let layout = layout_table(table, kind, col_wrap);

    let root = BitMapBackend::new(output_path, (layout.width, layout.height)).into_drawing_area();
    root.fill(&WHITE).map_err(drawing_error)?;

    let centered = Pos::new(HPos::Center, VPos::Center);

    if let Some(title) = layout.title {
        let style = TextStyle::from(("sans-serif", TITLE_FONT_PX).into_font())
            .color(&BLACK)
            .pos(centered);
        root.draw_text(
            title,
            &style,
            ((layout.width / 2) as i32, (layout.title_height / 2) as i32),
        )
        .map_err(drawing_error)?;
    }

    let cell_style = TextStyle::from(("sans-serif", FONT_PX).into_font())
        .color(&BLACK)
        .pos(centered);

    let mut y = layout.origin.1 as i32;
    for (row_idx, row) in layout.lines.iter().enumerate() {
        let row_height = layout.row_heights[row_idx] as i32;
        let mut x = layout.origin.0 as i32;

        for (col_idx, cell_lines) in row.iter().enumerate() {
            let col_width = layout.col_widths[col_idx] as i32;

            root.draw(&Rectangle::new(
                [(x, y), (x + col_width, y + row_height)],
                BLACK.stroke_width(1),
            ))
            .map_err(drawing_error)?;

            let center_x = x + col_width / 2;
            let first_line_y =
                y + row_height / 2 - (cell_lines.len().saturating_sub(1) as i32 * LINE_PX as i32) / 2;
            for (i, line) in cell_lines.iter().enumerate() {
                root.draw_text(line, &cell_style, (center_x, first_line_y + i as i32 * LINE_PX as i32))
                    .map_err(drawing_error)?;
            }

            x += col_width;
        }
        y += row_height;
    }

    root.present().map_err(drawing_error)?;
    info!("Table written to: {}", output_path.display());
    Ok(())
}
