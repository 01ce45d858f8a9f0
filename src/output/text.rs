//! Plain-text rendering of summary tables for stdout.

use super::table::SummaryTable;

/// Render a table as right-aligned columns, header first
pub fn render_text_table(table: &SummaryTable) -> String {
    let rows = table.formatted_rows();

    let widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&render_line(&table.headers, &widths));
    for row in &rows {
        out.push('\n');
        out.push_str(&render_line(row, &widths));
    }
    out
}

/// Render a headed section: `### HEADING ###` followed by the table
pub fn render_section(heading: &str, table: &SummaryTable) -> String {
    format!("\n### {} ###\n{}", heading, render_text_table(table))
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:>width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::table::{Cell, NumberFormat};
    use pretty_assertions::assert_eq;

    fn sample_table() -> SummaryTable {
        SummaryTable {
            headers: vec!["contract".to_string(), "action".to_string(), "mean".to_string()],
            rows: vec![
                vec![
                    Cell::Text("OraMemory".to_string()),
                    Cell::Text("deploy".to_string()),
                    Cell::Float(Some(512345.0)),
                ],
                vec![
                    Cell::Text("B".to_string()),
                    Cell::Text("aggregateQuotes".to_string()),
                    Cell::Float(None),
                ],
            ],
            format: NumberFormat::fixed(1),
        }
    }

    #[test]
    fn test_render_text_table() {
        let text = render_text_table(&sample_table());
        let expected = [
            " contract           action      mean",
            "OraMemory           deploy  512345.0",
            "        B  aggregateQuotes       NaN",
        ]
        .join("\n");

        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_section_heading() {
        let text = render_section("GAS USAGE SUMMARY", &sample_table());
        assert!(text.starts_with("\n### GAS USAGE SUMMARY ###\n"));
    }

    #[test]
    fn test_header_only_table() {
        let table = SummaryTable {
            headers: vec!["a".to_string(), "bb".to_string()],
            rows: Vec::new(),
            format: NumberFormat::fixed(2),
        };

        assert_eq!(render_text_table(&table), " a  bb");
    }
}
