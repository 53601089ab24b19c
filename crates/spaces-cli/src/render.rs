//! Text rendering of result rows and option tables.

use spaces_core::{OptionTable, SpaceRow, COLUMNS};

/// Output format for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

pub fn render(rows: &[SpaceRow], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    }
}

/// Left-aligned columns separated by two spaces, header first.
pub fn render_table(rows: &[SpaceRow]) -> String {
    if rows.is_empty() {
        return "No spaces matched.".to_string();
    }

    let cells: Vec<[String; 11]> = rows.iter().map(SpaceRow::cells).collect();

    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 1);
    lines.push(format_line(COLUMNS.iter().copied(), &widths));
    for row in &cells {
        lines.push(format_line(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn format_line<'a>(values: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    values
        .zip(widths)
        .map(|(value, width)| format!("{:<width$}", value, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// One line per dropdown: `Name: a, b, c (default: a)`.
pub fn render_options(tables: &[OptionTable]) -> String {
    let mut lines: Vec<String> = tables
        .iter()
        .map(|t| format!("{}: {} (default: {})", t.name, t.values.join(", "), t.default))
        .collect();
    lines.push(format!(
        "Max Results: {}-{} (default: {})",
        spaces_core::SearchConfig::MIN_LIMIT,
        spaces_core::SearchConfig::MAX_LIMIT,
        spaces_core::SearchConfig::DEFAULT_LIMIT
    ));
    lines.join("\n")
}
