use colored::*;

use crate::projection::{CellValue, Column, Table};

const MAX_CELL_WIDTH: usize = 40;

pub fn print_table(table: &Table) {
    let widths = column_widths(table);

    let header = table
        .columns
        .iter()
        .zip(&widths)
        .map(|(column, width)| format!("{:<width$}", column.name, width = width))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header.bold());
    println!("{}", "-".repeat(header.len()));

    for row in &table.rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", render_cell(cell), width = width))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line);
    }

    println!();
    println!("{} rows", table.rows.len());
    if table.truncated {
        println!(
            "{}",
            "Result truncated: pagination stopped at the page cap.".yellow()
        );
    }
}

pub fn print_columns(columns: &[Column]) {
    println!("{:<30} {:<12}", "Column".bold(), "Type".bold());
    println!("{}", "-".repeat(42));
    for column in columns {
        let kind = match serde_json::to_value(column.kind) {
            Ok(serde_json::Value::String(s)) => s,
            _ => "unknown".to_string(),
        };
        println!("{:<30} {:<12}", truncate(&column.name, 28), kind);
    }
}

fn render_cell(cell: &Option<CellValue>) -> String {
    match cell {
        Some(value) => truncate(&value.to_string(), MAX_CELL_WIDTH),
        None => "-".to_string(),
    }
}

fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.name.len()).collect();

    for row in &table.rows {
        for (index, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(index) {
                *width = (*width).max(render_cell(cell).len()).min(MAX_CELL_WIDTH);
            }
        }
    }

    widths
}

// Counts chars, not bytes: slicing by byte index would panic mid-character
// on non-ASCII text.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("a very long string", 10), "a very ...");
    }

    #[test]
    fn test_truncate_multibyte_text() {
        let accents = "é".repeat(21);
        assert_eq!(truncate(&accents, 40), accents);
        assert_eq!(truncate(&"é".repeat(50), 40), format!("{}...", "é".repeat(37)));
        assert_eq!(truncate("日本語のタイトルです", 8), "日本語のタ...");
    }
}
