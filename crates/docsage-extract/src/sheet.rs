//! Tabular extraction: Excel workbooks and delimited text.
//!
//! Both render through the same whitespace-aligned text table, cells
//! right-aligned per column, no row indices.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Reader};
use docsage_core::{Error, Result};

/// Extract the first worksheet of an `.xls`/`.xlsx` workbook as an aligned
/// text table.
pub fn extract_workbook(bytes: &[u8]) -> Result<String> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| Error::Extract(format!("workbook parse failed: {e}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Extract("workbook has no sheets".into()))?
        .map_err(|e| Error::Extract(format!("worksheet read failed: {e}")))?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    Ok(render_table(&rows))
}

/// Extract comma-separated input as an aligned text table.
pub fn extract_csv(bytes: &[u8]) -> Result<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::Extract(format!("csv parse failed: {e}")))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(render_table(&rows))
}

/// Render rows with each column padded to its widest cell, columns separated
/// by two spaces.
fn render_table(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len());
    for row in rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{cell:>width$}", width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_renders_aligned_table() {
        let out = extract_csv(b"name,qty\napples,1\nfig,230\n").unwrap();
        assert_eq!(out, "  name  qty\napples    1\n   fig  230");
    }

    #[test]
    fn test_csv_no_row_indices() {
        let out = extract_csv(b"a,b\nc,d\n").unwrap();
        for line in out.lines() {
            assert!(!line.trim_start().starts_with(char::is_numeric));
        }
    }

    #[test]
    fn test_ragged_rows_are_tolerated() {
        let out = extract_csv(b"a,b,c\nd\n").unwrap();
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn test_empty_csv() {
        assert_eq!(extract_csv(b"").unwrap(), "");
    }

    #[test]
    fn test_workbook_garbage_is_an_error() {
        let err = extract_workbook(b"definitely not a workbook").unwrap_err();
        assert!(matches!(err, Error::Extract(_)));
    }
}
