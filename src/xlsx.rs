use crate::{
    config::Output,
    record::{Record, HEADERS},
};
use anyhow::{Context, Result};
use rust_xlsxwriter::{Table, TableColumn, TableStyle, Workbook};
use std::path::Path;

/// Write the records as a single-sheet workbook: a named table spanning the
/// full range, banded rows, and columns widened to fit their content.
pub fn write_workbook(cfg: &Output, path: &Path, records: &[Record]) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(&cfg.sheet_name)?;

    // Header cells come from the table definition; data rows start at row 1.
    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, cell) in record.row().iter().enumerate() {
            sheet.write_string(row, col as u16, *cell)?;
        }
    }

    let columns: Vec<TableColumn> = HEADERS
        .iter()
        .map(|h| TableColumn::new().set_header(*h))
        .collect();

    let table = Table::new()
        .set_name(&cfg.table_name)
        .set_style(TableStyle::Medium9)
        .set_banded_rows(cfg.banded_rows)
        .set_columns(&columns);

    // A table range needs at least one data row, even for an empty report.
    let last_row = records.len().max(1) as u32;
    let last_col = (HEADERS.len() - 1) as u16;
    sheet.add_table(0, 0, last_row, last_col, &table)?;

    for (col, width) in column_widths(records, cfg).iter().enumerate() {
        sheet.set_column_width(col as u16, *width as f64)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("writing workbook: {}", path.display()))?;
    Ok(())
}

/// Per-column width: longest cell in the column (header included, measured
/// in chars) plus the configured padding, optionally capped.
pub fn column_widths(records: &[Record], cfg: &Output) -> Vec<usize> {
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();

    for record in records {
        for (col, cell) in record.row().iter().enumerate() {
            widths[col] = widths[col].max(cell.chars().count());
        }
    }

    for w in &mut widths {
        *w += cfg.column_padding as usize;
        if cfg.max_column_width > 0 {
            *w = (*w).min(cfg.max_column_width as usize);
        }
    }
    widths
}
