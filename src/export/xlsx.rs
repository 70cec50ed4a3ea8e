//! Spreadsheet export
//!
//! Writes a report as an `.xlsx` workbook with two sheets: the detail view
//! and the summary view.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::display::ReportTable;
use crate::error::ExpenseResult;

/// Name of the sheet holding the detail view
pub const DETAIL_SHEET: &str = "Expense Report";

/// Name of the sheet holding the summary view
pub const SUMMARY_SHEET: &str = "Summary Report";

/// Write the detail and summary tables to a workbook at `path`
///
/// Any existing file at `path` is replaced.
pub fn write_workbook(detail: &ReportTable, summary: &ReportTable, path: &Path) -> ExpenseResult<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(DETAIL_SHEET)?;
    write_table(sheet, detail, &bold)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name(SUMMARY_SHEET)?;
    write_table(sheet, summary, &bold)?;

    workbook.save(path)?;
    Ok(())
}

/// Header row, data rows, then the bold total row
fn write_table(sheet: &mut Worksheet, table: &ReportTable, bold: &Format) -> Result<(), XlsxError> {
    for (col, name) in table.columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, name, bold)?;
    }

    for (i, row) in table.rows.iter().enumerate() {
        let row_num = i as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            sheet.write_string(row_num, col as u16, cell)?;
        }
    }

    let total_row = table.rows.len() as u32 + 1;
    for (col, cell) in table.total_row.iter().enumerate() {
        if !cell.is_empty() {
            sheet.write_string_with_format(total_row, col as u16, cell, bold)?;
        }
    }

    sheet.autofit();
    Ok(())
}
