//! Display formatting for terminal output
//!
//! Provides currency formatting and the table structures used both for
//! terminal rendering and spreadsheet export.

pub mod format;
pub mod table;

pub use format::{format_currency, format_total_label, TOTAL_LABEL};
pub use table::{ReportTable, DETAIL_COLUMNS, SUMMARY_COLUMNS};
