//! Export module for the expense tracker
//!
//! Provides report export to Excel workbooks.

pub mod xlsx;

pub use xlsx::{write_workbook, DETAIL_SHEET, SUMMARY_SHEET};
