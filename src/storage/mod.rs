//! Storage layer for the expense tracker
//!
//! Provides JSON file storage for reports with atomic writes and automatic
//! directory creation.

pub mod file_io;
pub mod reports;

pub use file_io::{read_json_required, write_json_atomic};
pub use reports::{create_empty, load_entries, report_name, save_entries, ReportRepository};
