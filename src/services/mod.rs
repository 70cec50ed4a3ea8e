//! Business logic layer
//!
//! Entry operations are pure functions over entry lists; the report service
//! wraps them in the load-modify-save cycle against storage.

pub mod entries;
pub mod report;

pub use entries::{append, delete_by_id, sort_by_date};
pub use report::ReportService;
