//! Report views
//!
//! Derived, never-persisted views over a report's entries:
//! - Detail: every entry with its row id and a total
//! - Summary: totals per date against the daily claimable cap

pub mod detail;
pub mod summary;

pub use detail::{DetailReport, DetailRow};
pub use summary::{SummaryReport, SummaryRow};
