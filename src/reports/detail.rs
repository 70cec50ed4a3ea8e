//! Detail view
//!
//! Every entry of a report in date order, numbered with its row id, plus a
//! synthetic total row.

use crate::models::{Entry, Money};
use crate::services::entries::sort_by_date;

/// One entry together with its current row id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    /// 1-based position in date order, as accepted by `rm --id`
    pub id: usize,
    pub entry: Entry,
}

/// The detail view of a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailReport {
    /// Entries sorted ascending by date
    pub rows: Vec<DetailRow>,
    /// Amount of the total row: the exact sum of all entries
    pub total: Money,
}

impl DetailReport {
    /// Build the detail view from a report's entries
    pub fn build(entries: &[Entry]) -> Self {
        let mut sorted = entries.to_vec();
        sort_by_date(&mut sorted);

        let total = sorted.iter().map(|e| e.amount).sum();
        let rows = sorted
            .into_iter()
            .enumerate()
            .map(|(i, entry)| DetailRow { id: i + 1, entry })
            .collect();

        Self { rows, total }
    }

    /// Check if the report has no entries
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
