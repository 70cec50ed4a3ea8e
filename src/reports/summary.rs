//! Summary view
//!
//! Groups a report by date, applying the daily claimable cap to each date's
//! total, and adds a grand-total row.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{ClaimableCap, Entry, Money};

/// Totals for one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryRow {
    pub date: NaiveDate,
    /// Sum of the amounts on this date
    pub total: Money,
    /// `total` limited by the cap
    pub claimable_total: Money,
}

/// The summary view of a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    /// One row per distinct date, ascending
    pub rows: Vec<SummaryRow>,
    /// Sum of all row totals
    pub grand_total: Money,
    /// Sum of all row claimable totals
    pub claimable_grand_total: Money,
}

impl SummaryReport {
    /// Build the summary view from a report's entries
    pub fn build(entries: &[Entry], cap: ClaimableCap) -> Self {
        let mut by_date: BTreeMap<NaiveDate, Money> = BTreeMap::new();
        for entry in entries {
            *by_date.entry(entry.date).or_default() += entry.amount;
        }

        let rows: Vec<SummaryRow> = by_date
            .into_iter()
            .map(|(date, total)| SummaryRow {
                date,
                total,
                claimable_total: cap.apply(total),
            })
            .collect();

        let grand_total = rows.iter().map(|r| r.total).sum();
        let claimable_grand_total = rows.iter().map(|r| r.claimable_total).sum();

        Self {
            rows,
            grand_total,
            claimable_grand_total,
        }
    }
}
