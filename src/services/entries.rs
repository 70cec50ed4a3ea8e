//! Entry operations
//!
//! Pure transformations over a report's entries. Row ids are 1-based
//! positions in ascending date order and are recomputed on every call.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Entry;

/// Sort entries ascending by date, keeping insertion order for equal dates
pub fn sort_by_date(entries: &mut [Entry]) {
    entries.sort_by_key(|e| e.date);
}

/// Return a copy of `entries` with `entry` inserted in date order
pub fn append(entries: &[Entry], entry: Entry) -> Vec<Entry> {
    let mut updated = Vec::with_capacity(entries.len() + 1);
    updated.extend_from_slice(entries);
    updated.push(entry);
    sort_by_date(&mut updated);
    updated
}

/// Return a copy of `entries` without the entry at row id `id`
///
/// Returns the remaining entries (in date order) and the removed entry.
pub fn delete_by_id(entries: &[Entry], id: i64) -> ExpenseResult<(Vec<Entry>, Entry)> {
    let index = usize::try_from(id)
        .ok()
        .filter(|&id| id >= 1 && id <= entries.len())
        .map(|id| id - 1)
        .ok_or(ExpenseError::IdNotFound(id))?;

    let mut updated = entries.to_vec();
    sort_by_date(&mut updated);
    let removed = updated.remove(index);
    Ok((updated, removed))
}
