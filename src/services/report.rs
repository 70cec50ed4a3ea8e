//! Report service
//!
//! Provides the read-modify-write workflow for named reports: every
//! mutation loads the full entry list, computes the new list and overwrites
//! the file.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::entries;
use crate::display::ReportTable;
use crate::error::ExpenseResult;
use crate::export::write_workbook;
use crate::models::{ClaimableCap, Entry};
use crate::reports::{DetailReport, SummaryReport};
use crate::storage::{report_name, ReportRepository};

/// Service for report management
pub struct ReportService<'a> {
    repo: &'a ReportRepository,
}

impl<'a> ReportService<'a> {
    /// Create a new report service
    pub fn new(repo: &'a ReportRepository) -> Self {
        Self { repo }
    }

    /// Create a new, empty report
    pub fn create(&self, name: &str) -> ExpenseResult<PathBuf> {
        let path = self.repo.create(name)?;
        info!(report = report_name(name), path = %path.display(), "created report");
        Ok(path)
    }

    /// Append an entry, keeping the report in date order
    ///
    /// Returns the updated entries.
    pub fn add_entry(&self, name: &str, entry: Entry) -> ExpenseResult<Vec<Entry>> {
        entry.validate()?;

        let current = self.repo.load(name)?;
        let updated = entries::append(&current, entry);
        self.repo.save(name, &updated)?;

        debug!(report = report_name(name), count = updated.len(), "appended entry");
        Ok(updated)
    }

    /// Remove the entry with row id `id`
    ///
    /// The file is left untouched if the id does not exist.
    pub fn remove_entry(&self, name: &str, id: i64) -> ExpenseResult<Entry> {
        let current = self.repo.load(name)?;
        let (updated, removed) = entries::delete_by_id(&current, id)?;
        self.repo.save(name, &updated)?;

        info!(report = report_name(name), id, "removed entry");
        Ok(removed)
    }

    /// Delete a whole report
    pub fn delete(&self, name: &str) -> ExpenseResult<()> {
        self.repo.delete(name)?;
        info!(report = report_name(name), "deleted report");
        Ok(())
    }

    /// Names of all reports
    pub fn list(&self) -> ExpenseResult<Vec<String>> {
        self.repo.list()
    }

    /// Detail view of a report
    pub fn detail(&self, name: &str) -> ExpenseResult<DetailReport> {
        Ok(DetailReport::build(&self.repo.load(name)?))
    }

    /// Summary view of a report
    pub fn summary(&self, name: &str, cap: ClaimableCap) -> ExpenseResult<SummaryReport> {
        Ok(SummaryReport::build(&self.repo.load(name)?, cap))
    }

    /// Formatted detail and summary tables of a report
    pub fn tables(
        &self,
        name: &str,
        cap: ClaimableCap,
        symbol: &str,
    ) -> ExpenseResult<(ReportTable, ReportTable)> {
        let entries = self.repo.load(name)?;
        let name = report_name(name);

        Ok((
            ReportTable::detail(name, &DetailReport::build(&entries), symbol),
            ReportTable::summary(name, &SummaryReport::build(&entries, cap), symbol),
        ))
    }

    /// Export a report to an `.xlsx` workbook at `path`
    pub fn export(
        &self,
        name: &str,
        cap: ClaimableCap,
        symbol: &str,
        path: &Path,
    ) -> ExpenseResult<()> {
        let (detail, summary) = self.tables(name, cap, symbol)?;
        write_workbook(&detail, &summary, path)?;

        info!(report = report_name(name), path = %path.display(), "exported report");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpenseError;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ReportRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ReportRepository::new(temp_dir.path().join("reports"));
        (temp_dir, repo)
    }

    fn entry(date: &str, cents: i64, description: &str) -> Entry {
        Entry::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            Money::from_cents(cents),
            description,
        )
    }

    #[test]
    fn test_add_entries_persist_sorted() {
        let (_temp_dir, repo) = create_test_repo();
        let service = ReportService::new(&repo);
        service.create("trip").unwrap();

        service.add_entry("trip", entry("2024-01-03", 100, "c")).unwrap();
        service.add_entry("trip", entry("2024-01-01", 100, "a")).unwrap();
        service.add_entry("trip", entry("2024-01-02", 100, "b")).unwrap();

        let stored = repo.load("trip").unwrap();
        let descriptions: Vec<_> = stored.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, ["a", "b", "c"]);
    }

    #[test]
    fn test_add_entry_to_missing_report() {
        let (_temp_dir, repo) = create_test_repo();
        let service = ReportService::new(&repo);

        let err = service.add_entry("nope", entry("2024-01-01", 100, "a")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_invalid_entry_is_rejected() {
        let (_temp_dir, repo) = create_test_repo();
        let service = ReportService::new(&repo);
        service.create("trip").unwrap();

        let err = service.add_entry("trip", entry("2024-01-01", 100, "  ")).unwrap_err();
        assert!(err.is_validation());
        assert!(repo.load("trip").unwrap().is_empty());
    }

    #[test]
    fn test_remove_entry() {
        let (_temp_dir, repo) = create_test_repo();
        let service = ReportService::new(&repo);
        service.create("trip").unwrap();
        service.add_entry("trip", entry("2024-01-02", 300, "later")).unwrap();
        service.add_entry("trip", entry("2024-01-01", 500, "earliest")).unwrap();

        let removed = service.remove_entry("trip", 1).unwrap();
        assert_eq!(removed.description, "earliest");
        assert_eq!(repo.load("trip").unwrap(), vec![entry("2024-01-02", 300, "later")]);
    }

    #[test]
    fn test_remove_unknown_id_leaves_file_untouched() {
        let (_temp_dir, repo) = create_test_repo();
        let service = ReportService::new(&repo);
        service.create("trip").unwrap();
        service.add_entry("trip", entry("2024-01-01", 500, "a")).unwrap();
        service.add_entry("trip", entry("2024-01-02", 300, "b")).unwrap();

        let path = repo.path_for("trip").unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let err = service.remove_entry("trip", 5).unwrap_err();
        assert!(matches!(err, ExpenseError::IdNotFound(5)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_views() {
        let (_temp_dir, repo) = create_test_repo();
        let service = ReportService::new(&repo);
        service.create("trip").unwrap();
        service.add_entry("trip", entry("2024-01-01", 500, "a")).unwrap();
        service.add_entry("trip", entry("2024-01-01", 500, "b")).unwrap();
        service.add_entry("trip", entry("2024-01-02", 300, "c")).unwrap();

        let detail = service.detail("trip").unwrap();
        assert_eq!(detail.total, Money::from_cents(1300));

        let summary = service
            .summary("trip", ClaimableCap::Limited(Money::from_cents(800)))
            .unwrap();
        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.grand_total, Money::from_cents(1300));
        assert_eq!(summary.claimable_grand_total, Money::from_cents(1100));
    }

    #[test]
    fn test_empty_report_views() {
        let (_temp_dir, repo) = create_test_repo();
        let service = ReportService::new(&repo);
        service.create("empty").unwrap();

        let (detail, summary) = service
            .tables("empty.json", ClaimableCap::Unlimited, "£")
            .unwrap();
        assert_eq!(detail.title, "Expense Report: empty");
        assert!(detail.rows.is_empty());
        assert!(summary.rows.is_empty());
        assert_eq!(summary.total_row[1], "Total: £0.00");
    }

    #[test]
    fn test_export_writes_file() {
        let (temp_dir, repo) = create_test_repo();
        let service = ReportService::new(&repo);
        service.create("trip").unwrap();
        service.add_entry("trip", entry("2024-01-01", 500, "a")).unwrap();

        let path = temp_dir.path().join("trip.xlsx");
        service
            .export("trip", ClaimableCap::Unlimited, "$", &path)
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_delete_and_list() {
        let (_temp_dir, repo) = create_test_repo();
        let service = ReportService::new(&repo);
        service.create("a").unwrap();
        service.create("b").unwrap();

        service.delete("a").unwrap();
        assert_eq!(service.list().unwrap(), vec!["b"]);
        assert!(service.delete("a").unwrap_err().is_not_found());
    }
}
