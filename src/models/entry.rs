//! Expense entry model
//!
//! A single dated expense belonging to one report.

use chrono::NaiveDate;

use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Date format used for entries, both on disk and at the prompt
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One expense record in a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Day the expense was incurred
    pub date: NaiveDate,

    /// Non-negative amount
    pub amount: Money,

    /// What the expense was for
    pub description: String,
}

impl Entry {
    /// Create a new entry
    pub fn new(date: NaiveDate, amount: Money, description: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            description: description.into(),
        }
    }

    /// Build an entry from raw user input, validating each field
    pub fn parse(date: &str, amount: &str, description: &str) -> ExpenseResult<Self> {
        let date = parse_date(date)?;
        let amount =
            Money::parse(amount).map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let entry = Self::new(date, amount, description.trim());
        entry.validate()?;
        Ok(entry)
    }

    /// Check the entry invariants
    pub fn validate(&self) -> ExpenseResult<()> {
        if self.amount.is_negative() {
            return Err(ExpenseError::Validation(format!(
                "Amount cannot be negative: {}",
                self.amount
            )));
        }

        if self.description.trim().is_empty() {
            return Err(ExpenseError::Validation(
                "Description cannot be empty".into(),
            ));
        }

        Ok(())
    }

    /// The entry date as an ISO 8601 string
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| {
        ExpenseError::Validation(format!(
            "Invalid date: '{}'. Use format YYYY-MM-DD",
            s.trim()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_entry() {
        let entry = Entry::parse("2024-01-15", "12.50", "  Lunch ").unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(entry.amount, Money::from_cents(1250));
        assert_eq!(entry.description, "Lunch");
        assert_eq!(entry.date_string(), "2024-01-15");
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let err = Entry::parse("2024-02-30", "1.00", "Taxi").unwrap_err();
        assert!(err.is_validation());
        assert!(Entry::parse("15/01/2024", "1.00", "Taxi").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_amount() {
        let err = Entry::parse("2024-01-15", "1.5", "Taxi").unwrap_err();
        assert!(err.is_validation());
        let err = Entry::parse("2024-01-15", "50000000000000000", "Yacht").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_parse_rejects_blank_description() {
        let err = Entry::parse("2024-01-15", "1.00", "   ").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let entry = Entry::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            Money::from_cents(-100),
            "Refund",
        );
        assert!(entry.validate().is_err());
    }
}
