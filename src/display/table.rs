//! Renderable report tables
//!
//! Turns the detail and summary views into string tables shared by the
//! terminal renderer and the spreadsheet exporter.

use tabled::builder::Builder;
use tabled::settings::{object::Rows, Alignment, Style};

use super::format::{format_currency, format_total_label, TOTAL_LABEL};
use crate::reports::{DetailReport, SummaryReport};

/// Column headers of the detail view
pub const DETAIL_COLUMNS: [&str; 4] = ["ID", "Date", "Amount", "Description"];

/// Column headers of the summary view
pub const SUMMARY_COLUMNS: [&str; 3] = ["Date", "Total", "Claimable Total"];

/// A formatted table: ordered columns, data rows and a final total row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_row: Vec<String>,
}

impl ReportTable {
    /// Format the detail view of report `name`
    pub fn detail(name: &str, report: &DetailReport, symbol: &str) -> Self {
        let rows = report
            .rows
            .iter()
            .map(|row| {
                vec![
                    row.id.to_string(),
                    row.entry.date_string(),
                    format_currency(row.entry.amount, symbol),
                    row.entry.description.clone(),
                ]
            })
            .collect();

        let total = format_currency(report.total, symbol);

        Self {
            title: format!("Expense Report: {}", name),
            columns: DETAIL_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
            total_row: vec![
                String::new(),
                String::new(),
                format_total_label(&total, TOTAL_LABEL),
                String::new(),
            ],
        }
    }

    /// Format the summary view of report `name`
    pub fn summary(name: &str, report: &SummaryReport, symbol: &str) -> Self {
        let rows = report
            .rows
            .iter()
            .map(|row| {
                vec![
                    row.date.format(crate::models::DATE_FORMAT).to_string(),
                    format_currency(row.total, symbol),
                    format_currency(row.claimable_total, symbol),
                ]
            })
            .collect();

        let grand_total = format_currency(report.grand_total, symbol);
        let claimable = format_currency(report.claimable_grand_total, symbol);

        Self {
            title: format!("Summary Report: {}", name),
            columns: SUMMARY_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
            total_row: vec![
                String::new(),
                format_total_label(&grand_total, TOTAL_LABEL),
                format_total_label(&claimable, TOTAL_LABEL),
            ],
        }
    }

    /// Render as a boxed terminal table with the title above it
    pub fn render(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(self.columns.iter().cloned());
        for row in &self.rows {
            builder.push_record(row.iter().cloned());
        }
        builder.push_record(self.total_row.iter().cloned());

        let mut table = builder.build();
        table.with(Style::modern());
        table.modify(Rows::last(), Alignment::right());

        format!("{}\n{}\n", self.title, table)
    }
}
