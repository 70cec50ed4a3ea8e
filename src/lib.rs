//! expense-cli - command line expense report tracker
//!
//! Expenses are recorded into named reports, each a JSON file of dated
//! entries. Reports can be shown in detail or summarised per day against a
//! configurable daily claimable maximum, and exported to an Excel workbook.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and persisted settings
//! - `error`: Custom error types
//! - `models`: Entries, money amounts, the claimable cap and currency
//! - `storage`: JSON report files
//! - `services`: Entry operations and the report service
//! - `reports`: Detail and per-day summary views
//! - `display`: Terminal tables
//! - `export`: Excel workbook output
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_cli::config::{ExpensePaths, Settings};
//! use expense_cli::services::ReportService;
//! use expense_cli::storage::ReportRepository;
//!
//! let paths = ExpensePaths::new()?;
//! let repo = ReportRepository::new(paths.reports_dir());
//! let detail = ReportService::new(&repo).detail("trip")?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
