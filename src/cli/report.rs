//! Report CLI commands
//!
//! Implements creating, updating, displaying, listing, removing and
//! exporting expense reports.

use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;
use tracing::debug;

use super::config::{require_claimable_cap, require_currency};
use super::prompt::{confirm, prompt_until};
use crate::config::{ExpensePaths, Settings};
use crate::display::ReportTable;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_date, Entry, Money, DATE_FORMAT};
use crate::services::ReportService;
use crate::storage::{report_name, ReportRepository};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Create a new expense report with the specified name
    Create {
        /// Name of the new report
        name: String,
    },
    /// Add expenses to a report (prompts for anything not given)
    Update {
        /// Report name
        name: String,
        /// Expense date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// Amount, e.g. 50 or 50.01
        #[arg(short, long)]
        amount: Option<String>,
        /// What the expense was for
        #[arg(long)]
        description: Option<String>,
    },
    /// Display a report
    Display {
        /// Report name
        name: String,
        /// Display the summarised report, grouped by date
        #[arg(short, long)]
        summary: bool,
    },
    /// List all expense reports
    Ls,
    /// Remove a report, or a single entry with --id
    Rm {
        /// Report name
        name: String,
        /// Report ID (as shown by `display`) of the entry to delete
        #[arg(short, long, allow_hyphen_values = true)]
        id: Option<i64>,
    },
    /// Export a report to an Excel spreadsheet
    Export {
        /// Report name
        name: String,
        /// Directory to write <name>.xlsx into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
        /// Overwrite an existing file without asking
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a report command
pub fn handle_report_command(
    repo: &ReportRepository,
    paths: &ExpensePaths,
    settings: &mut Settings,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    let service = ReportService::new(repo);

    match cmd {
        ReportCommands::Create { name } => {
            service.create(&name)?;
            println!("Created new report: '{}'", report_name(&name));
        }

        ReportCommands::Update {
            name,
            date,
            amount,
            description,
        } => {
            if let (Some(date), Some(amount), Some(description)) = (&date, &amount, &description) {
                let entry = Entry::parse(date, amount, description)?;
                service.add_entry(&name, entry)?;
                println!("Added expense to '{}'", report_name(&name));
                return Ok(());
            }

            // Fail before prompting if the report is missing
            if !repo.exists(&name) {
                return Err(ExpenseError::report_not_found(report_name(&name)));
            }

            let mut prefilled = (date, amount, description);
            loop {
                let entry = prompt_entry(&mut prefilled)?;
                service.add_entry(&name, entry)?;
                println!("Added expense to '{}'", report_name(&name));

                if !confirm("Do you want to add another entry?")? {
                    break;
                }
            }
        }

        ReportCommands::Display { name, summary } => {
            let symbol = require_currency(paths, settings)?;
            let table = if summary {
                let cap = require_claimable_cap(paths, settings)?;
                let report = service.summary(&name, cap)?;
                ReportTable::summary(report_name(&name), &report, symbol.as_str())
            } else {
                let report = service.detail(&name)?;
                ReportTable::detail(report_name(&name), &report, symbol.as_str())
            };

            println!();
            print!("{}", table.render());
        }

        ReportCommands::Ls => match service.list() {
            Ok(names) => {
                println!("Expense Reports:");
                println!();
                for name in names {
                    println!("  - {}", name);
                }
            }
            Err(e) if e.is_not_found() => println!("There are no reports to list"),
            Err(e) => return Err(e),
        },

        ReportCommands::Rm { name, id } => match id {
            Some(id) => {
                let removed = service.remove_entry(&name, id)?;
                println!(
                    "Deleted Report ID: {} ({} {} {})",
                    id,
                    removed.date_string(),
                    removed.amount,
                    removed.description
                );
            }
            None => {
                service.delete(&name)?;
                println!("Successfully removed report: '{}'", report_name(&name));
            }
        },

        ReportCommands::Export {
            name,
            output,
            force,
        } => {
            if !repo.exists(&name) {
                return Err(ExpenseError::report_not_found(report_name(&name)));
            }
            if !output.is_dir() {
                return Err(ExpenseError::Export(format!(
                    "Directory does not exist: {}",
                    output.display()
                )));
            }

            let path = output.join(format!("{}.xlsx", report_name(&name)));
            if path.exists()
                && !force
                && !confirm(&format!("{} already exists. Overwrite?", path.display()))?
            {
                println!("Export cancelled");
                return Ok(());
            }

            let symbol = require_currency(paths, settings)?;
            let cap = require_claimable_cap(paths, settings)?;
            service.export(&name, cap, symbol.as_str(), &path)?;
            println!(
                "Exported Expense Report '{}' to {}",
                report_name(&name),
                path.display()
            );
        }
    }

    Ok(())
}

/// Prompt for one entry, using any prefilled fields first
///
/// Prefilled fields are consumed, so later entries prompt for everything.
fn prompt_entry(
    prefilled: &mut (Option<String>, Option<String>, Option<String>),
) -> ExpenseResult<Entry> {
    let date = match prefilled.0.take() {
        Some(date) => parse_date(&date)?,
        None => {
            println!("Enter expense date");
            println!("Format: YYYY-MM-DD (blank for today)");
            prompt_until("Date: ", |answer| {
                if answer.is_empty() {
                    Ok(Local::now().date_naive())
                } else {
                    parse_date(answer)
                }
            })?
        }
    };

    let amount = match prefilled.1.take() {
        Some(amount) => {
            Money::parse(&amount).map_err(|e| ExpenseError::Validation(e.to_string()))?
        }
        None => {
            println!("Enter cost of expense");
            println!("Format: Whole number or 2 decimals (50 or 50.01)");
            prompt_until("Cost: ", |answer| {
                Money::parse(answer).map_err(|e| ExpenseError::Validation(e.to_string()))
            })?
        }
    };

    let description = match prefilled.2.take() {
        Some(description) => description,
        None => {
            println!("Enter expense description");
            prompt_until("Description: ", |answer| {
                if answer.is_empty() {
                    Err(ExpenseError::Validation("Description cannot be empty".into()))
                } else {
                    Ok(answer.to_string())
                }
            })?
        }
    };

    let entry = Entry::new(date, amount, description.trim());
    entry.validate()?;
    debug!(date = %entry.date.format(DATE_FORMAT), amount = %entry.amount, "entry read from prompt");
    Ok(entry)
}
