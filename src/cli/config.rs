//! Configuration CLI commands
//!
//! Implements `set-max`, `set-currency` and `view-config`, plus the prompts
//! used when a command needs a setting that has not been configured.

use clap::Subcommand;
use tracing::info;

use super::prompt::prompt_until;
use crate::config::settings::NOT_SET;
use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;
use crate::models::{ClaimableCap, CurrencySymbol};

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Set the daily maximum amount allowed to be claimed
    SetMax {
        /// Amount such as 50 or 50.01, or "unlimited"
        #[arg(value_parser = ClaimableCap::parse)]
        max_claimable_amount: ClaimableCap,
    },
    /// Set the currency symbol to be used in the expense report
    SetCurrency {
        /// Currency symbol, e.g. £ or $
        #[arg(value_parser = CurrencySymbol::parse)]
        currency: CurrencySymbol,
    },
    /// Show the current configuration and paths
    ViewConfig,
}

/// Handle a configuration command
pub fn handle_config_command(
    paths: &ExpensePaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> ExpenseResult<()> {
    match cmd {
        ConfigCommands::SetMax {
            max_claimable_amount,
        } => {
            set_claimable_cap(paths, settings, max_claimable_amount)?;
            println!("Max daily claimable amount set to: {}", max_claimable_amount);
        }

        ConfigCommands::SetCurrency { currency } => {
            set_currency(paths, settings, currency.clone())?;
            println!("Currency set to: '{}'", currency);
        }

        ConfigCommands::ViewConfig => {
            let show = |value: Option<String>| value.unwrap_or_else(|| NOT_SET.to_string());

            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config file:       {}", paths.settings_file().display());
            println!("Reports directory: {}", paths.reports_dir().display());
            println!();
            println!("Settings:");
            println!(
                "  Max claimable amount: {}",
                show(settings.claimable_cap().map(|c| c.to_string()))
            );
            println!(
                "  Currency:             {}",
                show(settings.currency().map(|c| c.to_string()))
            );
        }
    }

    Ok(())
}

/// The configured cap, prompting for (and saving) it if unset
pub fn require_claimable_cap(
    paths: &ExpensePaths,
    settings: &mut Settings,
) -> ExpenseResult<ClaimableCap> {
    if let Some(cap) = settings.claimable_cap() {
        return Ok(cap);
    }

    println!("Max claimable amount is not set");
    println!("Enter maximum daily claim amount");
    println!("Format: Whole number or 2 decimals (50 or 50.01) or 'unlimited'");
    let cap = prompt_until("Amount: ", ClaimableCap::parse)?;

    set_claimable_cap(paths, settings, cap)?;
    Ok(cap)
}

/// The configured currency symbol, prompting for (and saving) it if unset
pub fn require_currency(
    paths: &ExpensePaths,
    settings: &mut Settings,
) -> ExpenseResult<CurrencySymbol> {
    if let Some(currency) = settings.currency() {
        return Ok(currency.clone());
    }

    println!("The currency symbol is not set");
    println!("Enter currency symbol (e.g. £ or $)");
    let currency = prompt_until("Symbol: ", CurrencySymbol::parse)?;

    set_currency(paths, settings, currency.clone())?;
    Ok(currency)
}

fn set_claimable_cap(
    paths: &ExpensePaths,
    settings: &mut Settings,
    cap: ClaimableCap,
) -> ExpenseResult<()> {
    settings.max_claimable_amount = Some(cap);
    settings.save(paths)?;
    info!(%cap, "max claimable amount updated");
    Ok(())
}

fn set_currency(
    paths: &ExpensePaths,
    settings: &mut Settings,
    currency: CurrencySymbol,
) -> ExpenseResult<()> {
    let symbol = currency.to_string();
    settings.currency = Some(currency);
    settings.save(paths)?;
    info!(currency = %symbol, "currency updated");
    Ok(())
}
