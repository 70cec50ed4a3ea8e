use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use expense_cli::cli::{
    handle_config_command, handle_report_command, ConfigCommands, ReportCommands,
};
use expense_cli::config::{ExpensePaths, Settings};
use expense_cli::storage::ReportRepository;

/// Environment variable holding the log filter, e.g. `EXPENSE_LOG=debug`
const LOG_ENV: &str = "EXPENSE_LOG";

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Command line expense report tracker",
    long_about = "Record dated expenses into named reports, view them in detail \
                  or summarised by day against a daily claimable maximum, and \
                  export them to Excel."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Report(ReportCommands),

    #[command(flatten)]
    Config(ConfigCommands),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    paths.ensure_directories()?;
    let mut settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "paths resolved");

    let repo = ReportRepository::new(paths.reports_dir());

    match cli.command {
        Some(Commands::Report(cmd)) => handle_report_command(&repo, &paths, &mut settings, cmd)?,
        Some(Commands::Config(cmd)) => handle_config_command(&paths, &mut settings, cmd)?,
        None => {
            println!("expense - command line expense reports");
            println!();
            println!("Run 'expense --help' for usage information.");
        }
    }

    Ok(())
}
