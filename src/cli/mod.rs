//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod prompt;
pub mod report;

pub use config::{handle_config_command, ConfigCommands};
pub use report::{handle_report_command, ReportCommands};
