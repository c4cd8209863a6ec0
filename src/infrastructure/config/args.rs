use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "spendo",
    version,
    about = "A lightweight expense-tracking terminal client",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Base URL of the expense-tracker API.
    #[arg(long, value_name = "URL", env = "EXPENSE_API_URL")]
    pub base_url: Option<String>,

    /// Timestamp format (chrono format string) for expense rows.
    #[arg(long, value_name = "FORMAT")]
    pub timestamp_format: Option<String>,
}
