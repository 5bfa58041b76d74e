//! CLI structure and flag definitions.
//!
//! The binary has no subcommands; it starts the interactive menu directly.
//! Flags only tune logging and the audit log location.

use clap::Parser;
use std::path::PathBuf;

/// Command-line tool for managing guest reservations.
#[derive(Parser)]
#[command(name = "resa")]
#[command(version, about = "Manage guest reservations from an interactive menu", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", env = "RESA_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the audit log location
    #[arg(long, value_name = "PATH", env = "RESA_AUDIT_LOG")]
    pub audit_log: Option<PathBuf>,

    /// Disable the audit log entirely
    #[arg(long)]
    pub no_audit: bool,
}
