//! Main entry point for the resa CLI.
//!
//! This is the command-line interface for the resa reservation manager. It
//! wires configuration, logging, and the audit sink together, then hands
//! control to the interactive menu:
//! - `1` make a reservation
//! - `2` view all reservations
//! - `3` cancel a reservation
//! - `4` update a reservation
//! - `5` search reservations
//! - `6` exit

mod cli;
mod error;
mod input;
mod menu;

use std::io;

use clap::Parser;

use cli::Cli;
use error::CliError;
use menu::MenuSession;
use resa::{init_logger, AuditSink, ConfigBuilder, ReservationStore};

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    // Load configuration (file, then environment; flags override below)
    let mut builder = ConfigBuilder::new();
    if let Some(ref data_dir) = cli.data_dir {
        builder = builder.with_data_dir(data_dir);
    }
    let config = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let logger = init_logger(cli.verbose, cli.quiet, config.log_mode.as_deref());

    // Open the audit sink up front; a failure is reported once and the
    // session continues with auditing disabled.
    let audit = if cli.no_audit {
        AuditSink::disabled()
    } else {
        let path = cli.audit_log.clone().unwrap_or_else(|| config.audit_log_or_default());
        match AuditSink::open(&path) {
            Ok(sink) => {
                logger.debug(&format!("audit log: {}", path.display()));
                sink
            }
            Err(e) => {
                logger.warn(&format!(
                    "audit log unavailable at {}: {e}",
                    path.display()
                ));
                AuditSink::disabled()
            }
        }
    };

    let store = ReservationStore::with_audit(audit);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = MenuSession::new(store, stdin.lock(), stdout.lock());
    session.run()?;

    Ok(())
}
