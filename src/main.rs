//! Waypoint - delivery network planner CLI
//!
//! An interactive shell over an in-memory network of locations and
//! weighted routes, answering shortest-path and reachability queries.

mod cli;
mod commands;
mod session;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use waypoint_core::error::ExitCode as WaypointExitCode;
use waypoint_core::format::OutputFormat;
use waypoint_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = Cli::parse();

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match session::run(&cli) {
        Ok(()) => ExitCode::from(WaypointExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(e.exit_code() as u8)
        }
    }
}
