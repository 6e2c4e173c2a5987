//! CLI argument parsing for waypoint
//!
//! The binary takes no subcommands: it starts a session that reads
//! network commands from stdin (or from a script file via `--script`).

use std::path::PathBuf;

use clap::Parser;

use waypoint_core::format::OutputFormat;

/// Waypoint - delivery network planner
#[derive(Parser, Debug)]
#[command(name = "waypoint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read session commands from a file instead of stdin
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress prompts and non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, env = "WAYPOINT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
