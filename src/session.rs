//! Interactive session loop
//!
//! Reads one command per line, applies it to the in-memory network, and
//! renders the result. Parse failures and network errors are reported and
//! the session continues; only I/O failures or an interrupt end it early.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use waypoint_core::error::{Result, WaypointError};
use waypoint_core::format::OutputFormat;
use waypoint_core::graph::LocationGraph;

use crate::cli::Cli;
use crate::commands;

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddLocation { name: String },
    RemoveLocation { name: String },
    AddRoute { from: String, to: String, cost: i64 },
    RemoveRoute { from: String, to: String },
    Locations,
    Plan { source: String },
    Simulate { source: String },
    Help,
    Quit,
}

pub fn run(cli: &Cli) -> Result<()> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);

    let _ = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    });

    let mut graph = LocationGraph::new();

    match &cli.script {
        Some(path) => {
            let file = File::open(path)?;
            run_loop(&mut graph, BufReader::new(file), cli, false, &interrupted)
        }
        None => {
            let prompt = io::stdin().is_terminal() && !cli.quiet;
            let stdin = io::stdin();
            run_loop(&mut graph, stdin.lock(), cli, prompt, &interrupted)
        }
    }
}

fn run_loop<R: BufRead>(
    graph: &mut LocationGraph,
    reader: R,
    cli: &Cli,
    prompt: bool,
    interrupted: &AtomicBool,
) -> Result<()> {
    if prompt {
        println!("Waypoint session. Type 'help' for commands, 'quit' to leave.");
    }

    let mut lines = reader.lines();
    loop {
        if interrupted.load(Ordering::SeqCst) {
            return Err(WaypointError::Interrupted);
        }

        if prompt {
            print!("waypoint> ");
            io::stdout().flush()?;
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(Command::Quit) => break,
            Ok(command) => {
                if let Err(e) = commands::execute(graph, &command, cli.format) {
                    report(&e, cli);
                }
            }
            Err(e) => report(&e, cli),
        }
    }

    Ok(())
}

/// Report a recoverable error without ending the session
fn report(error: &WaypointError, cli: &Cli) {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", error);
    }
}

/// Parse one session line into a command.
///
/// Tokens are whitespace-separated, so location names cannot contain
/// spaces. Malformed numbers and unknown commands surface as usage
/// errors, never as network state changes.
pub fn parse_line(line: &str) -> Result<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        ["add", name] => Ok(Command::AddLocation {
            name: (*name).to_string(),
        }),
        ["remove", name] => Ok(Command::RemoveLocation {
            name: (*name).to_string(),
        }),
        ["route", "add", from, to, cost] => {
            let cost: i64 = cost
                .parse()
                .map_err(|_| WaypointError::UsageError(format!("invalid cost: {}", cost)))?;
            Ok(Command::AddRoute {
                from: (*from).to_string(),
                to: (*to).to_string(),
                cost,
            })
        }
        ["route", "remove", from, to] => Ok(Command::RemoveRoute {
            from: (*from).to_string(),
            to: (*to).to_string(),
        }),
        ["locations"] => Ok(Command::Locations),
        ["plan", source] => Ok(Command::Plan {
            source: (*source).to_string(),
        }),
        ["simulate", source] => Ok(Command::Simulate {
            source: (*source).to_string(),
        }),
        ["help"] => Ok(Command::Help),
        ["quit"] | ["exit"] => Ok(Command::Quit),
        _ => Err(WaypointError::UsageError(format!(
            "unknown command: {} (try 'help')",
            line
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_location() {
        assert_eq!(
            parse_line("add Depot").unwrap(),
            Command::AddLocation {
                name: "Depot".to_string()
            }
        );
    }

    #[test]
    fn test_parse_route_add() {
        assert_eq!(
            parse_line("route add Depot North 12").unwrap(),
            Command::AddRoute {
                from: "Depot".to_string(),
                to: "North".to_string(),
                cost: 12,
            }
        );
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        assert_eq!(
            parse_line("  route   remove  A  B ").unwrap(),
            Command::RemoveRoute {
                from: "A".to_string(),
                to: "B".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_invalid_cost() {
        let err = parse_line("route add A B twelve").unwrap_err();
        assert!(matches!(err, WaypointError::UsageError(_)));
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = parse_line("teleport A").unwrap_err();
        assert!(matches!(err, WaypointError::UsageError(_)));
    }

    #[test]
    fn test_parse_quit_aliases() {
        assert_eq!(parse_line("quit").unwrap(), Command::Quit);
        assert_eq!(parse_line("exit").unwrap(), Command::Quit);
    }
}
