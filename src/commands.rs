//! Session command handlers
//!
//! Each handler applies one operation to the network and renders the
//! outcome in the requested format. Handlers never read input; the
//! session owns the line loop.

use waypoint_core::error::Result;
use waypoint_core::format::OutputFormat;
use waypoint_core::graph::{self, LocationGraph, Reach};

use crate::session::Command;

pub fn execute(graph: &mut LocationGraph, command: &Command, format: OutputFormat) -> Result<()> {
    match command {
        Command::AddLocation { name } => add_location(graph, name, format),
        Command::RemoveLocation { name } => remove_location(graph, name, format),
        Command::AddRoute { from, to, cost } => add_route(graph, from, to, *cost, format),
        Command::RemoveRoute { from, to } => remove_route(graph, from, to, format),
        Command::Locations => list_locations(graph, format),
        Command::Plan { source } => plan(graph, source, format),
        Command::Simulate { source } => simulate(graph, source, format),
        Command::Help => {
            print_help();
            Ok(())
        }
        // Quit is handled by the session loop before dispatch
        Command::Quit => Ok(()),
    }
}

fn add_location(graph: &mut LocationGraph, name: &str, format: OutputFormat) -> Result<()> {
    graph.add_location(name)?;
    match format {
        OutputFormat::Human => println!("Location '{}' added.", name),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({"status": "ok", "op": "add-location", "name": name})
        ),
    }
    Ok(())
}

fn remove_location(graph: &mut LocationGraph, name: &str, format: OutputFormat) -> Result<()> {
    graph.remove_location(name)?;
    match format {
        OutputFormat::Human => println!("Location '{}' removed.", name),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({"status": "ok", "op": "remove-location", "name": name})
        ),
    }
    Ok(())
}

fn add_route(
    graph: &mut LocationGraph,
    from: &str,
    to: &str,
    cost: i64,
    format: OutputFormat,
) -> Result<()> {
    graph.add_route(from, to, cost)?;
    match format {
        OutputFormat::Human => {
            println!("Route from '{}' to '{}' added with cost {}.", from, to, cost);
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "status": "ok", "op": "add-route", "from": from, "to": to, "cost": cost
            })
        ),
    }
    Ok(())
}

fn remove_route(
    graph: &mut LocationGraph,
    from: &str,
    to: &str,
    format: OutputFormat,
) -> Result<()> {
    graph.remove_route(from, to)?;
    match format {
        OutputFormat::Human => println!("Route between '{}' and '{}' removed.", from, to),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "status": "ok", "op": "remove-route", "from": from, "to": to
            })
        ),
    }
    Ok(())
}

fn list_locations(graph: &LocationGraph, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if graph.is_empty() {
                println!("No locations.");
            } else {
                println!("Locations:");
                for name in graph.locations() {
                    println!("- {}", name);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::json!({"locations": graph.locations()}));
        }
    }
    Ok(())
}

fn plan(graph: &LocationGraph, source: &str, format: OutputFormat) -> Result<()> {
    let plan = graph::shortest_paths(graph, source)?;
    match format {
        OutputFormat::Human => {
            println!("--- Delivery plan from '{}' ---", source);
            for entry in &plan.entries {
                match entry.outcome {
                    Reach::Reached { eta, cost } => {
                        println!("{}: ETA = {}, Cost = {}", entry.location, eta, cost);
                    }
                    Reach::Unreachable => println!("{}: Unreachable", entry.location),
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
    }
    Ok(())
}

fn simulate(graph: &LocationGraph, source: &str, format: OutputFormat) -> Result<()> {
    let traversal = graph::traverse(graph, source)?;
    match format {
        OutputFormat::Human => {
            println!("--- Route simulation from '{}' ---", source);
            for stop in &traversal.visited {
                println!("Delivering to: {}", stop);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&traversal)?),
    }
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  add <name>                    Add a location");
    println!("  remove <name>                 Remove a location and its routes");
    println!("  route add <from> <to> <cost>  Add an undirected route");
    println!("  route remove <from> <to>      Remove all routes between two locations");
    println!("  locations                     List locations");
    println!("  plan <source>                 Shortest paths from a source");
    println!("  simulate <source>             BFS delivery order from a source");
    println!("  help                          Show this help");
    println!("  quit                          End the session");
}
