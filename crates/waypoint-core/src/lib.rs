//! Waypoint Core Library
//!
//! Core domain logic for the Waypoint delivery network planner:
//! an in-memory graph of named locations with weighted, undirected
//! routes and path-exploration queries over it.

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
