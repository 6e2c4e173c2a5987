//! Result types for the path-exploration queries

use serde::Serialize;

/// Outcome of the shortest-path query for one location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Reach {
    /// Reachable from the source, with the minimum travel time and the
    /// derived monetary cost (eta scaled by the per-unit rate)
    Reached { eta: i64, cost: i64 },
    /// No path from the source
    Unreachable,
}

/// Per-location entry of a delivery plan, in handle order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    pub location: String,
    #[serde(flatten)]
    pub outcome: Reach,
}

/// Shortest-path distances from a source location
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryPlan {
    pub source: String,
    pub entries: Vec<PlanEntry>,
}

/// Locations reachable from a source, in BFS discovery order
#[derive(Debug, Clone, Serialize)]
pub struct TraversalResult {
    pub source: String,
    pub visited: Vec<String>,
}
