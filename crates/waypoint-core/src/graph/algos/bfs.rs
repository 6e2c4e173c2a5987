//! Reachability traversal (BFS)

use std::collections::VecDeque;

use crate::error::{Result, WaypointError};
use crate::graph::store::LocationGraph;
use crate::graph::types::TraversalResult;

/// Visit every location reachable from `source` in breadth-first order.
///
/// Neighbors are enqueued in adjacency order, so the discovery order
/// reflects the order routes were added. Unreachable locations are simply
/// absent from the result.
#[tracing::instrument(skip(graph), fields(locations = graph.len()))]
pub fn traverse(graph: &LocationGraph, source: &str) -> Result<TraversalResult> {
    let src = graph
        .handle(source)
        .ok_or_else(|| WaypointError::LocationNotFound {
            name: source.to_string(),
        })?;

    let mut visited = vec![false; graph.len()];
    let mut queue = VecDeque::new();
    visited[src] = true;
    queue.push_back(src);

    let mut order = Vec::new();
    while let Some(current) = queue.pop_front() {
        order.push(graph.locations()[current].clone());

        for &(next, _) in graph.neighbors(current) {
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }

    Ok(TraversalResult {
        source: source.to_string(),
        visited: order,
    })
}
