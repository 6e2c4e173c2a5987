//! Single-source shortest paths (Dijkstra)

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{Result, WaypointError};
use crate::graph::store::LocationGraph;
use crate::graph::types::{DeliveryPlan, PlanEntry, Reach};

/// Conversion rate from travel time (ETA units) to the reported cost.
pub const COST_PER_ETA_UNIT: i64 = 5;

/// Min-heap entry ordered by tentative distance, then handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry {
    eta: i64,
    handle: usize,
}

/// Compute shortest paths from `source` to every location.
///
/// Classic Dijkstra with a binary-heap frontier and lazy deletion: a
/// popped entry whose distance exceeds the best known for its node is a
/// stale leftover from an earlier insertion and is skipped, which avoids
/// needing a decrease-key operation. O((V+E) log V).
///
/// Requires non-negative route costs; negative costs are not rejected by
/// the store and make the result undefined.
#[tracing::instrument(skip(graph), fields(locations = graph.len()))]
pub fn shortest_paths(graph: &LocationGraph, source: &str) -> Result<DeliveryPlan> {
    let src = graph
        .handle(source)
        .ok_or_else(|| WaypointError::LocationNotFound {
            name: source.to_string(),
        })?;

    // None marks "unreachable so far"
    let mut dist: Vec<Option<i64>> = vec![None; graph.len()];
    dist[src] = Some(0);

    let mut heap = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        eta: 0,
        handle: src,
    }));

    while let Some(Reverse(HeapEntry { eta, handle })) = heap.pop() {
        // Stale entry, a shorter path was found after this was pushed
        if dist[handle].is_some_and(|best| eta > best) {
            continue;
        }

        for &(next, cost) in graph.neighbors(handle) {
            let candidate = eta + cost;
            if dist[next].map_or(true, |best| candidate < best) {
                dist[next] = Some(candidate);
                heap.push(Reverse(HeapEntry {
                    eta: candidate,
                    handle: next,
                }));
            }
        }
    }

    let entries = graph
        .locations()
        .iter()
        .zip(&dist)
        .map(|(location, d)| PlanEntry {
            location: location.clone(),
            outcome: match d {
                Some(eta) => Reach::Reached {
                    eta: *eta,
                    cost: eta * COST_PER_ETA_UNIT,
                },
                None => Reach::Unreachable,
            },
        })
        .collect();

    Ok(DeliveryPlan {
        source: source.to_string(),
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(plan: &DeliveryPlan, location: &str) -> Reach {
        plan.entries
            .iter()
            .find(|e| e.location == location)
            .map(|e| e.outcome)
            .unwrap()
    }

    #[test]
    fn test_shortest_paths_prefers_cheaper_detour() {
        let mut graph = LocationGraph::new();
        for name in ["A", "B", "C"] {
            graph.add_location(name).unwrap();
        }
        graph.add_route("A", "B", 1).unwrap();
        graph.add_route("B", "C", 2).unwrap();
        graph.add_route("A", "C", 5).unwrap();

        let plan = shortest_paths(&graph, "A").unwrap();

        assert_eq!(outcome(&plan, "A"), Reach::Reached { eta: 0, cost: 0 });
        assert_eq!(outcome(&plan, "B"), Reach::Reached { eta: 1, cost: 5 });
        // Via A -> B -> C, not the direct cost-5 route
        assert_eq!(outcome(&plan, "C"), Reach::Reached { eta: 3, cost: 15 });
    }

    #[test]
    fn test_isolated_location_is_unreachable() {
        let mut graph = LocationGraph::new();
        for name in ["A", "B", "D"] {
            graph.add_location(name).unwrap();
        }
        graph.add_route("A", "B", 1).unwrap();

        let plan = shortest_paths(&graph, "A").unwrap();
        assert_eq!(outcome(&plan, "D"), Reach::Unreachable);
    }

    #[test]
    fn test_entries_follow_handle_order() {
        let mut graph = LocationGraph::new();
        for name in ["C", "A", "B"] {
            graph.add_location(name).unwrap();
        }

        let plan = shortest_paths(&graph, "A").unwrap();
        let names: Vec<&str> = plan.entries.iter().map(|e| e.location.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn test_duplicate_routes_use_cheapest() {
        let mut graph = LocationGraph::new();
        graph.add_location("A").unwrap();
        graph.add_location("B").unwrap();
        graph.add_route("A", "B", 9).unwrap();
        graph.add_route("A", "B", 4).unwrap();

        let plan = shortest_paths(&graph, "A").unwrap();
        assert_eq!(outcome(&plan, "B"), Reach::Reached { eta: 4, cost: 20 });
    }

    #[test]
    fn test_self_route_does_not_change_distance() {
        let mut graph = LocationGraph::new();
        graph.add_location("A").unwrap();
        graph.add_route("A", "A", 3).unwrap();

        let plan = shortest_paths(&graph, "A").unwrap();
        assert_eq!(outcome(&plan, "A"), Reach::Reached { eta: 0, cost: 0 });
    }

    #[test]
    fn test_unknown_source() {
        let graph = LocationGraph::new();
        let err = shortest_paths(&graph, "Nowhere").unwrap_err();
        assert!(matches!(err, WaypointError::LocationNotFound { .. }));
    }
}
