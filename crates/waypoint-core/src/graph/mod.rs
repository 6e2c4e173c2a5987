//! Graph store and path-exploration operations
//!
//! Provides the delivery network model and its queries:
//! - Location/route store with stable names and dense handles
//! - Dijkstra shortest paths for delivery planning
//! - BFS traversal for route simulation

pub mod algos;
pub mod store;
pub mod types;

pub use algos::{shortest_paths, traverse, COST_PER_ETA_UNIT};
pub use store::LocationGraph;
pub use types::{DeliveryPlan, PlanEntry, Reach, TraversalResult};
