//! Path-exploration algorithms over the location graph

mod bfs;
mod dijkstra;

pub use bfs::traverse;
pub use dijkstra::{shortest_paths, COST_PER_ETA_UNIT};
