//! In-memory store for the delivery network
//!
//! Locations are keyed by unique, case-sensitive names. Internally each
//! live location holds a dense handle in `[0, len)`; handles are re-packed
//! on removal, so they are not stable across mutations. Routes are
//! undirected: every route is recorded in both endpoints' adjacency rows.

use std::collections::HashMap;

use crate::error::{Result, WaypointError};

/// Undirected, weighted graph of named locations.
///
/// Duplicate routes between the same pair of locations are permitted and
/// kept as separate adjacency entries (multigraph semantics). Route costs
/// are not validated; negative costs make shortest-path results undefined.
#[derive(Debug, Default, Clone)]
pub struct LocationGraph {
    /// Name to current handle, a bijection over live locations
    handles: HashMap<String, usize>,
    /// Handle to name, in handle order
    names: Vec<String>,
    /// Per-handle adjacency rows of (neighbor handle, cost) pairs
    adjacency: Vec<Vec<(usize, i64)>>,
}

impl LocationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live locations
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Current handle for `name`, if the location exists
    pub fn handle(&self, name: &str) -> Option<usize> {
        self.handles.get(name).copied()
    }

    /// Live location names in handle order
    pub fn locations(&self) -> &[String] {
        &self.names
    }

    /// Adjacency row for a live handle
    pub fn neighbors(&self, handle: usize) -> &[(usize, i64)] {
        &self.adjacency[handle]
    }

    /// Add a location, assigning it the next sequential handle.
    pub fn add_location(&mut self, name: &str) -> Result<()> {
        if self.handles.contains_key(name) {
            return Err(WaypointError::DuplicateLocation {
                name: name.to_string(),
            });
        }

        let handle = self.names.len();
        self.handles.insert(name.to_string(), handle);
        self.names.push(name.to_string());
        self.adjacency.push(Vec::new());

        tracing::debug!(name, handle, "location added");
        Ok(())
    }

    /// Remove a location and every route touching it.
    ///
    /// Compacts the handle space in one step: the removed handle's row and
    /// name entry are deleted, remaining adjacency targets above it shift
    /// down by one, and the name map is rebuilt from the compacted list.
    /// O(V+E).
    pub fn remove_location(&mut self, name: &str) -> Result<()> {
        let idx = self
            .handle(name)
            .ok_or_else(|| WaypointError::LocationNotFound {
                name: name.to_string(),
            })?;

        self.adjacency.remove(idx);
        self.names.remove(idx);

        for row in &mut self.adjacency {
            row.retain(|&(target, _)| target != idx);
            for entry in row.iter_mut() {
                if entry.0 > idx {
                    entry.0 -= 1;
                }
            }
        }

        self.handles.clear();
        for (handle, name) in self.names.iter().enumerate() {
            self.handles.insert(name.clone(), handle);
        }

        tracing::debug!(name, handle = idx, "location removed");
        Ok(())
    }

    /// Add an undirected route between two existing locations.
    ///
    /// Appends to both endpoints' adjacency rows. Self-routes are allowed
    /// and no deduplication is performed, so repeated adds accumulate.
    pub fn add_route(&mut self, from: &str, to: &str, cost: i64) -> Result<()> {
        let (u, v) = self.endpoints(from, to)?;

        self.adjacency[u].push((v, cost));
        self.adjacency[v].push((u, cost));

        tracing::debug!(from, to, cost, "route added");
        Ok(())
    }

    /// Remove every route between two existing locations.
    ///
    /// All matching adjacency entries are dropped on both sides, so
    /// duplicate routes disappear together. Removing an absent route is a
    /// successful no-op.
    pub fn remove_route(&mut self, from: &str, to: &str) -> Result<()> {
        let (u, v) = self.endpoints(from, to)?;

        self.adjacency[u].retain(|&(target, _)| target != v);
        self.adjacency[v].retain(|&(target, _)| target != u);

        tracing::debug!(from, to, "route removed");
        Ok(())
    }

    /// Resolve both endpoint handles before any mutation, so a missing
    /// endpoint leaves the graph untouched.
    fn endpoints(&self, from: &str, to: &str) -> Result<(usize, usize)> {
        let u = self
            .handle(from)
            .ok_or_else(|| WaypointError::LocationNotFound {
                name: from.to_string(),
            })?;
        let v = self
            .handle(to)
            .ok_or_else(|| WaypointError::LocationNotFound {
                name: to.to_string(),
            })?;
        Ok((u, v))
    }
}
