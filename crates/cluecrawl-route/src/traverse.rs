//! Visiting-order derivation: walk a spanning tree depth-first and
//! emit each waypoint the first time it is reached.
//!
//! Consecutive ids in the output correspond to tree edges (plus the
//! jumps back out of exhausted branches), so the sequence is a valid
//! tree traversal rather than a shortest tour. Determinism comes from
//! two rules: the root is chosen by [`RootRule`], and neighbors are
//! always taken in ascending id order.

use std::collections::{BTreeMap, HashSet};

use crate::types::{Graph, WaypointId};

/// Selects the waypoint a tree walk starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootRule {
    /// Start from the numerically lowest waypoint id.
    #[default]
    LowestId,

    /// Start from a specific waypoint — e.g. the crawl's designated
    /// first clue. Falls back to [`LowestId`](Self::LowestId) when the
    /// id is not a member of the graph.
    Fixed(WaypointId),
}

/// Derive the visiting order for `tree`.
///
/// Iterative depth-first preorder walk from the root selected by
/// `root`. Every waypoint id appears exactly once. If `tree` is a
/// forest, the rooted component is walked first and each remaining
/// component is then walked from its lowest id, in ascending order.
///
/// The zero-waypoint graph yields an empty sequence, a single
/// waypoint a one-element sequence.
#[must_use]
pub fn visit_order(tree: &Graph, root: RootRule) -> Vec<WaypointId> {
    // BTreeMap keeps waypoint ids sorted, which gives both the
    // lowest-id root and deterministic component seeding for free.
    let mut adjacency: BTreeMap<WaypointId, Vec<WaypointId>> = tree
        .waypoints()
        .iter()
        .map(|w| (w.id, Vec::new()))
        .collect();
    for edge in tree.edges() {
        let (a, b) = edge.endpoints();
        if let Some(neighbors) = adjacency.get_mut(&a) {
            neighbors.push(b);
        }
        if let Some(neighbors) = adjacency.get_mut(&b) {
            neighbors.push(a);
        }
    }
    for neighbors in adjacency.values_mut() {
        neighbors.sort_unstable();
    }

    let start = match root {
        RootRule::Fixed(id) if adjacency.contains_key(&id) => Some(id),
        RootRule::Fixed(_) | RootRule::LowestId => adjacency.keys().next().copied(),
    };

    let mut order = Vec::with_capacity(adjacency.len());
    let mut visited: HashSet<WaypointId> = HashSet::with_capacity(adjacency.len());
    let mut stack: Vec<WaypointId> = Vec::new();

    for seed in start.into_iter().chain(adjacency.keys().copied()) {
        if visited.contains(&seed) {
            continue;
        }
        stack.push(seed);
        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            order.push(id);
            if let Some(neighbors) = adjacency.get(&id) {
                // Reverse push so the lowest-id neighbor pops first.
                for &neighbor in neighbors.iter().rev() {
                    if !visited.contains(&neighbor) {
                        stack.push(neighbor);
                    }
                }
            }
        }
    }

    order
}
