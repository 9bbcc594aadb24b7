//! Disjoint-set (union-find) over waypoint identifiers.
//!
//! Tracks which waypoints belong to the same connected component while
//! Kruskal's algorithm accepts edges. Ephemeral by design: one
//! instance per MST computation, never shared or reused across
//! unrelated graphs.

use std::collections::HashMap;

use crate::types::WaypointId;

/// Union-find forest keyed by waypoint id, with a live component count.
///
/// `find` applies full path compression, so representative lookups are
/// amortized near-constant and independent of call order. `union`
/// keeps the numerically smaller root as the surviving representative,
/// which makes merge outcomes (and therefore MST edge selection among
/// equal-weight candidates) reproducible.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: HashMap<WaypointId, WaypointId>,
    components: usize,
}

impl DisjointSet {
    /// Create one singleton component per distinct id.
    pub fn new<I: IntoIterator<Item = WaypointId>>(ids: I) -> Self {
        let parent: HashMap<WaypointId, WaypointId> =
            ids.into_iter().map(|id| (id, id)).collect();
        let components = parent.len();
        Self { parent, components }
    }

    /// Representative of `id`'s component.
    ///
    /// Follows parent links to the root, then re-points every id on
    /// the walked chain directly at the root (path compression). An id
    /// that was never added behaves as its own singleton representative.
    pub fn find(&mut self, id: WaypointId) -> WaypointId {
        let mut root = id;
        while let Some(&up) = self.parent.get(&root) {
            if up == root {
                break;
            }
            root = up;
        }

        // Second pass: compress the chain we just walked.
        let mut current = id;
        while current != root {
            match self.parent.insert(current, root) {
                Some(next) => current = next,
                None => break,
            }
        }

        root
    }

    /// Merge the components containing `a` and `b`.
    ///
    /// No-op if they are already connected. Otherwise the root with
    /// the smaller id absorbs the other, regardless of argument order.
    /// Returns `true` if two distinct components were merged.
    pub fn union(&mut self, a: WaypointId, b: WaypointId) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let (keep, absorb) = if root_a < root_b {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent.insert(absorb, keep);
        self.components = self.components.saturating_sub(1);
        true
    }

    /// Returns `true` if `a` and `b` share a representative.
    pub fn connected(&mut self, a: WaypointId, b: WaypointId) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of distinct components.
    #[must_use]
    pub const fn components(&self) -> usize {
        self.components
    }
}
