//! cluecrawl-route: spatial visiting-order computation for scavenger
//! hunt crawls (sans-IO).
//!
//! Given the located clues of a crawl, builds a complete proximity
//! graph weighted by Euclidean distance, extracts a minimum spanning
//! tree with Kruskal's algorithm, and walks the tree depth-first to
//! propose the order in which the clues should be visited.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! waypoint slices and returns structured data. Clue storage, HTTP
//! routing, and route presentation live in the surrounding product.
//!
//! The proposed order is an MST-based approximation, a deliberate
//! simplification: an exact shortest tour is the NP-hard traveling
//! salesman problem. Everything here is pure and deterministic, so
//! independent calls are safe to run concurrently without
//! coordination; each invocation allocates and discards its own graph
//! and disjoint-set structures.

pub mod disjoint_set;
pub mod mst;
pub mod traverse;
pub mod types;

pub use disjoint_set::DisjointSet;
pub use mst::{complete_graph, minimum_spanning_tree};
pub use traverse::{RootRule, visit_order};
pub use types::{Edge, Graph, RouteError, Waypoint, WaypointId};

/// Configuration for route ordering.
///
/// All fields default to the behavior the crawl-presentation layer
/// expects for an unconfigured crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteConfig {
    /// Where the tree walk starts.
    pub root: RootRule,
}

/// Propose a visiting order for the given clue waypoints.
///
/// Equivalent to [`order_path_with`] under the default [`RouteConfig`].
///
/// # Ordering steps
///
/// 1. Build the complete proximity graph (every pair of distinct
///    waypoints, weighted by Euclidean distance)
/// 2. Extract a minimum spanning tree (Kruskal)
/// 3. Walk the tree depth-first from the lowest-id waypoint, emitting
///    each id on first visit
///
/// Empty input yields an empty order, a single waypoint a one-element
/// order. The result is a permutation of the input ids and identical
/// across repeated calls with the same input.
///
/// # Errors
///
/// Returns [`RouteError::DuplicateWaypoint`] if two waypoints share an
/// id.
pub fn order_path(waypoints: &[Waypoint]) -> Result<Vec<WaypointId>, RouteError> {
    order_path_with(waypoints, &RouteConfig::default())
}

/// Propose a visiting order with explicit configuration.
///
/// # Errors
///
/// Returns [`RouteError::DuplicateWaypoint`] if two waypoints share an
/// id.
pub fn order_path_with(
    waypoints: &[Waypoint],
    config: &RouteConfig,
) -> Result<Vec<WaypointId>, RouteError> {
    if waypoints.is_empty() {
        return Ok(Vec::new());
    }

    let graph = mst::complete_graph(waypoints)?;
    let tree = mst::minimum_spanning_tree(&graph);
    Ok(traverse::visit_order(&tree, config.root))
}
