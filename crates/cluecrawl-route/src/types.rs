//! Shared types for crawl route ordering: waypoints, edges, graphs,
//! and the error taxonomy.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Stable identifier of a waypoint (a clue's persisted id).
pub type WaypointId = u64;

/// A located clue: stable identifier plus a 2D coordinate.
///
/// Immutable once constructed. Coordinates are whatever planar frame
/// the storage layer resolved clue addresses into; this crate only
/// assumes Euclidean distance is meaningful between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Unique identifier within one crawl.
    pub id: WaypointId,
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Waypoint {
    /// Create a new waypoint.
    #[must_use]
    pub const fn new(id: WaypointId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Squared Euclidean distance to another waypoint.
    ///
    /// Avoids the square root for comparison purposes.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy)
    }

    /// Euclidean distance to another waypoint.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

/// An undirected weighted edge between two waypoints.
///
/// Endpoints are stored in canonical `(smaller id, larger id)` order,
/// so the pair carries no traversal direction and two edges over the
/// same waypoints compare equal however their endpoints were supplied.
/// The weight is always the Euclidean distance between the endpoint
/// coordinates at construction time; callers cannot supply one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    a: WaypointId,
    b: WaypointId,
    weight: f64,
}

impl Edge {
    /// Edge between two waypoints, weighted by their distance.
    pub(crate) fn between(u: Waypoint, v: Waypoint) -> Self {
        let (a, b) = if u.id <= v.id { (u.id, v.id) } else { (v.id, u.id) };
        Self {
            a,
            b,
            weight: u.distance(v),
        }
    }

    /// The two endpoint ids in canonical ascending order.
    #[must_use]
    pub const fn endpoints(&self) -> (WaypointId, WaypointId) {
        (self.a, self.b)
    }

    /// Distance between the endpoints.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// The endpoint opposite `id`, or `None` if `id` is not an endpoint.
    #[must_use]
    pub const fn opposite(&self, id: WaypointId) -> Option<WaypointId> {
        if id == self.a {
            Some(self.b)
        } else if id == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

/// An undirected weighted graph over a set of waypoints.
///
/// Invariant: every edge's endpoints are members of the waypoint set.
/// [`connect`](Self::connect) enforces this, so a `Graph` can only
/// hold edges consistent with its waypoints. Not a serde type for the
/// same reason — deserialization would bypass the checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    waypoints: Vec<Waypoint>,
    edges: Vec<Edge>,
    index: HashMap<WaypointId, usize>,
}

impl Graph {
    /// Create an edgeless graph over the given waypoints.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::DuplicateWaypoint`] if two waypoints share
    /// an id. An empty waypoint set is valid.
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self, RouteError> {
        let mut index = HashMap::with_capacity(waypoints.len());
        for (i, waypoint) in waypoints.iter().enumerate() {
            if index.insert(waypoint.id, i).is_some() {
                return Err(RouteError::DuplicateWaypoint(waypoint.id));
            }
        }
        Ok(Self {
            waypoints,
            edges: Vec::new(),
            index,
        })
    }

    /// All waypoints, in insertion order.
    #[must_use]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// All edges, in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of waypoints.
    #[must_use]
    pub const fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Returns `true` if the graph has no waypoints.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Returns `true` if `id` is a waypoint of this graph.
    #[must_use]
    pub fn contains(&self, id: WaypointId) -> bool {
        self.index.contains_key(&id)
    }

    /// Sum of all edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }

    /// Add an undirected edge between two member waypoints, weighted
    /// by their Euclidean distance.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownEndpoint`] if either id is not a
    /// member, or [`RouteError::SelfLoop`] if the ids are equal. Both
    /// indicate a caller bug rather than a recoverable condition.
    pub fn connect(&mut self, a: WaypointId, b: WaypointId) -> Result<(), RouteError> {
        if a == b {
            return Err(RouteError::SelfLoop(a));
        }
        let u = self.lookup(a)?;
        let v = self.lookup(b)?;
        self.edges.push(Edge::between(u, v));
        Ok(())
    }

    fn lookup(&self, id: WaypointId) -> Result<Waypoint, RouteError> {
        self.index
            .get(&id)
            .map(|&i| self.waypoints[i])
            .ok_or(RouteError::UnknownEndpoint(id))
    }

    /// Copy of this graph with the same waypoint set and no edges.
    pub(crate) fn without_edges(&self) -> Self {
        Self {
            waypoints: self.waypoints.clone(),
            edges: Vec::new(),
            index: self.index.clone(),
        }
    }

    /// Append an already-validated edge. Callers guarantee both
    /// endpoints are members (`minimum_spanning_tree` copies edges
    /// between graphs sharing one waypoint set).
    pub(crate) fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }
}

/// Errors raised while assembling a route graph.
///
/// All variants are invalid-input faults: degenerate but well-formed
/// inputs (zero or one waypoints) produce trivial results, not errors,
/// and nothing downstream of graph construction can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Two waypoints in one input share an id.
    #[error("duplicate waypoint id {0}")]
    DuplicateWaypoint(WaypointId),

    /// An edge endpoint is not a waypoint of the graph.
    #[error("edge endpoint {0} is not a waypoint of this graph")]
    UnknownEndpoint(WaypointId),

    /// An edge would connect a waypoint to itself.
    #[error("waypoint {0} cannot be connected to itself")]
    SelfLoop(WaypointId),
}
