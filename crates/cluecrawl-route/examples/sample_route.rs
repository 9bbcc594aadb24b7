//! Prints the spanning tree and proposed visiting order for a small
//! fixed clue set.
//!
//! Handy for eyeballing the ordering behavior without wiring up the
//! full product:
//!
//! ```text
//! cargo run --example sample_route
//! ```

#![allow(clippy::print_stdout)]

use cluecrawl_route::{RouteError, Waypoint, complete_graph, minimum_spanning_tree, visit_order};

fn main() -> Result<(), RouteError> {
    let clues = [
        Waypoint::new(1, 1.0, 2.0),
        Waypoint::new(2, 12.0, -3.0),
        Waypoint::new(3, 4.0, 54.0),
        Waypoint::new(4, 23.0, 86.0),
        Waypoint::new(5, 32.0, 43.0),
    ];

    let graph = complete_graph(&clues)?;
    println!(
        "complete graph: {} waypoints, {} edges",
        graph.waypoint_count(),
        graph.edges().len(),
    );

    let tree = minimum_spanning_tree(&graph);
    println!("spanning tree (total weight {:.2}):", tree.total_weight());
    for edge in tree.edges() {
        let (a, b) = edge.endpoints();
        println!("  {a} -- {b}  ({:.2})", edge.weight());
    }

    let order = visit_order(&tree, cluecrawl_route::RootRule::LowestId);
    println!("visiting order: {order:?}");

    Ok(())
}
