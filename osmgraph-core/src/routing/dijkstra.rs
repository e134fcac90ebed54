use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;

use super::RouteResult;
use crate::NodeId;
use crate::model::RoadGraph;

#[derive(Copy, Clone)]
struct State {
    cost: f64,
    node: NodeId,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap),
        // node id breaks exact cost ties
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

/// Dijkstra's algorithm between two nodes of the road graph.
///
/// Label-setting search with early exit: the first time the target is
/// popped its label is final (edge weights are non-negative geodesic
/// distances), so the search stops there instead of sweeping the whole
/// component. Nodes absent from the label map hold an implicit infinite
/// label. Expects the caller to have validated both identifiers against
/// the node table; a source without incident edges simply yields
/// [`RouteResult::NotFound`] unless it equals the target.
#[must_use]
pub fn shortest_path(graph: &RoadGraph, source: NodeId, target: NodeId) -> RouteResult {
    let mut distances: HashMap<NodeId, f64> = HashMap::new();
    let mut heap = BinaryHeap::new();

    // Source node has distance 0
    heap.push(State {
        cost: 0.0,
        node: source,
    });
    distances.insert(source, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        // The popped label is final; covers source == target as well
        if node == target {
            return RouteResult::Found(cost);
        }

        // Skip entries superseded by a later, shorter relaxation
        if distances.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        // Examine neighbors
        for edge in graph.neighbors(node) {
            let next_cost = cost + edge.distance;

            // Add or update distance if better using Entry API
            match distances.entry(edge.target) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: edge.target,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: edge.target,
                        });
                    }
                }
            }
        }
    }

    RouteResult::NotFound
}
