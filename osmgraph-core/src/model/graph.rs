//! Road graph assembly from way polylines.

use hashbrown::HashMap;
use itertools::Itertools;
use log::debug;

use super::records::MapData;
use crate::NodeId;
use crate::geodesic::haversine_distance;

/// Weighted road graph edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadEdge {
    /// Node on the far end of the segment
    pub target: NodeId,
    /// Segment length in kilometers
    pub distance: f64,
}

/// Undirected weighted adjacency structure keyed by node identifier.
///
/// Each way segment contributes one entry per direction with identical
/// weight. Parallel segments from independent ways are all retained.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    adjacency: HashMap<NodeId, Vec<RoadEdge>>,
}

impl RoadGraph {
    /// Outgoing edges of a node; empty for nodes without any edges.
    pub fn neighbors(&self, node: NodeId) -> &[RoadEdge] {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of nodes with at least one incident edge.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed adjacency entries (twice the segment count).
    pub fn edge_entry_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

/// Builds the road graph from the loaded node and way tables.
///
/// For every consecutive node pair of every way polyline, the segment is
/// weighted by its haversine distance and inserted in both directions.
/// A pair is skipped when either endpoint is missing from the node
/// table; real extracts are routinely truncated at their bounding box,
/// so dangling references are expected data, not an error. A dropped
/// middle node does not bridge its neighbours.
#[must_use]
pub fn build_road_graph(data: &MapData) -> RoadGraph {
    let mut adjacency: HashMap<NodeId, Vec<RoadEdge>> = HashMap::new();
    let mut dangling = 0usize;

    for way in data.ways.values() {
        for (&u, &v) in way.node_ids.iter().tuple_windows() {
            let (Some(node_u), Some(node_v)) = (data.nodes.get(&u), data.nodes.get(&v)) else {
                dangling += 1;
                continue;
            };

            let distance = haversine_distance(node_u.geometry, node_v.geometry);
            adjacency
                .entry(u)
                .or_default()
                .push(RoadEdge { target: v, distance });
            adjacency
                .entry(v)
                .or_default()
                .push(RoadEdge { target: u, distance });
        }
    }

    if dangling > 0 {
        debug!("skipped {dangling} way segments with dangling node references");
    }

    RoadGraph { adjacency }
}
