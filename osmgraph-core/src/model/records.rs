//! Map extract records - nodes, ways, and their lookup tables

use geo::Point;
use hashbrown::HashMap;

use crate::{NodeId, WayId};

/// Map node
#[derive(Debug, Clone)]
pub struct MapNode {
    /// OSM ID of the node
    pub id: NodeId,
    /// Display name, `None` for unnamed nodes
    pub name: Option<String>,
    /// Node coordinates as (longitude, latitude) degrees
    pub geometry: Point<f64>,
}

impl MapNode {
    pub fn latitude(&self) -> f64 {
        self.geometry.y()
    }

    pub fn longitude(&self) -> f64 {
        self.geometry.x()
    }
}

/// Map way - an ordered polyline of node references
#[derive(Debug, Clone)]
pub struct MapWay {
    /// OSM ID of the way
    pub id: WayId,
    /// Display name, `None` for unnamed ways
    pub name: Option<String>,
    /// Ordered node references; entries may point at nodes absent
    /// from the node table (dangling references)
    pub node_ids: Vec<NodeId>,
}

/// Node and way tables of one loaded extract.
///
/// Built once by the loading layer and read-only afterwards, so shared
/// references can safely serve concurrent queries.
#[derive(Debug, Clone, Default)]
pub struct MapData {
    pub nodes: HashMap<NodeId, MapNode>,
    pub ways: HashMap<WayId, MapWay>,
}

impl MapData {
    pub fn node(&self, id: NodeId) -> Option<&MapNode> {
        self.nodes.get(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn way_count(&self) -> usize {
        self.ways.len()
    }
}
