// Re-export key components
pub use crate::algo::{NearestNode, k_nearest, search_nodes, search_ways};
pub use crate::geodesic::haversine_distance;
pub use crate::loading::{load_osm_xml, read_osm_xml};
pub use crate::model::{MapData, MapNode, MapWay, RoadEdge, RoadGraph, build_road_graph};
pub use crate::routing::{RouteResult, shortest_path};

// Core identifier types
pub use crate::NodeId;
pub use crate::WayId;

pub use crate::Error;
