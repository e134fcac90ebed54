//! Data model for the road network
//!
//! Contains the ingested node and way tables and the derived
//! adjacency structure used for routing.

pub mod graph;
pub mod records;

pub use graph::{RoadEdge, RoadGraph, build_road_graph};
pub use records::{MapData, MapNode, MapWay};
