//! In-memory road graph built from OSM XML extracts.
//!
//! The crate loads a map extract (nodes with geographic coordinates and
//! ways referencing ordered node sequences), assembles an undirected
//! weighted road graph from it, and answers three query types:
//! substring search over named entities, k-nearest-neighbour lookup by
//! great-circle distance, and shortest-path distance between two nodes.

pub mod algo;
pub mod error;
pub mod geodesic;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;

/// OSM node identifier.
pub type NodeId = i64;
/// OSM way identifier.
pub type WayId = i64;
