//! Query scans over the loaded extract

pub mod knn;
pub mod search;

pub use knn::{NearestNode, k_nearest};
pub use search::{search_nodes, search_ways};
