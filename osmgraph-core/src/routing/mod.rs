//! Shortest-path queries over the road graph.

mod dijkstra;

pub use dijkstra::shortest_path;

use serde::{Deserialize, Serialize};

/// Outcome of a shortest-path query.
///
/// An unreachable destination is a valid result, not an error, so it is
/// carried as its own variant rather than an `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RouteResult {
    /// Shortest distance from source to destination in kilometers
    Found(f64),
    /// The destination is unreachable from the source
    NotFound,
}

impl RouteResult {
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn distance(self) -> Option<f64> {
        match self {
            Self::Found(distance) => Some(distance),
            Self::NotFound => None,
        }
    }
}
