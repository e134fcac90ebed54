//! Brute-force k-nearest-neighbour lookup.
//!
//! A full scan is adequate for single interactive queries against an
//! extract-sized node table; no spatial index is maintained.

use serde::{Deserialize, Serialize};

use crate::geodesic::haversine_distance;
use crate::model::MapData;
use crate::{Error, NodeId};

/// One neighbour of a k-nearest query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearestNode {
    pub id: NodeId,
    /// Great-circle distance to the reference node in kilometers
    pub distance: f64,
}

/// The `k` nodes closest to `node_id` by great-circle distance,
/// ascending, ties broken by identifier. The reference node itself is
/// excluded. Asking for more neighbours than exist returns them all.
///
/// # Errors
///
/// [`Error::UnknownNode`] when `node_id` is absent from the node table.
pub fn k_nearest(data: &MapData, node_id: NodeId, k: usize) -> Result<Vec<NearestNode>, Error> {
    let reference = data.node(node_id).ok_or(Error::UnknownNode { id: node_id })?;

    let mut candidates: Vec<NearestNode> = data
        .nodes
        .values()
        .filter(|node| node.id != node_id)
        .map(|node| NearestNode {
            id: node.id,
            distance: haversine_distance(reference.geometry, node.geometry),
        })
        .collect();

    candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance).then_with(|| a.id.cmp(&b.id)));
    candidates.truncate(k);
    Ok(candidates)
}
