//! Substring search over named nodes and ways.

use crate::model::{MapData, MapNode, MapWay};

/// Nodes whose display name contains `query`. Unnamed nodes never
/// match. Sorted by identifier so output is stable across runs.
#[must_use]
pub fn search_nodes<'a>(data: &'a MapData, query: &str) -> Vec<&'a MapNode> {
    let mut matches: Vec<&MapNode> = data
        .nodes
        .values()
        .filter(|node| node.name.as_deref().is_some_and(|name| name.contains(query)))
        .collect();
    matches.sort_by_key(|node| node.id);
    matches
}

/// Ways whose display name contains `query`, sorted by identifier.
#[must_use]
pub fn search_ways<'a>(data: &'a MapData, query: &str) -> Vec<&'a MapWay> {
    let mut matches: Vec<&MapWay> = data
        .ways
        .values()
        .filter(|way| way.name.as_deref().is_some_and(|name| name.contains(query)))
        .collect();
    matches.sort_by_key(|way| way.id);
    matches
}
