use geo::Point;

use osmgraph_core::prelude::*;

const EPS: f64 = 1e-9;

fn node(id: NodeId, lon: f64, lat: f64) -> MapNode {
    MapNode {
        id,
        name: None,
        geometry: Point::new(lon, lat),
    }
}

fn way(id: WayId, node_ids: &[NodeId]) -> MapWay {
    MapWay {
        id,
        name: None,
        node_ids: node_ids.to_vec(),
    }
}

fn data_with(nodes: Vec<MapNode>, ways: Vec<MapWay>) -> MapData {
    let mut data = MapData::default();
    for n in nodes {
        data.nodes.insert(n.id, n);
    }
    for w in ways {
        data.ways.insert(w.id, w);
    }
    data
}

/// Four nodes on one meridian, so the chain length equals the direct
/// great-circle distance between its endpoints.
fn meridian_chain() -> MapData {
    data_with(
        vec![
            node(1, 0.0, 0.0),
            node(2, 0.0, 1.0),
            node(3, 0.0, 3.0),
            node(4, 0.0, 6.0),
            // isolated node, present in the table but on no way
            node(5, 10.0, 10.0),
        ],
        vec![way(10, &[1, 2, 3, 4])],
    )
}

#[test]
fn chain_distance_is_sum_of_segments() {
    let data = meridian_chain();
    let graph = build_road_graph(&data);

    let expected = haversine_distance(data.nodes[&1].geometry, data.nodes[&4].geometry);
    let found = shortest_path(&graph, 1, 4).distance().unwrap();
    assert!((found - expected).abs() < EPS, "got {found}, want {expected}");
}

#[test]
fn source_equals_target_is_zero() {
    let data = meridian_chain();
    let graph = build_road_graph(&data);

    assert_eq!(shortest_path(&graph, 3, 3), RouteResult::Found(0.0));
    // Holds even for a node with no incident edges
    assert_eq!(shortest_path(&graph, 5, 5), RouteResult::Found(0.0));
}

#[test]
fn isolated_target_is_not_found() {
    let data = meridian_chain();
    let graph = build_road_graph(&data);

    assert_eq!(shortest_path(&graph, 1, 5), RouteResult::NotFound);
    assert_eq!(shortest_path(&graph, 5, 1), RouteResult::NotFound);
}

#[test]
fn equal_cost_alternatives_report_the_same_distance() {
    // Diamond mirrored across the meridian: both routes have identical
    // length, whichever one the search settles first.
    let data = data_with(
        vec![
            node(1, 0.0, 0.0),
            node(2, 1.0, 1.0),
            node(3, -1.0, 1.0),
            node(4, 0.0, 2.0),
        ],
        vec![way(10, &[1, 2, 4]), way(11, &[1, 3, 4])],
    );
    let graph = build_road_graph(&data);

    let via_east = haversine_distance(data.nodes[&1].geometry, data.nodes[&2].geometry)
        + haversine_distance(data.nodes[&2].geometry, data.nodes[&4].geometry);
    let found = shortest_path(&graph, 1, 4).distance().unwrap();
    assert!((found - via_east).abs() < EPS);
}

#[test]
fn redundant_longer_way_does_not_change_the_result() {
    let direct = data_with(
        vec![node(1, 0.0, 0.0), node(2, 0.0, 1.0), node(3, 2.0, 0.5)],
        vec![way(10, &[1, 2])],
    );
    let with_detour = data_with(
        vec![node(1, 0.0, 0.0), node(2, 0.0, 1.0), node(3, 2.0, 0.5)],
        vec![way(10, &[1, 2]), way(11, &[1, 3, 2])],
    );

    let base = shortest_path(&build_road_graph(&direct), 1, 2)
        .distance()
        .unwrap();
    let with_alternative = shortest_path(&build_road_graph(&with_detour), 1, 2)
        .distance()
        .unwrap();
    assert_eq!(base, with_alternative);
}

#[test]
fn repeated_queries_are_idempotent() {
    let data = meridian_chain();
    let graph = build_road_graph(&data);

    let first = shortest_path(&graph, 1, 4);
    let second = shortest_path(&graph, 1, 4);
    assert_eq!(first, second);
}

#[test]
fn zero_weight_edges_terminate() {
    // Two nodes at identical coordinates produce a zero-length segment
    let data = data_with(
        vec![node(1, 0.0, 0.0), node(2, 0.0, 0.0), node(3, 0.0, 1.0)],
        vec![way(10, &[1, 2, 3])],
    );
    let graph = build_road_graph(&data);

    let expected = haversine_distance(data.nodes[&2].geometry, data.nodes[&3].geometry);
    let found = shortest_path(&graph, 1, 3).distance().unwrap();
    assert!((found - expected).abs() < EPS);
}
