use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use osmgraph_core::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Query tool for OSM XML map extracts")]
struct Cli {
    /// Path to the .osm extract to query.
    extract: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List nodes and ways whose name contains the given text.
    Search {
        /// Text to look for in display names.
        query: String,
    },
    /// List the nodes closest to a given node by great-circle distance.
    Nearest {
        /// Reference node identifier.
        node_id: NodeId,
        /// Number of neighbours to report.
        #[arg(short, long, default_value_t = 5)]
        k: usize,
    },
    /// Shortest road distance between two nodes.
    Route {
        /// Source node identifier.
        source: NodeId,
        /// Destination node identifier.
        dest: NodeId,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let data = load_osm_xml(&cli.extract)
        .with_context(|| format!("failed to load extract from {}", cli.extract.display()))?;

    match cli.command {
        Command::Search { query } => handle_search(&data, &query),
        Command::Nearest { node_id, k } => handle_nearest(&data, node_id, k),
        Command::Route { source, dest } => handle_route(&data, source, dest),
    }
}

fn handle_search(data: &MapData, query: &str) -> Result<()> {
    println!(
        "Loaded {} nodes and {} ways",
        data.node_count(),
        data.way_count()
    );

    let nodes = search_nodes(data, query);
    println!("\nNodes matching {query:?}: {}", nodes.len());
    if nodes.is_empty() {
        println!("No matching nodes found.");
    } else {
        println!("ID\tLatitude\tLongitude\tName");
        for node in nodes {
            println!(
                "{}\t{:.7}\t{:.7}\t{}",
                node.id,
                node.latitude(),
                node.longitude(),
                node.name.as_deref().unwrap_or("")
            );
        }
    }

    let ways = search_ways(data, query);
    println!("\nWays matching {query:?}: {}", ways.len());
    if ways.is_empty() {
        println!("No matching ways found.");
    } else {
        println!("ID\tName");
        for way in ways {
            println!("{}\t{}", way.id, way.name.as_deref().unwrap_or(""));
        }
    }

    Ok(())
}

fn handle_nearest(data: &MapData, node_id: NodeId, k: usize) -> Result<()> {
    let neighbours = k_nearest(data, node_id, k)?;

    println!("The {k} closest nodes to node {node_id} are:");
    println!("ID\tDistance (km)\tLatitude\tLongitude");
    for neighbour in neighbours {
        let Some(node) = data.node(neighbour.id) else {
            continue;
        };
        println!(
            "{}\t{}\t{:.7}\t{:.7}",
            neighbour.id,
            format_km(neighbour.distance),
            node.latitude(),
            node.longitude()
        );
    }

    Ok(())
}

fn handle_route(data: &MapData, source: NodeId, dest: NodeId) -> Result<()> {
    // Validate both endpoints before touching the engine; the graph
    // itself has no entries for edge-less nodes.
    for id in [source, dest] {
        if !data.contains_node(id) {
            return Err(Error::UnknownNode { id }.into());
        }
    }

    let graph = build_road_graph(data);
    match shortest_path(&graph, source, dest) {
        RouteResult::Found(distance) => println!(
            "Shortest distance between nodes {source} and {dest}: {} km",
            format_km(distance)
        ),
        RouteResult::NotFound => {
            println!("No path found between nodes {source} and {dest}.");
        }
    }

    Ok(())
}

fn format_km(distance: f64) -> String {
    format!("{distance:.3}")
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
