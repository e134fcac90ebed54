//! This module is responsible for loading OSM XML extracts into the
//! in-memory node and way tables.

mod osm;

pub use osm::{load_osm_xml, read_osm_xml};
