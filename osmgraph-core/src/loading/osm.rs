//! Streaming OSM XML parsing.
//!
//! Reads `<node>` and `<way>` elements with their `<tag>` and `<nd>`
//! children and fills the [`MapData`] tables. Elements outside that
//! vocabulary are ignored. A node is kept only when it carries `id`,
//! `lat` and `lon`; a way only when it carries `id` and at least one
//! node reference. The `k="name"` tag convention supplies display
//! names, first occurrence wins.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use geo::Point;
use log::info;
use quick_xml::Reader;
use quick_xml::events::BytesStart;
use quick_xml::events::Event;

use crate::model::{MapData, MapNode, MapWay};
use crate::{Error, NodeId, WayId};

/// Element currently being assembled while its children stream past.
enum Pending {
    Node {
        id: NodeId,
        geometry: Point<f64>,
        name: Option<String>,
    },
    Way {
        id: WayId,
        node_ids: Vec<NodeId>,
        name: Option<String>,
    },
}

/// Loads an extract from a `.osm` file on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a
/// well-formed extract.
pub fn load_osm_xml(path: impl AsRef<Path>) -> Result<MapData, Error> {
    let file = File::open(path)?;
    read_osm_xml(BufReader::new(file))
}

/// Parses an extract from any buffered reader.
///
/// # Errors
///
/// [`Error::XmlError`] for malformed markup, [`Error::InvalidData`]
/// for attribute values that fail numeric parsing.
pub fn read_osm_xml<R: BufRead>(source: R) -> Result<MapData, Error> {
    let mut reader = Reader::from_reader(source);
    reader.config_mut().trim_text(true);

    let mut data = MapData::default();
    let mut pending: Option<Pending> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(element) => open_element(&element, &mut data, &mut pending, true)?,
            Event::Empty(element) => open_element(&element, &mut data, &mut pending, false)?,
            Event::End(element) => {
                if matches!(element.name().as_ref(), b"node" | b"way") {
                    close_element(pending.take(), &mut data);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    info!(
        "loaded {} nodes and {} ways",
        data.node_count(),
        data.way_count()
    );
    Ok(data)
}

fn open_element(
    element: &BytesStart,
    data: &mut MapData,
    pending: &mut Option<Pending>,
    has_children: bool,
) -> Result<(), Error> {
    match element.name().as_ref() {
        b"node" => {
            // Nodes missing any of id/lat/lon are dropped whole
            let (Some(id), Some(lat), Some(lon)) = (
                attribute(element, b"id")?,
                attribute(element, b"lat")?,
                attribute(element, b"lon")?,
            ) else {
                return Ok(());
            };

            let node = Pending::Node {
                id: parse_number::<NodeId>(&id, "node id")?,
                geometry: Point::new(
                    parse_number::<f64>(&lon, "node lon")?,
                    parse_number::<f64>(&lat, "node lat")?,
                ),
                name: None,
            };
            if has_children {
                *pending = Some(node);
            } else {
                close_element(Some(node), data);
            }
        }
        b"way" => {
            let Some(id) = attribute(element, b"id")? else {
                return Ok(());
            };
            // An empty way element has no <nd> children and is dropped
            if has_children {
                *pending = Some(Pending::Way {
                    id: parse_number::<WayId>(&id, "way id")?,
                    node_ids: Vec::new(),
                    name: None,
                });
            }
        }
        b"nd" => {
            if let Some(Pending::Way { node_ids, .. }) = pending {
                if let Some(node_ref) = attribute(element, b"ref")? {
                    node_ids.push(parse_number::<NodeId>(&node_ref, "nd ref")?);
                }
            }
        }
        b"tag" => {
            let name = match pending {
                Some(Pending::Node { name, .. }) | Some(Pending::Way { name, .. }) => name,
                None => return Ok(()),
            };
            if name.is_none() && attribute(element, b"k")?.as_deref() == Some("name") {
                *name = attribute(element, b"v")?;
            }
        }
        _ => {}
    }
    Ok(())
}

fn close_element(pending: Option<Pending>, data: &mut MapData) {
    match pending {
        Some(Pending::Node { id, geometry, name }) => {
            data.nodes.insert(id, MapNode { id, name, geometry });
        }
        Some(Pending::Way { id, node_ids, name }) => {
            // Ways without node references carry no polyline
            if !node_ids.is_empty() {
                data.ways.insert(id, MapWay { id, name, node_ids });
            }
        }
        None => {}
    }
}

fn attribute(element: &BytesStart, key: &[u8]) -> Result<Option<String>, Error> {
    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn parse_number<T: std::str::FromStr>(value: &str, what: &str) -> Result<T, Error> {
    value
        .parse()
        .map_err(|_| Error::InvalidData(format!("unparseable {what}: {value:?}")))
}
