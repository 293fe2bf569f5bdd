//! Conversion between `Graph` and its persisted document.

use std::collections::BTreeMap;

use ug_core::{LinkId, NodeId};
use ug_graph::{Graph, GraphError, Link, LinkMap, Node, NodeMap};

use crate::schema::{GraphDoc, LinkDef, NodeDef};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodingError {
    #[error("Missing field `{field}` at {path}")]
    MissingField { field: &'static str, path: String },

    #[error("Link at {path} has id `{found}`, expected `{expected}`")]
    LinkIdMismatch {
        path: String,
        expected: LinkId,
        found: LinkId,
    },

    #[error("Inconsistent graph: {0}")]
    Inconsistent(#[from] GraphError),
}

fn required<T>(value: Option<T>, field: &'static str, path: &str) -> Result<T, DecodingError> {
    value.ok_or_else(|| DecodingError::MissingField {
        field,
        path: path.to_string(),
    })
}

/// Snapshot a graph as a document. Adjacency lists are written as stored.
pub fn encode(graph: &Graph) -> GraphDoc {
    let node_map = graph
        .nodes()
        .map(|node| (node.id().clone(), encode_node(node)))
        .collect();

    let mut link_map: BTreeMap<NodeId, BTreeMap<NodeId, LinkDef>> = BTreeMap::new();
    for link in graph.links() {
        link_map
            .entry(link.source_node_id().clone())
            .or_default()
            .insert(link.target_node_id().clone(), encode_link(link));
    }

    GraphDoc {
        node_map: Some(node_map),
        link_map: Some(link_map),
    }
}

fn encode_node(node: &Node) -> NodeDef {
    NodeDef {
        id: Some(node.id().clone()),
        incoming_links: Some(node.incoming_links().to_vec()),
        outgoing_links: Some(node.outgoing_links().to_vec()),
    }
}

fn encode_link(link: &Link) -> LinkDef {
    LinkDef {
        id: Some(link.id().clone()),
        source_node_id: Some(link.source_node_id().clone()),
        target_node_id: Some(link.target_node_id().clone()),
    }
}

/// Rebuild a graph from a document.
///
/// All-or-nothing: any missing field, a link id that doesn't match its
/// endpoints, or an entry filed under the wrong key fails the whole decode.
/// Adjacency lists are restored as stored, not recomputed.
pub fn decode(doc: GraphDoc) -> Result<Graph, DecodingError> {
    let node_defs = required(doc.node_map, "nodeMap", "$")?;
    let link_defs = required(doc.link_map, "linkMap", "$")?;

    let mut node_map = NodeMap::new();
    for (key, def) in node_defs {
        let path = format!("nodeMap.{key}");
        node_map.insert(key, decode_node(def, &path)?);
    }

    let mut link_map = LinkMap::new();
    for (source, targets) in link_defs {
        let mut decoded = BTreeMap::new();
        for (target, def) in targets {
            let path = format!("linkMap.{source}.{target}");
            decoded.insert(target, decode_link(def, &path)?);
        }
        // An empty per-source map carries nothing; the graph never keeps one.
        if !decoded.is_empty() {
            link_map.insert(source, decoded);
        }
    }

    Ok(Graph::from_maps(node_map, link_map)?)
}

fn decode_node(def: NodeDef, path: &str) -> Result<Node, DecodingError> {
    let id = required(def.id, "id", path)?;
    let incoming = required(def.incoming_links, "incomingLinks", path)?;
    let outgoing = required(def.outgoing_links, "outgoingLinks", path)?;
    Ok(Node::with_adjacency(id, incoming, outgoing))
}

fn decode_link(def: LinkDef, path: &str) -> Result<Link, DecodingError> {
    let id = required(def.id, "id", path)?;
    let source = required(def.source_node_id, "sourceNodeId", path)?;
    let target = required(def.target_node_id, "targetNodeId", path)?;

    let link = Link::new(source, target);
    if link.id() != &id {
        return Err(DecodingError::LinkIdMismatch {
            path: path.to_string(),
            expected: link.id().clone(),
            found: id,
        });
    }
    Ok(link)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        let mut graph = Graph::new();
        graph.add_node(Node::new("A"));
        graph.add_node(Node::new("B"));
        graph.add_link(Link::new("A", "B"));
        graph
    }

    #[test]
    fn encode_shape() {
        let doc = encode(&sample());
        let nodes = doc.node_map.as_ref().unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(
            nodes.get("B").unwrap().incoming_links,
            Some(vec![NodeId::from("A")])
        );

        let link = &doc.link_map.as_ref().unwrap()["A"]["B"];
        assert_eq!(link.id, Some(LinkId::from("A, B")));
        assert_eq!(link.source_node_id, Some(NodeId::from("A")));
    }

    #[test]
    fn decode_restores_graph() {
        let original = sample();
        let decoded = decode(encode(&original)).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn decode_missing_node_field() {
        let mut doc = encode(&sample());
        if let Some(nodes) = doc.node_map.as_mut() {
            nodes.get_mut("A").unwrap().outgoing_links = None;
        }
        assert_eq!(
            decode(doc).unwrap_err(),
            DecodingError::MissingField {
                field: "outgoingLinks",
                path: "nodeMap.A".into(),
            }
        );
    }

    #[test]
    fn decode_missing_top_level_map() {
        let doc = GraphDoc {
            node_map: Some(BTreeMap::new()),
            link_map: None,
        };
        assert_eq!(
            decode(doc).unwrap_err(),
            DecodingError::MissingField {
                field: "linkMap",
                path: "$".into(),
            }
        );
    }

    #[test]
    fn decode_rejects_drifted_link_id() {
        let mut doc = encode(&sample());
        if let Some(links) = doc.link_map.as_mut() {
            let def = links.get_mut("A").unwrap().get_mut("B").unwrap();
            def.target_node_id = Some("C".into());
        }
        assert!(matches!(
            decode(doc),
            Err(DecodingError::LinkIdMismatch { .. })
        ));
    }

    #[test]
    fn decode_rejects_misfiled_link() {
        let mut doc = encode(&sample());
        if let Some(links) = doc.link_map.as_mut() {
            let def = links.get_mut("A").unwrap().remove("B").unwrap();
            links.get_mut("A").unwrap().insert("Z".into(), def);
        }
        assert!(matches!(
            decode(doc),
            Err(DecodingError::Inconsistent(GraphError::LinkKeyMismatch { .. }))
        ));
    }
}
