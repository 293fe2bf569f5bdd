//! Incremental graph builder.

use std::collections::HashSet;
use ug_core::{LinkId, NodeId, UgResult};

use crate::error::GraphError;
use crate::graph::Graph;
use crate::link::Link;
use crate::node::Node;
use crate::validate;

/// Builder for constructing a graph incrementally.
///
/// Use `add_node` and `add_link` to declare the diagram, then call `build()`
/// to check the declarations and replay them into a `Graph`. Unlike the
/// graph's own mutators the builder is strict: duplicates and links to
/// undeclared nodes are errors.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<NodeId>,
    links: Vec<(NodeId, NodeId)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node and return its ID.
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> NodeId {
        let id = id.into();
        self.nodes.push(id.clone());
        id
    }

    /// Declare a link between two nodes and return the link's ID.
    pub fn add_link(&mut self, source: impl Into<NodeId>, target: impl Into<NodeId>) -> LinkId {
        let source = source.into();
        let target = target.into();
        let id = Link::derive_id(source.as_str(), target.as_str());
        self.links.push((source, target));
        id
    }

    /// Build and validate the graph.
    ///
    /// Nodes are added first, then links, so every node ends up with the
    /// adjacency implied by the declared links.
    pub fn build(self) -> UgResult<Graph> {
        self.validate_structure()?;

        let mut graph = Graph::new();
        for id in self.nodes {
            graph.add_node(Node::new(id));
        }
        for (source, target) in self.links {
            graph.add_link(Link::new(source, target));
        }

        validate::check(&graph)?;
        Ok(graph)
    }

    fn validate_structure(&self) -> Result<(), GraphError> {
        let mut declared: HashSet<&NodeId> = HashSet::new();
        for id in &self.nodes {
            if !declared.insert(id) {
                return Err(GraphError::DuplicateNode { node: id.clone() });
            }
        }

        let mut pairs: HashSet<(&NodeId, &NodeId)> = HashSet::new();
        for (source, target) in &self.links {
            let link = Link::derive_id(source.as_str(), target.as_str());
            for endpoint in [source, target] {
                if !declared.contains(endpoint) {
                    return Err(GraphError::DanglingEndpoint {
                        link,
                        node: endpoint.clone(),
                    });
                }
            }
            if !pairs.insert((source, target)) {
                return Err(GraphError::DuplicateLink { link });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ug_core::UgError;

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_node("A");
        let b = builder.add_node("B");
        let ab = builder.add_link(&a, &b);

        assert_eq!(a, "A");
        assert_eq!(ab, "A, B");
        assert_eq!(builder.nodes.len(), 2);
        assert_eq!(builder.links.len(), 1);
    }

    #[test]
    fn builder_build_simple() {
        let mut builder = GraphBuilder::new();
        builder.add_node("A");
        builder.add_node("B");
        builder.add_node("C");
        builder.add_link("A", "B");
        builder.add_link("C", "B");

        let graph = builder.build().unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.link_count(), 2);

        // Check adjacency
        assert_eq!(graph.node("B").unwrap().incoming_links(), ["A", "C"]);
        assert_eq!(graph.node("A").unwrap().outgoing_links(), ["B"]);
    }

    #[test]
    fn builder_links_before_nodes() {
        // Declaration order doesn't matter; nodes are replayed first.
        let mut builder = GraphBuilder::new();
        builder.add_link("A", "B");
        builder.add_node("A");
        builder.add_node("B");

        let graph = builder.build().unwrap();
        assert_eq!(graph.node("B").unwrap().incoming_links(), ["A"]);
    }

    #[test]
    fn builder_rejects_duplicate_node() {
        let mut builder = GraphBuilder::new();
        builder.add_node("A");
        builder.add_node("A");
        assert!(matches!(builder.build(), Err(UgError::Invariant { .. })));
    }

    #[test]
    fn builder_rejects_duplicate_link() {
        let mut builder = GraphBuilder::new();
        builder.add_node("A");
        builder.add_node("B");
        builder.add_link("A", "B");
        builder.add_link("A", "B");
        assert_eq!(
            builder.validate_structure(),
            Err(GraphError::DuplicateLink {
                link: "A, B".into()
            })
        );
    }

    #[test]
    fn builder_rejects_dangling_endpoint() {
        let mut builder = GraphBuilder::new();
        builder.add_node("A");
        builder.add_link("A", "B");
        assert_eq!(
            builder.validate_structure(),
            Err(GraphError::DanglingEndpoint {
                link: "A, B".into(),
                node: "B".into(),
            })
        );
    }
}
