//! Directed edges between two node ids.

use ug_core::{Id, LinkId, NodeId};

use crate::component::Component;
use crate::graph::Graph;
use crate::node::Node;

/// A directed link from a source node id to a target node id.
///
/// The id is `"{source}, {target}"`, computed once at construction. Links are
/// immutable: endpoints can only change by building a new link with
/// [`Link::with_source`] / [`Link::with_target`], so the id never drifts away
/// from the endpoints.
///
/// Endpoints are plain ids and are resolved against a [`Graph`] on demand;
/// a link holds no reference to the graph it is registered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    id: LinkId,
    source_node_id: NodeId,
    target_node_id: NodeId,
}

impl Link {
    /// Create a link between two node ids.
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        let source_node_id = source.into();
        let target_node_id = target.into();
        Self {
            id: Self::derive_id(source_node_id.as_str(), target_node_id.as_str()),
            source_node_id,
            target_node_id,
        }
    }

    /// Create a link between two nodes, capturing their ids.
    pub fn between(source: &Node, target: &Node) -> Self {
        Self::new(source.id(), target.id())
    }

    /// Placeholder link with both endpoints set to the `"unknown"` sentinel.
    pub fn unknown() -> Self {
        Self::new(Id::unknown(), Id::unknown())
    }

    /// The id a link between `source` and `target` carries.
    pub fn derive_id(source: &str, target: &str) -> LinkId {
        LinkId::new(format!("{source}, {target}"))
    }

    pub fn id(&self) -> &LinkId {
        &self.id
    }

    pub fn source_node_id(&self) -> &NodeId {
        &self.source_node_id
    }

    pub fn target_node_id(&self) -> &NodeId {
        &self.target_node_id
    }

    /// `(source, target)`: the key this link is registered under.
    pub fn endpoints(&self) -> (&NodeId, &NodeId) {
        (&self.source_node_id, &self.target_node_id)
    }

    /// Resolve the source node in `graph`. `None` if it isn't registered.
    pub fn source<'g>(&self, graph: &'g Graph) -> Option<&'g Node> {
        graph.node(self.source_node_id.as_str())
    }

    /// Resolve the target node in `graph`. `None` if it isn't registered.
    pub fn target<'g>(&self, graph: &'g Graph) -> Option<&'g Node> {
        graph.node(self.target_node_id.as_str())
    }

    /// Whether both endpoints resolve in `graph`.
    pub fn is_resolved(&self, graph: &Graph) -> bool {
        self.source(graph).is_some() && self.target(graph).is_some()
    }

    /// A new link with the same target and a different source.
    pub fn with_source(&self, source: impl Into<NodeId>) -> Self {
        Self::new(source, &self.target_node_id)
    }

    /// A new link with the same source and a different target.
    pub fn with_target(&self, target: impl Into<NodeId>) -> Self {
        Self::new(&self.source_node_id, target)
    }
}

impl Default for Link {
    fn default() -> Self {
        Self::unknown()
    }
}

impl Component for Link {
    fn id(&self) -> &Id {
        &self.id
    }

    /// Links derive their id from their endpoints, so `id` is discarded and
    /// the placeholder `"unknown, unknown"` link is returned.
    fn from_id(_id: Id) -> Self {
        Self::unknown()
    }
}
