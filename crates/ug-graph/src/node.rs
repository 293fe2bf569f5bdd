//! Diagram vertices and their adjacency lists.

use ug_core::{Id, NodeId};

use crate::component::Component;

/// Direction of an adjacency list relative to its node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Neighbors with a link pointing into this node.
    Incoming,
    /// Neighbors this node links out to.
    Outgoing,
}

/// A diagram vertex.
///
/// The adjacency lists hold the ids of the neighboring *nodes*, not link ids:
/// `incoming_links` lists the source node of every link ending here and
/// `outgoing_links` the target node of every link starting here. Entries are
/// kept in insertion order and are not deduplicated, so parallel links show up
/// as repeated neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    incoming_links: Vec<NodeId>,
    outgoing_links: Vec<NodeId>,
}

impl Node {
    /// Create an isolated node.
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self::with_adjacency(id, Vec::new(), Vec::new())
    }

    /// Create a node with pre-populated adjacency lists (e.g. when restoring a saved graph).
    pub fn with_adjacency(
        id: impl Into<NodeId>,
        incoming_links: Vec<NodeId>,
        outgoing_links: Vec<NodeId>,
    ) -> Self {
        Self {
            id: id.into(),
            incoming_links,
            outgoing_links,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn incoming_links(&self) -> &[NodeId] {
        &self.incoming_links
    }

    pub fn outgoing_links(&self) -> &[NodeId] {
        &self.outgoing_links
    }

    pub fn links(&self, direction: Direction) -> &[NodeId] {
        match direction {
            Direction::Incoming => &self.incoming_links,
            Direction::Outgoing => &self.outgoing_links,
        }
    }

    /// Total number of adjacency entries in both directions.
    pub fn degree(&self) -> usize {
        self.incoming_links.len() + self.outgoing_links.len()
    }

    // Low-level adjacency primitives. They touch only this node: no duplicate
    // check and no check that a matching link exists. `Graph::add_link` and
    // `Graph::take_link` are the callers that keep adjacency in step with links.

    pub fn add_incoming_link(&mut self, neighbor: impl Into<NodeId>) {
        self.incoming_links.push(neighbor.into());
    }

    pub fn add_incoming_node(&mut self, neighbor: &Node) {
        self.add_incoming_link(&neighbor.id);
    }

    /// Remove every occurrence of `neighbor` from the incoming list.
    pub fn remove_incoming_link(&mut self, neighbor: &str) {
        self.incoming_links.retain(|id| id != neighbor);
    }

    pub fn remove_incoming_node(&mut self, neighbor: &Node) {
        self.remove_incoming_link(neighbor.id.as_str());
    }

    pub fn add_outgoing_link(&mut self, neighbor: impl Into<NodeId>) {
        self.outgoing_links.push(neighbor.into());
    }

    pub fn add_outgoing_node(&mut self, neighbor: &Node) {
        self.add_outgoing_link(&neighbor.id);
    }

    /// Remove every occurrence of `neighbor` from the outgoing list.
    pub fn remove_outgoing_link(&mut self, neighbor: &str) {
        self.outgoing_links.retain(|id| id != neighbor);
    }

    pub fn remove_outgoing_node(&mut self, neighbor: &Node) {
        self.remove_outgoing_link(neighbor.id.as_str());
    }
}

impl Component for Node {
    fn id(&self) -> &Id {
        &self.id
    }

    fn from_id(id: Id) -> Self {
        Self::new(id)
    }
}
