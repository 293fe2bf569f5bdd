//! The graph registry: nodes, links and the adjacency kept between them.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, trace};
use ug_core::NodeId;

use crate::component::ComponentRef;
use crate::error::GraphError;
use crate::link::Link;
use crate::node::Node;
use crate::observer::GraphObserver;
use crate::validate;

/// Nodes keyed by id.
pub type NodeMap = BTreeMap<NodeId, Node>;

/// Links keyed by source node id, then target node id.
pub type LinkMap = BTreeMap<NodeId, BTreeMap<NodeId, Link>>;

/// The registry of nodes and links for one diagram.
///
/// The graph stores:
/// - `node_map`: every node under its own id.
/// - `link_map`: every link under `[source][target]`; one link per ordered pair.
///
/// Adjacency lists live on the nodes and are only updated by [`Graph::add_link`]
/// and [`Graph::take_link`]. Node removal does not cascade to links; see
/// [`Graph::orphaned_links`] and [`Graph::remove_node_with_links`].
///
/// Not thread-safe: the graph is meant to be owned by a single thread of control.
#[derive(Default)]
pub struct Graph {
    node_map: NodeMap,
    link_map: LinkMap,
    observer: Option<Box<dyn GraphObserver>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph from initial node and link maps.
    ///
    /// Adjacency lists are taken as given. Fails if a node is keyed by anything
    /// but its own id, or a link by anything but its own endpoints.
    pub fn from_maps(node_map: NodeMap, link_map: LinkMap) -> Result<Self, GraphError> {
        let graph = Self {
            node_map,
            link_map,
            observer: None,
        };
        validate::check_keys(&graph)?;
        Ok(graph)
    }

    /// Consume the graph, returning its backing maps.
    pub fn into_maps(self) -> (NodeMap, LinkMap) {
        (self.node_map, self.link_map)
    }

    pub fn node_map(&self) -> &NodeMap {
        &self.node_map
    }

    pub fn link_map(&self) -> &LinkMap {
        &self.link_map
    }

    /// Install the observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl GraphObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Detach and return the current observer.
    pub fn take_observer(&mut self) -> Option<Box<dyn GraphObserver>> {
        self.observer.take()
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// All nodes, ordered by id.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.node_map.values()
    }

    /// All links, ordered by (source, target).
    pub fn links(&self) -> impl Iterator<Item = &Link> + '_ {
        self.link_map.values().flat_map(BTreeMap::values)
    }

    pub fn node_count(&self) -> usize {
        self.node_map.len()
    }

    pub fn link_count(&self) -> usize {
        self.link_map.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty() && self.link_map.is_empty()
    }

    /// Get a node by id (returns None if not registered).
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_map.get(id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_map.contains_key(id)
    }

    /// Get the link registered for an endpoint pair (returns None if not registered).
    pub fn link(&self, source: &str, target: &str) -> Option<&Link> {
        self.link_map.get(source)?.get(target)
    }

    pub fn contains_link(&self, source: &str, target: &str) -> bool {
        self.link(source, target).is_some()
    }

    /// Links whose source is `source`, ordered by target.
    pub fn links_from<'a>(&'a self, source: &str) -> impl Iterator<Item = &'a Link> + 'a {
        self.link_map
            .get(source)
            .into_iter()
            .flat_map(BTreeMap::values)
    }

    /// Links whose target is `target`, ordered by source.
    pub fn links_to<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a Link> + 'a {
        self.link_map
            .values()
            .filter_map(move |targets| targets.get(target))
    }

    /// Resolve a link's source node.
    pub fn source_of(&self, link: &Link) -> Option<&Node> {
        link.source(self)
    }

    /// Resolve a link's target node.
    pub fn target_of(&self, link: &Link) -> Option<&Node> {
        link.target(self)
    }

    /// Links with at least one endpoint that doesn't resolve to a registered node.
    pub fn orphaned_links(&self) -> impl Iterator<Item = &Link> + '_ {
        self.links().filter(move |link| !link.is_resolved(self))
    }

    /// Register a node, replacing any node with the same id.
    ///
    /// Returns the replaced node. Notifies the observer with the stored node.
    pub fn add_node(&mut self, node: Node) -> Option<Node> {
        let id = node.id().clone();
        let replaced = self.node_map.insert(id.clone(), node);
        if replaced.is_some() {
            debug!(node = %id, "replaced existing node");
        } else {
            trace!(node = %id, "added node");
        }

        if let Some(observer) = self.observer.as_mut() {
            if let Some(node) = self.node_map.get(&id) {
                observer.on_add(ComponentRef::Node(node));
            }
        }
        replaced
    }

    /// Deregister a node. Removing an absent node is a no-op.
    ///
    /// Links touching the node stay registered and become orphaned.
    /// The observer is notified either way (with `None` if nothing was removed).
    pub fn remove_node(&mut self, id: &str) -> Option<Node> {
        let removed = self.node_map.remove(id);
        match &removed {
            Some(_) => trace!(node = id, "removed node"),
            None => trace!(node = id, "remove of unregistered node"),
        }

        if let Some(observer) = self.observer.as_mut() {
            observer.on_remove(removed.as_ref().map(ComponentRef::Node));
        }
        removed
    }

    /// Deregister a node and every link starting or ending at it.
    ///
    /// Links go first, through [`Graph::take_link`], so neighbors' adjacency
    /// lists are cleaned up too.
    pub fn remove_node_with_links(&mut self, id: &str) -> (Option<Node>, Vec<Link>) {
        let keys: Vec<(NodeId, NodeId)> = self
            .links()
            .filter(|link| link.source_node_id() == id || link.target_node_id() == id)
            .map(|link| (link.source_node_id().clone(), link.target_node_id().clone()))
            .collect();

        let links = keys
            .iter()
            .filter_map(|(source, target)| self.take_link(source.as_str(), target.as_str()))
            .collect();
        let node = self.remove_node(id);
        (node, links)
    }

    /// Register a link under its endpoint pair, replacing any link already there.
    ///
    /// When both endpoints resolve, the source gains the target in its outgoing
    /// list and the target gains the source in its incoming list. Otherwise the
    /// adjacency step is skipped and the link is still registered.
    ///
    /// Adjacency is appended even when an existing link is replaced, so parallel
    /// adds leave repeated neighbor entries behind.
    pub fn add_link(&mut self, link: Link) -> Option<Link> {
        let source = link.source_node_id().clone();
        let target = link.target_node_id().clone();

        if self.node_map.contains_key(&source) && self.node_map.contains_key(&target) {
            if let Some(node) = self.node_map.get_mut(&source) {
                node.add_outgoing_link(target.clone());
            }
            if let Some(node) = self.node_map.get_mut(&target) {
                node.add_incoming_link(source.clone());
            }
        } else {
            debug!(link = %link.id(), "endpoint not registered, adjacency left unchanged");
        }

        let replaced = self
            .link_map
            .entry(source.clone())
            .or_default()
            .insert(target.clone(), link);
        if replaced.is_some() {
            debug!(source = %source, target = %target, "replaced existing link");
        } else {
            trace!(source = %source, target = %target, "added link");
        }

        if let Some(observer) = self.observer.as_mut() {
            if let Some(link) = self.link_map.get(&source).and_then(|t| t.get(&target)) {
                observer.on_add(ComponentRef::Link(link));
            }
        }
        replaced
    }

    /// Deregister the link for an endpoint pair.
    ///
    /// This is the only link removal path. If a link is registered under the
    /// pair, every `target` entry is dropped from the source's outgoing list and
    /// every `source` entry from the target's incoming list (for whichever of
    /// the two nodes is registered). The entry is then deleted, an emptied
    /// per-source map is pruned, and the observer is notified (with `None` if
    /// nothing was registered).
    pub fn take_link(&mut self, source: &str, target: &str) -> Option<Link> {
        if self.contains_link(source, target) {
            if let Some(node) = self.node_map.get_mut(source) {
                node.remove_outgoing_link(target);
            }
            if let Some(node) = self.node_map.get_mut(target) {
                node.remove_incoming_link(source);
            }
        }

        let removed = match self.link_map.get_mut(source) {
            Some(targets) => {
                let removed = targets.remove(target);
                if targets.is_empty() {
                    self.link_map.remove(source);
                }
                removed
            }
            None => None,
        };
        match &removed {
            Some(_) => trace!(source, target, "removed link"),
            None => trace!(source, target, "remove of unregistered link"),
        }

        if let Some(observer) = self.observer.as_mut() {
            observer.on_remove(removed.as_ref().map(ComponentRef::Link));
        }
        removed
    }

    /// Deregister `link` by its endpoint pair. See [`Graph::take_link`].
    pub fn remove_link(&mut self, link: &Link) -> Option<Link> {
        let (source, target) = link.endpoints();
        self.take_link(source.as_str(), target.as_str())
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("node_map", &self.node_map)
            .field("link_map", &self.link_map)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

/// Graphs compare by registry contents; the observer is ignored.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.node_map == other.node_map && self.link_map == other.link_map
    }
}

impl Eq for Graph {}
