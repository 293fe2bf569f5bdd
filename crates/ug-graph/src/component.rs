//! Identity contract shared by nodes and links.

use ug_core::Id;

use crate::link::Link;
use crate::node::Node;

/// A graph component: anything registered in a [`Graph`](crate::Graph) under a stable id.
pub trait Component {
    /// The component's unique id. Immutable after construction.
    fn id(&self) -> &Id;

    /// Construct a component from an id alone.
    fn from_id(id: Id) -> Self
    where
        Self: Sized;
}

/// Borrowed view of either kind of component, as delivered to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentRef<'a> {
    Node(&'a Node),
    Link(&'a Link),
}

impl ComponentRef<'_> {
    pub fn id(&self) -> &Id {
        match self {
            ComponentRef::Node(node) => node.id(),
            ComponentRef::Link(link) => link.id(),
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            ComponentRef::Node(node) => Some(node),
            ComponentRef::Link(_) => None,
        }
    }

    pub fn as_link(&self) -> Option<&Link> {
        match self {
            ComponentRef::Link(link) => Some(link),
            ComponentRef::Node(_) => None,
        }
    }
}

impl<'a> From<&'a Node> for ComponentRef<'a> {
    fn from(node: &'a Node) -> Self {
        ComponentRef::Node(node)
    }
}

impl<'a> From<&'a Link> for ComponentRef<'a> {
    fn from(link: &'a Link) -> Self {
        ComponentRef::Link(link)
    }
}
