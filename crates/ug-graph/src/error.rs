//! Graph-specific error types.

use ug_core::{LinkId, NodeId, UgError};

use crate::node::Direction;

/// Graph construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The same node id was declared twice.
    DuplicateNode { node: NodeId },

    /// The same (source, target) pair was declared twice.
    DuplicateLink { link: LinkId },

    /// A link endpoint names a node that doesn't exist.
    DanglingEndpoint { link: LinkId, node: NodeId },

    /// A node is stored under a key other than its own id.
    NodeKeyMismatch { key: NodeId, node: NodeId },

    /// A link is stored under a (source, target) key that differs from its endpoints.
    LinkKeyMismatch {
        key: (NodeId, NodeId),
        link: LinkId,
    },

    /// A registered link has no matching entry in a node's adjacency list.
    MissingAdjacency {
        link: LinkId,
        node: NodeId,
        direction: Direction,
    },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::DuplicateNode { node } => {
                write!(f, "Node {} is declared more than once", node)
            }
            GraphError::DuplicateLink { link } => {
                write!(f, "Link {} is declared more than once", link)
            }
            GraphError::DanglingEndpoint { link, node } => {
                write!(f, "Link {} refers to non-existent node {}", link, node)
            }
            GraphError::NodeKeyMismatch { key, node } => {
                write!(f, "Node {} is stored under key {}", node, key)
            }
            GraphError::LinkKeyMismatch { key, link } => {
                write!(
                    f,
                    "Link {} is stored under key ({}, {})",
                    link, key.0, key.1
                )
            }
            GraphError::MissingAdjacency {
                link,
                node,
                direction,
            } => {
                let list = match direction {
                    Direction::Incoming => "incoming",
                    Direction::Outgoing => "outgoing",
                };
                write!(
                    f,
                    "Link {} is registered but missing from node {}'s {} links",
                    link, node, list
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for UgError {
    fn from(err: GraphError) -> Self {
        UgError::Invariant {
            what: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = GraphError::DanglingEndpoint {
            link: "A, B".into(),
            node: "B".into(),
        };
        assert_eq!(err.to_string(), "Link A, B refers to non-existent node B");

        let err = GraphError::MissingAdjacency {
            link: "A, B".into(),
            node: "A".into(),
            direction: Direction::Outgoing,
        };
        assert_eq!(
            err.to_string(),
            "Link A, B is registered but missing from node A's outgoing links"
        );
    }

    #[test]
    fn converts_to_invariant() {
        let err: UgError = GraphError::DuplicateNode { node: "A".into() }.into();
        assert!(matches!(err, UgError::Invariant { .. }));
    }
}
