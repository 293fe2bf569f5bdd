//! Graph consistency checks.

use crate::error::GraphError;
use crate::graph::Graph;
use crate::node::Direction;

/// Run every check.
pub fn check(graph: &Graph) -> Result<(), GraphError> {
    check_keys(graph)?;
    check_adjacency(graph)
}

/// Every node is stored under its own id and every link under its own endpoints.
pub fn check_keys(graph: &Graph) -> Result<(), GraphError> {
    for (key, node) in graph.node_map() {
        if key != node.id() {
            return Err(GraphError::NodeKeyMismatch {
                key: key.clone(),
                node: node.id().clone(),
            });
        }
    }

    for (source, targets) in graph.link_map() {
        for (target, link) in targets {
            if source != link.source_node_id() || target != link.target_node_id() {
                return Err(GraphError::LinkKeyMismatch {
                    key: (source.clone(), target.clone()),
                    link: link.id().clone(),
                });
            }
        }
    }

    Ok(())
}

/// Every link whose endpoints both resolve is reflected in their adjacency lists.
///
/// Links with an unresolved endpoint are skipped: they are orphaned, not inconsistent.
pub fn check_adjacency(graph: &Graph) -> Result<(), GraphError> {
    for link in graph.links() {
        let (Some(source), Some(target)) = (link.source(graph), link.target(graph)) else {
            continue;
        };

        if !source.outgoing_links().contains(target.id()) {
            return Err(GraphError::MissingAdjacency {
                link: link.id().clone(),
                node: source.id().clone(),
                direction: Direction::Outgoing,
            });
        }
        if !target.incoming_links().contains(source.id()) {
            return Err(GraphError::MissingAdjacency {
                link: link.id().clone(),
                node: target.id().clone(),
                direction: Direction::Incoming,
            });
        }
    }

    Ok(())
}
