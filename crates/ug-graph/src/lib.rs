//! ug-graph: graph/model layer for umlgraph diagrams.
//!
//! Provides:
//! - Core model types (Node, Link, Graph) sharing the Component contract
//! - Bidirectional adjacency maintenance on link add/remove
//! - Mutation notifications through a single GraphObserver
//! - Consistency validation and an incremental graph builder
//!
//! # Example
//!
//! ```
//! use ug_graph::{Graph, Link, Node};
//!
//! let mut graph = Graph::new();
//! graph.add_node(Node::new("A"));
//! graph.add_node(Node::new("B"));
//! graph.add_link(Link::new("A", "B"));
//!
//! assert_eq!(graph.node("A").unwrap().outgoing_links(), ["B"]);
//! assert_eq!(graph.node("B").unwrap().incoming_links(), ["A"]);
//! assert_eq!(graph.link("A", "B").unwrap().id(), "A, B");
//! ```

pub mod builder;
pub mod component;
pub mod error;
pub mod graph;
pub mod link;
pub mod node;
pub mod observer;
pub mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use component::{Component, ComponentRef};
pub use error::GraphError;
pub use graph::{Graph, LinkMap, NodeMap};
pub use link::Link;
pub use node::{Direction, Node};
pub use observer::{EventLog, GraphEvent, GraphObserver};
