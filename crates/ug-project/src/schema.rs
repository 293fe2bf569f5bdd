//! Persisted graph document.
//!
//! Every field is optional at the serde level so that a missing field can be
//! reported by name during decoding instead of as a generic parse error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ug_core::{LinkId, NodeId};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphDoc {
    pub node_map: Option<BTreeMap<NodeId, NodeDef>>,
    pub link_map: Option<BTreeMap<NodeId, BTreeMap<NodeId, LinkDef>>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodeDef {
    pub id: Option<NodeId>,
    pub incoming_links: Option<Vec<NodeId>>,
    pub outgoing_links: Option<Vec<NodeId>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkDef {
    pub id: Option<LinkId>,
    pub source_node_id: Option<NodeId>,
    pub target_node_id: Option<NodeId>,
}
