use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::{error::DecodeError, id::NodeId};

/// A node entry in a graph document.
///
/// Only `id` is meaningful to the core. Display names, descriptions,
/// positions and model metadata are flattened into `extra` and pass through
/// unexamined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalNode {
    pub id: NodeId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CausalNode {
    pub fn new(id: impl Into<NodeId>) -> Self { Self { id: id.into(), extra: Map::new() } }
}

/// A directed edge entry: `source` causes `target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalEdge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source: NodeId,
    pub target: NodeId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CausalEdge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self { id: None, source: source.into(), target: target.into(), extra: Map::new() }
    }
}

/// The portable graph document: node list plus explicit edge list.
///
/// Both lists default to empty so a document missing either key still
/// parses, matching how collaborators read these files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CausalGraph {
    #[serde(default)]
    pub nodes: Vec<CausalNode>,
    #[serde(default)]
    pub edges: Vec<CausalEdge>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CausalGraph {
    pub fn from_json_str(s: &str) -> Result<Self, DecodeError> { Ok(serde_json::from_str(s)?) }

    pub fn to_json_string(&self) -> Result<String, DecodeError> { Ok(serde_json::to_string_pretty(self)?) }

    pub fn node_count(&self) -> usize { self.nodes.len() }

    pub fn edge_count(&self) -> usize { self.edges.len() }
}

impl fmt::Display for CausalGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CausalGraph({} nodes, {} edges)", self.nodes.len(), self.edges.len())
    }
}
