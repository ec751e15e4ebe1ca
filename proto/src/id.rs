use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a node in a causal graph.
///
/// Unique within a graph, with no other required attributes. Display names
/// and descriptions live in document metadata, not here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self { Self(s.to_owned()) }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self { Self(s) }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str { &self.0 }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool { self.0 == *other }
}
