use causeway_proto::NodeId;
use indexmap::IndexMap;

use super::EdgeMap;

/// Reverse adjacency derived from an [`EdgeMap`]: every node mapped to its
/// direct children (direct effects).
///
/// Carries entries for parent ids that are not edge-map keys, so external
/// nodes still report their children. Built fresh from a snapshot on
/// demand and never mutated afterwards; a new `EdgeMap` requires a new
/// index.
#[derive(Debug, Clone, Default)]
pub struct ChildrenIndex {
    children: IndexMap<NodeId, Vec<NodeId>>,
}

impl ChildrenIndex {
    /// Build the reverse index in O(V + E). Children are appended in
    /// edge-map iteration order, then within-node parent order, which is
    /// what keeps downstream traversal results deterministic.
    pub fn build(edges: &EdgeMap) -> Self {
        let mut children: IndexMap<NodeId, Vec<NodeId>> =
            edges.nodes().map(|node| (node.clone(), Vec::new())).collect();

        for (child, parents) in edges.iter() {
            for parent in parents {
                children.entry(parent.clone()).or_default().push(child.clone());
            }
        }

        Self { children }
    }

    /// Direct children of `node`. Unknown nodes have no children.
    pub fn children(&self, node: &NodeId) -> &[NodeId] {
        self.children.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// (node, children) pairs: edge-map key order first, then external
    /// parents in the order they were first encountered.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &[NodeId])> {
        self.children.iter().map(|(node, children)| (node, children.as_slice()))
    }
}
