use causeway_proto::{CausalEdge, CausalGraph, CausalNode, NodeId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Canonical in-memory representation of a causal graph: every node mapped
/// to its direct parents (direct causes), in insertion order.
///
/// Keys are exactly the node set. An empty parent list marks a root
/// (exogenous) node. A parent id that is not itself a key is tolerated and
/// treated as an external node when the reverse index is built; strictness
/// is the consistency checker's job, and only for persisted documents.
///
/// An `EdgeMap` is a snapshot. The core never mutates one after it is
/// built, which is what makes concurrent queries safe without locking.
///
/// Serializes transparently as the `{"child": ["parent", ...]}` shape that
/// edge providers commonly emit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeMap {
    parents: IndexMap<NodeId, Vec<NodeId>>,
}

impl EdgeMap {
    pub fn new() -> Self { Self::default() }

    /// Add a node with its direct parents, replacing any previous entry.
    pub fn insert<N, P, I>(&mut self, node: N, parents: I)
    where
        N: Into<NodeId>,
        P: Into<NodeId>,
        I: IntoIterator<Item = P>,
    {
        self.parents.insert(node.into(), parents.into_iter().map(Into::into).collect());
    }

    pub fn len(&self) -> usize { self.parents.len() }

    pub fn is_empty(&self) -> bool { self.parents.is_empty() }

    pub fn contains(&self, node: &NodeId) -> bool { self.parents.contains_key(node) }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> { self.parents.keys() }

    /// (node, parents) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &[NodeId])> {
        self.parents.iter().map(|(node, parents)| (node, parents.as_slice()))
    }

    /// Direct parents of `node`. Unknown nodes behave as roots.
    pub fn parents(&self, node: &NodeId) -> &[NodeId] {
        self.parents.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nodes with no parents: the exogenous variables of the model.
    pub fn roots(&self) -> Vec<NodeId> {
        self.iter().filter(|(_, parents)| parents.is_empty()).map(|(node, _)| node.clone()).collect()
    }
}

impl<N, P, I> FromIterator<(N, I)> for EdgeMap
where
    N: Into<NodeId>,
    P: Into<NodeId>,
    I: IntoIterator<Item = P>,
{
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        let mut map = EdgeMap::new();
        for (node, parents) in iter {
            map.insert(node, parents);
        }
        map
    }
}

impl From<&CausalGraph> for EdgeMap {
    /// Derive the parent map from a document: node list seeds the key set
    /// in order, then each edge appends its source to the target's parents
    /// in edge order.
    fn from(graph: &CausalGraph) -> Self {
        let mut map = EdgeMap::new();
        for node in &graph.nodes {
            map.parents.entry(node.id.clone()).or_default();
        }
        for edge in &graph.edges {
            map.parents.entry(edge.target.clone()).or_default().push(edge.source.clone());
        }
        map
    }
}

impl From<&EdgeMap> for CausalGraph {
    /// Export a snapshot as a bare document: nodes carry only their id,
    /// edges get generated ids `e0..eN`. Metadata is a collaborator concern.
    fn from(map: &EdgeMap) -> Self {
        let nodes = map.nodes().map(|id| CausalNode::new(id.clone())).collect();
        let mut edges: Vec<CausalEdge> = Vec::new();
        for (child, parents) in map.iter() {
            for parent in parents {
                let mut edge = CausalEdge::new(parent.clone(), child.clone());
                edge.id = Some(format!("e{}", edges.len()));
                edges.push(edge);
            }
        }
        CausalGraph { nodes, edges, extra: Default::default() }
    }
}

/// Source of graph snapshots.
///
/// The core treats providers as black boxes: a provider must return a
/// complete node-to-parents mapping taken at one point in time, never a
/// partial or streaming result. Inspection tricks (runtime attribute
/// walking, buffer identity matching, source parsing) stay behind this
/// seam so the traversal engine never depends on them.
pub trait EdgeProvider {
    fn provide_edges(&self) -> EdgeMap;
}

impl EdgeProvider for EdgeMap {
    fn provide_edges(&self) -> EdgeMap { self.clone() }
}

impl EdgeProvider for CausalGraph {
    fn provide_edges(&self) -> EdgeMap { EdgeMap::from(self) }
}
