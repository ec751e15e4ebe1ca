use std::collections::BTreeSet;
use std::fmt;

use causeway_proto::{CausalGraph, NodeId};
use tracing::debug;

use crate::error::TopologyMismatch;
use crate::graph::EdgeMap;

/// A directed edge as a set element: `source` causes `target`.
///
/// Used only for comparison and validation, where duplicates collapse.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self { source: source.into(), target: target.into() }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{} -> {}", self.source, self.target) }
}

/// Node set plus directed edge set of a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    pub nodes: BTreeSet<NodeId>,
    pub edges: BTreeSet<Edge>,
}

impl From<&CausalGraph> for Topology {
    fn from(graph: &CausalGraph) -> Self {
        let nodes = graph.nodes.iter().map(|node| node.id.clone()).collect();
        let edges = graph.edges.iter().map(|edge| Edge::new(edge.source.clone(), edge.target.clone())).collect();
        Self { nodes, edges }
    }
}

impl From<&EdgeMap> for Topology {
    /// Keys form the node set; every (parent, child) pair becomes an edge,
    /// including pairs whose parent is an external (non-key) node.
    fn from(map: &EdgeMap) -> Self {
        let nodes = map.nodes().cloned().collect();
        let mut edges = BTreeSet::new();
        for (child, parents) in map.iter() {
            for parent in parents {
                edges.insert(Edge::new(parent.clone(), child.clone()));
            }
        }
        Self { nodes, edges }
    }
}

/// Result of comparing two topologies: a validity flag, per-axis count
/// diagnostics, and the four explicit difference sets. Produced once per
/// comparison and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyReport {
    /// True iff all four difference sets are empty.
    pub is_valid: bool,
    /// Auxiliary diagnostic only: equal counts with different members
    /// still fail validity.
    pub node_count_match: bool,
    pub edge_count_match: bool,
    pub missing_nodes_in_a: BTreeSet<NodeId>,
    pub missing_nodes_in_b: BTreeSet<NodeId>,
    pub missing_edges_in_a: BTreeSet<Edge>,
    pub missing_edges_in_b: BTreeSet<Edge>,
}

impl fmt::Display for TopologyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            return write!(f, "✓ Topology matches");
        }

        writeln!(f, "✗ Topology mismatch:")?;
        if !self.node_count_match {
            writeln!(f, "  Node count differs")?;
        }
        if !self.missing_nodes_in_a.is_empty() {
            writeln!(f, "  Nodes missing in A: {}", join(self.missing_nodes_in_a.iter()))?;
        }
        if !self.missing_nodes_in_b.is_empty() {
            writeln!(f, "  Nodes missing in B: {}", join(self.missing_nodes_in_b.iter()))?;
        }
        if !self.edge_count_match {
            writeln!(f, "  Edge count differs")?;
        }
        if !self.missing_edges_in_a.is_empty() {
            writeln!(f, "  Edges missing in A: {}", join_truncated(self.missing_edges_in_a.iter()))?;
        }
        if !self.missing_edges_in_b.is_empty() {
            writeln!(f, "  Edges missing in B: {}", join_truncated(self.missing_edges_in_b.iter()))?;
        }
        Ok(())
    }
}

fn join<T: fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(", ")
}

/// Mismatching edge sets can be large; show the first few.
fn join_truncated<T: fmt::Display>(items: impl ExactSizeIterator<Item = T>) -> String {
    let total = items.len();
    let mut shown = join(items.take(5));
    if total > 5 {
        shown.push_str(", ...");
    }
    shown
}

/// Compare two topologies.
///
/// Computes the four asymmetric differences by set subtraction; `is_valid`
/// requires all four to be empty. The count-match flags are reported
/// separately as diagnostics.
pub fn compare(a: &Topology, b: &Topology) -> TopologyReport {
    let missing_nodes_in_a: BTreeSet<NodeId> = b.nodes.difference(&a.nodes).cloned().collect();
    let missing_nodes_in_b: BTreeSet<NodeId> = a.nodes.difference(&b.nodes).cloned().collect();
    let missing_edges_in_a: BTreeSet<Edge> = b.edges.difference(&a.edges).cloned().collect();
    let missing_edges_in_b: BTreeSet<Edge> = a.edges.difference(&b.edges).cloned().collect();

    let is_valid = missing_nodes_in_a.is_empty()
        && missing_nodes_in_b.is_empty()
        && missing_edges_in_a.is_empty()
        && missing_edges_in_b.is_empty();

    debug!(
        "compared topologies: valid={} ({}/{} nodes, {}/{} edges)",
        is_valid,
        a.nodes.len(),
        b.nodes.len(),
        a.edges.len(),
        b.edges.len()
    );

    TopologyReport {
        is_valid,
        node_count_match: a.nodes.len() == b.nodes.len(),
        edge_count_match: a.edges.len() == b.edges.len(),
        missing_nodes_in_a,
        missing_nodes_in_b,
        missing_edges_in_a,
        missing_edges_in_b,
    }
}

/// Compare and optionally fail fast.
///
/// With `raise_on_mismatch` set, a structural difference fails with
/// [`TopologyMismatch`] carrying the full report; otherwise the report is
/// returned for the caller to inspect (recoverable).
pub fn validate(a: &Topology, b: &Topology, raise_on_mismatch: bool) -> Result<TopologyReport, TopologyMismatch> {
    let report = compare(a, b);
    if !report.is_valid && raise_on_mismatch {
        return Err(TopologyMismatch { report });
    }
    Ok(report)
}

/// Round-trip check: compare two persisted graph documents.
pub fn validate_graphs(
    a: &CausalGraph,
    b: &CausalGraph,
    raise_on_mismatch: bool,
) -> Result<TopologyReport, TopologyMismatch> {
    validate(&Topology::from(a), &Topology::from(b), raise_on_mismatch)
}

/// Compare a provider-derived edge map against a persisted document.
pub fn validate_edge_map(
    map: &EdgeMap,
    graph: &CausalGraph,
    raise_on_mismatch: bool,
) -> Result<TopologyReport, TopologyMismatch> {
    validate(&Topology::from(map), &Topology::from(graph), raise_on_mismatch)
}
