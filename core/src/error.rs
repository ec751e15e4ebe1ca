//! Error taxonomy for graph traversal and validation.
//!
//! Everything here is deterministic: retrying with the same input cannot
//! change the outcome, so nothing is retried internally. Unknown-node
//! queries are deliberately *not* errors - they degrade to empty results,
//! since an isolated node is a valid graph state.

use causeway_proto::NodeId;
use thiserror::Error;

use crate::topology::TopologyReport;

/// Topological sort could not order every node: the graph is not a DAG.
///
/// Fatal to the sort call. No evaluation order exists for this input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("graph contains a cycle - ordered {sorted} of {total} nodes")]
pub struct CycleError {
    /// Nodes ordered before the sort stalled.
    pub sorted: usize,
    /// Total nodes in the edge map.
    pub total: usize,
}

/// Two compared graphs differ structurally.
///
/// Only produced by fail-fast comparison; carries the full report so the
/// caller can see exactly which nodes and edges differ.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{report}")]
pub struct TopologyMismatch {
    pub report: TopologyReport,
}

/// A persisted graph document is malformed. Never silently repaired.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// An edge references an id that is not in the node set.
    ///
    /// Fields are `edge_`-prefixed so the derive does not mistake the edge's
    /// source node for an error cause.
    #[error("edge {edge_source} -> {edge_target} references missing node '{missing}'")]
    DanglingEdgeReference { edge_source: NodeId, edge_target: NodeId, missing: NodeId },

    /// An edge has equal source and target.
    #[error("self-loop detected: {node}")]
    SelfLoop { node: NodeId },

    /// The same (source, target) pair appears more than once.
    #[error("duplicate edge: {edge_source} -> {edge_target}")]
    DuplicateEdge { edge_source: NodeId, edge_target: NodeId },
}
