//! Internal well-formedness checks for persisted graph documents.

use std::collections::HashSet;

use causeway_proto::{CausalGraph, NodeId};
use tracing::debug;

use crate::error::ValidationError;

/// Check that a graph document is internally consistent.
///
/// Scans edges in input order and fails fast on the first violation:
/// 1. every edge's source and target must be in the node-id set,
/// 2. no edge may have equal source and target,
/// 3. no (source, target) pair may repeat.
///
/// Nothing is repaired; the error names the offending edge or node so the
/// caller can report the specific violated invariant. Note this is stricter
/// than the in-memory [`EdgeMap`](crate::graph::EdgeMap), which tolerates
/// external parent ids.
pub fn check_internal_consistency(graph: &CausalGraph) -> Result<(), ValidationError> {
    let node_ids: HashSet<&NodeId> = graph.nodes.iter().map(|node| &node.id).collect();
    let mut seen: HashSet<(&NodeId, &NodeId)> = HashSet::new();

    for edge in &graph.edges {
        if !node_ids.contains(&edge.source) {
            return Err(ValidationError::DanglingEdgeReference {
                edge_source: edge.source.clone(),
                edge_target: edge.target.clone(),
                missing: edge.source.clone(),
            });
        }
        if !node_ids.contains(&edge.target) {
            return Err(ValidationError::DanglingEdgeReference {
                edge_source: edge.source.clone(),
                edge_target: edge.target.clone(),
                missing: edge.target.clone(),
            });
        }
        if edge.source == edge.target {
            return Err(ValidationError::SelfLoop { node: edge.source.clone() });
        }
        if !seen.insert((&edge.source, &edge.target)) {
            return Err(ValidationError::DuplicateEdge {
                edge_source: edge.source.clone(),
                edge_target: edge.target.clone(),
            });
        }
    }

    debug!("graph document is internally consistent ({} nodes, {} edges)", graph.nodes.len(), graph.edges.len());
    Ok(())
}
