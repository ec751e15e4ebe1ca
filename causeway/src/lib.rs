//! # Causeway
//!
//! Causeway moves a structural-causal-model's graph topology between an
//! in-memory representation and a portable JSON document, and verifies that
//! no structure is lost in the move.
//!
//! ## Core Concepts
//!
//! - **EdgeMap**: snapshot of a graph as node -> direct parents
//! - **Traversal**: ancestry, reachability, ordering and relationship
//!   queries over a snapshot
//! - **Topology**: the (node set, edge set) pair used for structural
//!   comparison between any two graph sources
//! - **CausalGraph**: the portable JSON document (opaque metadata rides
//!   along untouched)
//!
//! ## Quick Start
//!
//! ```rust
//! use causeway::{EdgeMap, NodeId, Traversal};
//!
//! let edges = EdgeMap::from_iter([
//!     ("rain", vec![]),
//!     ("wet_ground", vec!["rain"]),
//!     ("slippery", vec!["wet_ground"]),
//! ]);
//!
//! let traversal = Traversal::new(&edges);
//! let ancestors = traversal.ancestors(&NodeId::from("slippery"));
//! assert_eq!(ancestors, vec![NodeId::from("wet_ground"), NodeId::from("rain")]);
//!
//! let order = traversal.topological_sort()?;
//! assert_eq!(order.first().unwrap().as_str(), "rain");
//! # Ok::<(), causeway::CycleError>(())
//! ```

pub use causeway_core as core;
pub use causeway_proto as proto;

pub use causeway_core::{
    check_internal_consistency, compare, validate, validate_edge_map, validate_graphs, ChildrenIndex, CycleError,
    Edge, EdgeMap, EdgeProvider, NodeDegree, Relationship, Topology, TopologyMismatch, TopologyReport, Traversal,
    ValidationError,
};
pub use causeway_proto::{CausalEdge, CausalGraph, CausalNode, DecodeError, NodeId};
