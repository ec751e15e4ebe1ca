//! Causal graph core: data model, traversal engine, topology validation.
//!
//! The core works on immutable snapshots. An [`EdgeMap`] maps every node to
//! its direct parents (direct causes); all algorithms are pure functions of
//! one. How a snapshot is produced - from a live model, parsed source, or a
//! loaded document - is the edge provider's concern, not ours.
//!
//! Three layers sit on top of the data model:
//! - [`graph::Traversal`] answers ancestry, reachability, ordering and
//!   relationship queries.
//! - [`topology`] compares two graphs structurally and reports exactly what
//!   differs.
//! - [`consistency`] checks that a single persisted document is well-formed.

pub mod consistency;
pub mod error;
pub mod graph;
pub mod topology;

pub use consistency::check_internal_consistency;
pub use error::{CycleError, TopologyMismatch, ValidationError};
pub use graph::{ChildrenIndex, EdgeMap, EdgeProvider, NodeDegree, Relationship, Traversal};
pub use topology::{compare, validate, validate_edge_map, validate_graphs, Edge, Topology, TopologyReport};
