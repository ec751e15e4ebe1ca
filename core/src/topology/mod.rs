//! Structural comparison of graph topologies.
//!
//! A topology is the (node set, edge set) pair of a graph, independent of
//! any node metadata. Comparison is pure set arithmetic: it performs no
//! I/O and does not care where either side came from - a live provider, a
//! persisted document, or statically parsed source all reduce to the same
//! shape.

pub mod compare;

pub use compare::{compare, validate, validate_edge_map, validate_graphs, Edge, Topology, TopologyReport};
