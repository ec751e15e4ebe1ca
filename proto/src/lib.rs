//! Portable graph document format for Causeway.
//!
//! A graph document carries, at minimum, a node list where each node has a
//! unique `id` and an edge list where each edge references those ids by
//! `source` and `target`. Everything else attached to a node or edge is
//! opaque metadata that round-trips unexamined.

pub mod error;
pub mod graph;
pub mod id;

pub use error::*;
pub use graph::*;
pub use id::*;
