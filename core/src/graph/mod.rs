//! Causal graph data model and traversal.
//!
//! [`EdgeMap`] is the canonical snapshot (node -> direct parents),
//! [`ChildrenIndex`] its derived reverse adjacency, and [`Traversal`] the
//! query engine over both. Nothing here mutates a snapshot once built.

pub mod edge_map;
pub mod index;
pub mod relation;
pub mod traversal;

pub use edge_map::{EdgeMap, EdgeProvider};
pub use index::ChildrenIndex;
pub use relation::Relationship;
pub use traversal::{NodeDegree, Traversal};
