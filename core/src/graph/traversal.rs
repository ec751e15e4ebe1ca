//! Read-only query engine over an [`EdgeMap`] snapshot.
//!
//! Every operation is a pure, synchronous function of the snapshot.
//! Unknown nodes degrade to empty results rather than erroring - an
//! isolated node (say, just added with no recorded edges) is a valid graph
//! state. All searches use explicit stacks/queues, so depth is bounded by
//! the heap rather than the call stack even on adversarially deep chains.

use std::collections::{HashMap, HashSet, VecDeque};

use causeway_proto::NodeId;
use indexmap::IndexMap;

use super::{ChildrenIndex, EdgeMap, Relationship};
use crate::error::CycleError;

/// A node paired with its degree: the shortest-path distance (in edges)
/// from the query node. Degree 1 is a parent or child, degree 2 a
/// grandparent or grandchild, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDegree {
    pub node: NodeId,
    pub degree: usize,
}

/// Which adjacency a search walks.
#[derive(Debug, Clone, Copy)]
enum Direction {
    /// Toward causes, over the parent lists.
    Parents,
    /// Toward effects, over the derived children index.
    Children,
}

/// Traversal view over an [`EdgeMap`].
///
/// Derives the [`ChildrenIndex`] once at construction so repeated queries
/// share it. Holds the snapshot by reference and never mutates it;
/// separate views over separate snapshots are safe to use from separate
/// threads without locking.
pub struct Traversal<'a> {
    edges: &'a EdgeMap,
    children: ChildrenIndex,
}

impl<'a> Traversal<'a> {
    pub fn new(edges: &'a EdgeMap) -> Self { Self { edges, children: ChildrenIndex::build(edges) } }

    pub fn edge_map(&self) -> &EdgeMap { self.edges }

    pub fn children_index(&self) -> &ChildrenIndex { &self.children }

    fn neighbors(&self, node: &NodeId, dir: Direction) -> &[NodeId] {
        match dir {
            Direction::Parents => self.edges.parents(node),
            Direction::Children => self.children.children(node),
        }
    }

    /// Direct parents (direct causes) of `node`.
    pub fn parents(&self, node: &NodeId) -> Vec<NodeId> { self.edges.parents(node).to_vec() }

    /// Direct children (direct effects) of `node`.
    pub fn children(&self, node: &NodeId) -> Vec<NodeId> { self.children.children(node).to_vec() }

    /// All transitive causes of `node`, in pre-order DFS first-visit order:
    /// the first parent's whole branch before the next sibling branch, so
    /// closer causes appear earlier. Downstream consumers rely on that
    /// ordering contract.
    ///
    /// Each ancestor appears at most once. A node is never its own
    /// ancestor, and the traversal terminates even if the underlying
    /// structure has a cycle - cycle *reporting* belongs to
    /// [`Traversal::topological_sort`].
    pub fn ancestors(&self, node: &NodeId) -> Vec<NodeId> { self.collect_reachable(node, Direction::Parents) }

    /// All transitive effects of `node`; same ordering contract as
    /// [`Traversal::ancestors`], closer effects first.
    pub fn descendants(&self, node: &NodeId) -> Vec<NodeId> { self.collect_reachable(node, Direction::Children) }

    /// Pre-order DFS with an explicit stack. Neighbors are pushed in
    /// reverse so the first-listed neighbor is expanded first, which makes
    /// the output identical to the recursive formulation. The start node
    /// is pre-seeded into the visited set so a cycle back to it cannot
    /// report it as its own ancestor or descendant.
    fn collect_reachable<'s>(&'s self, start: &'s NodeId, dir: Direction) -> Vec<NodeId> {
        let mut visited: HashSet<&NodeId> = HashSet::from([start]);
        let mut stack: Vec<&NodeId> = self.neighbors(start, dir).iter().rev().collect();
        let mut out = Vec::new();

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            out.push(current.clone());
            for neighbor in self.neighbors(current, dir).iter().rev() {
                if !visited.contains(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        out
    }

    /// All ancestors of `node` with their degree, ascending by degree with
    /// ties in discovery order. BFS guarantees each node is recorded once,
    /// at its minimum distance.
    pub fn ancestors_with_degree(&self, node: &NodeId) -> Vec<NodeDegree> {
        self.ranked_reachable(node, Direction::Parents)
    }

    /// All descendants of `node` with their degree; see
    /// [`Traversal::ancestors_with_degree`].
    pub fn descendants_with_degree(&self, node: &NodeId) -> Vec<NodeDegree> {
        self.ranked_reachable(node, Direction::Children)
    }

    fn ranked_reachable<'s>(&'s self, start: &'s NodeId, dir: Direction) -> Vec<NodeDegree> {
        let mut seen: HashSet<&NodeId> = HashSet::from([start]);
        let mut queue: VecDeque<(&NodeId, usize)> = VecDeque::from([(start, 0)]);
        let mut out = Vec::new();

        while let Some((current, degree)) = queue.pop_front() {
            for neighbor in self.neighbors(current, dir) {
                if seen.insert(neighbor) {
                    out.push(NodeDegree { node: neighbor.clone(), degree: degree + 1 });
                    queue.push_back((neighbor, degree + 1));
                }
            }
        }

        // BFS discovery order is already ascending by degree.
        out
    }

    /// Early-exit reachability search from `from` toward `to`.
    fn reaches(&self, from: &NodeId, to: &NodeId, dir: Direction) -> bool {
        let mut visited: HashSet<&NodeId> = HashSet::from([from]);
        let mut stack: Vec<&NodeId> = vec![from];

        while let Some(current) = stack.pop() {
            for neighbor in self.neighbors(current, dir) {
                if neighbor == to {
                    return true;
                }
                if visited.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        false
    }

    /// True if `a` is a transitive cause of `b`. Never true for `a == b`.
    pub fn is_ancestor(&self, a: &NodeId, b: &NodeId) -> bool { a != b && self.reaches(b, a, Direction::Parents) }

    /// True if `a` is a transitive effect of `b`. Never true for `a == b`.
    pub fn is_descendant(&self, a: &NodeId, b: &NodeId) -> bool { a != b && self.reaches(b, a, Direction::Children) }

    /// Classify the relationship between `a` and `b` from `a`'s
    /// perspective. Checks short-circuit in precedence order; see
    /// [`Relationship`].
    pub fn relationship(&self, a: &NodeId, b: &NodeId) -> Relationship {
        if a == b {
            return Relationship::Same;
        }
        if self.edges.parents(b).contains(a) {
            return Relationship::Parent;
        }
        if self.edges.parents(a).contains(b) {
            return Relationship::Child;
        }
        if self.is_ancestor(a, b) {
            return Relationship::Ancestor;
        }
        if self.is_descendant(a, b) {
            return Relationship::Descendant;
        }
        Relationship::Unconnected
    }

    /// True if adding the edge `source -> target` would close a cycle:
    /// either a self-loop, or `target` already reaches `source` through
    /// existing child edges.
    pub fn would_create_cycle(&self, source: &NodeId, target: &NodeId) -> bool {
        source == target || self.reaches(target, source, Direction::Children)
    }

    /// A valid evaluation order: every parent precedes every child.
    ///
    /// Kahn's algorithm, seeded with zero-in-degree nodes in edge-map key
    /// order. Fails with [`CycleError`] when not every node can be ordered
    /// - the sole cycle-detection failure mode in the engine, surfaced
    /// rather than silently truncated. Note that a parent id that is not
    /// itself an edge-map key can never be scheduled, so a graph with
    /// external parents has no evaluation order either.
    pub fn topological_sort(&self) -> Result<Vec<NodeId>, CycleError> {
        let mut in_degree: IndexMap<&NodeId, usize> =
            self.edges.iter().map(|(node, parents)| (node, parents.len())).collect();

        let mut queue: VecDeque<&NodeId> =
            in_degree.iter().filter(|(_, degree)| **degree == 0).map(|(node, _)| *node).collect();

        let mut out: Vec<NodeId> = Vec::with_capacity(in_degree.len());
        while let Some(node) = queue.pop_front() {
            out.push(node.clone());
            for child in self.children.children(node) {
                if let Some(degree) = in_degree.get_mut(child) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(child);
                    }
                }
            }
        }

        if out.len() != self.edges.len() {
            return Err(CycleError { sorted: out.len(), total: self.edges.len() });
        }
        Ok(out)
    }

    /// Shortest directed path from `source` to `target` over child edges,
    /// inclusive of both endpoints. `None` when `target` is unreachable -
    /// a normal outcome, not an error. `source == target` yields the
    /// single-node path.
    pub fn path<'s>(&'s self, source: &'s NodeId, target: &'s NodeId) -> Option<Vec<NodeId>> {
        if source == target {
            return Some(vec![source.clone()]);
        }

        let mut visited: HashSet<&NodeId> = HashSet::from([source]);
        let mut came_from: HashMap<&NodeId, &NodeId> = HashMap::new();
        let mut queue: VecDeque<&NodeId> = VecDeque::from([source]);

        while let Some(current) = queue.pop_front() {
            for child in self.children.children(current) {
                if visited.insert(child) {
                    came_from.insert(child, current);
                    if child == target {
                        // Walk the BFS tree back to the source.
                        let mut path = vec![child];
                        let mut node = child;
                        while let Some(prev) = came_from.get(node) {
                            node = *prev;
                            path.push(node);
                        }
                        path.reverse();
                        return Some(path.into_iter().cloned().collect());
                    }
                    queue.push_back(child);
                }
            }
        }

        None
    }

    /// Ancestors shared by `a` and `b`, ordered as `a`'s ancestor list
    /// filtered by membership in `b`'s.
    pub fn common_ancestors(&self, a: &NodeId, b: &NodeId) -> Vec<NodeId> {
        let of_b: HashSet<NodeId> = self.ancestors(b).into_iter().collect();
        self.ancestors(a).into_iter().filter(|node| of_b.contains(node)).collect()
    }

    /// Descendants shared by `a` and `b`; same ordering rule as
    /// [`Traversal::common_ancestors`].
    pub fn common_descendants(&self, a: &NodeId, b: &NodeId) -> Vec<NodeId> {
        let of_b: HashSet<NodeId> = self.descendants(b).into_iter().collect();
        self.descendants(a).into_iter().filter(|node| of_b.contains(node)).collect()
    }

    /// Nodes with no parents (exogenous variables).
    pub fn roots(&self) -> Vec<NodeId> { self.edges.roots() }

    /// Nodes with no children: the final outcomes, nothing depends on them.
    pub fn leaves(&self) -> Vec<NodeId> {
        self.children.iter().filter(|(_, children)| children.is_empty()).map(|(node, _)| node.clone()).collect()
    }
}
