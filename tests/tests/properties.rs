//! Cross-operation properties of the traversal engine.

use causeway::{EdgeMap, NodeId, Relationship, Traversal};
use itertools::Itertools;

fn diamond() -> EdgeMap {
    EdgeMap::from_iter([("A", vec![]), ("B", vec!["A"]), ("C", vec!["A"]), ("D", vec!["B", "C"])])
}

/// `would_create_cycle(a, b)` must agree with actually adding the edge and
/// attempting a topological sort.
#[test]
fn cycle_check_agrees_with_topological_sort() {
    let edges = diamond();
    let traversal = Traversal::new(&edges);
    let nodes: Vec<NodeId> = edges.nodes().cloned().collect();

    for (source, target) in nodes.iter().cartesian_product(nodes.iter()) {
        let predicted = traversal.would_create_cycle(source, target);

        let mut extended = edges.clone();
        let mut parents: Vec<NodeId> = extended.parents(target).to_vec();
        parents.push(source.clone());
        extended.insert(target.clone(), parents);

        let sorts = Traversal::new(&extended).topological_sort().is_ok();
        assert_eq!(predicted, !sorts, "adding {source} -> {target}");
    }
}

/// Ancestor membership, descendant membership and relationship
/// classification must tell one consistent story.
#[test]
fn ancestry_views_are_consistent() {
    let edges = diamond();
    let traversal = Traversal::new(&edges);
    let nodes: Vec<NodeId> = edges.nodes().cloned().collect();

    for (a, b) in nodes.iter().cartesian_product(nodes.iter()) {
        assert_eq!(traversal.is_ancestor(a, b), traversal.descendants(a).contains(b));
        assert_eq!(traversal.is_descendant(a, b), traversal.ancestors(a).contains(b));

        match traversal.relationship(a, b) {
            Relationship::Same => assert_eq!(a, b),
            Relationship::Parent => assert!(traversal.parents(b).contains(a)),
            Relationship::Child => assert!(traversal.parents(a).contains(b)),
            Relationship::Ancestor => {
                assert!(traversal.is_ancestor(a, b) && !traversal.parents(b).contains(a));
            }
            Relationship::Descendant => {
                assert!(traversal.is_descendant(a, b) && !traversal.parents(a).contains(b));
            }
            Relationship::Unconnected => {
                assert!(!traversal.is_ancestor(a, b) && !traversal.is_descendant(a, b));
            }
        }
    }
}

/// Every node is absent from its own ancestor and descendant sets.
#[test]
fn traversal_is_irreflexive() {
    let edges = diamond();
    let traversal = Traversal::new(&edges);

    for node in edges.nodes() {
        assert!(!traversal.ancestors(node).contains(node));
        assert!(!traversal.descendants(node).contains(node));
    }
}

/// A topological order is a permutation of the node set with every parent
/// before every child.
#[test]
fn topological_sort_is_a_valid_permutation() {
    let edges = diamond();
    let order = Traversal::new(&edges).topological_sort().unwrap();

    let sorted_nodes: Vec<NodeId> = edges.nodes().cloned().sorted().collect();
    let sorted_order: Vec<NodeId> = order.iter().cloned().sorted().collect();
    assert_eq!(sorted_order, sorted_nodes);

    let position = |n: &NodeId| order.iter().position(|x| x == n).unwrap();
    for (child, parents) in edges.iter() {
        for parent in parents {
            assert!(position(parent) < position(child));
        }
    }
}
