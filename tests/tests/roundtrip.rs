//! End-to-end round trips: document -> edge map -> document, with
//! consistency and topology checks at each hop.

use anyhow::Result;
use causeway::{
    check_internal_consistency, validate_edge_map, validate_graphs, CausalGraph, EdgeMap, NodeId, Topology,
    Traversal,
};

const RDE_DOC: &str = r#"{
    "nodes": [
        {"id": "applied_potential", "displayName": "Applied Potential"},
        {"id": "reference_potential", "displayName": "Reference Potential"},
        {"id": "overpotential", "displayName": "Overpotential"},
        {"id": "kinetic_current", "displayName": "Kinetic Current"},
        {"id": "diffusion_current", "displayName": "Diffusion Current"},
        {"id": "total_current", "displayName": "Total Current"}
    ],
    "edges": [
        {"id": "e0", "source": "applied_potential", "target": "overpotential"},
        {"id": "e1", "source": "reference_potential", "target": "overpotential"},
        {"id": "e2", "source": "overpotential", "target": "kinetic_current"},
        {"id": "e3", "source": "kinetic_current", "target": "total_current"},
        {"id": "e4", "source": "diffusion_current", "target": "total_current"}
    ],
    "experimentalContext": "rotating disk electrode"
}"#;

#[test]
fn document_to_edge_map_and_back_preserves_topology() -> Result<()> {
    let doc = CausalGraph::from_json_str(RDE_DOC)?;
    check_internal_consistency(&doc)?;

    let edges = EdgeMap::from(&doc);
    validate_edge_map(&edges, &doc, true)?;

    let exported = CausalGraph::from(&edges);
    validate_graphs(&exported, &doc, true)?;
    Ok(())
}

#[test]
fn json_serialization_round_trip_preserves_metadata() -> Result<()> {
    let doc = CausalGraph::from_json_str(RDE_DOC)?;
    let reparsed = CausalGraph::from_json_str(&doc.to_json_string()?)?;

    assert_eq!(reparsed, doc);
    assert_eq!(reparsed.extra["experimentalContext"], "rotating disk electrode");
    assert_eq!(reparsed.nodes[2].extra["displayName"], "Overpotential");
    Ok(())
}

#[test]
fn loaded_document_supports_full_traversal() -> Result<()> {
    let doc = CausalGraph::from_json_str(RDE_DOC)?;
    let edges = EdgeMap::from(&doc);
    let traversal = Traversal::new(&edges);

    let overpotential = NodeId::from("overpotential");
    let total = NodeId::from("total_current");

    assert_eq!(
        traversal.ancestors(&overpotential),
        vec![NodeId::from("applied_potential"), NodeId::from("reference_potential")]
    );
    assert!(traversal.is_ancestor(&overpotential, &total));
    assert_eq!(
        traversal.path(&overpotential, &total),
        Some(vec![overpotential.clone(), "kinetic_current".into(), total.clone()])
    );

    let order = traversal.topological_sort()?;
    assert_eq!(order.len(), 6);
    assert_eq!(order.last().unwrap(), &total);
    Ok(())
}

#[test]
fn mutated_document_fails_round_trip_validation() -> Result<()> {
    let doc = CausalGraph::from_json_str(RDE_DOC)?;
    let mut tampered = doc.clone();
    tampered.edges.pop();

    let report = validate_graphs(&tampered, &doc, false)?;
    assert!(!report.is_valid);
    assert!(!report.edge_count_match);
    assert!(report.node_count_match);

    let err = validate_graphs(&tampered, &doc, true).unwrap_err();
    assert!(err.report.missing_edges_in_a.iter().any(|e| e.source == "diffusion_current"));
    Ok(())
}

#[test]
fn comparison_ignores_metadata() -> Result<()> {
    let doc = CausalGraph::from_json_str(RDE_DOC)?;
    let mut stripped = doc.clone();
    for node in &mut stripped.nodes {
        node.extra.clear();
    }
    stripped.extra.clear();

    // Topology is metadata-independent.
    assert_eq!(Topology::from(&stripped), Topology::from(&doc));
    validate_graphs(&stripped, &doc, true)?;
    Ok(())
}
