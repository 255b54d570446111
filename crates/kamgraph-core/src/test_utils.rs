//! Test utilities for kamgraph-core

use crate::model::*;

/// Shorthand node constructor.
pub fn node(id: u64, label: &str, function: FunctionKind) -> KamNode {
    KamNode {
        id: NodeId(id),
        label: label.to_string(),
        function,
    }
}

/// Shorthand edge constructor.
pub fn edge(id: u64, source: u64, target: u64, relationship: RelationshipKind) -> KamEdge {
    KamEdge {
        id: EdgeId(id),
        source: NodeId(source),
        target: NodeId(target),
        relationship,
    }
}

/// The worked four-node example used across the pathfinding tests.
///
/// ```text
///   A --directlyIncreases(1)--> B --increases(2)--> C
///   A --association(3)--> D --directlyIncreases(1)--> C
/// ```
///
/// Shortest A→C path is [A, B, C] with total weight 3; the alternative via
/// D totals 4.
pub fn diamond_kam() -> crate::Kam {
    let nodes = vec![
        node(1, "p(HGNC:AKT1)", FunctionKind::ProteinAbundance),
        node(2, "kaof(p(HGNC:AKT1))", FunctionKind::KinaseActivity),
        node(3, "bp(GO:apoptosis)", FunctionKind::BiologicalProcess),
        node(4, "r(HGNC:AKT1)", FunctionKind::RnaAbundance),
    ];
    let edges = vec![
        edge(10, 1, 2, RelationshipKind::DirectlyIncreases),
        edge(11, 2, 3, RelationshipKind::Increases),
        edge(12, 1, 4, RelationshipKind::Association),
        edge(13, 4, 3, RelationshipKind::DirectlyIncreases),
    ];
    crate::Kam::build("diamond", nodes, edges).unwrap()
}
