//! Traversal weight policy for typed relationships

use crate::model::KamEdge;

/// Traversal cost of an edge, derived from its relationship class.
///
/// Direct causal relationships are cheapest (1), non-direct causal ones cost
/// 2, and every other relationship — associative, compositional,
/// hierarchical — falls back to 3. Total over all relationship kinds: no
/// edge is ever unweighted.
pub fn edge_weight(edge: &KamEdge) -> u32 {
    let rel = edge.relationship;
    if rel.is_direct() {
        1
    } else if rel.is_causal() {
        2
    } else {
        3
    }
}
