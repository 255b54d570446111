//! Static style tables mapping KAM classifications to visual attributes
//!
//! Closed, immutable maps built once at first use. Every lookup is total:
//! classifications without an entry fall back to the neutral defaults, so
//! the exporter never fails to style an element.

use std::collections::HashMap;

use kamgraph_core::{FunctionKind, RelationshipKind};
use once_cell::sync::Lazy;

pub const DEFAULT_NODE_SHAPE: &str = "rectangle";
pub const DEFAULT_NODE_COLOR: &str = "150,150,150";
pub const DEFAULT_EDGE_COLOR: &str = "0,0,0";

static NODE_SHAPES: Lazy<HashMap<FunctionKind, &'static str>> = Lazy::new(|| {
    use FunctionKind::*;
    HashMap::from([
        (Abundance, "ver_ellipsis"),
        (BiologicalProcess, "rhombus"),
        (CatalyticActivity, "hexagon"),
        (CellSecretion, "arc"),
        (CellSurfaceExpression, "arc"),
        (ChaperoneActivity, "hexagon"),
        (ComplexAbundance, "hor_ellipsis"),
        (CompositeAbundance, "hor_ellipsis"),
        (Degradation, "hor_ellipsis"),
        (GeneAbundance, "hor_ellipsis"),
        (GtpBoundActivity, "hexagon"),
        (KinaseActivity, "hexagon"),
        (MicroRnaAbundance, "hor_ellipsis"),
        (MolecularActivity, "hexagon"),
        (Pathology, "rhombus"),
        (PeptidaseActivity, "hexagon"),
        (PhosphataseActivity, "hexagon"),
        (Products, "hor_ellipsis"),
        (ProteinAbundance, "hor_ellipsis"),
        (Reactants, "hexagon"),
        (RibosylationActivity, "hexagon"),
        (RnaAbundance, "hor_ellipsis"),
        (TranscriptionalActivity, "hexagon"),
        (TransportActivity, "hexagon"),
    ])
});

static NODE_COLORS: Lazy<HashMap<FunctionKind, &'static str>> = Lazy::new(|| {
    use FunctionKind::*;
    HashMap::from([
        (Abundance, "40,255,85"),
        (BiologicalProcess, "255,51,102"),
        (CatalyticActivity, "100,100,255"),
        (CellSecretion, "204,204,255"),
        (CellSurfaceExpression, "204,204,255"),
        (ChaperoneActivity, "100,100,255"),
        (ComplexAbundance, "102,153,255"),
        (CompositeAbundance, "222,255,255"),
        (Degradation, "255,51,102"),
        (GeneAbundance, "204,255,204"),
        (GtpBoundActivity, "100,100,255"),
        (KinaseActivity, "100,100,255"),
        (MicroRnaAbundance, "0,255,150"),
        (MolecularActivity, "100,100,255"),
        (Pathology, "255,51,102"),
        (PeptidaseActivity, "100,100,255"),
        (PhosphataseActivity, "100,100,255"),
        (ProteinAbundance, "85,255,255"),
        (Reaction, "255,51,102"),
        (RibosylationActivity, "100,100,255"),
        (RnaAbundance, "40,255,85"),
        (TranscriptionalActivity, "100,100,255"),
        (TransportActivity, "100,100,255"),
    ])
});

static EDGE_COLORS: Lazy<HashMap<RelationshipKind, &'static str>> = Lazy::new(|| {
    use RelationshipKind::*;
    // non-causal structural relationships render gray; causal ones keep the
    // default black
    HashMap::from([
        (ActsIn, "153,153,153"),
        (HasComponent, "153,153,153"),
        (HasMember, "153,153,153"),
        (HasModification, "153,153,153"),
        (HasProduct, "153,153,153"),
        (HasVariant, "153,153,153"),
        (Includes, "153,153,153"),
        (IsA, "153,153,153"),
        (ReactantIn, "153,153,153"),
        (SubProcessOf, "153,153,153"),
        (TranscribedTo, "153,153,153"),
        (TranslatedTo, "153,153,153"),
        (Translocates, "153,153,153"),
    ])
});

/// Graphics shape token for a node's function class.
pub fn node_shape(function: FunctionKind) -> &'static str {
    NODE_SHAPES
        .get(&function)
        .copied()
        .unwrap_or(DEFAULT_NODE_SHAPE)
}

/// RGB fill triple for a node's function class.
pub fn node_color(function: FunctionKind) -> &'static str {
    NODE_COLORS
        .get(&function)
        .copied()
        .unwrap_or(DEFAULT_NODE_COLOR)
}

/// RGB line color triple for an edge's relationship class.
pub fn edge_color(relationship: RelationshipKind) -> &'static str {
    EDGE_COLORS
        .get(&relationship)
        .copied()
        .unwrap_or(DEFAULT_EDGE_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_classifications_resolve() {
        assert_eq!(node_shape(FunctionKind::ProteinAbundance), "hor_ellipsis");
        assert_eq!(node_color(FunctionKind::ProteinAbundance), "85,255,255");
        assert_eq!(edge_color(RelationshipKind::IsA), "153,153,153");
    }

    #[test]
    fn unmapped_classifications_fall_back_to_defaults() {
        // Reaction has a color entry but no shape entry; Products the reverse
        assert_eq!(node_shape(FunctionKind::Reaction), DEFAULT_NODE_SHAPE);
        assert_eq!(node_color(FunctionKind::Products), DEFAULT_NODE_COLOR);
        assert_eq!(
            edge_color(RelationshipKind::Increases),
            DEFAULT_EDGE_COLOR
        );
    }
}
