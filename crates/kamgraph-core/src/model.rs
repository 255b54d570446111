//! Core data structures for the knowledge assembly model (KAM)

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique, stable identifier for a KAM node.
///
/// Identity is by id: two nodes with the same id are the same node, and all
/// traversal state (distances, predecessors) is keyed by this value rather
/// than by in-memory node representation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique edge identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct EdgeId(pub u64);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The BEL function class of a node — what kind of biological entity it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionKind {
    // ── Abundances ──────────────────────────────────────────
    Abundance,
    ComplexAbundance,
    CompositeAbundance,
    GeneAbundance,
    MicroRnaAbundance,
    ProteinAbundance,
    RnaAbundance,

    // ── Processes ───────────────────────────────────────────
    BiologicalProcess,
    Pathology,
    Degradation,
    Reaction,
    Products,
    Reactants,
    CellSecretion,
    CellSurfaceExpression,

    // ── Activities ──────────────────────────────────────────
    CatalyticActivity,
    ChaperoneActivity,
    GtpBoundActivity,
    KinaseActivity,
    MolecularActivity,
    PeptidaseActivity,
    PhosphataseActivity,
    RibosylationActivity,
    TranscriptionalActivity,
    TransportActivity,
}

impl FunctionKind {
    /// Display value used in interchange documents and summaries.
    pub fn display_value(&self) -> &'static str {
        match self {
            FunctionKind::Abundance => "abundance",
            FunctionKind::ComplexAbundance => "complexAbundance",
            FunctionKind::CompositeAbundance => "compositeAbundance",
            FunctionKind::GeneAbundance => "geneAbundance",
            FunctionKind::MicroRnaAbundance => "microRNAAbundance",
            FunctionKind::ProteinAbundance => "proteinAbundance",
            FunctionKind::RnaAbundance => "rnaAbundance",
            FunctionKind::BiologicalProcess => "biologicalProcess",
            FunctionKind::Pathology => "pathology",
            FunctionKind::Degradation => "degradation",
            FunctionKind::Reaction => "reaction",
            FunctionKind::Products => "products",
            FunctionKind::Reactants => "reactants",
            FunctionKind::CellSecretion => "cellSecretion",
            FunctionKind::CellSurfaceExpression => "cellSurfaceExpression",
            FunctionKind::CatalyticActivity => "catalyticActivity",
            FunctionKind::ChaperoneActivity => "chaperoneActivity",
            FunctionKind::GtpBoundActivity => "gtpBoundActivity",
            FunctionKind::KinaseActivity => "kinaseActivity",
            FunctionKind::MolecularActivity => "molecularActivity",
            FunctionKind::PeptidaseActivity => "peptidaseActivity",
            FunctionKind::PhosphataseActivity => "phosphataseActivity",
            FunctionKind::RibosylationActivity => "ribosylationActivity",
            FunctionKind::TranscriptionalActivity => "transcriptionalActivity",
            FunctionKind::TransportActivity => "transportActivity",
        }
    }
}

/// The typed relationship an edge asserts between its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipKind {
    // ── Causal ──────────────────────────────────────────────
    Increases,
    Decreases,
    DirectlyIncreases,
    DirectlyDecreases,
    CausesNoChange,
    RateLimitingStepOf,

    // ── Associative ─────────────────────────────────────────
    Association,
    PositiveCorrelation,
    NegativeCorrelation,
    Analogous,
    BiomarkerFor,
    PrognosticBiomarkerFor,
    Orthologous,

    // ── Compositional ───────────────────────────────────────
    HasComponent,
    HasMember,
    HasModification,
    HasProduct,
    HasVariant,
    ActsIn,
    ReactantIn,
    Translocates,

    // ── Hierarchical ────────────────────────────────────────
    IsA,
    Includes,
    SubProcessOf,
    TranscribedTo,
    TranslatedTo,
}

impl RelationshipKind {
    /// True for immediate, non-mediated causal links.
    pub fn is_direct(&self) -> bool {
        matches!(
            self,
            RelationshipKind::DirectlyIncreases | RelationshipKind::DirectlyDecreases
        )
    }

    /// True for causal relationships, direct or not.
    pub fn is_causal(&self) -> bool {
        matches!(
            self,
            RelationshipKind::Increases
                | RelationshipKind::Decreases
                | RelationshipKind::DirectlyIncreases
                | RelationshipKind::DirectlyDecreases
                | RelationshipKind::CausesNoChange
                | RelationshipKind::RateLimitingStepOf
        )
    }

    /// Display value used in interchange documents and summaries.
    pub fn display_value(&self) -> &'static str {
        match self {
            RelationshipKind::Increases => "increases",
            RelationshipKind::Decreases => "decreases",
            RelationshipKind::DirectlyIncreases => "directlyIncreases",
            RelationshipKind::DirectlyDecreases => "directlyDecreases",
            RelationshipKind::CausesNoChange => "causesNoChange",
            RelationshipKind::RateLimitingStepOf => "rateLimitingStepOf",
            RelationshipKind::Association => "association",
            RelationshipKind::PositiveCorrelation => "positiveCorrelation",
            RelationshipKind::NegativeCorrelation => "negativeCorrelation",
            RelationshipKind::Analogous => "analogous",
            RelationshipKind::BiomarkerFor => "biomarkerFor",
            RelationshipKind::PrognosticBiomarkerFor => "prognosticBiomarkerFor",
            RelationshipKind::Orthologous => "orthologous",
            RelationshipKind::HasComponent => "hasComponent",
            RelationshipKind::HasMember => "hasMember",
            RelationshipKind::HasModification => "hasModification",
            RelationshipKind::HasProduct => "hasProduct",
            RelationshipKind::HasVariant => "hasVariant",
            RelationshipKind::ActsIn => "actsIn",
            RelationshipKind::ReactantIn => "reactantIn",
            RelationshipKind::Translocates => "translocates",
            RelationshipKind::IsA => "isA",
            RelationshipKind::Includes => "includes",
            RelationshipKind::SubProcessOf => "subProcessOf",
            RelationshipKind::TranscribedTo => "transcribedTo",
            RelationshipKind::TranslatedTo => "translatedTo",
        }
    }
}

/// A single node in the knowledge graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KamNode {
    pub id: NodeId,
    /// Human-readable BEL term label.
    pub label: String,
    pub function: FunctionKind,
}

/// A directed edge in the knowledge graph.
///
/// The declared source/target direction is semantic (how the relationship
/// reads) and is preserved for display; traversal treats edges as
/// bidirectional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KamEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub relationship: RelationshipKind,
}
