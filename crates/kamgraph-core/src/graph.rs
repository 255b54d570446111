//! Graph wrapper using petgraph::StableDiGraph keyed by external KAM ids

use std::collections::HashMap;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use thiserror::Error;

use crate::model::*;

/// Which side of a node an adjacency query looks at.
///
/// `Forward` means the node is the declared source of the edge, `Reverse`
/// means it is the declared target. Pathfinding queries both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    Forward,
    Reverse,
}

/// Error raised while assembling a [`Kam`] from store data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("duplicate node id {0}")]
    DuplicateNode(NodeId),
    #[error("duplicate edge id {0}")]
    DuplicateEdge(EdgeId),
    #[error("edge {edge} references unknown node {node}")]
    DanglingEdge { edge: EdgeId, node: NodeId },
}

/// An immutable knowledge assembly model — a directed multigraph of typed
/// biological entities and relationships.
///
/// Built once from store data via [`Kam::build`] and read-only afterwards.
/// Adjacency is maintained by petgraph at insertion time, so incident-edge
/// queries never rescan the edge set, and the id maps give O(1) lookup by
/// external node/edge id.
pub struct Kam {
    name: String,
    inner: StableDiGraph<KamNode, KamEdge>,
    node_indices: HashMap<NodeId, NodeIndex>,
    edge_indices: HashMap<EdgeId, EdgeIndex>,
}

impl std::fmt::Debug for Kam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kam")
            .field("name", &self.name)
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .finish()
    }
}

impl Kam {
    /// Assemble a KAM from its node and edge sets.
    ///
    /// Validates the structural invariants up front: node and edge ids are
    /// unique, and every edge endpoint resolves to a node in the node set.
    pub fn build(
        name: impl Into<String>,
        nodes: Vec<KamNode>,
        edges: Vec<KamEdge>,
    ) -> Result<Self, GraphError> {
        let mut inner = StableDiGraph::with_capacity(nodes.len(), edges.len());
        let mut node_indices = HashMap::with_capacity(nodes.len());
        let mut edge_indices = HashMap::with_capacity(edges.len());

        for node in nodes {
            let id = node.id;
            let idx = inner.add_node(node);
            if node_indices.insert(id, idx).is_some() {
                return Err(GraphError::DuplicateNode(id));
            }
        }

        for edge in edges {
            let source = *node_indices
                .get(&edge.source)
                .ok_or(GraphError::DanglingEdge {
                    edge: edge.id,
                    node: edge.source,
                })?;
            let target = *node_indices
                .get(&edge.target)
                .ok_or(GraphError::DanglingEdge {
                    edge: edge.id,
                    node: edge.target,
                })?;
            let id = edge.id;
            let idx = inner.add_edge(source, target, edge);
            if edge_indices.insert(id, idx).is_some() {
                return Err(GraphError::DuplicateEdge(id));
            }
        }

        let kam = Kam {
            name: name.into(),
            inner,
            node_indices,
            edge_indices,
        };
        tracing::debug!(
            "kam '{}' built: {} nodes, {} edges",
            kam.name,
            kam.node_count(),
            kam.edge_count()
        );
        Ok(kam)
    }

    /// The KAM's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&KamNode> {
        self.node_indices
            .get(&id)
            .and_then(|&idx| self.inner.node_weight(idx))
    }

    /// Get an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&KamEdge> {
        self.edge_indices
            .get(&id)
            .and_then(|&idx| self.inner.edge_weight(idx))
    }

    /// Whether a node with this id exists.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node_indices.contains_key(&id)
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterate over all nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &KamNode> {
        self.inner
            .node_indices()
            .filter_map(move |idx| self.inner.node_weight(idx))
    }

    /// Iterate over all edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &KamEdge> {
        self.inner
            .edge_indices()
            .filter_map(move |idx| self.inner.edge_weight(idx))
    }

    /// All edges incident to `id` on the requested side.
    ///
    /// `Forward` yields edges where `id` is the declared source, `Reverse`
    /// those where it is the declared target. Unknown ids yield nothing.
    pub fn adjacent_edges(
        &self,
        id: NodeId,
        direction: EdgeDirection,
    ) -> impl Iterator<Item = &KamEdge> {
        let dir = match direction {
            EdgeDirection::Forward => Direction::Outgoing,
            EdgeDirection::Reverse => Direction::Incoming,
        };
        self.node_indices
            .get(&id)
            .copied()
            .into_iter()
            .flat_map(move |idx| {
                self.inner
                    .edges_directed(idx, dir)
                    .filter_map(move |edge_ref| self.inner.edge_weight(edge_ref.id()))
            })
    }
}
