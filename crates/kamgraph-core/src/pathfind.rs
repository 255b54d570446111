//! Single-source shortest-path search over a KAM
//!
//! Dijkstra's algorithm over the full graph. Edges are relaxed in both
//! directions — the declared causal direction is kept for display but does
//! not restrict reachability — and the complete shortest-path tree from the
//! source is produced before returning; there is no early exit on reaching
//! a target.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use thiserror::Error;

use crate::graph::{EdgeDirection, Kam};
use crate::model::{KamEdge, NodeId};
use crate::weight::edge_weight;

/// Error raised by a shortest-path search.
///
/// "No path exists" is not an error — [`shortest_path`] reports it as
/// `Ok(None)`. The variants here are a missing endpoint (detected before
/// the search runs) and a corrupted predecessor relation (an internal
/// invariant violation, never expected from a completed search).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("node {0} not found in kam")]
    NodeNotFound(NodeId),
    #[error("cycle in predecessor chain while reconstructing path to node {0}")]
    PredecessorCycle(NodeId),
}

/// The result of a completed Dijkstra run from a single source.
///
/// Distances and predecessors are keyed by node id. Nodes absent from
/// `distances` were unreachable from the source.
#[derive(Debug)]
pub struct ShortestPathTree {
    source: NodeId,
    distances: HashMap<NodeId, u32>,
    predecessors: HashMap<NodeId, NodeId>,
}

impl ShortestPathTree {
    /// The search's source node.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Final distance to `id`, or `None` if unreachable.
    pub fn distance(&self, id: NodeId) -> Option<u32> {
        self.distances.get(&id).copied()
    }

    /// The node `id` was reached from on its shortest path, if any.
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.predecessors.get(&id).copied()
    }

    /// Reconstruct the source→target node sequence from the predecessor
    /// relation.
    ///
    /// Returns `Ok(None)` when the target was never reached. The walk is
    /// iterative and bounded by `node_count` steps; exceeding the bound
    /// means the predecessor relation contains a cycle, which is reported
    /// as [`SearchError::PredecessorCycle`] rather than looped on.
    pub fn path_to(
        &self,
        target: NodeId,
        node_count: usize,
    ) -> Result<Option<Vec<NodeId>>, SearchError> {
        if target != self.source && !self.predecessors.contains_key(&target) {
            return Ok(None);
        }

        let mut nodes = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessor(current) {
            nodes.push(prev);
            current = prev;
            if nodes.len() > node_count {
                return Err(SearchError::PredecessorCycle(target));
            }
        }
        nodes.reverse();
        Ok(Some(nodes))
    }
}

/// An ordered source→target path and its accumulated traversal weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KamPath {
    /// Node sequence from source to target inclusive; consecutive nodes are
    /// joined by exactly one graph edge, in either natural direction.
    pub nodes: Vec<NodeId>,
    /// Sum of edge weights along the path.
    pub total_weight: u32,
}

/// Compute the full shortest-path tree from `source`.
///
/// Frontier ties are broken by node id: of two frontier nodes at equal
/// distance, the smaller id settles first. This makes the search — and the
/// particular equal-weight path it prefers — deterministic.
pub fn shortest_path_tree(kam: &Kam, source: NodeId) -> Result<ShortestPathTree, SearchError> {
    if !kam.contains_node(source) {
        return Err(SearchError::NodeNotFound(source));
    }

    let mut distances: HashMap<NodeId, u32> = HashMap::new();
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
    let mut settled: HashSet<NodeId> = HashSet::new();
    // Min-heap of (distance, node id); stale entries are skipped on pop.
    let mut frontier: BinaryHeap<Reverse<(u32, NodeId)>> = BinaryHeap::new();

    distances.insert(source, 0);
    frontier.push(Reverse((0, source)));

    while let Some(Reverse((dist, node))) = frontier.pop() {
        if !settled.insert(node) {
            continue;
        }

        relax(
            kam,
            node,
            dist,
            EdgeDirection::Forward,
            &mut distances,
            &mut predecessors,
            &settled,
            &mut frontier,
        );
        relax(
            kam,
            node,
            dist,
            EdgeDirection::Reverse,
            &mut distances,
            &mut predecessors,
            &settled,
            &mut frontier,
        );
    }

    tracing::debug!(
        "shortest-path tree from {} complete: {} of {} nodes reached",
        source,
        settled.len(),
        kam.node_count()
    );

    Ok(ShortestPathTree {
        source,
        distances,
        predecessors,
    })
}

/// Relax all edges incident to the just-settled `node` on one side.
#[allow(clippy::too_many_arguments)]
fn relax(
    kam: &Kam,
    node: NodeId,
    dist: u32,
    direction: EdgeDirection,
    distances: &mut HashMap<NodeId, u32>,
    predecessors: &mut HashMap<NodeId, NodeId>,
    settled: &HashSet<NodeId>,
    frontier: &mut BinaryHeap<Reverse<(u32, NodeId)>>,
) {
    for edge in kam.adjacent_edges(node, direction) {
        let neighbor = opposite_endpoint(edge, direction);
        if settled.contains(&neighbor) {
            continue;
        }

        let candidate = dist + edge_weight(edge);
        let improved = match distances.get(&neighbor) {
            Some(&known) => candidate < known,
            None => true,
        };
        if improved {
            distances.insert(neighbor, candidate);
            predecessors.insert(neighbor, node);
            frontier.push(Reverse((candidate, neighbor)));
        }
    }
}

/// The endpoint of `edge` reached when leaving the queried node on `direction`.
fn opposite_endpoint(edge: &KamEdge, direction: EdgeDirection) -> NodeId {
    match direction {
        EdgeDirection::Forward => edge.target,
        EdgeDirection::Reverse => edge.source,
    }
}

/// Find the shortest path between two nodes.
///
/// Both endpoints are resolved before the search runs; a missing one is
/// [`SearchError::NodeNotFound`]. A completed search that never reached the
/// target is the expected no-path outcome, `Ok(None)`.
pub fn shortest_path(
    kam: &Kam,
    source: NodeId,
    target: NodeId,
) -> Result<Option<KamPath>, SearchError> {
    if !kam.contains_node(target) {
        return Err(SearchError::NodeNotFound(target));
    }

    let tree = shortest_path_tree(kam, source)?;
    let Some(nodes) = tree.path_to(target, kam.node_count())? else {
        return Ok(None);
    };

    // target was reached, so its distance is present
    let total_weight = tree.distance(target).unwrap_or(0);
    Ok(Some(KamPath {
        nodes,
        total_weight,
    }))
}
