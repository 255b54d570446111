//! Kamgraph Core — KAM graph model, weight policy, and shortest-path engine

pub mod graph;
pub mod model;
pub mod pathfind;
pub mod weight;


#[cfg(test)]
pub mod test_utils;

pub use graph::{EdgeDirection, GraphError, Kam};
pub use model::{EdgeId, FunctionKind, KamEdge, KamNode, NodeId, RelationshipKind};
pub use pathfind::{shortest_path, shortest_path_tree, KamPath, SearchError, ShortestPathTree};
pub use weight::edge_weight;
