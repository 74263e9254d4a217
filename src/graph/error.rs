use super::NodeId;

use thiserror::Error;

/// Reasons a [`crate::graph::Graph`] refuses a construction step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {node:?} does not exist in a graph with {node_count} nodes")]
    UnknownNode { node: NodeId, node_count: usize },

    #[error("an edge from {0:?} to {1:?} already exists")]
    ParallelEdge(NodeId, NodeId),

    #[error(
        "mapping covers {found:?} (pattern, target) nodes but the graphs have {expected:?}"
    )]
    MappingShape {
        expected: (usize, usize),
        found: (usize, usize),
    },
}
