//! # Graph Matching
//!
//! Exact matching of one [Graph](crate::graph::Graph) (the *pattern*) against another (the
//! *target*) with a VF2-style backtracking search. The same engine answers five questions,
//! chosen by [Problem](crate::state::Problem):
//!
//! - **isomorphism**: is the pattern the same graph as the target?
//! - **subgraph** (monomorphism): does the target contain the pattern, possibly with extra
//!   edges between the matched vertices?
//! - **induced subgraph**: does it contain the pattern with exactly the pattern's edges?
//! - **MCIS** / **MCES**: what are the largest connected common induced / edge subgraphs?
//!
//! Directed and undirected graphs are both supported; the kind is a property of the graph.
//!
//! # Example
//!
//! ```rust
//! use graph_matching::prelude::*;
//!
//! // the 4-cycle 0 - 1 - 2 - 3 - 0
//! let cycle = Graph::from_edges(
//!     GraphKind::Undirected,
//!     vec![(); 4],
//!     [(0, 1, ()), (1, 2, ()), (2, 3, ()), (3, 0, ())],
//! )
//! .unwrap();
//! // the path 0 - 1 - 2
//! let path =
//!     Graph::from_edges(GraphKind::Undirected, vec![(); 3], [(0, 1, ()), (1, 2, ())]).unwrap();
//!
//! // every rotation and reflection of the path in the cycle
//! assert_eq!(cycle.match_subgraph(&path, None).len(), 8);
//! // the cycle's automorphisms
//! assert_eq!(cycle.match_graph(&cycle, None).len(), 8);
//! ```
//!
//! Vertex and edge labels take part in matching through the `*_by` methods or
//! [Matcher](crate::matcher::Matcher), which also exposes a call limit and a
//! [MatchTrace](crate::trace::MatchTrace) hook for observing the search.
//!
//! # Search
//!
//! The search state is split the usual VF2 way. Each graph has a
//! [TraversalState](crate::traversal::TraversalState) recording mapped vertices and the
//! *terminal* vertices adjacent to them; a
//! [MatcherState](crate::state::MatcherState) couples the two with the current
//! [Mapping](crate::mapping::Mapping). Extending the mapping returns an undo token that must be
//! handed back to undo it, so backtracking always happens in stack order.

pub mod graph;
pub mod mapping;

pub mod candidates;
pub mod traversal;

pub mod options;
pub mod search;
pub mod state;
pub mod trace;
pub mod visitor;

pub mod matcher;

pub mod construct;
pub mod select;
pub mod similarity;

pub mod prelude {
    //! The types needed to build graphs and run searches.
    pub use crate::graph::{Direction, EdgeId, Graph, GraphError, GraphKind, NodeId};
    pub use crate::mapping::Mapping;
    pub use crate::matcher::{MatchReport, Matcher};
    pub use crate::options::MatchOptions;
    pub use crate::state::Problem;
    pub use crate::trace::{MatchEvent, MatchTrace, NoopTrace};
}
