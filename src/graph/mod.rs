//! The graph collaborator consumed by the matchers: a labelled adjacency-list [`Graph`],
//! directed or undirected, queried only through the capability methods on it.
mod error;
mod object;

pub use error::*;
pub use object::*;
