//! Building graphs from a mapping.
use crate::graph::{Graph, GraphError, NodeId};
use crate::mapping::Mapping;

/// The part of `target` covered by `mapping`: the image vertices (numbered in pattern order)
/// and the images of the pattern edges between mapped vertices that exist in `target`.
///
/// # Panics
///
/// When `mapping` refers to vertices that `pattern` or `target` do not have.
pub fn mapped_subgraph<N, E, NP, EP>(
    target: &Graph<N, E>,
    pattern: &Graph<NP, EP>,
    mapping: &Mapping,
) -> Graph<N, E>
where
    N: Clone,
    E: Clone,
{
    let mut sub = Graph::new(target.kind());
    let mut renumber: Vec<Option<NodeId>> = vec![None; target.node_count()];
    for (_, v) in mapping.iter() {
        renumber[v.0] = Some(sub.new_node(target.node(v).clone()));
    }

    for e in pattern.edge_ids() {
        let (s, t) = pattern.endpoints(e);
        let (Some(s), Some(t)) = (mapping.target(s), mapping.target(t)) else {
            continue;
        };
        let Some(image) = target.find_edge(s, t) else {
            continue;
        };
        if let (Some(s), Some(t)) = (renumber[s.0], renumber[t.0]) {
            // the mapping is injective, so each target edge is reached at most once
            sub.insert_edge(s, t, target.edge(image).clone());
        }
    }
    sub
}

/// The smallest graph containing both `target` and `pattern` with the mapped vertices glued.
///
/// Starts from a copy of `target`, adds a vertex for every unmapped pattern vertex (labelled by
/// `node_factory`), then adds every pattern edge whose glued image is not yet present (labelled
/// by `edge_factory`). Returns the supergraph together with the image of each pattern vertex.
///
/// # Errors
///
/// [`GraphError::MappingShape`] when `mapping` was not built for this `pattern` and `target`.
pub fn minimum_common_supergraph<N, E, NP, EP, FN, FE>(
    target: &Graph<N, E>,
    pattern: &Graph<NP, EP>,
    mapping: &Mapping,
    mut node_factory: FN,
    mut edge_factory: FE,
) -> Result<(Graph<N, E>, Vec<NodeId>), GraphError>
where
    N: Clone,
    E: Clone,
    FN: FnMut(&NP) -> N,
    FE: FnMut(&EP) -> E,
{
    let expected = (pattern.node_count(), target.node_count());
    let found = (mapping.pattern_order(), mapping.target_order());
    if found != expected {
        return Err(GraphError::MappingShape { expected, found });
    }

    let mut glued = target.clone();
    let image: Vec<NodeId> = pattern
        .node_ids()
        .map(|u| match mapping.target(u) {
            Some(v) => v,
            None => glued.new_node(node_factory(pattern.node(u))),
        })
        .collect();

    for e in pattern.edge_ids() {
        let (s, t) = pattern.endpoints(e);
        let (s, t) = (image[s.0], image[t.0]);
        if !glued.has_edge(s, t) {
            glued.new_edge(s, t, edge_factory(pattern.edge(e)))?;
        }
    }
    Ok((glued, image))
}
