//! Choosing among equally large mappings.
use crate::graph::{Graph, NodeId};
use crate::mapping::Mapping;

use itertools::Itertools;

// Degree variances closer than this are treated as equal.
const VARIANCE_EPSILON: f64 = 1e-9;

/// Number of pattern edges whose endpoints are both mapped and whose image is an edge of
/// `target` (respecting direction for directed graphs).
pub fn matched_edge_count<N, E, NP, EP>(
    target: &Graph<N, E>,
    pattern: &Graph<NP, EP>,
    mapping: &Mapping,
) -> usize {
    pattern
        .edge_ids()
        .filter(|&e| {
            let (s, t) = pattern.endpoints(e);
            match (mapping.target(s), mapping.target(t)) {
                (Some(s), Some(t)) => target.has_edge(s, t),
                _ => false,
            }
        })
        .count()
}

/// The mappings preserving the most pattern edges. Ties are all kept, in their original order.
pub fn best_by_edge_count<N, E, NP, EP>(
    target: &Graph<N, E>,
    pattern: &Graph<NP, EP>,
    mappings: &[Mapping],
) -> Vec<Mapping> {
    mappings
        .iter()
        .max_set_by_key(|m| matched_edge_count(target, pattern, m))
        .into_iter()
        .cloned()
        .collect()
}

/// Degree of the image of `u ↦ v` in the minimum common supergraph: its target degree plus
/// every pattern edge at `u` that has no image in `target`.
fn glued_degree<N, E, NP, EP>(
    target: &Graph<N, E>,
    pattern: &Graph<NP, EP>,
    mapping: &Mapping,
    u: NodeId,
    v: NodeId,
) -> usize {
    let missing = pattern
        .incident_edges(u)
        .filter(|&e| {
            let (s, t) = pattern.endpoints(e);
            match (mapping.target(s), mapping.target(t)) {
                (Some(s), Some(t)) => !target.has_edge(s, t),
                _ => true,
            }
        })
        .count();
    target.degree(v) + missing
}

/// Population variance of the glued vertex degrees in the minimum common supergraph built
/// from `mapping` (see [`crate::construct::minimum_common_supergraph`]). Zero for an empty
/// mapping.
pub fn degree_variance<N, E, NP, EP>(
    target: &Graph<N, E>,
    pattern: &Graph<NP, EP>,
    mapping: &Mapping,
) -> f64 {
    let degrees = mapping
        .iter()
        .map(|(u, v)| glued_degree(target, pattern, mapping, u, v) as f64)
        .collect_vec();
    if degrees.is_empty() {
        return 0.0;
    }
    let n = degrees.len() as f64;
    let mean = degrees.iter().sum::<f64>() / n;
    degrees.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n
}

/// The mappings whose glued vertices have the most spread-out degrees in the common
/// supergraph. Ties are all kept, in their original order.
pub fn best_by_degree_variance<N, E, NP, EP>(
    target: &Graph<N, E>,
    pattern: &Graph<NP, EP>,
    mappings: &[Mapping],
) -> Vec<Mapping> {
    let scored = mappings
        .iter()
        .map(|m| (degree_variance(target, pattern, m), m))
        .collect_vec();
    let best = scored
        .iter()
        .map(|(score, _)| *score)
        .fold(f64::NEG_INFINITY, f64::max);
    scored
        .into_iter()
        .filter(|(score, _)| (best - score).abs() <= VARIANCE_EPSILON)
        .map(|(_, m)| m.clone())
        .collect()
}
