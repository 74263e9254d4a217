use graph_matching::prelude::*;
use graph_matching::select::{
    best_by_degree_variance, best_by_edge_count, degree_variance, matched_edge_count,
};

use crate::graph::fixtures::{complete, graph, path};

fn mapping(pattern_nodes: usize, target_nodes: usize, pairs: &[(usize, usize)]) -> Mapping {
    let mut m = Mapping::new(pattern_nodes, target_nodes);
    for &(u, v) in pairs {
        m.insert(NodeId(u), NodeId(v));
    }
    m
}

#[test]
fn test_edge_count_respects_direction() {
    let target = graph(GraphKind::Directed, 2, &[(0, 1)]);
    let pattern = graph(GraphKind::Directed, 2, &[(0, 1)]);
    assert_eq!(matched_edge_count(&target, &pattern, &mapping(2, 2, &[(0, 0), (1, 1)])), 1);
    assert_eq!(matched_edge_count(&target, &pattern, &mapping(2, 2, &[(0, 1), (1, 0)])), 0);
    assert_eq!(matched_edge_count(&target, &pattern, &mapping(2, 2, &[(0, 0)])), 0);
}

#[test]
fn test_best_by_edge_count_keeps_ties() {
    let k3 = complete(3);
    let p3 = path(GraphKind::Undirected, 3);
    let full = mapping(3, 3, &[(0, 0), (1, 1), (2, 2)]);
    let other = mapping(3, 3, &[(0, 2), (1, 0), (2, 1)]);
    let partial = mapping(3, 3, &[(0, 0), (1, 1)]);
    let best = best_by_edge_count(&k3, &p3, &[partial, full.clone(), other.clone()]);
    assert_eq!(best, vec![full, other]);
    assert!(best_by_edge_count(&k3, &p3, &[]).is_empty());
}

#[test]
fn test_best_by_degree_variance_prefers_spread() {
    // 0 - 1 - 2 - 3 with degrees 1, 2, 2, 1
    let p4 = path(GraphKind::Undirected, 4);
    let edge = path(GraphKind::Undirected, 2);
    let end = mapping(2, 4, &[(0, 0), (1, 1)]);
    let middle = mapping(2, 4, &[(0, 1), (1, 2)]);
    let other_end = mapping(2, 4, &[(0, 3), (1, 2)]);

    assert!((degree_variance(&p4, &edge, &end) - 0.25).abs() < 1e-12);
    assert_eq!(degree_variance(&p4, &edge, &middle), 0.0);

    let best = best_by_degree_variance(&p4, &edge, &[end.clone(), middle, other_end.clone()]);
    assert_eq!(best, vec![end, other_end]);
}

#[test]
fn test_degree_variance_counts_glued_edges() {
    // mapping an edge onto two non-adjacent vertices adds that edge to the supergraph
    let p3 = path(GraphKind::Undirected, 3);
    let edge = path(GraphKind::Undirected, 2);
    let ends = mapping(2, 3, &[(0, 0), (1, 2)]);
    // glued degrees 2 and 2
    assert_eq!(degree_variance(&p3, &edge, &ends), 0.0);
    let empty = Mapping::new(2, 3);
    assert_eq!(degree_variance(&p3, &edge, &empty), 0.0);
}
