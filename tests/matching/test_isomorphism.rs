use graph_matching::prelude::*;

use crate::graph::fixtures::{assert_is_embedding, complete, cycle, graph, path, two_triangles};

#[test]
fn test_four_cycle_automorphisms() {
    let c4 = cycle(GraphKind::Undirected, 4);
    let autos = c4.match_graph(&c4, None);
    // 4 rotations × 2 reflections
    assert_eq!(autos.len(), 8);
    for m in &autos {
        assert_eq!(m.len(), 4);
        assert_is_embedding(&c4, &c4, m, true, |_, _| true);
    }
}

#[test]
fn test_directed_cycle_has_only_rotations() {
    let c3 = cycle(GraphKind::Directed, 3);
    assert_eq!(c3.match_graph(&c3, None).len(), 3);
}

#[test]
fn test_relabelled_graph_is_isomorphic() {
    // a path 0 - 1 - 2 - 3 and the same path numbered 2 - 0 - 3 - 1
    let p = path(GraphKind::Undirected, 4);
    let q = graph(GraphKind::Undirected, 4, &[(2, 0), (0, 3), (3, 1)]);
    let found = q.match_graph(&p, None);
    assert_eq!(found.len(), 2);
    assert!(found.iter().any(|m| m.target(NodeId(0)) == Some(NodeId(2))
        && m.target(NodeId(3)) == Some(NodeId(1))));
}

#[test]
fn test_non_isomorphic_graphs() {
    // same size, different degree sequences
    let star = graph(GraphKind::Undirected, 4, &[(0, 1), (0, 2), (0, 3)]);
    let p = path(GraphKind::Undirected, 4);
    assert!(p.match_graph(&star, None).is_empty());
    // different sizes are a dead root
    assert!(complete(3).match_graph(&complete(4), None).is_empty());
    assert!(two_triangles().match_graph(&complete(3), None).is_empty());
}

#[test]
fn test_max_matches_bounds_results() {
    let k4 = complete(4);
    assert_eq!(k4.match_graph(&k4, None).len(), 24);
    assert_eq!(k4.match_graph(&k4, Some(5)).len(), 5);
    assert_eq!(k4.match_graph(&k4, Some(1)).len(), 1);
    assert!(k4.match_graph(&k4, Some(0)).is_empty());
}

#[test]
fn test_labels_restrict_isomorphisms() {
    let colours = |labels: Vec<char>| {
        Graph::from_edges(
            GraphKind::Undirected,
            labels,
            [(0, 1, ()), (1, 2, ()), (2, 3, ()), (3, 0, ())],
        )
        .unwrap()
    };
    let target = colours(vec!['r', 'g', 'r', 'g']);
    let pattern = colours(vec!['g', 'r', 'g', 'r']);
    let found = target.match_graph_by(
        &pattern,
        |p: &char, t: &char| p == t,
        |_: &(), _: &()| true,
        MatchOptions::new(),
    );
    // only the 4 automorphisms of the cycle that swap colour classes correctly
    assert_eq!(found.len(), 4);
    for m in &found {
        assert_is_embedding(&target, &pattern, m, true, |p, t| p == t);
    }
}

#[test]
fn test_self_loops_must_correspond() {
    let looped = graph(GraphKind::Directed, 2, &[(0, 1), (1, 1)]);
    let plain = graph(GraphKind::Directed, 2, &[(0, 1), (1, 0)]);
    assert_eq!(looped.match_graph(&looped, None).len(), 1);
    assert!(looped.match_graph(&plain, None).is_empty());
    assert!(plain.match_graph(&looped, None).is_empty());
}

#[test]
fn test_empty_graphs() {
    let empty = graph(GraphKind::Undirected, 0, &[]);
    let found = empty.match_graph(&empty, None);
    assert_eq!(found.len(), 1);
    assert!(found[0].is_empty());
    assert!(complete(1).match_graph(&empty, None).is_empty());
}
