use graph_matching::prelude::*;

use crate::graph::fixtures::{assert_is_embedding, complete, cycle, graph, path, two_triangles};
use crate::graph::strategy::arb_graph_pair;

use proptest::proptest;

#[test]
fn test_path_is_common_to_cycle_and_path() {
    let c4 = cycle(GraphKind::Undirected, 4);
    let p3 = path(GraphKind::Undirected, 3);
    let found = c4.find_mcis(&p3, None);
    // the whole path, at each of its 8 positions in the cycle
    assert_eq!(found.len(), 8);
    for m in &found {
        assert_eq!(m.len(), 3);
        assert_is_embedding(&c4, &p3, m, true, |_, _| true);
    }
    assert_eq!(c4.find_mcis(&p3, Some(2)).len(), 2);
}

#[test]
fn test_triangle_and_path_share_an_edge() {
    let k3 = complete(3);
    let p3 = path(GraphKind::Undirected, 3);
    let found = k3.find_mcis(&p3, None);
    // 2 pattern edges × 3 target edges × 2 orientations
    assert_eq!(found.len(), 12);
    for m in &found {
        assert_eq!(m.len(), 2);
        assert_is_embedding(&k3, &p3, m, true, |_, _| true);
    }
}

#[test]
fn test_common_subgraph_is_connected() {
    // two disjoint edges have no connected common subgraph larger than one edge
    let matching = graph(GraphKind::Undirected, 4, &[(0, 1), (2, 3)]);
    let found = matching.find_mcis(&matching, None);
    assert!(!found.is_empty());
    assert!(found.iter().all(|m| m.len() == 2));
    // 2 edges × 2 edges × 2 orientations
    assert_eq!(found.len(), 8);
}

#[test]
fn test_identical_connected_graphs() {
    let c4 = cycle(GraphKind::Undirected, 4);
    let found = c4.find_mcis(&c4, None);
    assert_eq!(found.len(), 8);
    assert!(found.iter().all(|m| m.len() == 4));
}

#[test]
fn test_labels_shrink_the_common_subgraph() {
    let target = Graph::from_edges(
        GraphKind::Undirected,
        vec!['a', 'b', 'c'],
        [(0, 1, ()), (1, 2, ())],
    )
    .unwrap();
    let pattern = Graph::from_edges(
        GraphKind::Undirected,
        vec!['a', 'b', 'x'],
        [(0, 1, ()), (1, 2, ())],
    )
    .unwrap();
    let found = target.find_mcis_by(
        &pattern,
        |p: &char, t: &char| p == t,
        |_: &(), _: &()| true,
        MatchOptions::new(),
    );
    assert_eq!(found.len(), 1);
    assert_eq!(
        found[0].iter().collect::<Vec<_>>(),
        vec![(NodeId(0), NodeId(0)), (NodeId(1), NodeId(1))]
    );
}

#[test]
fn test_directed_common_subgraph() {
    // 0 -> 1 -> 2 against 0 -> 1 <- 2: only a single edge is common
    let chain = path(GraphKind::Directed, 3);
    let collider = graph(GraphKind::Directed, 3, &[(0, 1), (2, 1)]);
    let found = chain.find_mcis(&collider, None);
    assert!(!found.is_empty());
    assert!(found.iter().all(|m| m.len() == 2));
    for m in &found {
        assert_is_embedding(&chain, &collider, m, true, |_, _| true);
    }
}

#[test]
fn test_no_common_vertex() {
    let empty = graph(GraphKind::Undirected, 0, &[]);
    assert!(two_triangles().find_mcis(&empty, None).is_empty());
    assert!(empty.find_mcis(&complete(3), None).is_empty());
}

proptest! {
    #[test]
    fn test_mcis_is_symmetric((g, h) in arb_graph_pair(5)) {
        let forward = g.find_mcis(&h, None);
        let backward = h.find_mcis(&g, None);

        if g.node_count() == 0 || h.node_count() == 0 {
            assert!(forward.is_empty() && backward.is_empty());
            return Ok(());
        }
        assert!(!forward.is_empty());
        assert!(!backward.is_empty());
        assert_eq!(forward[0].len(), backward[0].len());

        for m in &forward {
            assert_is_embedding(&g, &h, m, true, |_, _| true);
        }

        // the common subgraph seen from `h` also appears seen from `g`
        let common = h.induced_subgraph(&forward[0].domain());
        assert!(backward.iter().any(|m| {
            let other = g.induced_subgraph(&m.domain());
            !other.match_graph(&common, Some(1)).is_empty()
        }));
    }
}
