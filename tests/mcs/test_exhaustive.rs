use graph_matching::prelude::*;
use graph_matching::select::matched_edge_count;

use crate::graph::strategy::arb_graph_pair;

use proptest::proptest;
use std::collections::HashSet;

type Plain = Graph<(), ()>;

/// Every non-empty partial injection from `pattern` into `target`.
fn partial_injections(pattern: &Plain, target: &Plain) -> Vec<Mapping> {
    fn extend(u: usize, current: &mut Mapping, out: &mut Vec<Mapping>) {
        if u == current.pattern_order() {
            if !current.is_empty() {
                out.push(current.clone());
            }
            return;
        }
        extend(u + 1, current, out);
        for v in 0..current.target_order() {
            if current.contains_target(NodeId(v)) {
                continue;
            }
            current.insert(NodeId(u), NodeId(v));
            extend(u + 1, current, out);
            current.remove(NodeId(u));
        }
    }

    let mut out = Vec::new();
    let mut current = Mapping::new(pattern.node_count(), target.node_count());
    extend(0, &mut current, &mut out);
    out
}

/// Whether `vertices` form one component when `a` and `b` are joined iff `linked(a, b)` or
/// `linked(b, a)`.
fn is_connected(vertices: &[NodeId], linked: impl Fn(NodeId, NodeId) -> bool) -> bool {
    let Some(&start) = vertices.first() else {
        return true;
    };
    let mut reached = vec![start];
    let mut frontier = vec![start];
    while let Some(a) = frontier.pop() {
        for &b in vertices {
            if !reached.contains(&b) && (linked(a, b) || linked(b, a)) {
                reached.push(b);
                frontier.push(b);
            }
        }
    }
    reached.len() == vertices.len()
}

/// The mappings reaching the highest score among `valid`, or none if that score is zero.
fn best_of(valid: Vec<(Mapping, usize)>) -> HashSet<Mapping> {
    let best = valid.iter().map(|(_, score)| *score).max().unwrap_or(0);
    valid
        .into_iter()
        .filter(|(_, score)| best > 0 && *score == best)
        .map(|(m, _)| m)
        .collect()
}

fn brute_force_mcis(target: &Plain, pattern: &Plain) -> HashSet<Mapping> {
    let valid = partial_injections(pattern, target)
        .into_iter()
        .filter(|m| {
            let induced = m.iter().all(|(a, fa)| {
                m.iter()
                    .all(|(b, fb)| pattern.has_edge(a, b) == target.has_edge(fa, fb))
            });
            induced && is_connected(&m.domain(), |a, b| pattern.has_edge(a, b))
        })
        .map(|m| {
            let size = m.len();
            (m, size)
        })
        .collect();
    best_of(valid)
}

fn brute_force_mces(target: &Plain, pattern: &Plain) -> HashSet<Mapping> {
    let valid = partial_injections(pattern, target)
        .into_iter()
        .filter(|m| {
            is_connected(&m.domain(), |a, b| match (m.target(a), m.target(b)) {
                (Some(fa), Some(fb)) => pattern.has_edge(a, b) && target.has_edge(fa, fb),
                _ => false,
            })
        })
        .map(|m| {
            let edges = matched_edge_count(target, pattern, &m);
            (m, edges)
        })
        .collect();
    best_of(valid)
}

#[test]
fn test_brute_force_agrees_on_a_small_case() {
    // 0 - 1 - 2 - 0 against 0 - 1 - 2
    let triangle = Graph::from_edges(
        GraphKind::Undirected,
        vec![(); 3],
        [(0, 1, ()), (1, 2, ()), (2, 0, ())],
    )
    .unwrap();
    let path =
        Graph::from_edges(GraphKind::Undirected, vec![(); 3], [(0, 1, ()), (1, 2, ())]).unwrap();
    assert_eq!(brute_force_mcis(&triangle, &path).len(), 12);
    assert_eq!(brute_force_mces(&triangle, &path).len(), 6);
}

proptest! {
    #[test]
    fn test_mcis_matches_exhaustive_search((g, h) in arb_graph_pair(4)) {
        let found = g.find_mcis(&h, None);
        let expected = brute_force_mcis(&g, &h);
        assert_eq!(found.len(), expected.len());
        assert_eq!(found.into_iter().collect::<HashSet<_>>(), expected);
    }

    #[test]
    fn test_mces_matches_exhaustive_search((g, h) in arb_graph_pair(4)) {
        let found = g.find_mces(&h, None);
        let expected = brute_force_mces(&g, &h);
        assert_eq!(found.len(), expected.len());
        assert_eq!(found.into_iter().collect::<HashSet<_>>(), expected);
    }
}
