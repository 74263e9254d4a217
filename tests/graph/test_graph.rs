use graph_matching::prelude::*;

use super::fixtures::{cycle, path};
use super::strategy::arb_graph_and_subset;

use proptest::proptest;

#[test]
fn test_build_by_hand() {
    let mut g = Graph::directed();
    let a = g.new_node("a");
    let b = g.new_node("b");
    let e = g.new_edge(a, b, 7).unwrap();
    let l = g.new_edge(b, b, 8).unwrap();

    assert_eq!(g.node(a), &"a");
    assert_eq!(g.edge(e), &7);
    assert_eq!(g.endpoints(e), (a, b));
    assert_eq!(g.opposite(a, e), b);
    assert_eq!(g.opposite(b, l), b);
    assert_eq!(g.out_edges(b).collect::<Vec<_>>(), vec![l]);
    assert_eq!(g.in_edges(b).collect::<Vec<_>>(), vec![e, l]);
    // the loop counts as an out- and an in-edge
    assert_eq!(g.degree(b), 3);
    assert_eq!(
        g.new_edge(a, NodeId(9), 0),
        Err(GraphError::UnknownNode {
            node: NodeId(9),
            node_count: 2
        })
    );
}

#[test]
fn test_from_edges_rejects_parallel_edges() {
    let result = Graph::from_edges(
        GraphKind::Undirected,
        vec![(); 2],
        [(0, 1, ()), (1, 0, ())],
    );
    assert_eq!(
        result.unwrap_err(),
        GraphError::ParallelEdge(NodeId(1), NodeId(0))
    );
    assert!(GraphError::ParallelEdge(NodeId(1), NodeId(0))
        .to_string()
        .contains("already exists"));
}

#[test]
fn test_neighbourhoods() {
    let c = cycle(GraphKind::Undirected, 4);
    let mut around_0: Vec<_> = c.neighbors(NodeId(0)).collect();
    around_0.sort();
    assert_eq!(around_0, vec![NodeId(1), NodeId(3)]);
    assert_eq!(c.incident_edges(NodeId(0)).count(), 2);

    let p = path(GraphKind::Directed, 3);
    assert_eq!(p.successors(NodeId(1)).collect::<Vec<_>>(), vec![NodeId(2)]);
    assert_eq!(p.predecessors(NodeId(1)).collect::<Vec<_>>(), vec![NodeId(0)]);
    assert_eq!(
        p.neighbors(NodeId(1)).collect::<Vec<_>>(),
        vec![NodeId(2), NodeId(0)]
    );
}

proptest! {
    #[test]
    fn test_induced_subgraph_edges((g, subset) in arb_graph_and_subset(6)) {
        let sub = g.induced_subgraph(&subset);
        assert_eq!(sub.node_count(), subset.len());
        assert_eq!(sub.kind(), g.kind());

        let mut expected = 0;
        for (i, &a) in subset.iter().enumerate() {
            for (j, &b) in subset.iter().enumerate() {
                let present = g.has_edge(a, b);
                assert_eq!(sub.has_edge(NodeId(i), NodeId(j)), present);
                if present && (g.is_directed() || i <= j) {
                    expected += 1;
                }
            }
        }
        assert_eq!(sub.edge_count(), expected);
    }
}
