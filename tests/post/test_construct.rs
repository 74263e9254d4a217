use graph_matching::construct::{mapped_subgraph, minimum_common_supergraph};
use graph_matching::prelude::*;

use crate::graph::fixtures::{complete, cycle, path};

#[test]
fn test_mapped_subgraph_of_mcis() {
    let c4 = cycle(GraphKind::Undirected, 4);
    let k3 = complete(3);
    let found = c4.find_mcis(&k3, Some(1));
    assert_eq!(found.len(), 1);

    let sub = mapped_subgraph(&c4, &k3, &found[0]);
    assert_eq!(sub.node_count(), 2);
    assert_eq!(sub.edge_count(), 1);
    assert_eq!(sub.kind(), GraphKind::Undirected);
}

#[test]
fn test_mapped_subgraph_only_keeps_pattern_edges() {
    // a path mapped into a triangle: the triangle's third edge is not part of the image
    let k3 = complete(3);
    let p3 = path(GraphKind::Undirected, 3);
    let found = k3.match_subgraph(&p3, Some(1));
    let sub = mapped_subgraph(&k3, &p3, &found[0]);
    assert_eq!(sub.node_count(), 3);
    assert_eq!(sub.edge_count(), 2);
    assert!(!sub.match_graph(&p3, Some(1)).is_empty());
}

#[test]
fn test_supergraph_of_cycle_and_triangle() {
    let c4 = cycle(GraphKind::Undirected, 4);
    let k3 = complete(3);
    let found = c4.find_mces(&k3, Some(1));
    assert_eq!(found.len(), 1);

    let (glued, image) = minimum_common_supergraph(&c4, &k3, &found[0], |_| (), |_| ()).unwrap();
    // the triangle's missing edge becomes a chord of the cycle
    assert_eq!(glued.node_count(), 4);
    assert_eq!(glued.edge_count(), 5);
    assert_eq!(image.len(), 3);
    assert!(glued.has_edge(image[0], image[1]));
    assert!(glued.has_edge(image[1], image[2]));
    assert!(glued.has_edge(image[0], image[2]));
}

#[test]
fn test_supergraph_adds_unmapped_vertices() {
    let target = Graph::from_edges(GraphKind::Directed, vec!["t0", "t1"], [(0, 1, 0)]).unwrap();
    let pattern = Graph::from_edges(
        GraphKind::Directed,
        vec!["p0", "p1", "p2"],
        [(0, 1, 1), (1, 2, 2)],
    )
    .unwrap();
    let found = target.find_mcis(&pattern, None);
    assert!(!found.is_empty());
    let m = &found[0];
    assert_eq!(m.len(), 2);

    let (glued, image) =
        minimum_common_supergraph(&target, &pattern, m, |label| *label, |label| *label + 10)
            .unwrap();
    assert_eq!(glued.node_count(), 3);
    assert_eq!(glued.edge_count(), 2);
    // target labels survive, the new vertex keeps its pattern label
    assert_eq!(glued.node(NodeId(0)), &"t0");
    let unmapped = pattern.node_ids().find(|&u| m.target(u).is_none()).unwrap();
    assert_eq!(glued.node(image[unmapped.0]), pattern.node(unmapped));
    assert!(glued.edges().contains(&0));
}

#[test]
fn test_supergraph_rejects_foreign_mapping() {
    let c4 = cycle(GraphKind::Undirected, 4);
    let p3 = path(GraphKind::Undirected, 3);
    // built for a two-vertex pattern
    let mut short = Mapping::new(2, 4);
    short.insert(NodeId(0), NodeId(0));

    let err = minimum_common_supergraph(&c4, &p3, &short, |_| (), |_| ()).unwrap_err();
    assert_eq!(
        err,
        GraphError::MappingShape {
            expected: (3, 4),
            found: (2, 4)
        }
    );
    assert!(err.to_string().contains("(2, 4)"));
}
