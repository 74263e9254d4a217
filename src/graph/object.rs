use super::GraphError;

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKind {
    Directed,
    Undirected,
}

impl GraphKind {
    /// The neighbourhood directions that have to be scanned for a vertex of this kind of graph.
    /// Undirected graphs only ever use [`Direction::Outgoing`].
    pub fn directions(self) -> &'static [Direction] {
        match self {
            GraphKind::Directed => &[Direction::Outgoing, Direction::Incoming],
            GraphKind::Undirected => &[Direction::Outgoing],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Outgoing = 0,
    Incoming = 1,
}

impl Direction {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A vertex- and edge-labelled simple graph.
///
/// Vertices are numbered `0..n` in insertion order, as are edges. Self-loops are allowed,
/// parallel edges are not: an undirected graph has at most one edge per unordered pair, a
/// directed graph at most one per ordered pair.
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    kind: GraphKind,

    /// Vertex labels. Defines a finite map from [`NodeId`] to label.
    nodes: Vec<N>,

    /// Edge labels. Defines a finite map from [`EdgeId`] to label.
    edges: Vec<E>,

    /// `(source, target)` of each edge; for undirected graphs the order is as inserted.
    endpoints: Vec<(NodeId, NodeId)>,

    // Successors (or all neighbours, if undirected) of each vertex with the connecting edge.
    outgoing: Vec<Vec<(NodeId, EdgeId)>>,
    // Predecessors of each vertex. Always empty for undirected graphs.
    incoming: Vec<Vec<(NodeId, EdgeId)>>,

    lookup: HashMap<(NodeId, NodeId), EdgeId>,
}

impl<N, E> Graph<N, E> {
    /// The empty graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        Graph {
            kind,
            nodes: vec![],
            edges: vec![],
            endpoints: vec![],
            outgoing: vec![],
            incoming: vec![],
            lookup: HashMap::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// A graph with the given vertex labels and no edges.
    pub fn discrete(kind: GraphKind, nodes: Vec<N>) -> Self {
        let mut g = Self::new(kind);
        for label in nodes {
            g.new_node(label);
        }
        g
    }

    /// Build a graph from vertex labels and `(source, target, label)` triples indexing into them.
    ///
    /// # Errors
    ///
    /// Fails on the first edge that refers to a missing vertex or duplicates an existing edge.
    pub fn from_edges(
        kind: GraphKind,
        nodes: Vec<N>,
        edges: impl IntoIterator<Item = (usize, usize, E)>,
    ) -> Result<Self, GraphError> {
        let mut g = Self::discrete(kind, nodes);
        for (s, t, label) in edges {
            g.new_edge(NodeId(s), NodeId(t), label)?;
        }
        Ok(g)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len()).map(EdgeId)
    }

    /// Label of vertex `v`.
    ///
    /// # Panics
    ///
    /// When `v` is not a vertex of this graph.
    pub fn node(&self, v: NodeId) -> &N {
        &self.nodes[v.0]
    }

    /// Label of edge `e`.
    ///
    /// # Panics
    ///
    /// When `e` is not an edge of this graph.
    pub fn edge(&self, e: EdgeId) -> &E {
        &self.edges[e.0]
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    /// Add a single vertex labelled `label`.
    pub fn new_node(&mut self, label: N) -> NodeId {
        let index = self.nodes.len();
        self.nodes.push(label);
        self.outgoing.push(vec![]);
        self.incoming.push(vec![]);
        NodeId(index)
    }

    /// Add an edge from `source` to `target` labelled `label`, returning its [`EdgeId`].
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if either endpoint is missing, and
    /// [`GraphError::ParallelEdge`] if the graph already has an edge between them.
    pub fn new_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        label: E,
    ) -> Result<EdgeId, GraphError> {
        for v in [source, target] {
            if v.0 >= self.nodes.len() {
                return Err(GraphError::UnknownNode {
                    node: v,
                    node_count: self.nodes.len(),
                });
            }
        }
        if self.lookup.contains_key(&self.key(source, target)) {
            return Err(GraphError::ParallelEdge(source, target));
        }
        Ok(self.insert_edge(source, target, label))
    }

    // Callers have already checked both endpoints exist and the edge is new.
    pub(crate) fn insert_edge(&mut self, source: NodeId, target: NodeId, label: E) -> EdgeId {
        let edge = EdgeId(self.edges.len());
        let key = self.key(source, target);
        debug_assert!(!self.lookup.contains_key(&key), "parallel edge {key:?}");
        self.edges.push(label);
        self.endpoints.push((source, target));
        self.lookup.insert(key, edge);

        self.outgoing[source.0].push((target, edge));
        match self.kind {
            GraphKind::Directed => self.incoming[target.0].push((source, edge)),
            GraphKind::Undirected if source != target => {
                self.outgoing[target.0].push((source, edge))
            }
            GraphKind::Undirected => {}
        }
        edge
    }

    fn key(&self, source: NodeId, target: NodeId) -> (NodeId, NodeId) {
        match self.kind {
            GraphKind::Undirected if target < source => (target, source),
            _ => (source, target),
        }
    }

    /// The edge from `source` to `target`, if any. Direction is ignored for undirected graphs.
    pub fn find_edge(&self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        self.lookup.get(&self.key(source, target)).copied()
    }

    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.lookup.contains_key(&self.key(source, target))
    }

    pub fn endpoints(&self, e: EdgeId) -> (NodeId, NodeId) {
        self.endpoints[e.0]
    }

    /// The endpoint of `e` which is not `v` (or `v` itself for a self-loop).
    pub fn opposite(&self, v: NodeId, e: EdgeId) -> NodeId {
        let (s, t) = self.endpoints[e.0];
        debug_assert!(v == s || v == t, "{v:?} is not an endpoint of {e:?}");
        if v == s {
            t
        } else {
            s
        }
    }

    /// Neighbours of `v` in direction `dir`, paired with the connecting edge.
    /// For undirected graphs both directions yield every neighbour.
    pub fn neighbors_directed(
        &self,
        v: NodeId,
        dir: Direction,
    ) -> impl Iterator<Item = (NodeId, EdgeId)> + '_ {
        let adjacent = match (self.kind, dir) {
            (GraphKind::Directed, Direction::Incoming) => &self.incoming[v.0],
            _ => &self.outgoing[v.0],
        };
        adjacent.iter().copied()
    }

    /// All neighbours of `v`; for directed graphs successors followed by predecessors.
    pub fn neighbors(&self, v: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.incident(v).map(|(w, _)| w)
    }

    pub fn successors(&self, v: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.neighbors_directed(v, Direction::Outgoing).map(|(w, _)| w)
    }

    pub fn predecessors(&self, v: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.neighbors_directed(v, Direction::Incoming).map(|(w, _)| w)
    }

    pub fn incident_edges(&self, v: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.incident(v).map(|(_, e)| e)
    }

    pub fn out_edges(&self, v: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.neighbors_directed(v, Direction::Outgoing).map(|(_, e)| e)
    }

    pub fn in_edges(&self, v: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.neighbors_directed(v, Direction::Incoming).map(|(_, e)| e)
    }

    /// Number of edges incident to `v`. A self-loop counts once (twice if directed: once as an
    /// out-edge, once as an in-edge).
    pub fn degree(&self, v: NodeId) -> usize {
        self.outgoing[v.0].len() + self.incoming[v.0].len()
    }

    fn incident(&self, v: NodeId) -> impl Iterator<Item = (NodeId, EdgeId)> + '_ {
        self.outgoing[v.0]
            .iter()
            .chain(self.incoming[v.0].iter())
            .copied()
    }
}

impl<N: Clone, E: Clone> Graph<N, E> {
    /// The subgraph induced by `nodes`: those vertices (renumbered in the order given) and every
    /// edge of `self` between two of them.
    ///
    /// # Panics
    ///
    /// When `nodes` contains a vertex that is not in this graph.
    pub fn induced_subgraph(&self, nodes: &[NodeId]) -> Graph<N, E> {
        let mut renumber = vec![None; self.node_count()];
        let mut sub = Graph::new(self.kind);
        for &v in nodes {
            if renumber[v.0].is_none() {
                renumber[v.0] = Some(sub.new_node(self.node(v).clone()));
            }
        }

        for e in self.edge_ids() {
            let (s, t) = self.endpoints(e);
            if let (Some(s), Some(t)) = (renumber[s.0], renumber[t.0]) {
                sub.insert_edge(s, t, self.edge(e).clone());
            }
        }
        sub
    }
}
