//! A partial bijection between pattern and target vertices.
use crate::graph::NodeId;

/// A bijection from (some) pattern vertices to target vertices, with O(1) lookup in both
/// directions.
///
/// During a search the mapping is grown by [`Mapping::insert`] on every descent and shrunk by
/// [`Mapping::remove`] on every backtrack. Results handed out to callers are snapshots of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mapping {
    forward: Vec<Option<NodeId>>,
    backward: Vec<Option<NodeId>>,
    len: usize,
}

impl Mapping {
    /// The empty mapping between a pattern with `pattern_nodes` vertices and a target with
    /// `target_nodes` vertices.
    pub fn new(pattern_nodes: usize, target_nodes: usize) -> Self {
        Self {
            forward: vec![None; pattern_nodes],
            backward: vec![None; target_nodes],
            len: 0,
        }
    }

    /// The target vertex `u` maps to, if `u` is mapped.
    pub fn target(&self, u: NodeId) -> Option<NodeId> {
        self.forward[u.0]
    }

    /// The pattern vertex mapped onto `v`, if any.
    pub fn pattern(&self, v: NodeId) -> Option<NodeId> {
        self.backward[v.0]
    }

    pub fn contains_pattern(&self, u: NodeId) -> bool {
        self.forward[u.0].is_some()
    }

    pub fn contains_target(&self, v: NodeId) -> bool {
        self.backward[v.0].is_some()
    }

    /// Record `u ↦ v`.
    ///
    /// # Panics
    ///
    /// In debug builds, when either `u` or `v` is already mapped.
    pub fn insert(&mut self, u: NodeId, v: NodeId) {
        debug_assert!(self.forward[u.0].is_none(), "{u:?} is already mapped");
        debug_assert!(self.backward[v.0].is_none(), "{v:?} is already an image");
        self.forward[u.0] = Some(v);
        self.backward[v.0] = Some(u);
        self.len += 1;
    }

    /// Forget the image of `u`, returning it.
    pub fn remove(&mut self, u: NodeId) -> Option<NodeId> {
        let v = self.forward[u.0].take()?;
        self.backward[v.0] = None;
        self.len -= 1;
        Some(v)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of pattern vertices this mapping was created for.
    pub fn pattern_order(&self) -> usize {
        self.forward.len()
    }

    /// Number of target vertices this mapping was created for.
    pub fn target_order(&self) -> usize {
        self.backward.len()
    }

    /// `(pattern, target)` pairs in increasing pattern order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.forward
            .iter()
            .enumerate()
            .filter_map(|(u, v)| v.map(|v| (NodeId(u), v)))
    }

    /// Mapped target vertices, sorted.
    pub fn image(&self) -> Vec<NodeId> {
        self.backward
            .iter()
            .enumerate()
            .filter_map(|(v, u)| u.map(|_| NodeId(v)))
            .collect()
    }

    /// Mapped pattern vertices, sorted.
    pub fn domain(&self) -> Vec<NodeId> {
        self.iter().map(|(u, _)| u).collect()
    }
}
