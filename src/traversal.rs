//! Per-graph bookkeeping of which vertices are mapped and which are *terminal*: unmapped but
//! adjacent to the mapped core.
//!
//! Each terminal entry is tagged with the depth at which it joined the terminal set, so that a
//! [`TraversalState::backtrack`] can remove exactly the entries its matching
//! [`TraversalState::descend`] added. The pairing is enforced by the [`Descent`] token: `descend`
//! hands one out and `backtrack` consumes it.
//!
//! Directed graphs keep two terminal sets, indexed by [`Direction`]: the *out* set holds
//! successors of mapped vertices, the *in* set their predecessors. Undirected graphs only use the
//! out set.
use crate::graph::{Direction, Graph, GraphKind, NodeId};

use std::num::NonZeroUsize;

/// The depth at which a vertex joined the `[out, in]` terminal sets, if it did.
type Since = [Option<NonZeroUsize>; 2];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalState {
    kind: GraphKind,
    mapped: Vec<bool>,
    since: Vec<Since>,
    /// Number of vertices currently in the `[out, in]` terminal sets.
    terminal_len: [usize; 2],
    depth: usize,
}

/// Undo record for one [`TraversalState::descend`].
#[must_use = "a descent must be handed back to `TraversalState::backtrack`"]
#[derive(Debug)]
pub struct Descent {
    vertex: NodeId,
    depth: usize,
    prior: Since,
    added: Vec<(Direction, NodeId)>,
}

impl Descent {
    pub fn vertex(&self) -> NodeId {
        self.vertex
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Terminal entries created by this descent.
    pub fn added(&self) -> &[(Direction, NodeId)] {
        &self.added
    }
}

impl TraversalState {
    /// Nothing mapped, every terminal set empty.
    pub fn new<N, E>(graph: &Graph<N, E>) -> Self {
        Self {
            kind: graph.kind(),
            mapped: vec![false; graph.node_count()],
            since: vec![[None, None]; graph.node_count()],
            terminal_len: [0, 0],
            depth: 0,
        }
    }

    /// Number of vertices mapped so far.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn node_count(&self) -> usize {
        self.mapped.len()
    }

    pub fn unmapped_len(&self) -> usize {
        self.mapped.len() - self.depth
    }

    pub fn is_mapped(&self, v: NodeId) -> bool {
        self.mapped[v.0]
    }

    pub fn in_terminal(&self, v: NodeId, dir: Direction) -> bool {
        self.since[v.0][dir.index()].is_some()
    }

    /// Whether `v` is in any terminal set.
    pub fn is_terminal(&self, v: NodeId) -> bool {
        self.since[v.0].iter().any(Option::is_some)
    }

    /// The depth at which `v` joined the terminal set for `dir`.
    pub fn terminal_depth(&self, v: NodeId, dir: Direction) -> Option<usize> {
        self.since[v.0][dir.index()].map(NonZeroUsize::get)
    }

    pub fn terminal_len(&self, dir: Direction) -> usize {
        self.terminal_len[dir.index()]
    }

    /// Lowest-numbered vertex of the terminal set for `dir`.
    pub fn first_terminal(&self, dir: Direction) -> Option<NodeId> {
        if self.terminal_len[dir.index()] == 0 {
            return None;
        }
        self.since
            .iter()
            .position(|s| s[dir.index()].is_some())
            .map(NodeId)
    }

    /// Lowest-numbered unmapped vertex.
    pub fn first_unmapped(&self) -> Option<NodeId> {
        self.mapped.iter().position(|m| !m).map(NodeId)
    }

    /// Map `v`: drop it from the terminal sets (remembering its depth tags) and add its unmapped
    /// neighbours that are not yet terminal, tagged with the new depth.
    ///
    /// # Panics
    ///
    /// In debug builds, when `v` is already mapped.
    pub fn descend<N, E>(&mut self, graph: &Graph<N, E>, v: NodeId) -> Descent {
        debug_assert!(!self.mapped[v.0], "{v:?} is already mapped");
        self.depth += 1;
        // depth was just incremented, so this is never None
        let tag = NonZeroUsize::new(self.depth);

        let prior = std::mem::take(&mut self.since[v.0]);
        for (slot, s) in prior.iter().enumerate() {
            if s.is_some() {
                self.terminal_len[slot] -= 1;
            }
        }
        self.mapped[v.0] = true;

        let mut added = Vec::new();
        for &dir in self.kind.directions() {
            let slot = dir.index();
            for (w, _) in graph.neighbors_directed(v, dir) {
                if self.mapped[w.0] || self.since[w.0][slot].is_some() {
                    continue;
                }
                self.since[w.0][slot] = tag;
                self.terminal_len[slot] += 1;
                added.push((dir, w));
            }
        }

        Descent {
            vertex: v,
            depth: self.depth,
            prior,
            added,
        }
    }

    /// Undo the most recent [`TraversalState::descend`].
    ///
    /// # Panics
    ///
    /// In debug builds, when `descent` is not the most recent descent on this state.
    pub fn backtrack(&mut self, descent: Descent) {
        debug_assert_eq!(descent.depth, self.depth, "out of order backtrack");
        for (dir, w) in descent.added {
            let slot = dir.index();
            debug_assert_eq!(self.since[w.0][slot].map(NonZeroUsize::get), Some(descent.depth));
            self.since[w.0][slot] = None;
            self.terminal_len[slot] -= 1;
        }

        let v = descent.vertex;
        for (slot, s) in descent.prior.iter().enumerate() {
            if s.is_some() {
                self.terminal_len[slot] += 1;
            }
        }
        self.since[v.0] = descent.prior;
        self.mapped[v.0] = false;
        self.depth -= 1;
    }

    /// Classify the unmapped neighbours of `v` in direction `dir` for look-ahead pruning.
    ///
    /// `out` and `inc` count membership in the out and in terminal sets (a vertex may be in both).
    /// With [`Lookahead::Strict`] `rest` counts neighbours in neither set; with
    /// [`Lookahead::Loose`] it counts every unmapped neighbour.
    pub fn profile<N, E>(
        &self,
        graph: &Graph<N, E>,
        v: NodeId,
        dir: Direction,
        lookahead: Lookahead,
    ) -> NeighborProfile {
        let mut profile = NeighborProfile::default();
        for (w, _) in graph.neighbors_directed(v, dir) {
            if w == v || self.mapped[w.0] {
                continue;
            }
            let [out, inc] = self.since[w.0];
            profile.out += out.is_some() as usize;
            profile.inc += inc.is_some() as usize;
            match lookahead {
                Lookahead::Strict => profile.rest += (out.is_none() && inc.is_none()) as usize,
                Lookahead::Loose => profile.rest += 1,
            }
        }
        profile
    }
}

/// How neighbours outside both terminal sets are counted by [`TraversalState::profile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookahead {
    /// Terminal membership is preserved exactly by the mapping (isomorphism, induced subgraph).
    Strict,
    /// The target may have extra edges, so only totals are comparable (monomorphism).
    Loose,
}

/// Counts of a vertex's unmapped neighbours, split by terminal-set membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighborProfile {
    pub out: usize,
    pub inc: usize,
    pub rest: usize,
}

impl NeighborProfile {
    /// Every count is at most the corresponding count of `other`.
    pub fn fits_within(&self, other: &NeighborProfile) -> bool {
        self.out <= other.out && self.inc <= other.inc && self.rest <= other.rest
    }
}
