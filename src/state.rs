//! The matcher state machine shared by every matching problem.
//!
//! One [`MatcherState`] couples a pattern [`TraversalState`], a target [`TraversalState`] and
//! the current [`Mapping`]. What differs between problems (isomorphism, monomorphism, induced
//! subgraph, and the two maximum common subgraph flavours) is only the feasibility rule, the
//! dead-state test and the candidate ordering, all selected by [`Problem`]; the graph kind
//! (directed or undirected) is taken from the graphs themselves.
use crate::candidates::{CandidatePairs, NestedCandidates, TargetGroup};
use crate::graph::{Direction, EdgeId, Graph, NodeId};
use crate::mapping::Mapping;
use crate::trace::{MatchTrace, NOOP_TRACE};
use crate::traversal::{Descent, Lookahead, TraversalState};

use core::fmt::Debug;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Problem {
    /// Bijection on vertices with exact edge correspondence.
    Isomorphism,
    /// Injective mapping preserving pattern edges; the target may have extra edges
    /// (monomorphism, "edge-subgraph" matching).
    Subgraph,
    /// Injective mapping preserving edges and non-edges between mapped vertices.
    InducedSubgraph,
    /// Largest connected partial mapping under induced-subgraph constraints.
    Mcis,
    /// Connected partial mapping keeping the most common edges; each vertex keeps at least one.
    Mces,
}

impl Problem {
    /// Maximum common subgraph problems accept partial mappings as results.
    pub fn is_mcs(self) -> bool {
        matches!(self, Problem::Mcis | Problem::Mces)
    }

    /// Edges between mapped target vertices must also exist in the pattern.
    fn forbids_extra_edges(self) -> bool {
        matches!(
            self,
            Problem::Isomorphism | Problem::InducedSubgraph | Problem::Mcis
        )
    }

    /// A pattern vertex whose partners are exhausted at a search node can be dropped from the
    /// rest of that node's subtree. Holds when a pair that is infeasible now stays infeasible
    /// after more vertices are mapped; an MCES vertex may first share an edge with a later one.
    pub fn excludes_exhausted_vertices(self) -> bool {
        !matches!(self, Problem::Mces)
    }

    fn lookahead(self) -> Lookahead {
        match self {
            Problem::Subgraph | Problem::Mces => Lookahead::Loose,
            _ => Lookahead::Strict,
        }
    }
}

/// The fixed inputs of one search: both graphs, the problem and the compatibility predicates.
pub struct MatchContext<'a, NP, EP, N, E> {
    pub pattern: &'a Graph<NP, EP>,
    pub target: &'a Graph<N, E>,
    pub problem: Problem,
    node_eq: &'a dyn Fn(&NP, &N) -> bool,
    edge_eq: &'a dyn Fn(&EP, &E) -> bool,
    trace: &'a dyn MatchTrace,
}

impl<'a, NP, EP, N, E> MatchContext<'a, NP, EP, N, E> {
    pub fn new(
        pattern: &'a Graph<NP, EP>,
        target: &'a Graph<N, E>,
        problem: Problem,
        node_eq: &'a dyn Fn(&NP, &N) -> bool,
        edge_eq: &'a dyn Fn(&EP, &E) -> bool,
        trace: Option<&'a dyn MatchTrace>,
    ) -> Self {
        Self {
            pattern,
            target,
            problem,
            node_eq,
            edge_eq,
            trace: trace.unwrap_or(&NOOP_TRACE),
        }
    }

    pub fn trace(&self) -> &'a dyn MatchTrace {
        self.trace
    }

    pub fn nodes_compatible(&self, u: NodeId, v: NodeId) -> bool {
        (self.node_eq)(self.pattern.node(u), self.target.node(v))
    }

    pub fn edges_compatible(&self, pattern_edge: EdgeId, target_edge: EdgeId) -> bool {
        (self.edge_eq)(self.pattern.edge(pattern_edge), self.target.edge(target_edge))
    }

    /// The target edge corresponding to a pattern edge leaving (`Outgoing`) or entering
    /// (`Incoming`) the candidate `v`, whose other endpoint is `other`.
    fn target_edge(&self, v: NodeId, other: NodeId, dir: Direction) -> Option<EdgeId> {
        match dir {
            Direction::Outgoing => self.target.find_edge(v, other),
            Direction::Incoming => self.target.find_edge(other, v),
        }
    }

    fn pattern_edge(&self, u: NodeId, other: NodeId, dir: Direction) -> Option<EdgeId> {
        match dir {
            Direction::Outgoing => self.pattern.find_edge(u, other),
            Direction::Incoming => self.pattern.find_edge(other, u),
        }
    }
}

impl<NP, EP, N, E> Clone for MatchContext<'_, NP, EP, N, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<NP, EP, N, E> Copy for MatchContext<'_, NP, EP, N, E> {}

/// Undo record for one [`MatcherState::descend`], consumed by [`MatcherState::backtrack`].
#[must_use = "a step must be handed back to `MatcherState::backtrack`"]
#[derive(Debug)]
pub struct Step {
    pattern: Descent,
    target: Descent,
    // common edges the pair added (maximum common edge subgraph only)
    gained: usize,
}

impl Step {
    pub fn pattern_node(&self) -> NodeId {
        self.pattern.vertex()
    }

    pub fn target_node(&self) -> NodeId {
        self.target.vertex()
    }
}

pub struct MatcherState<'a, NP, EP, N, E> {
    ctx: MatchContext<'a, NP, EP, N, E>,
    pattern: TraversalState,
    target: TraversalState,
    mapping: Mapping,
    // Pattern vertices already tried at an enclosing search node (maximum common subgraph only).
    excluded: Vec<bool>,
    // Pairs already tried at an enclosing search node, when whole vertices cannot be excluded.
    excluded_pairs: HashSet<(NodeId, NodeId)>,
    // Pattern edges between mapped vertices whose image is a compatible target edge.
    matched_edges: usize,
}

impl<'a, NP, EP, N, E> MatcherState<'a, NP, EP, N, E> {
    /// The root state: nothing mapped.
    pub fn new(ctx: MatchContext<'a, NP, EP, N, E>) -> Self {
        Self {
            pattern: TraversalState::new(ctx.pattern),
            target: TraversalState::new(ctx.target),
            mapping: Mapping::new(ctx.pattern.node_count(), ctx.target.node_count()),
            excluded: vec![false; ctx.pattern.node_count()],
            excluded_pairs: HashSet::new(),
            matched_edges: 0,
            ctx,
        }
    }

    pub fn context(&self) -> &MatchContext<'a, NP, EP, N, E> {
        &self.ctx
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub fn pattern_state(&self) -> &TraversalState {
        &self.pattern
    }

    pub fn target_state(&self) -> &TraversalState {
        &self.target
    }

    pub fn depth(&self) -> usize {
        self.mapping.len()
    }

    /// What a maximum common subgraph search maximises: common edges for
    /// [`Problem::Mces`], mapped vertices otherwise.
    pub fn score(&self) -> usize {
        match self.ctx.problem {
            Problem::Mces => self.matched_edges,
            _ => self.mapping.len(),
        }
    }

    /// Every pattern vertex is mapped.
    pub fn is_goal(&self) -> bool {
        self.mapping.len() == self.ctx.pattern.node_count()
    }

    /// No extension of this state can reach a goal. Always `false` for maximum common subgraph
    /// problems, which prune with [`MatcherState::upper_bound`] instead.
    pub fn is_dead(&self) -> bool {
        let (pattern, target) = (self.ctx.pattern, self.ctx.target);
        if pattern.kind() != target.kind() {
            return true;
        }
        let directions = pattern.kind().directions();
        match self.ctx.problem {
            Problem::Isomorphism => {
                pattern.node_count() != target.node_count()
                    || pattern.edge_count() != target.edge_count()
                    || directions
                        .iter()
                        .any(|&d| self.pattern.terminal_len(d) != self.target.terminal_len(d))
            }
            Problem::Subgraph | Problem::InducedSubgraph => {
                pattern.node_count() > target.node_count()
                    || pattern.edge_count() > target.edge_count()
                    || directions
                        .iter()
                        .any(|&d| self.pattern.terminal_len(d) > self.target.terminal_len(d))
            }
            Problem::Mcis | Problem::Mces => false,
        }
    }

    /// Candidate pairs in VF2 order, for exact problems.
    pub fn candidates(&self) -> CandidatePairs {
        CandidatePairs::new(&self.pattern)
    }

    /// Advance a maximum common subgraph enumeration to the next pattern vertex.
    pub fn next_group(&self, groups: &mut NestedCandidates) -> Option<TargetGroup> {
        groups.next_group(&self.pattern, &self.excluded)
    }

    /// Can `u ↦ v` be added to the current mapping? Neither vertex may be mapped already.
    pub fn is_feasible(&self, u: NodeId, v: NodeId) -> bool {
        debug_assert!(!self.mapping.contains_pattern(u) && !self.mapping.contains_target(v));
        if !self.ctx.nodes_compatible(u, v) {
            return false;
        }
        match self.ctx.problem {
            Problem::Mces => self.shares_mapped_edge(u, v),
            Problem::Mcis => self.edges_agree(u, v),
            _ => self.edges_agree(u, v) && self.lookahead_feasible(u, v),
        }
    }

    /// Every pattern edge between `u` and a mapped vertex has a compatible image at `v`, and,
    /// when the problem forbids extra edges, every target edge between `v` and a mapped vertex
    /// has a preimage at `u`. Self-loops are treated the same way.
    fn edges_agree(&self, u: NodeId, v: NodeId) -> bool {
        let ctx = &self.ctx;
        let strict = ctx.problem.forbids_extra_edges();

        match (ctx.pattern.find_edge(u, u), ctx.target.find_edge(v, v)) {
            (Some(pe), Some(te)) if !ctx.edges_compatible(pe, te) => return false,
            (Some(_), None) => return false,
            (None, Some(_)) if strict => return false,
            _ => {}
        }

        for &dir in ctx.pattern.kind().directions() {
            for (w, pe) in ctx.pattern.neighbors_directed(u, dir) {
                let Some(image) = self.mapping.target(w) else {
                    continue;
                };
                match ctx.target_edge(v, image, dir) {
                    Some(te) if ctx.edges_compatible(pe, te) => {}
                    _ => return false,
                }
            }

            if strict {
                for (x, _) in ctx.target.neighbors_directed(v, dir) {
                    let Some(preimage) = self.mapping.pattern(x) else {
                        continue;
                    };
                    if ctx.pattern_edge(u, preimage, dir).is_none() {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// While anything is mapped, `u ↦ v` must preserve at least one edge to the mapped core.
    fn shares_mapped_edge(&self, u: NodeId, v: NodeId) -> bool {
        if self.mapping.is_empty() {
            return true;
        }
        let ctx = &self.ctx;
        ctx.pattern.kind().directions().iter().any(|&dir| {
            ctx.pattern.neighbors_directed(u, dir).any(|(w, pe)| {
                self.mapping
                    .target(w)
                    .and_then(|image| ctx.target_edge(v, image, dir))
                    .is_some_and(|te| ctx.edges_compatible(pe, te))
            })
        })
    }

    /// Pattern edges from `u` to mapped vertices (and a self-loop at `u`) that `u ↦ v` would
    /// carry onto compatible target edges.
    fn kept_edges(&self, u: NodeId, v: NodeId) -> usize {
        let ctx = &self.ctx;
        let looped = match (ctx.pattern.find_edge(u, u), ctx.target.find_edge(v, v)) {
            (Some(pe), Some(te)) => usize::from(ctx.edges_compatible(pe, te)),
            _ => 0,
        };
        let to_core: usize = ctx
            .pattern
            .kind()
            .directions()
            .iter()
            .map(|&dir| {
                ctx.pattern
                    .neighbors_directed(u, dir)
                    .filter(|&(w, pe)| {
                        w != u
                            && self
                                .mapping
                                .target(w)
                                .and_then(|image| ctx.target_edge(v, image, dir))
                                .is_some_and(|te| ctx.edges_compatible(pe, te))
                    })
                    .count()
            })
            .sum();
        looped + to_core
    }

    /// Compare the terminal-set profiles of the unmapped neighbours of `u` and `v`: equal for
    /// isomorphism, pattern at most target otherwise.
    fn lookahead_feasible(&self, u: NodeId, v: NodeId) -> bool {
        let ctx = &self.ctx;
        let lookahead = ctx.problem.lookahead();
        ctx.pattern.kind().directions().iter().all(|&dir| {
            let p = self.pattern.profile(ctx.pattern, u, dir, lookahead);
            let t = self.target.profile(ctx.target, v, dir, lookahead);
            match ctx.problem {
                Problem::Isomorphism => p == t,
                _ => p.fits_within(&t),
            }
        })
    }

    /// Extend the mapping with `u ↦ v`.
    pub fn descend(&mut self, u: NodeId, v: NodeId) -> Step {
        let gained = match self.ctx.problem {
            Problem::Mces => self.kept_edges(u, v),
            _ => 0,
        };
        let pattern = self.pattern.descend(self.ctx.pattern, u);
        let target = self.target.descend(self.ctx.target, v);
        self.mapping.insert(u, v);
        self.matched_edges += gained;
        Step {
            pattern,
            target,
            gained,
        }
    }

    /// Revert the most recent [`MatcherState::descend`].
    pub fn backtrack(&mut self, step: Step) {
        let removed = self.mapping.remove(step.pattern.vertex());
        debug_assert_eq!(removed, Some(step.target.vertex()));
        self.matched_edges -= step.gained;
        self.target.backtrack(step.target);
        self.pattern.backtrack(step.pattern);
    }

    pub fn exclude(&mut self, u: NodeId) {
        self.excluded[u.0] = true;
    }

    pub fn include(&mut self, u: NodeId) {
        self.excluded[u.0] = false;
    }

    pub fn is_excluded(&self, u: NodeId) -> bool {
        self.excluded[u.0]
    }

    pub fn exclude_pair(&mut self, u: NodeId, v: NodeId) {
        self.excluded_pairs.insert((u, v));
    }

    pub fn include_pair(&mut self, u: NodeId, v: NodeId) {
        self.excluded_pairs.remove(&(u, v));
    }

    pub fn is_pair_excluded(&self, u: NodeId, v: NodeId) -> bool {
        self.excluded_pairs.contains(&(u, v))
    }

    /// Optimistic [`MatcherState::score`] of the best mapping reachable from here.
    ///
    /// For [`Problem::Mces`]: the common edges so far plus every edge with an unmapped endpoint,
    /// counted on whichever graph has fewer. Otherwise: the mapped pairs plus every unmapped,
    /// non-excluded pattern vertex that is compatible with some unmapped target vertex.
    pub fn upper_bound(&self) -> usize {
        let ctx = &self.ctx;
        if ctx.problem == Problem::Mces {
            let open = open_edges(ctx.pattern, &self.pattern)
                .min(open_edges(ctx.target, &self.target));
            return self.matched_edges + open;
        }
        let open = ctx
            .pattern
            .node_ids()
            .filter(|&u| !self.pattern.is_mapped(u) && !self.excluded[u.0])
            .filter(|&u| {
                ctx.target
                    .node_ids()
                    .any(|v| !self.target.is_mapped(v) && ctx.nodes_compatible(u, v))
            })
            .count();
        self.mapping.len() + open.min(self.target.unmapped_len())
    }
}

/// Edges of `graph` with at least one endpoint still unmapped in `state`.
fn open_edges<N, E>(graph: &Graph<N, E>, state: &TraversalState) -> usize {
    graph
        .edge_ids()
        .filter(|&e| {
            let (s, t) = graph.endpoints(e);
            !state.is_mapped(s) || !state.is_mapped(t)
        })
        .count()
}

impl<NP, EP, N, E> Debug for MatcherState<'_, NP, EP, N, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatcherState")
            .field("problem", &self.ctx.problem)
            .field("mapping", &self.mapping)
            .field("matched_edges", &self.matched_edges)
            .field("pattern", &self.pattern)
            .field("target", &self.target)
            .finish()
    }
}
