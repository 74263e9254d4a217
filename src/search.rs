//! Recursive depth-first drivers over a [`MatcherState`].
//!
//! Both drivers return [`ControlFlow`]: `Break` comes from the visitor asking to stop or from an
//! exhausted [`Budget`], and is propagated straight up the call chain. Every descent is
//! backtracked before its frame returns, whichever way the frame ends.
use crate::candidates::NestedCandidates;
use crate::graph::NodeId;
use crate::state::MatcherState;
use crate::trace::{MatchEvent, MatchTrace};
use crate::visitor::Visitor;

use std::ops::ControlFlow;

use tracing::{trace, warn};

/// Counts candidate pairs tried against an optional limit, and numbers search frames.
#[derive(Debug, Clone, Default)]
pub struct Budget {
    calls: usize,
    limit: Option<usize>,
    exhausted: bool,
    next_frame_id: usize,
}

impl Budget {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Candidate pairs tried so far.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Whether the limit cut the search short.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn try_call(&mut self, trace: &dyn MatchTrace, depth: usize) -> ControlFlow<()> {
        if self.limit.is_some_and(|limit| self.calls >= limit) {
            if !self.exhausted {
                warn!(calls = self.calls, "call limit reached, stopping search");
                trace.on_event(MatchEvent::Prune {
                    reason: "call_limit",
                    depth,
                });
            }
            self.exhausted = true;
            return ControlFlow::Break(());
        }
        self.calls += 1;
        ControlFlow::Continue(())
    }

    fn enter_frame(&mut self, trace: &dyn MatchTrace, depth: usize) -> usize {
        let frame_id = self.next_frame_id;
        self.next_frame_id += 1;
        trace.on_event(MatchEvent::EnterFrame { depth, frame_id });
        frame_id
    }

    fn exit_frame(&self, trace: &dyn MatchTrace, depth: usize, frame_id: usize) {
        trace.on_event(MatchEvent::ExitFrame { depth, frame_id });
    }
}

/// The score of the best common subgraph found so far, shared by the whole search tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct McsBound {
    best: usize,
}

impl McsBound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn best(&self) -> usize {
        self.best
    }
}

/// Enumerate every goal state below `state` for the exact problems (isomorphism, subgraph,
/// induced subgraph), handing each goal mapping to `visitor`.
pub fn search<NP, EP, N, E, V>(
    state: &mut MatcherState<'_, NP, EP, N, E>,
    visitor: &mut V,
    budget: &mut Budget,
) -> ControlFlow<()>
where
    V: Visitor + ?Sized,
{
    let tracer = state.context().trace();
    let depth = state.depth();
    let frame_id = budget.enter_frame(tracer, depth);

    let flow = if state.is_dead() {
        tracer.on_event(MatchEvent::Prune {
            reason: "dead_state",
            depth,
        });
        ControlFlow::Continue(())
    } else if state.is_goal() {
        tracer.on_event(MatchEvent::Solution { size: depth });
        visitor.visit(state.mapping())
    } else {
        extend(state, visitor, budget)
    };

    budget.exit_frame(tracer, depth, frame_id);
    flow
}

fn extend<NP, EP, N, E, V>(
    state: &mut MatcherState<'_, NP, EP, N, E>,
    visitor: &mut V,
    budget: &mut Budget,
) -> ControlFlow<()>
where
    V: Visitor + ?Sized,
{
    let tracer = state.context().trace();
    let depth = state.depth();
    let mut pairs = state.candidates();
    let Some(pattern_node) = pairs.pattern_node() else {
        return ControlFlow::Continue(());
    };
    tracer.on_event(MatchEvent::Decision {
        pattern_node,
        depth,
    });

    while let Some((u, v)) = pairs.next(state.target_state()) {
        budget.try_call(tracer, depth)?;
        if !state.is_feasible(u, v) {
            tracer.on_event(MatchEvent::Prune {
                reason: "infeasible",
                depth,
            });
            continue;
        }
        tracer.on_event(MatchEvent::Branch {
            pattern_node: u,
            target_node: v,
            depth,
        });

        let step = state.descend(u, v);
        let flow = search(state, visitor, budget);
        state.backtrack(step);
        flow?;
    }
    ControlFlow::Continue(())
}

/// Exclusions made at one search node, lifted again when the node returns.
#[derive(Debug, Default)]
struct Exclusions {
    vertices: Vec<NodeId>,
    pairs: Vec<(NodeId, NodeId)>,
}

impl Exclusions {
    fn lift<NP, EP, N, E>(self, state: &mut MatcherState<'_, NP, EP, N, E>) {
        for u in self.vertices {
            state.include(u);
        }
        for (u, v) in self.pairs {
            state.include_pair(u, v);
        }
    }
}

/// Explore every connected partial mapping below `state` whose score can still reach `bound`,
/// reporting each one scoring at least the best seen so far (see [`MatcherState::score`]).
///
/// Each mapping is reached at most once. When
/// [`crate::state::Problem::excludes_exhausted_vertices`] holds, a pattern vertex is excluded
/// from the rest of this subtree once all of its partners have been tried; otherwise each
/// explored pair is excluded on its own. The exclusions are lifted before returning.
pub fn search_mcs<NP, EP, N, E, V>(
    state: &mut MatcherState<'_, NP, EP, N, E>,
    visitor: &mut V,
    budget: &mut Budget,
    bound: &mut McsBound,
) -> ControlFlow<()>
where
    V: Visitor + ?Sized,
{
    let tracer = state.context().trace();
    let depth = state.depth();
    let frame_id = budget.enter_frame(tracer, depth);

    let flow = if state.upper_bound() < bound.best {
        tracer.on_event(MatchEvent::Prune {
            reason: "bound",
            depth,
        });
        ControlFlow::Continue(())
    } else {
        let mut exclusions = Exclusions::default();
        let flow = extend_mcs(state, visitor, budget, bound, &mut exclusions);
        exclusions.lift(state);
        flow
    };

    budget.exit_frame(tracer, depth, frame_id);
    flow
}

fn extend_mcs<NP, EP, N, E, V>(
    state: &mut MatcherState<'_, NP, EP, N, E>,
    visitor: &mut V,
    budget: &mut Budget,
    bound: &mut McsBound,
    exclusions: &mut Exclusions,
) -> ControlFlow<()>
where
    V: Visitor + ?Sized,
{
    let tracer = state.context().trace();
    let depth = state.depth();
    let whole_vertices = state.context().problem.excludes_exhausted_vertices();
    let mut groups = NestedCandidates::new();

    while let Some(mut group) = state.next_group(&mut groups) {
        let pattern_node = group.pattern_node();
        tracer.on_event(MatchEvent::Decision {
            pattern_node,
            depth,
        });

        while let Some((u, v)) = group.next(state.target_state()) {
            if state.is_pair_excluded(u, v) {
                continue;
            }
            budget.try_call(tracer, depth)?;
            if !state.is_feasible(u, v) {
                tracer.on_event(MatchEvent::Prune {
                    reason: "infeasible",
                    depth,
                });
                continue;
            }
            tracer.on_event(MatchEvent::Branch {
                pattern_node: u,
                target_node: v,
                depth,
            });

            let step = state.descend(u, v);
            let flow = match report_mcs(state, visitor, bound) {
                ControlFlow::Continue(()) => search_mcs(state, visitor, budget, bound),
                stop => stop,
            };
            state.backtrack(step);
            flow?;

            if !whole_vertices {
                state.exclude_pair(u, v);
                exclusions.pairs.push((u, v));
            }
        }

        if whole_vertices {
            state.exclude(pattern_node);
            exclusions.vertices.push(pattern_node);
        }
        if state.upper_bound() < bound.best {
            tracer.on_event(MatchEvent::Prune {
                reason: "bound",
                depth,
            });
            break;
        }
    }
    ControlFlow::Continue(())
}

fn report_mcs<NP, EP, N, E, V>(
    state: &MatcherState<'_, NP, EP, N, E>,
    visitor: &mut V,
    bound: &mut McsBound,
) -> ControlFlow<()>
where
    V: Visitor + ?Sized,
{
    let score = state.score();
    if score < bound.best {
        return ControlFlow::Continue(());
    }
    if score > bound.best {
        trace!(score, size = state.depth(), "common subgraph grew");
        bound.best = score;
    }
    state.context().trace().on_event(MatchEvent::Solution {
        size: state.depth(),
    });
    visitor.visit_scored(state.mapping(), score)
}
