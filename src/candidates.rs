//! Candidate `(pattern, target)` pairs for extending a partial mapping.
//!
//! The enumerators are cursors rather than borrowing iterators: the search descends into a
//! child state between two calls to `next`, so they take the traversal states as arguments on
//! every step instead of holding on to them.
use crate::graph::{Direction, NodeId};
use crate::traversal::TraversalState;

/// Which target vertices are eligible partners for the chosen pattern vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalClass {
    /// Members of the out terminal set.
    Out,
    /// Members of the in terminal set.
    In,
    /// Every unmapped vertex; used when the pattern has no terminal vertex left.
    Unmapped,
}

impl TerminalClass {
    fn admits(self, state: &TraversalState, v: NodeId) -> bool {
        match self {
            TerminalClass::Out => state.in_terminal(v, Direction::Outgoing),
            TerminalClass::In => state.in_terminal(v, Direction::Incoming),
            TerminalClass::Unmapped => !state.is_mapped(v),
        }
    }
}

/// VF2 candidate ordering for exact matching.
///
/// The pattern vertex is fixed up front: the first vertex of the pattern's out terminal set,
/// else the first of its in terminal set, else the first unmapped vertex. It is then paired
/// with every target vertex of the same class, in increasing order.
#[derive(Debug, Clone)]
pub struct CandidatePairs {
    pattern_node: Option<NodeId>,
    class: TerminalClass,
    cursor: usize,
}

impl CandidatePairs {
    pub fn new(pattern: &TraversalState) -> Self {
        let (pattern_node, class) = if let Some(u) = pattern.first_terminal(Direction::Outgoing) {
            (Some(u), TerminalClass::Out)
        } else if let Some(u) = pattern.first_terminal(Direction::Incoming) {
            (Some(u), TerminalClass::In)
        } else {
            (pattern.first_unmapped(), TerminalClass::Unmapped)
        };
        Self {
            pattern_node,
            class,
            cursor: 0,
        }
    }

    /// The pattern vertex every pair extends, or `None` if the pattern is fully mapped.
    pub fn pattern_node(&self) -> Option<NodeId> {
        self.pattern_node
    }

    pub fn class(&self) -> TerminalClass {
        self.class
    }

    pub fn next(&mut self, target: &TraversalState) -> Option<(NodeId, NodeId)> {
        let u = self.pattern_node?;
        while self.cursor < target.node_count() {
            let v = NodeId(self.cursor);
            self.cursor += 1;
            if self.class.admits(target, v) {
                return Some((u, v));
            }
        }
        None
    }
}

/// Candidate pairs for maximum common subgraph search, grouped by pattern vertex.
///
/// Unlike [`CandidatePairs`] every eligible pattern vertex gets a turn, in increasing order:
/// any unmapped, non-excluded vertex in one of the pattern's terminal sets, or any unmapped,
/// non-excluded vertex at all while nothing is mapped yet. The driver excludes a pattern vertex
/// once its [`TargetGroup`] is exhausted.
#[derive(Debug, Clone)]
pub struct NestedCandidates {
    cursor: usize,
}

impl NestedCandidates {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    /// The next pattern vertex with the target vertices it may pair with.
    pub fn next_group(
        &mut self,
        pattern: &TraversalState,
        excluded: &[bool],
    ) -> Option<TargetGroup> {
        let seeding = pattern.depth() == 0;
        while self.cursor < pattern.node_count() {
            let u = NodeId(self.cursor);
            self.cursor += 1;
            if pattern.is_mapped(u) || excluded[u.0] {
                continue;
            }
            let phases: Vec<TerminalClass> = if seeding {
                vec![TerminalClass::Unmapped]
            } else {
                [
                    (Direction::Outgoing, TerminalClass::Out),
                    (Direction::Incoming, TerminalClass::In),
                ]
                .into_iter()
                .filter(|(dir, _)| pattern.in_terminal(u, *dir))
                .map(|(_, class)| class)
                .collect()
            };
            if !phases.is_empty() {
                return Some(TargetGroup {
                    pattern_node: u,
                    phases,
                    phase: 0,
                    cursor: 0,
                });
            }
        }
        None
    }
}

impl Default for NestedCandidates {
    fn default() -> Self {
        Self::new()
    }
}

/// Target partners of one pattern vertex: the sum of its out-terminal pairs followed by its
/// in-terminal pairs, without repeating a target vertex that is in both sets.
#[derive(Debug, Clone)]
pub struct TargetGroup {
    pattern_node: NodeId,
    phases: Vec<TerminalClass>,
    phase: usize,
    cursor: usize,
}

impl TargetGroup {
    pub fn pattern_node(&self) -> NodeId {
        self.pattern_node
    }

    pub fn next(&mut self, target: &TraversalState) -> Option<(NodeId, NodeId)> {
        while let Some(&class) = self.phases.get(self.phase) {
            while self.cursor < target.node_count() {
                let v = NodeId(self.cursor);
                self.cursor += 1;
                let seen = self.phases[..self.phase]
                    .iter()
                    .any(|earlier| earlier.admits(target, v));
                if class.admits(target, v) && !seen {
                    return Some((self.pattern_node, v));
                }
            }
            self.phase += 1;
            self.cursor = 0;
        }
        None
    }
}
