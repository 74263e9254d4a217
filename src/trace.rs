//! Hooks for observing a search as it runs.
use crate::graph::NodeId;

/// Receives [`MatchEvent`]s from the search drivers. All methods default to doing nothing.
pub trait MatchTrace {
    fn on_event(&self, _event: MatchEvent) {}
}

pub struct NoopTrace;

impl MatchTrace for NoopTrace {}

pub(crate) static NOOP_TRACE: NoopTrace = NoopTrace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent {
    EnterFrame {
        depth: usize,
        frame_id: usize,
    },
    /// A pattern vertex was chosen for extension at this depth.
    Decision {
        pattern_node: NodeId,
        depth: usize,
    },
    /// A feasible pair was accepted and the search descends into it.
    Branch {
        pattern_node: NodeId,
        target_node: NodeId,
        depth: usize,
    },
    Prune {
        reason: &'static str,
        depth: usize,
    },
    /// A mapping of `size` pairs was handed to the visitor.
    Solution {
        size: usize,
    },
    ExitFrame {
        depth: usize,
        frame_id: usize,
    },
}
