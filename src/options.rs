//! Configuration for a single search.
use crate::trace::MatchTrace;

/// Knobs shared by every matcher.
///
/// - `max_matches`: stop after this many mappings (`None` = enumerate all). For maximum common
///   subgraph searches it caps how many equally good mappings are kept instead; those searches
///   never stop early.
/// - `call_limit`: give up after this many candidate pairs have been tried. `None` (the
///   default) leaves the search unbounded; a search cut short is reported as exhausted.
/// - `trace`: receives [`crate::trace::MatchEvent`]s while the search runs.
#[derive(Clone, Copy, Default)]
pub struct MatchOptions<'a> {
    pub max_matches: Option<usize>,
    pub call_limit: Option<usize>,
    pub trace: Option<&'a dyn MatchTrace>,
}

impl<'a> MatchOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: only a match bound.
    pub fn first(max_matches: Option<usize>) -> Self {
        Self {
            max_matches,
            ..Self::default()
        }
    }

    pub fn with_max_matches(self, max_matches: Option<usize>) -> Self {
        Self {
            max_matches,
            ..self
        }
    }

    pub fn with_call_limit(self, call_limit: Option<usize>) -> Self {
        Self { call_limit, ..self }
    }

    pub fn with_trace(self, trace: &'a dyn MatchTrace) -> Self {
        Self {
            trace: Some(trace),
            ..self
        }
    }
}

impl std::fmt::Debug for MatchOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchOptions")
            .field("max_matches", &self.max_matches)
            .field("call_limit", &self.call_limit)
            .field("trace", &self.trace.is_some())
            .finish()
    }
}
