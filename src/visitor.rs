//! Result collection policies for the search drivers.
use crate::mapping::Mapping;

use std::collections::HashSet;
use std::ops::ControlFlow;

/// Receives every mapping a search reports. Returning [`ControlFlow::Break`] stops the search
/// immediately; the drivers still backtrack every open descent on the way out.
pub trait Visitor {
    fn visit(&mut self, mapping: &Mapping) -> ControlFlow<()>;

    /// A partial mapping from a maximum common subgraph search, with the score it reached.
    fn visit_scored(&mut self, mapping: &Mapping, _score: usize) -> ControlFlow<()> {
        self.visit(mapping)
    }
}

/// Collect complete mappings, stopping once `limit` have been found (`None`: collect all).
#[derive(Debug, Clone, Default)]
pub struct FirstN {
    limit: Option<usize>,
    mappings: Vec<Mapping>,
}

impl FirstN {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            limit,
            mappings: Vec::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.limit.is_some_and(|n| self.mappings.len() >= n)
    }

    pub fn mappings(&self) -> &[Mapping] {
        &self.mappings
    }

    pub fn into_mappings(self) -> Vec<Mapping> {
        self.mappings
    }
}

impl Visitor for FirstN {
    fn visit(&mut self, mapping: &Mapping) -> ControlFlow<()> {
        if self.is_full() {
            return ControlFlow::Break(());
        }
        self.mappings.push(mapping.clone());
        if self.is_full() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// Keep only the best-scoring mappings seen so far. Plain [`Visitor::visit`] scores a mapping
/// by its number of pairs.
///
/// A strictly higher score discards everything collected before it. Mappings of the current
/// best score are kept, without duplicates, until `cap` of them have been collected; later ones
/// are dropped. Never stops the search: maximality is only known once the whole tree has been
/// explored.
#[derive(Debug, Clone, Default)]
pub struct FirstNMcs {
    cap: Option<usize>,
    best: usize,
    mappings: Vec<Mapping>,
    seen: HashSet<Mapping>,
}

impl FirstNMcs {
    pub fn new(cap: Option<usize>) -> Self {
        Self {
            cap,
            ..Self::default()
        }
    }

    /// Highest score reported so far.
    pub fn best_size(&self) -> usize {
        self.best
    }

    pub fn mappings(&self) -> &[Mapping] {
        &self.mappings
    }

    pub fn into_mappings(self) -> Vec<Mapping> {
        self.mappings
    }

    fn accept(&mut self, mapping: &Mapping) {
        if self.cap.is_some_and(|n| self.mappings.len() >= n) {
            return;
        }
        if self.seen.insert(mapping.clone()) {
            self.mappings.push(mapping.clone());
        }
    }
}

impl Visitor for FirstNMcs {
    fn visit(&mut self, mapping: &Mapping) -> ControlFlow<()> {
        self.visit_scored(mapping, mapping.len())
    }

    fn visit_scored(&mut self, mapping: &Mapping, score: usize) -> ControlFlow<()> {
        if score > self.best {
            self.best = score;
            self.mappings.clear();
            self.seen.clear();
            self.accept(mapping);
        } else if score == self.best && score > 0 {
            self.accept(mapping);
        }
        ControlFlow::Continue(())
    }
}
