//! Print the search tree of a small subgraph match.
//!
//! Run with `RUST_LOG=debug` to also see the matcher's own log lines.
use graph_matching::prelude::*;

use std::cell::{Cell, RefCell};

struct PrintTrace {
    indent: Cell<usize>,
    // pairs on the path from the root to the current frame
    assignment: RefCell<Vec<(NodeId, NodeId)>>,
}

impl PrintTrace {
    fn new() -> Self {
        Self {
            indent: Cell::new(0),
            assignment: RefCell::new(Vec::new()),
        }
    }

    fn indent(&self) -> usize {
        self.indent.get() * 2
    }
}

impl MatchTrace for PrintTrace {
    fn on_event(&self, event: MatchEvent) {
        match event {
            MatchEvent::EnterFrame { frame_id, .. } => {
                println!("{:indent$}enter frame #{frame_id}", "", indent = self.indent());
                self.indent.set(self.indent.get() + 1);
            }
            MatchEvent::ExitFrame { frame_id, .. } => {
                self.indent.set(self.indent.get().saturating_sub(1));
                println!("{:indent$}exit frame #{frame_id}", "", indent = self.indent());
            }
            MatchEvent::Decision {
                pattern_node,
                depth,
            } => {
                println!(
                    "{:indent$}decision depth={depth} pattern_node={}",
                    "",
                    pattern_node.0,
                    indent = self.indent()
                );
            }
            MatchEvent::Branch {
                pattern_node,
                target_node,
                depth,
            } => {
                let mut assignment = self.assignment.borrow_mut();
                assignment.truncate(depth);
                assignment.push((pattern_node, target_node));
                println!(
                    "{:indent$}branch p{} -> t{}",
                    "",
                    pattern_node.0,
                    target_node.0,
                    indent = self.indent()
                );
            }
            MatchEvent::Prune { reason, .. } => {
                println!("{:indent$}prune {reason}", "", indent = self.indent());
            }
            MatchEvent::Solution { size } => {
                let assignment = self.assignment.borrow();
                let parts: Vec<String> = assignment
                    .iter()
                    .take(size)
                    .map(|(p, t)| format!("p{}->t{}", p.0, t.0))
                    .collect();
                println!(
                    "{:indent$}solution [{}]",
                    "",
                    parts.join(", "),
                    indent = self.indent()
                );
            }
        }
    }
}

fn main() -> Result<(), GraphError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // a labelled triangle with a pendant vertex
    let target = Graph::from_edges(
        GraphKind::Undirected,
        vec!['c', 'c', 'o', 'h'],
        [(0, 1, 1), (1, 2, 1), (2, 0, 2), (2, 3, 1)],
    )?;
    // the pattern c - c - o
    let pattern = Graph::from_edges(
        GraphKind::Undirected,
        vec!['c', 'c', 'o'],
        [(0, 1, 1), (1, 2, 1)],
    )?;

    let trace = PrintTrace::new();
    let report = Matcher::new(&target, &pattern, Problem::Subgraph)
        .with_node_matching(|p: &char, t: &char| p == t)
        .with_edge_matching(|p: &i32, t: &i32| p == t)
        .with_options(MatchOptions::new().with_trace(&trace))
        .run();

    println!(
        "{} mapping(s) after {} candidate pairs",
        report.mappings.len(),
        report.calls
    );
    Ok(())
}
