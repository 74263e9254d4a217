//! Entry points: the [`Matcher`] builder and convenience methods on [`Graph`].
use crate::graph::Graph;
use crate::mapping::Mapping;
use crate::options::MatchOptions;
use crate::search::{search, search_mcs, Budget, McsBound};
use crate::state::{MatchContext, MatcherState, Problem};
use crate::visitor::{FirstN, FirstNMcs};

use tracing::{debug, warn};

/// Outcome of one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    /// Mappings from pattern vertices to target vertices, in discovery order.
    pub mappings: Vec<Mapping>,
    /// Candidate pairs tried.
    pub calls: usize,
    /// The call limit stopped the search before it finished.
    pub exhausted: bool,
}

fn any_pair<A, B>(_: &A, _: &B) -> bool {
    true
}

type Always<A, B> = fn(&A, &B) -> bool;

/// Configures and runs a single search of `pattern` in `target`.
///
/// ```
/// use graph_matching::prelude::*;
///
/// let cycle = Graph::from_edges(
///     GraphKind::Undirected,
///     vec![(); 4],
///     [(0, 1, ()), (1, 2, ()), (2, 3, ()), (3, 0, ())],
/// )
/// .unwrap();
/// let path =
///     Graph::from_edges(GraphKind::Undirected, vec![(); 3], [(0, 1, ()), (1, 2, ())]).unwrap();
///
/// let report = Matcher::new(&cycle, &path, Problem::Subgraph)
///     .with_options(MatchOptions::first(Some(3)))
///     .run();
/// assert_eq!(report.mappings.len(), 3);
/// ```
pub struct Matcher<'a, NP, EP, N, E, FN, FE> {
    target: &'a Graph<N, E>,
    pattern: &'a Graph<NP, EP>,
    problem: Problem,
    node_eq: FN,
    edge_eq: FE,
    options: MatchOptions<'a>,
}

impl<'a, NP, EP, N, E> Matcher<'a, NP, EP, N, E, Always<NP, N>, Always<EP, E>> {
    /// A matcher that ignores labels: every vertex pair and every edge pair is compatible.
    pub fn new(target: &'a Graph<N, E>, pattern: &'a Graph<NP, EP>, problem: Problem) -> Self {
        Self {
            target,
            pattern,
            problem,
            node_eq: any_pair::<NP, N>,
            edge_eq: any_pair::<EP, E>,
            options: MatchOptions::default(),
        }
    }
}

impl<'a, NP, EP, N, E, FN, FE> Matcher<'a, NP, EP, N, E, FN, FE>
where
    FN: Fn(&NP, &N) -> bool,
    FE: Fn(&EP, &E) -> bool,
{
    /// Only pair a pattern vertex with a target vertex when `node_eq` holds for their labels.
    pub fn with_node_matching<G>(self, node_eq: G) -> Matcher<'a, NP, EP, N, E, G, FE>
    where
        G: Fn(&NP, &N) -> bool,
    {
        Matcher {
            target: self.target,
            pattern: self.pattern,
            problem: self.problem,
            node_eq,
            edge_eq: self.edge_eq,
            options: self.options,
        }
    }

    /// Only map a pattern edge onto a target edge when `edge_eq` holds for their labels.
    pub fn with_edge_matching<G>(self, edge_eq: G) -> Matcher<'a, NP, EP, N, E, FN, G>
    where
        G: Fn(&EP, &E) -> bool,
    {
        Matcher {
            target: self.target,
            pattern: self.pattern,
            problem: self.problem,
            node_eq: self.node_eq,
            edge_eq,
            options: self.options,
        }
    }

    pub fn with_options(self, options: MatchOptions<'a>) -> Self {
        Self { options, ..self }
    }

    pub fn problem(&self) -> Problem {
        self.problem
    }

    /// Run the search to completion, or until `max_matches` or the call limit stops it.
    ///
    /// Exact problems return up to `max_matches` complete mappings. Maximum common subgraph
    /// problems return the best connected partial mappings, at most `max_matches` of them: the
    /// most vertices for [`Problem::Mcis`], the most common edges for [`Problem::Mces`].
    pub fn run(&self) -> MatchReport {
        let (pattern, target) = (self.pattern, self.target);
        debug!(
            problem = ?self.problem,
            pattern_nodes = pattern.node_count(),
            pattern_edges = pattern.edge_count(),
            target_nodes = target.node_count(),
            target_edges = target.edge_count(),
            options = ?self.options,
            "starting search"
        );

        if pattern.kind() != target.kind() {
            warn!(
                pattern = ?pattern.kind(),
                target = ?target.kind(),
                "pattern and target kinds differ, nothing can match"
            );
            return MatchReport::default();
        }

        let ctx = MatchContext::new(
            pattern,
            target,
            self.problem,
            &self.node_eq,
            &self.edge_eq,
            self.options.trace,
        );
        let mut state = MatcherState::new(ctx);
        let mut budget = Budget::new(self.options.call_limit);

        let mappings = if self.problem.is_mcs() {
            let mut visitor = FirstNMcs::new(self.options.max_matches);
            let mut bound = McsBound::new();
            let _ = search_mcs(&mut state, &mut visitor, &mut budget, &mut bound);
            visitor.into_mappings()
        } else {
            let mut visitor = FirstN::new(self.options.max_matches);
            let _ = search(&mut state, &mut visitor, &mut budget);
            visitor.into_mappings()
        };

        debug!(
            problem = ?self.problem,
            mappings = mappings.len(),
            calls = budget.calls(),
            exhausted = budget.is_exhausted(),
            "search finished"
        );
        MatchReport {
            mappings,
            calls: budget.calls(),
            exhausted: budget.is_exhausted(),
        }
    }
}

impl<N, E> Graph<N, E> {
    fn run_by<NP, EP, FN, FE>(
        &self,
        pattern: &Graph<NP, EP>,
        problem: Problem,
        node_eq: FN,
        edge_eq: FE,
        options: MatchOptions<'_>,
    ) -> Vec<Mapping>
    where
        FN: Fn(&NP, &N) -> bool,
        FE: Fn(&EP, &E) -> bool,
    {
        Matcher::new(self, pattern, problem)
            .with_node_matching(node_eq)
            .with_edge_matching(edge_eq)
            .with_options(options)
            .run()
            .mappings
    }

    /// Isomorphisms from `pattern` onto `self`, ignoring labels. `max_matches: None` finds all.
    pub fn match_graph<NP, EP>(
        &self,
        pattern: &Graph<NP, EP>,
        max_matches: Option<usize>,
    ) -> Vec<Mapping> {
        self.match_graph_by(
            pattern,
            any_pair::<NP, N>,
            any_pair::<EP, E>,
            MatchOptions::first(max_matches),
        )
    }

    pub fn match_graph_by<NP, EP, FN, FE>(
        &self,
        pattern: &Graph<NP, EP>,
        node_eq: FN,
        edge_eq: FE,
        options: MatchOptions<'_>,
    ) -> Vec<Mapping>
    where
        FN: Fn(&NP, &N) -> bool,
        FE: Fn(&EP, &E) -> bool,
    {
        self.run_by(pattern, Problem::Isomorphism, node_eq, edge_eq, options)
    }

    /// Monomorphisms of `pattern` into `self`: every pattern edge must be present, extra target
    /// edges between mapped vertices are allowed.
    pub fn match_subgraph<NP, EP>(
        &self,
        pattern: &Graph<NP, EP>,
        max_matches: Option<usize>,
    ) -> Vec<Mapping> {
        self.match_subgraph_by(
            pattern,
            any_pair::<NP, N>,
            any_pair::<EP, E>,
            MatchOptions::first(max_matches),
        )
    }

    pub fn match_subgraph_by<NP, EP, FN, FE>(
        &self,
        pattern: &Graph<NP, EP>,
        node_eq: FN,
        edge_eq: FE,
        options: MatchOptions<'_>,
    ) -> Vec<Mapping>
    where
        FN: Fn(&NP, &N) -> bool,
        FE: Fn(&EP, &E) -> bool,
    {
        self.run_by(pattern, Problem::Subgraph, node_eq, edge_eq, options)
    }

    /// Occurrences of `pattern` as an induced subgraph of `self`.
    pub fn match_induced_subgraph<NP, EP>(
        &self,
        pattern: &Graph<NP, EP>,
        max_matches: Option<usize>,
    ) -> Vec<Mapping> {
        self.match_induced_subgraph_by(
            pattern,
            any_pair::<NP, N>,
            any_pair::<EP, E>,
            MatchOptions::first(max_matches),
        )
    }

    pub fn match_induced_subgraph_by<NP, EP, FN, FE>(
        &self,
        pattern: &Graph<NP, EP>,
        node_eq: FN,
        edge_eq: FE,
        options: MatchOptions<'_>,
    ) -> Vec<Mapping>
    where
        FN: Fn(&NP, &N) -> bool,
        FE: Fn(&EP, &E) -> bool,
    {
        self.run_by(pattern, Problem::InducedSubgraph, node_eq, edge_eq, options)
    }

    /// Maximum connected common induced subgraphs of `pattern` and `self`, as partial mappings.
    /// `max_matches` caps how many equally large mappings are kept.
    pub fn find_mcis<NP, EP>(
        &self,
        pattern: &Graph<NP, EP>,
        max_matches: Option<usize>,
    ) -> Vec<Mapping> {
        self.find_mcis_by(
            pattern,
            any_pair::<NP, N>,
            any_pair::<EP, E>,
            MatchOptions::first(max_matches),
        )
    }

    pub fn find_mcis_by<NP, EP, FN, FE>(
        &self,
        pattern: &Graph<NP, EP>,
        node_eq: FN,
        edge_eq: FE,
        options: MatchOptions<'_>,
    ) -> Vec<Mapping>
    where
        FN: Fn(&NP, &N) -> bool,
        FE: Fn(&EP, &E) -> bool,
    {
        self.run_by(pattern, Problem::Mcis, node_eq, edge_eq, options)
    }

    /// Maximum connected common edge subgraphs of `pattern` and `self`: the mappings carrying
    /// the most pattern edges onto target edges, every mapped vertex keeping at least one of
    /// them. Empty when the graphs share no edge.
    pub fn find_mces<NP, EP>(
        &self,
        pattern: &Graph<NP, EP>,
        max_matches: Option<usize>,
    ) -> Vec<Mapping> {
        self.find_mces_by(
            pattern,
            any_pair::<NP, N>,
            any_pair::<EP, E>,
            MatchOptions::first(max_matches),
        )
    }

    pub fn find_mces_by<NP, EP, FN, FE>(
        &self,
        pattern: &Graph<NP, EP>,
        node_eq: FN,
        edge_eq: FE,
        options: MatchOptions<'_>,
    ) -> Vec<Mapping>
    where
        FN: Fn(&NP, &N) -> bool,
        FE: Fn(&EP, &E) -> bool,
    {
        self.run_by(pattern, Problem::Mces, node_eq, edge_eq, options)
    }
}
