//! Uninformed and uniform-cost reachability search.
//!
//! The search keeps an explicit work list of trace nodes instead of
//! recursing, so breadth-first, depth-first and least-cost-first order only
//! differ in which frontier entry is popped next. Every popped state is
//! tested against the goal; states are expanded at most once. A state the
//! invariant rejects never enters the frontier, the initial state included.
//!
//! There is no timeout: a search runs until it finds a goal or exhausts the
//! reachable states. Callers that need a bound must build it into the
//! transition generator or the invariant.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::frontier::{Discipline, Frontier, FrontierEntry};
use crate::space::StateSpace;
use crate::trace::TraceArena;

/// A path of states, initial state first and goal state last.
pub type Trace<S> = Vec<S>;

/// Order in which an uninformed search pops its frontier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchOrder {
    /// Oldest first; the first trace found has the fewest transitions
    #[default]
    BreadthFirst,
    /// Newest first; usually a smaller frontier, no length guarantee
    DepthFirst,
}

impl SearchOrder {
    fn discipline(self) -> Discipline {
        match self {
            SearchOrder::BreadthFirst => Discipline::Fifo,
            SearchOrder::DepthFirst => Discipline::Lifo,
        }
    }
}

impl fmt::Display for SearchOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOrder::BreadthFirst => f.write_str("breadth-first"),
            SearchOrder::DepthFirst => f.write_str("depth-first"),
        }
    }
}

impl FromStr for SearchOrder {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "bfs" | "breadth-first" => Ok(SearchOrder::BreadthFirst),
            "dfs" | "depth-first" => Ok(SearchOrder::DepthFirst),
            _ => Err(SearchError::UnsupportedOrder(s.to_string())),
        }
    }
}

/// Which goal hits a search keeps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Collect {
    /// Stop at the first goal popped from the frontier
    #[default]
    FirstGoal,
    /// Drain the frontier, keeping the first trace to every distinct goal state
    DistinctGoals,
}

/// Counters describing one search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// States expanded (each at most once)
    pub expanded: usize,
    /// Successors produced by applying transitions
    pub generated: usize,
    /// Successors rejected by the invariant
    pub pruned: usize,
    /// Pops of states that had already been expanded
    pub revisited: usize,
    /// Largest frontier size observed
    pub peak_frontier: usize,
    /// Trace nodes allocated
    pub nodes: usize,
}

/// Result of a search
#[derive(Debug, Clone)]
pub struct SearchOutcome<S> {
    /// Solution traces, in the order they were found
    pub traces: Vec<Trace<S>>,
    pub stats: SearchStats,
}

impl<S> SearchOutcome<S> {
    pub fn is_solved(&self) -> bool {
        !self.traces.is_empty()
    }
}

impl<S, C> StateSpace<S, C>
where
    S: Clone + Eq + Hash + 'static,
    C: Ord + Clone + 'static,
{
    /// Find a trace from the initial state to a state satisfying `goal`.
    ///
    /// Returns at most one trace; an empty result means no goal is
    /// reachable, which includes an initial state rejected by the invariant. `order` is ignored by cost-enabled spaces, which always
    /// search least-cost-first.
    pub fn check(&self, goal: impl Fn(&S) -> bool, order: SearchOrder) -> Vec<Trace<S>> {
        self.search(goal, order, Collect::FirstGoal).traces
    }

    /// Explore every reachable state and return one trace per distinct goal
    /// state, each being the first trace to it in traversal order.
    pub fn check_all(&self, goal: impl Fn(&S) -> bool, order: SearchOrder) -> Vec<Trace<S>> {
        self.search(goal, order, Collect::DistinctGoals).traces
    }

    /// Run a search and report its traces together with [`SearchStats`].
    pub fn search(
        &self,
        goal: impl Fn(&S) -> bool,
        order: SearchOrder,
        collect: Collect,
    ) -> SearchOutcome<S> {
        let discipline = if self.is_cost_enabled() {
            Discipline::MinCost
        } else {
            order.discipline()
        };
        let mut arena = TraceArena::new();
        let mut frontier = Frontier::new(discipline);
        debug!("starting {:?} search ({:?})", frontier.discipline(), collect);
        let mut visited: HashSet<S> = HashSet::new();
        let mut goals_found: HashSet<S> = HashSet::new();
        let mut traces = Vec::new();
        let mut stats = SearchStats::default();

        if !self.is_valid(self.initial_state()) {
            debug!("initial state rejected by the invariant");
            return SearchOutcome { traces, stats };
        }

        let root = arena.insert(self.initial_state().clone(), None);
        frontier.push(FrontierEntry {
            node: root,
            cost: self.initial_cost().cloned(),
        });

        while let Some(entry) = frontier.pop() {
            let current = arena.state(entry.node).clone();

            if goal(&current) {
                match collect {
                    Collect::FirstGoal => {
                        traces.push(arena.trace(entry.node));
                        break;
                    }
                    Collect::DistinctGoals => {
                        if goals_found.insert(current.clone()) {
                            traces.push(arena.trace(entry.node));
                        }
                    }
                }
            }

            if visited.contains(&current) {
                stats.revisited += 1;
                continue;
            }

            stats.expanded += 1;
            let transitions = self.transitions(&current);
            trace!(
                "expanding node {} at depth {} with {} transitions",
                entry.node.index(),
                arena.depth(entry.node),
                transitions.len()
            );

            for apply in &transitions {
                let mut successor = current.clone();
                apply(&mut successor);
                stats.generated += 1;

                if !self.is_valid(&successor) {
                    stats.pruned += 1;
                    continue;
                }

                let cost = self.cost_of(&successor, entry.cost.as_ref());
                let node = arena.insert(successor, Some(entry.node));
                frontier.push(FrontierEntry { node, cost });
            }

            visited.insert(current);
        }

        stats.peak_frontier = frontier.peak();
        stats.nodes = arena.len();
        debug!(
            "search finished: {} traces, {} expanded, {} pruned, peak frontier {}",
            traces.len(),
            stats.expanded,
            stats.pruned,
            stats.peak_frontier
        );

        SearchOutcome { traces, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::{transition, Transition};

    /// Directed graph over small integer states.
    fn graph_moves(edges: &'static [(u8, u8)]) -> impl Fn(&u8) -> Vec<Transition<u8>> {
        move |state: &u8| -> Vec<Transition<u8>> {
            edges
                .iter()
                .filter(|(from, _)| from == state)
                .map(|&(_, to)| transition(move |s: &mut u8| *s = to))
                .collect()
        }
    }

    // 0 -> 1 -> 3 is short, 0 -> 2 -> 4 -> 3 is long.
    const DIAMOND: &[(u8, u8)] = &[(0, 1), (0, 2), (1, 3), (2, 4), (4, 3)];

    #[test]
    fn test_parse_search_order() {
        assert_eq!("bfs".parse::<SearchOrder>(), Ok(SearchOrder::BreadthFirst));
        assert_eq!(
            "Depth_First".parse::<SearchOrder>(),
            Ok(SearchOrder::DepthFirst)
        );
        assert_eq!(
            "best-first".parse::<SearchOrder>(),
            Err(SearchError::UnsupportedOrder("best-first".to_string()))
        );
        assert_eq!(SearchOrder::default(), SearchOrder::BreadthFirst);
    }

    #[test]
    fn test_goal_at_initial_state() {
        let space = StateSpace::new(0u8, graph_moves(DIAMOND));
        let outcome = space.search(|s| *s == 0, SearchOrder::BreadthFirst, Collect::FirstGoal);

        assert_eq!(outcome.traces, vec![vec![0]]);
        assert_eq!(outcome.stats.expanded, 0);
    }

    #[test]
    fn test_rejected_initial_state_is_never_a_goal() {
        let space = StateSpace::new(0u8, graph_moves(DIAMOND)).with_invariant(|s| *s != 0);
        let outcome = space.search(|_| true, SearchOrder::BreadthFirst, Collect::DistinctGoals);

        assert!(outcome.traces.is_empty());
        assert_eq!(outcome.stats, SearchStats::default());
    }

    #[test]
    fn test_search_order_serializes_like_display() {
        for order in [SearchOrder::BreadthFirst, SearchOrder::DepthFirst] {
            let json = serde_json::to_string(&order).unwrap();
            assert_eq!(json, format!("\"{}\"", order));
            assert_eq!(serde_json::from_str::<SearchOrder>(&json).unwrap(), order);
        }
    }

    #[test]
    fn test_breadth_first_finds_shortest() {
        let space = StateSpace::new(0u8, graph_moves(DIAMOND));
        let traces = space.check(|s| *s == 3, SearchOrder::BreadthFirst);

        assert_eq!(traces, vec![vec![0, 1, 3]]);
    }

    #[test]
    fn test_depth_first_follows_newest_branch() {
        let space = StateSpace::new(0u8, graph_moves(DIAMOND));
        let traces = space.check(|s| *s == 3, SearchOrder::DepthFirst);

        assert_eq!(traces, vec![vec![0, 2, 4, 3]]);
    }

    #[test]
    fn test_invariant_prunes_successors() {
        let space = StateSpace::new(0u8, graph_moves(DIAMOND)).with_invariant(|s| *s != 1);
        let outcome = space.search(|s| *s == 3, SearchOrder::BreadthFirst, Collect::FirstGoal);

        assert_eq!(outcome.traces, vec![vec![0, 2, 4, 3]]);
        assert_eq!(outcome.stats.pruned, 1);
    }

    #[test]
    fn test_unreachable_goal_is_empty() {
        let space = StateSpace::new(0u8, graph_moves(DIAMOND));
        let outcome = space.search(|s| *s == 9, SearchOrder::BreadthFirst, Collect::FirstGoal);

        assert!(!outcome.is_solved());
        assert_eq!(outcome.stats.expanded, 5);
    }

    #[test]
    fn test_cycles_are_expanded_once() {
        const CYCLE: &[(u8, u8)] = &[(0, 1), (1, 2), (2, 0), (2, 1)];
        let space = StateSpace::new(0u8, graph_moves(CYCLE));
        let outcome = space.search(|_| false, SearchOrder::DepthFirst, Collect::FirstGoal);

        assert_eq!(outcome.stats.expanded, 3);
        assert_eq!(outcome.stats.revisited, 2);
        assert_eq!(outcome.stats.generated, 4);
    }

    #[test]
    fn test_check_all_keeps_one_trace_per_goal_state() {
        let space = StateSpace::new(0u8, graph_moves(DIAMOND));
        let traces = space.check_all(|s| *s >= 3, SearchOrder::BreadthFirst);

        // 3 is reached twice (via 1 and via 4) but reported once.
        assert_eq!(traces, vec![vec![0, 1, 3], vec![0, 2, 4]]);
    }

    #[test]
    fn test_uniform_cost_prefers_cheap_path() {
        // Entering 1 is expensive, everything else costs 1.
        let space = StateSpace::with_cost(0u8, 0u32, graph_moves(DIAMOND), |s, cost| {
            cost + if *s == 1 { 10 } else { 1 }
        });
        let traces = space.check(|s| *s == 3, SearchOrder::DepthFirst);

        assert_eq!(traces, vec![vec![0, 2, 4, 3]]);
    }

    #[test]
    fn test_uniform_cost_ties_follow_insertion_order() {
        let space = StateSpace::with_cost(0u8, 0u32, graph_moves(DIAMOND), |_, cost| *cost);
        let uniform = space.check(|s| *s == 3, SearchOrder::DepthFirst);
        let breadth =
            StateSpace::new(0u8, graph_moves(DIAMOND)).check(|s| *s == 3, SearchOrder::BreadthFirst);

        assert_eq!(uniform, breadth);
    }

    #[test_log::test]
    fn test_repeated_checks_are_independent() {
        let space = StateSpace::new(0u8, graph_moves(DIAMOND));
        let first = space.search(|s| *s == 4, SearchOrder::DepthFirst, Collect::FirstGoal);
        let second = space.search(|s| *s == 4, SearchOrder::DepthFirst, Collect::FirstGoal);

        assert_eq!(first.traces, second.traces);
        assert_eq!(first.stats, second.stats);
    }
}
