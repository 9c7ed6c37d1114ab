//! Depth-first search
//!
//! Uses an explicit stack instead of recursion. The visited set spans the
//! whole search, not just the current path, so a state reachable by several
//! routes is expanded once. Returns the first goal found, with no guarantee
//! that its path is the shortest.

use rustc_hash::FxHashSet;

use super::algorithm::SearchAlgorithm;
use super::ordering::MoveOrdering;
use super::search::{
    PROGRESS_INTERVAL, SearchLimits, SearchObserver, SearchOutcome, SearchProgress, SearchResult,
    SearchStats,
};
use super::tree::{SearchTree, successors};
use crate::core::Puzzle;

/// Fast, non-optimal search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthFirst {
    /// Order in which moves from each state are tried
    pub ordering: MoveOrdering,
}

impl DepthFirst {
    #[must_use]
    pub const fn new(ordering: MoveOrdering) -> Self {
        Self { ordering }
    }
}

impl SearchAlgorithm for DepthFirst {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn search(
        &self,
        start: &Puzzle,
        limits: SearchLimits,
        observer: &mut dyn SearchObserver,
    ) -> SearchResult {
        let mut tree = SearchTree::with_root(start.clone());
        let mut visited = FxHashSet::default();
        visited.insert(start.canonical_key());

        let mut stack = vec![SearchTree::ROOT];
        let mut stats = SearchStats {
            visited: 1,
            max_frontier: 1,
            ..SearchStats::default()
        };

        while let Some(id) = stack.pop() {
            if tree.state(id).is_goal() {
                return SearchResult::new(SearchOutcome::Solved(tree.path_to(id)), stats);
            }
            if limits.reached(stats.expanded) {
                return SearchResult::new(SearchOutcome::LimitExceeded, stats);
            }

            stats.expanded += 1;
            let state = tree.state(id);
            let mut moves = state.legal_moves();
            self.ordering.order(state, &mut moves);
            let next_states = successors(state, moves);

            // Pushed in reverse so the preferred move is popped first
            for (mv, next) in next_states.into_iter().rev() {
                if visited.insert(next.canonical_key()) {
                    let child = tree.push(next, id, mv);
                    stack.push(child);
                }
            }

            stats.visited = visited.len();
            stats.max_frontier = stats.max_frontier.max(stack.len());
            if stats.expanded % PROGRESS_INTERVAL == 0 {
                observer.on_progress(SearchProgress {
                    expanded: stats.expanded,
                    frontier: stack.len(),
                    visited: stats.visited,
                });
            }
        }

        SearchResult::new(SearchOutcome::Unsolvable, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::NoProgress;
    use crate::solver::engine::apply_path;

    fn puzzle(grid: &[&[&str]], capacity: usize) -> Puzzle {
        let owned: Vec<Vec<&str>> = grid.iter().map(|c| c.to_vec()).collect();
        Puzzle::from_grid(&owned, Some(capacity)).unwrap()
    }

    fn dfs(p: &Puzzle, ordering: MoveOrdering) -> SearchResult {
        DepthFirst::new(ordering).search(p, SearchLimits::unlimited(), &mut NoProgress)
    }

    #[test]
    fn already_solved_returns_empty_path() {
        let p = puzzle(&[&["RED", "RED"], &[]], 2);
        assert_eq!(
            dfs(&p, MoveOrdering::Greedy).outcome,
            SearchOutcome::Solved(vec![])
        );
    }

    #[test]
    fn finds_valid_path_on_two_move_fixture() {
        let p = puzzle(&[&["RED", "BLUE"], &["RED"], &["BLUE"]], 2);
        for ordering in [MoveOrdering::Natural, MoveOrdering::Greedy] {
            let path = dfs(&p, ordering).outcome.into_path().unwrap();
            assert!(path.len() >= 2);
            assert!(apply_path(&p, &path).unwrap().is_goal());
        }
    }

    #[test]
    fn finds_valid_path_on_larger_puzzle() {
        let p = puzzle(
            &[
                &["RED", "BLUE", "GREEN", "RED"],
                &["GREEN", "RED", "BLUE", "BLUE"],
                &["BLUE", "GREEN", "RED", "GREEN"],
                &[],
                &[],
            ],
            4,
        );
        let path = dfs(&p, MoveOrdering::Greedy).outcome.into_path().unwrap();
        assert!(apply_path(&p, &path).unwrap().is_goal());
    }

    #[test]
    fn exhausts_unsolvable_puzzle() {
        let p = puzzle(&[&["RED", "BLUE"], &["BLUE", "RED"]], 2);
        assert_eq!(
            dfs(&p, MoveOrdering::Natural).outcome,
            SearchOutcome::Unsolvable
        );
    }

    #[test]
    fn respects_expansion_cap() {
        let p = puzzle(&[&["RED", "BLUE"], &["BLUE", "RED"], &[]], 2);
        let result = DepthFirst::default().search(
            &p,
            SearchLimits::with_max_expansions(0),
            &mut NoProgress,
        );
        assert_eq!(result.outcome, SearchOutcome::LimitExceeded);
    }

    #[test]
    fn deterministic() {
        let p = puzzle(&[&["RED", "BLUE"], &["BLUE", "RED"], &[]], 2);
        let first = dfs(&p, MoveOrdering::Greedy);
        assert_eq!(dfs(&p, MoveOrdering::Greedy), first);
    }
}
