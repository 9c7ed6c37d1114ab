//! Breadth-first search
//!
//! Explores states in non-decreasing distance from the start. Every move
//! costs one step, so the first goal taken off the queue has a minimum-length
//! path.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::algorithm::SearchAlgorithm;
use super::search::{
    PROGRESS_INTERVAL, SearchLimits, SearchObserver, SearchOutcome, SearchProgress, SearchResult,
    SearchStats,
};
use super::tree::{SearchTree, successors};
use crate::core::Puzzle;

/// Optimal (fewest moves) search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreadthFirst;

impl SearchAlgorithm for BreadthFirst {
    fn name(&self) -> &'static str {
        "BFS"
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

        let mut frontier = VecDeque::from([SearchTree::ROOT]);
        let mut stats = SearchStats {
            visited: 1,
            max_frontier: 1,
            ..SearchStats::default()
        };

        while let Some(id) = frontier.pop_front() {
            if tree.state(id).is_goal() {
                return SearchResult::new(SearchOutcome::Solved(tree.path_to(id)), stats);
            }
            if limits.reached(stats.expanded) {
                return SearchResult::new(SearchOutcome::LimitExceeded, stats);
            }

            stats.expanded += 1;
            let state = tree.state(id);
            let next_states = successors(state, state.legal_moves());

            // A key enters the visited set on first discovery and is never queued again
            for (mv, next) in next_states {
                if visited.insert(next.canonical_key()) {
                    let child = tree.push(next, id, mv);
                    frontier.push_back(child);
                }
            }

            stats.visited = visited.len();
            stats.max_frontier = stats.max_frontier.max(frontier.len());
            if stats.expanded % PROGRESS_INTERVAL == 0 {
                observer.on_progress(SearchProgress {
                    expanded: stats.expanded,
                    frontier: frontier.len(),
                    visited: stats.visited,
                });
            }
        }

        SearchResult::new(SearchOutcome::Unsolvable, stats)
    }
}
