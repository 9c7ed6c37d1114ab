//! Main search interface

use log::{debug, trace};

use super::algorithm::{Algorithm, SearchAlgorithm};
use super::search::{
    NoProgress, SearchLimits, SearchObserver, SearchOutcome, SearchProgress, SearchResult,
};
use crate::core::{IllegalMoveError, Move, Puzzle};

/// Puzzle solver
///
/// Pairs an algorithm with the limits every search runs under. Holds no
/// state between calls, so one solver can be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver<A: SearchAlgorithm = Algorithm> {
    algorithm: A,
    limits: SearchLimits,
}

impl<A: SearchAlgorithm> Solver<A> {
    /// Create a new solver
    ///
    /// # Parameters
    /// - `algorithm`: The search algorithm to run
    /// - `limits`: Caps applied to every search
    pub const fn new(algorithm: A, limits: SearchLimits) -> Self {
        Self { algorithm, limits }
    }

    pub const fn algorithm(&self) -> &A {
        &self.algorithm
    }

    pub const fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Search for a path from `start` to a goal state
    ///
    /// # Examples
    /// ```
    /// use chroma_oracle::core::{Move, Puzzle};
    /// use chroma_oracle::solver::{Algorithm, SearchLimits, SearchOutcome, Solver};
    ///
    /// let puzzle = Puzzle::from_grid(
    ///     &[vec!["RED", "BLUE"], vec!["RED"], vec!["BLUE"]],
    ///     Some(2),
    /// ).unwrap();
    /// let solver = Solver::new(Algorithm::bfs(), SearchLimits::default());
    ///
    /// let result = solver.solve(&puzzle);
    /// assert_eq!(result.outcome, SearchOutcome::Solved(vec![Move::new(0, 2), Move::new(0, 1)]));
    /// ```
    pub fn solve(&self, start: &Puzzle) -> SearchResult {
        self.solve_observed(start, &mut NoProgress)
    }

    /// Search while reporting progress to `observer`
    pub fn solve_observed(&self, start: &Puzzle, observer: &mut dyn SearchObserver) -> SearchResult {
        debug!(
            "{} search: {} containers, capacity {}, {} items",
            self.algorithm.name(),
            start.len(),
            start.capacity(),
            start.total_items()
        );

        let mut traced = |progress: SearchProgress| {
            trace!(
                "expanded {}, frontier {}, visited {}",
                progress.expanded, progress.frontier, progress.visited
            );
            observer.on_progress(progress);
        };
        let result = self.algorithm.search(start, self.limits, &mut traced);

        match &result.outcome {
            SearchOutcome::Solved(path) => debug!(
                "solved in {} moves after {} expansions",
                path.len(),
                result.stats.expanded
            ),
            SearchOutcome::Unsolvable => debug!(
                "frontier exhausted after {} expansions ({} states)",
                result.stats.expanded, result.stats.visited
            ),
            SearchOutcome::LimitExceeded => debug!(
                "expansion cap {:?} reached ({} states)",
                self.limits.max_expansions, result.stats.visited
            ),
        }

        result
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(Algorithm::default(), SearchLimits::default())
    }
}

/// Solve with a one-off algorithm and limits
pub fn solve(initial: &Puzzle, algorithm: &impl SearchAlgorithm, limits: SearchLimits) -> SearchResult {
    algorithm.search(initial, limits, &mut NoProgress)
}

/// Replay `path` from `start`, returning the final state
///
/// # Errors
/// Returns the first illegal move encountered.
pub fn apply_path(start: &Puzzle, path: &[Move]) -> Result<Puzzle, IllegalMoveError> {
    path.iter()
        .try_fold(start.clone(), |state, &mv| state.apply(mv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::search::PROGRESS_INTERVAL;
    use crate::solver::{BreadthFirst, DepthFirst};

    fn puzzle(grid: &[&[&str]], capacity: usize) -> Puzzle {
        let owned: Vec<Vec<&str>> = grid.iter().map(|c| c.to_vec()).collect();
        Puzzle::from_grid(&owned, Some(capacity)).unwrap()
    }

    #[test]
    fn already_goal_is_solved_not_unsolvable() {
        let p = puzzle(&[&["RED", "RED"], &["BLUE", "BLUE"]], 2);
        let solver = Solver::default();
        assert_eq!(solver.solve(&p).outcome, SearchOutcome::Solved(vec![]));
    }

    #[test]
    fn bfs_optimal_dfs_valid() {
        let p = puzzle(&[&["RED", "BLUE"], &["RED"], &["BLUE"]], 2);

        let bfs = Solver::new(BreadthFirst, SearchLimits::default());
        let bfs_path = bfs.solve(&p).outcome.into_path().unwrap();
        assert_eq!(bfs_path.len(), 2);

        let dfs = Solver::new(DepthFirst::default(), SearchLimits::default());
        let dfs_path = dfs.solve(&p).outcome.into_path().unwrap();
        assert!(dfs_path.len() >= 2);
        assert!(apply_path(&p, &dfs_path).unwrap().is_goal());
    }

    #[test]
    fn free_function_matches_solver() {
        let p = puzzle(&[&["RED", "BLUE"], &["BLUE", "RED"], &[]], 2);
        let limits = SearchLimits::default();
        assert_eq!(
            solve(&p, &Algorithm::bfs(), limits),
            Solver::new(Algorithm::bfs(), limits).solve(&p)
        );
    }

    #[test]
    fn observer_does_not_change_result() {
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
        let solver = Solver::new(Algorithm::bfs(), SearchLimits::default());
        let mut events = 0;
        let mut observer = |_: SearchProgress| events += 1;

        let observed = solver.solve_observed(&p, &mut observer);
        assert_eq!(events, observed.stats.expanded / PROGRESS_INTERVAL);
        assert_eq!(observed, solver.solve(&p));
    }

    #[test]
    fn apply_path_reports_illegal_move() {
        let p = puzzle(&[&["RED"], &["BLUE"]], 2);
        let err = apply_path(&p, &[Move::new(0, 1)]).unwrap_err();
        assert_eq!(err.mv, Move::new(0, 1));
    }
}
