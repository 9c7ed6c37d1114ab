//! Puzzle solving command
//!
//! Solves a fully visible puzzle and returns the move list with the final
//! state.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::core::Puzzle;
use crate::solver::{SearchAlgorithm, SearchObserver, SearchResult, Solver, apply_path};

/// Result of solving a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub initial: Puzzle,
    pub result: SearchResult,
    /// Goal reached by the solution, if one was found
    pub final_state: Option<Puzzle>,
    pub duration: Duration,
}

impl SolveReport {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.final_state.is_some()
    }
}

/// Solve `puzzle`, reporting progress to `observer`
///
/// # Errors
///
/// Returns an error if the returned path does not replay, which would mean
/// the search produced an invalid solution.
pub fn solve_puzzle<A: SearchAlgorithm>(
    puzzle: &Puzzle,
    solver: &Solver<A>,
    observer: &mut dyn SearchObserver,
) -> Result<SolveReport> {
    let start = Instant::now();
    let result = solver.solve_observed(puzzle, observer);
    let duration = start.elapsed();

    let final_state = result
        .outcome
        .path()
        .map(|path| apply_path(puzzle, path))
        .transpose()
        .context("search returned a path that does not replay")?;

    Ok(SolveReport {
        initial: puzzle.clone(),
        result,
        final_state,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Algorithm, NoProgress, SearchLimits, SearchOutcome};

    fn puzzle(grid: &[&[&str]], capacity: usize) -> Puzzle {
        let owned: Vec<Vec<&str>> = grid.iter().map(|c| c.to_vec()).collect();
        Puzzle::from_grid(&owned, Some(capacity)).unwrap()
    }

    #[test]
    fn solve_reports_final_goal_state() {
        let p = puzzle(&[&["RED", "BLUE"], &["BLUE", "RED"], &[]], 2);
        let report = solve_puzzle(&p, &Solver::default(), &mut NoProgress).unwrap();

        assert!(report.is_solved());
        assert_eq!(report.result.outcome.path().unwrap().len(), 3);
        assert!(report.final_state.unwrap().is_goal());
        assert_eq!(report.initial, p);
    }

    #[test]
    fn unsolvable_has_no_final_state() {
        let p = puzzle(&[&["RED", "BLUE"], &["BLUE", "RED"]], 2);
        let report = solve_puzzle(&p, &Solver::default(), &mut NoProgress).unwrap();
        assert_eq!(report.result.outcome, SearchOutcome::Unsolvable);
        assert!(!report.is_solved());
    }

    #[test]
    fn limit_is_reported() {
        let p = puzzle(&[&["RED", "BLUE"], &["BLUE", "RED"], &[]], 2);
        let solver = Solver::new(Algorithm::dfs(), SearchLimits::with_max_expansions(0));
        let report = solve_puzzle(&p, &solver, &mut NoProgress).unwrap();
        assert_eq!(report.result.outcome, SearchOutcome::LimitExceeded);
    }
}
