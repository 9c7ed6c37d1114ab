//! Solving every completion of a partially hidden puzzle
//!
//! Candidates are pulled lazily from the enumerator in fixed-size batches.
//! Under the exhaustive policy each batch is solved in parallel with rayon;
//! results keep enumeration order so the outcome does not depend on thread
//! scheduling.

use log::{debug, info, warn};
use rayon::prelude::*;

use super::assignments::{Assignments, enumerate_assignments};
use super::rules::{CountRule, InconsistentHiddenState};
use crate::core::{Move, Puzzle, SearchPath};
use crate::solver::{Algorithm, SearchAlgorithm, SearchLimits, SearchOutcome, Solver};

/// Candidates solved per parallel batch
pub const BATCH_SIZE: usize = 64;

/// How many candidates to solve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SolvePolicy {
    /// Stop at the first solvable candidate
    FirstSolvable,
    /// Solve every candidate (default)
    #[default]
    Exhaustive,
}

impl SolvePolicy {
    /// Create a policy from its name
    ///
    /// Supported names: "first", "all", "exhaustive".
    /// Defaults to exhaustive if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "first" | "first-solvable" => Self::FirstSolvable,
            _ => Self::Exhaustive,
        }
    }
}

/// Resolver settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    pub policy: SolvePolicy,
    pub count_rule: CountRule,
    /// Stop enumerating after this many candidates
    pub max_candidates: Option<usize>,
}

/// A concrete completion together with its solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub puzzle: Puzzle,
    pub path: SearchPath,
}

/// Outcome of solving the candidates of one puzzle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Solvable candidates, in enumeration order
    pub solutions: Vec<Candidate>,
    /// Candidates handed to the solver
    pub tested: usize,
    /// Candidates whose search exhausted without a goal
    pub unsolvable: usize,
    /// Candidates whose search hit the expansion cap
    pub limited: usize,
    /// Enumeration stopped before the last candidate
    pub truncated: bool,
}

impl Resolution {
    /// Solution paths, in enumeration order
    #[must_use]
    pub fn paths(&self) -> Vec<&[Move]> {
        self.solutions.iter().map(|c| c.path.as_slice()).collect()
    }

    /// Every completion was enumerated and settled as solved or unsolvable
    ///
    /// Deductions and common prefixes are only sound over a complete
    /// resolution; a capped or truncated one may be missing solutions.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.limited == 0 && !self.truncated
    }

    /// Exactly one completion is solvable
    #[must_use]
    pub fn unique(&self) -> Option<&Candidate> {
        match self.solutions.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    fn record(&mut self, puzzle: Puzzle, outcome: SearchOutcome) {
        self.tested += 1;
        match outcome {
            SearchOutcome::Solved(path) => self.solutions.push(Candidate { puzzle, path }),
            SearchOutcome::Unsolvable => self.unsolvable += 1,
            SearchOutcome::LimitExceeded => self.limited += 1,
        }
    }
}

/// Solves every completion of a partially hidden puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MysteryResolver<A: SearchAlgorithm = Algorithm> {
    solver: Solver<A>,
    config: ResolverConfig,
}

impl<A: SearchAlgorithm + Sync> MysteryResolver<A> {
    /// Create a new resolver
    ///
    /// # Parameters
    /// - `solver`: Search used on each candidate
    /// - `config`: Policy, count rule and enumeration cap
    pub const fn new(solver: Solver<A>, config: ResolverConfig) -> Self {
        Self { solver, config }
    }

    /// Same resolver with a different policy
    #[must_use]
    pub fn with_policy(mut self, policy: SolvePolicy) -> Self {
        self.config.policy = policy;
        self
    }

    pub const fn solver(&self) -> &Solver<A> {
        &self.solver
    }

    pub const fn config(&self) -> ResolverConfig {
        self.config
    }

    /// Lazily enumerate candidates under the configured count rule
    ///
    /// # Errors
    /// Returns `InconsistentHiddenState` if the visible counts break the rule.
    pub fn enumerate(&self, puzzle: &Puzzle) -> Result<Assignments, InconsistentHiddenState> {
        enumerate_assignments(puzzle, self.config.count_rule)
    }

    /// Solve the candidates of `puzzle` according to the policy
    ///
    /// # Errors
    /// Returns `InconsistentHiddenState` if the visible counts break the
    /// count rule. An enumeration with no solvable candidate is not an error.
    pub fn find_all_solutions(&self, puzzle: &Puzzle) -> Result<Resolution, InconsistentHiddenState> {
        let candidates = self.enumerate(puzzle)?;
        info!(
            "resolving {} hidden items with {} ({:?})",
            candidates.slots().len(),
            self.solver.algorithm().name(),
            self.config.policy
        );

        let resolution = match self.config.policy {
            SolvePolicy::FirstSolvable => self.first_solvable(candidates),
            SolvePolicy::Exhaustive => self.exhaustive(candidates),
        };

        info!(
            "{} of {} candidates solvable ({} unsolvable, {} over limit)",
            resolution.solutions.len(),
            resolution.tested,
            resolution.unsolvable,
            resolution.limited
        );
        if resolution.limited > 0 {
            warn!(
                "{} candidates hit the expansion cap; the solution set may be incomplete",
                resolution.limited
            );
        }
        if resolution.truncated {
            warn!(
                "enumeration stopped at {} candidates",
                self.config.max_candidates.unwrap_or(resolution.tested)
            );
        }

        Ok(resolution)
    }

    fn remaining_budget(&self, tested: usize) -> usize {
        self.config
            .max_candidates
            .map_or(usize::MAX, |max| max.saturating_sub(tested))
    }

    fn first_solvable(&self, mut candidates: Assignments) -> Resolution {
        let mut resolution = Resolution::default();

        loop {
            if self.remaining_budget(resolution.tested) == 0 {
                resolution.truncated = candidates.next().is_some();
                break;
            }
            let Some(candidate) = candidates.next() else {
                break;
            };
            let outcome = self.solver.solve(&candidate).outcome;
            let solved = outcome.is_solved();
            resolution.record(candidate, outcome);
            if solved {
                break;
            }
        }

        resolution
    }

    fn exhaustive(&self, mut candidates: Assignments) -> Resolution {
        let mut resolution = Resolution::default();

        loop {
            let room = self.remaining_budget(resolution.tested);
            if room == 0 {
                resolution.truncated = candidates.next().is_some();
                break;
            }

            let batch: Vec<Puzzle> = candidates.by_ref().take(room.min(BATCH_SIZE)).collect();
            if batch.is_empty() {
                break;
            }

            let outcomes: Vec<SearchOutcome> = batch
                .par_iter()
                .map(|candidate| self.solver.solve(candidate).outcome)
                .collect();

            for (candidate, outcome) in batch.into_iter().zip(outcomes) {
                resolution.record(candidate, outcome);
            }
            debug!(
                "{} candidates tested, {} solvable so far",
                resolution.tested,
                resolution.solutions.len()
            );
        }

        resolution
    }
}

impl Default for MysteryResolver {
    fn default() -> Self {
        Self::new(Solver::default(), ResolverConfig::default())
    }
}

/// Solve every completion of `puzzle` with `algorithm` under `limits`
///
/// Uses the exhaustive policy and the default count rule.
///
/// # Errors
/// Returns `InconsistentHiddenState` if the visible counts break the rule.
pub fn find_all_solutions(
    puzzle: &Puzzle,
    algorithm: Algorithm,
    limits: SearchLimits,
) -> Result<Resolution, InconsistentHiddenState> {
    MysteryResolver::new(Solver::new(algorithm, limits), ResolverConfig::default())
        .find_all_solutions(puzzle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Colour;
    use crate::solver::apply_path;

    fn puzzle(grid: &[&[&str]], capacity: usize) -> Puzzle {
        let owned: Vec<Vec<&str>> = grid.iter().map(|c| c.to_vec()).collect();
        Puzzle::from_grid(&owned, Some(capacity)).unwrap()
    }

    fn two_way_mystery() -> Puzzle {
        // Either RED or BLUE sits under each hidden marker
        puzzle(
            &[&["?", "RED", "RED"], &["?", "BLUE", "BLUE"], &[]],
            3,
        )
    }

    #[test]
    fn exhaustive_solves_every_candidate() {
        let resolution = MysteryResolver::default()
            .find_all_solutions(&two_way_mystery())
            .unwrap();
        assert_eq!(resolution.tested, 2);
        assert_eq!(resolution.solutions.len(), 2);
        assert!(!resolution.truncated);
        for candidate in &resolution.solutions {
            assert!(!candidate.puzzle.has_hidden());
            assert!(apply_path(&candidate.puzzle, &candidate.path).unwrap().is_goal());
        }
    }

    #[test]
    fn first_solvable_stops_early() {
        let resolver = MysteryResolver::default().with_policy(SolvePolicy::FirstSolvable);
        let resolution = resolver.find_all_solutions(&two_way_mystery()).unwrap();
        assert_eq!(resolution.tested, 1);
        assert_eq!(resolution.solutions.len(), 1);
        assert_eq!(
            resolution.solutions[0].puzzle.container(0).unwrap().items()[0],
            Colour::Red
        );
    }

    #[test]
    fn candidate_cap_truncates() {
        let config = ResolverConfig {
            max_candidates: Some(1),
            ..ResolverConfig::default()
        };
        let resolver = MysteryResolver::new(Solver::default(), config);
        let resolution = resolver.find_all_solutions(&two_way_mystery()).unwrap();
        assert_eq!(resolution.tested, 1);
        assert!(resolution.truncated);
        assert!(!resolution.is_complete());
    }

    #[test]
    fn capped_candidate_makes_resolution_incomplete() {
        // The RED-under-RED completion is already sorted; the other needs
        // three moves and cannot finish within one expansion
        let p = puzzle(&[&["?", "RED"], &["?", "BLUE"], &[]], 2);
        let solver = Solver::new(Algorithm::bfs(), SearchLimits::with_max_expansions(1));
        let resolution = MysteryResolver::new(solver, ResolverConfig::default())
            .find_all_solutions(&p)
            .unwrap();
        assert_eq!(resolution.tested, 2);
        assert_eq!(resolution.solutions.len(), 1);
        assert_eq!(resolution.limited, 1);
        assert!(!resolution.is_complete());

        let full = MysteryResolver::default().find_all_solutions(&p).unwrap();
        assert!(full.is_complete());
        assert_eq!(full.solutions.len(), 2);
    }

    #[test]
    fn unsolvable_candidates_are_counted_not_returned() {
        let p = puzzle(&[&["?", "BLUE"], &["BLUE", "RED"]], 2);
        let resolution = MysteryResolver::default().find_all_solutions(&p).unwrap();
        assert_eq!(resolution.tested, 1);
        assert!(resolution.solutions.is_empty());
        assert_eq!(resolution.unsolvable, 1);
    }

    #[test]
    fn concrete_puzzle_is_its_only_candidate() {
        let p = puzzle(&[&["RED", "BLUE"], &["RED"], &["BLUE"]], 2);
        let resolution = find_all_solutions(&p, Algorithm::bfs(), SearchLimits::default()).unwrap();
        assert_eq!(resolution.tested, 1);
        let only = resolution.unique().unwrap();
        assert_eq!(only.puzzle, p);
        assert_eq!(only.path.len(), 2);
    }

    #[test]
    fn inconsistent_state_is_an_error() {
        let p = puzzle(&[&["RED", "RED"], &["RED", "?"], &[]], 2);
        assert!(MysteryResolver::default().find_all_solutions(&p).is_err());
    }

    #[test]
    fn parallel_batches_preserve_enumeration_order() {
        let p = puzzle(&[&["?", "?"], &["?", "?"], &["RED", "RED"], &[]], 2);
        let resolution = MysteryResolver::default().find_all_solutions(&p).unwrap();
        let expected: Vec<Puzzle> = MysteryResolver::default()
            .enumerate(&p)
            .unwrap()
            .filter(|c| Solver::default().solve(c).outcome.is_solved())
            .collect();
        let got: Vec<Puzzle> = resolution.solutions.into_iter().map(|c| c.puzzle).collect();
        assert_eq!(got, expected);
    }
}
