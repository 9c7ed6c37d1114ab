//! One-shot strategy analysis of a partially hidden puzzle

use crate::core::{Move, Puzzle, SearchPath};
use crate::mystery::{
    Candidate, Deduction, InconsistentHiddenState, MysteryResolver, PrefixStatus, Replay,
    SolvePolicy, deduce_hidden, find_common_prefix, first_move_tallies, replay,
};
use crate::solver::SearchAlgorithm;

/// What can be said about a puzzle before any hidden item is revealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyReport {
    /// Moves safe under every solvable completion
    pub guaranteed: SearchPath,
    /// Shape of the solutions found; never `Guaranteed` or `AlreadySolved`
    /// when the resolution is incomplete
    pub status: PrefixStatus,
    /// Number of solvable completions
    pub solutions: usize,
    /// Number of completions tried
    pub tested: usize,
    /// Completions whose search hit the expansion cap
    pub limited: usize,
    /// Enumeration stopped at the candidate cap
    pub truncated: bool,
    /// Hidden colours every solvable completion agrees on
    pub deductions: Vec<Deduction>,
    /// The only solvable completion, if there is exactly one
    pub unique: Option<Candidate>,
    /// How many solutions open with each move
    pub first_moves: Vec<(Move, usize)>,
    /// Guaranteed moves replayed on the visible state
    pub replay: Replay,
}

impl StrategyReport {
    /// Some completion was not settled, so nothing is guaranteed
    #[must_use]
    pub const fn incomplete(&self) -> bool {
        self.limited > 0 || self.truncated
    }

    #[must_use]
    pub fn already_solved(&self) -> bool {
        !self.incomplete() && self.status == PrefixStatus::AlreadySolved
    }

    /// No move is safe yet; something must be revealed first
    #[must_use]
    pub fn needs_information(&self) -> bool {
        !self.incomplete() && self.status == PrefixStatus::Diverged
    }

    /// No completion could be solved
    #[must_use]
    pub fn unsolvable(&self) -> bool {
        !self.incomplete() && self.status == PrefixStatus::NoSolutions
    }
}

/// Analyze `puzzle` by solving every completion of its hidden items
///
/// The resolver always runs exhaustively here: a prefix shared by a subset of
/// completions is not guaranteed. For the same reason a capped or truncated
/// resolution yields no guaranteed moves, deductions or unique completion.
///
/// # Errors
/// Returns `InconsistentHiddenState` if the visible counts break the count rule.
pub fn analyze<A: SearchAlgorithm + Clone + Sync>(
    puzzle: &Puzzle,
    resolver: &MysteryResolver<A>,
) -> Result<StrategyReport, InconsistentHiddenState> {
    let resolver = resolver.clone().with_policy(SolvePolicy::Exhaustive);
    let resolution = resolver.find_all_solutions(puzzle)?;

    let paths = resolution.paths();
    let first_moves = first_move_tallies(&paths);
    let mut prefix = find_common_prefix(&paths);
    let (deductions, unique) = if resolution.is_complete() {
        (
            deduce_hidden(puzzle, &resolution.solutions),
            resolution.unique().cloned(),
        )
    } else {
        prefix.moves.clear();
        if prefix.status != PrefixStatus::NoSolutions {
            prefix.status = PrefixStatus::Diverged;
        }
        (Vec::new(), None)
    };
    let replay = replay(puzzle, &prefix.moves);

    Ok(StrategyReport {
        solutions: resolution.solutions.len(),
        tested: resolution.tested,
        limited: resolution.limited,
        truncated: resolution.truncated,
        unique,
        guaranteed: prefix.moves,
        status: prefix.status,
        deductions,
        first_moves,
        replay,
    })
}
