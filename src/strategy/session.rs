//! Step-by-step play of a partially hidden puzzle
//!
//! Each step re-resolves the working state, fills in any hidden colour every
//! solvable completion agrees on, and plays the first move common to all
//! solutions. When no move is common the session stops and waits for the
//! caller to supply a more informed state. A resolution that left any
//! completion unsettled stops the session without deducing or moving.

use log::{debug, info};

use crate::core::{Colour, Move, Puzzle, PuzzleError, Slot};
use crate::mystery::{
    Deduction, InconsistentHiddenState, MysteryResolver, PrefixStatus, SolvePolicy,
    apply_deductions, deduce_hidden, find_common_prefix, first_move_tallies,
};
use crate::solver::{Algorithm, SearchAlgorithm};

/// Why a session stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// Working state is a goal
    Solved,
    /// Solutions disagree on the next move, or it would lift a hidden item
    NoGuaranteedMove {
        /// How many solutions open with each move
        first_moves: Vec<(Move, usize)>,
    },
    /// No completion of the working state can be solved
    Unsolvable,
    /// Some completions were not settled: a search hit the expansion cap or
    /// enumeration stopped at the candidate cap, so no move can be
    /// guaranteed and no hidden colour deduced
    LimitExceeded,
    /// Visible colour counts admit no completion
    Inconsistent(InconsistentHiddenState),
}

/// Lifecycle of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Terminated(Termination),
}

/// One move played by the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStep {
    pub mv: Move,
    /// Hidden colours filled in before the move
    pub deductions: Vec<Deduction>,
    /// Working state after the move
    pub state: Puzzle,
    /// Length of the guaranteed prefix the move was taken from
    pub guaranteed: usize,
}

/// Result of asking the session to advance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Moved(SessionStep),
    Terminated(Termination),
}

/// Rejected session update
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("the puzzle is already solved")]
    AlreadySolved,
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}

/// Plays guaranteed moves one at a time
#[derive(Debug, Clone)]
pub struct StrategySession<A: SearchAlgorithm = Algorithm> {
    resolver: MysteryResolver<A>,
    working: Puzzle,
    state: SessionState,
    history: Vec<Move>,
}

impl<A: SearchAlgorithm + Sync> StrategySession<A> {
    /// Start a session on `initial`
    ///
    /// The resolver is switched to the exhaustive policy: a move is only
    /// guaranteed if every completion agrees on it.
    pub fn new(initial: Puzzle, resolver: MysteryResolver<A>) -> Self {
        Self {
            resolver: resolver.with_policy(SolvePolicy::Exhaustive),
            working: initial,
            state: SessionState::Active,
            history: Vec::new(),
        }
    }

    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active)
    }

    /// Current view of the puzzle, with deduced colours filled in
    pub const fn working_state(&self) -> &Puzzle {
        &self.working
    }

    /// Moves played so far
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Play the next guaranteed move, or terminate
    ///
    /// Once terminated the session keeps returning the same termination
    /// until its state is replaced.
    pub fn step(&mut self) -> StepOutcome {
        if let SessionState::Terminated(reason) = &self.state {
            return StepOutcome::Terminated(reason.clone());
        }
        if self.working.is_goal() {
            return self.terminate(Termination::Solved);
        }

        let resolution = match self.resolver.find_all_solutions(&self.working) {
            Ok(resolution) => resolution,
            Err(err) => return self.terminate(Termination::Inconsistent(err)),
        };
        if !resolution.is_complete() {
            debug!(
                "{} solutions from an incomplete resolution ({} over limit, truncated: {})",
                resolution.solutions.len(),
                resolution.limited,
                resolution.truncated
            );
            return self.terminate(Termination::LimitExceeded);
        }
        if resolution.solutions.is_empty() {
            return self.terminate(Termination::Unsolvable);
        }

        let deductions = deduce_hidden(&self.working, &resolution.solutions);
        if !deductions.is_empty() {
            debug!("deduced {} hidden items", deductions.len());
            self.working = apply_deductions(&self.working, &deductions);
        }

        let paths = resolution.paths();
        let prefix = find_common_prefix(&paths);
        let next = match (prefix.status, prefix.first()) {
            (PrefixStatus::Guaranteed, Some(mv)) => mv,
            (PrefixStatus::AlreadySolved, _) if self.working.is_goal() => {
                return self.terminate(Termination::Solved);
            }
            _ => {
                return self.terminate(Termination::NoGuaranteedMove {
                    first_moves: first_move_tallies(&paths),
                });
            }
        };

        match self.working.apply(next) {
            Ok(after) => {
                info!("guaranteed move {next} ({} in prefix)", prefix.len());
                self.working = after;
                self.history.push(next);
                StepOutcome::Moved(SessionStep {
                    mv: next,
                    deductions,
                    state: self.working.clone(),
                    guaranteed: prefix.len(),
                })
            }
            Err(err) => {
                debug!("guaranteed move blocked: {err}");
                self.terminate(Termination::NoGuaranteedMove {
                    first_moves: first_move_tallies(&paths),
                })
            }
        }
    }

    /// Step until the session terminates, collecting the moves played
    pub fn run(&mut self) -> (Vec<SessionStep>, Termination) {
        let mut steps = Vec::new();
        loop {
            match self.step() {
                StepOutcome::Moved(step) => steps.push(step),
                StepOutcome::Terminated(reason) => return (steps, reason),
            }
        }
    }

    /// Continue from an externally updated state
    ///
    /// Allowed while active or after any termination except `Solved`; the
    /// session becomes active again.
    ///
    /// # Errors
    /// Returns `SessionError::AlreadySolved` once the puzzle has been solved.
    pub fn replace_state(&mut self, puzzle: Puzzle) -> Result<(), SessionError> {
        if self.state == SessionState::Terminated(Termination::Solved) {
            return Err(SessionError::AlreadySolved);
        }
        self.working = puzzle;
        self.state = SessionState::Active;
        Ok(())
    }

    /// Reveal one hidden item of the working state and continue
    ///
    /// # Errors
    /// Returns `SessionError` if the session is solved or the slot is not
    /// hidden.
    pub fn reveal(&mut self, slot: Slot, colour: Colour) -> Result<(), SessionError> {
        let revealed = self.working.reveal(slot, colour)?;
        self.replace_state(revealed)
    }

    fn terminate(&mut self, reason: Termination) -> StepOutcome {
        info!("session terminated: {reason:?}");
        self.state = SessionState::Terminated(reason.clone());
        StepOutcome::Terminated(reason)
    }
}
