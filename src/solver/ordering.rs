//! Move ordering heuristics for depth-first search
//!
//! Ordering only changes which branch is tried first; it never removes moves,
//! so it cannot affect whether a solution is found.

use crate::core::{Move, Puzzle};

/// Order in which depth-first search tries candidate moves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MoveOrdering {
    /// Container index order, as produced by `Puzzle::legal_moves`
    Natural,
    /// Prefer moves that complete a container, then moves onto a matching
    /// item, then moves into an empty container
    #[default]
    Greedy,
}

impl MoveOrdering {
    /// Reorder `moves` in place, most promising first
    ///
    /// Sorting is stable, so ties keep container index order.
    pub fn order(self, state: &Puzzle, moves: &mut [Move]) {
        if self == Self::Greedy {
            moves.sort_by_key(|&mv| std::cmp::Reverse(greedy_score(state, mv)));
        }
    }
}

/// Score a legal move, higher is better
///
/// - 4: fills the destination to a complete container
/// - 3: stacks onto a matching item
/// - 2: moves into an empty container from a mixed container
/// - 1: moves into an empty container from a single-colour container
#[must_use]
pub fn greedy_score(state: &Puzzle, mv: Move) -> u8 {
    let (Some(src), Some(dest)) = (state.container(mv.src), state.container(mv.dest)) else {
        return 0;
    };

    let capacity = state.capacity();
    if dest.len() + 1 == capacity && (dest.is_empty() || dest.is_uniform()) {
        4
    } else if !dest.is_empty() {
        3
    } else if src.is_uniform() {
        1
    } else {
        2
    }
}
