//! Replaying a solution against the state the player actually sees

use crate::core::{IllegalMoveError, Move, Puzzle};

/// Result of replaying moves on a partially hidden puzzle
///
/// Replay stops at the first move the raw state cannot make, typically one
/// that would lift a hidden item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    /// State after the last applied move
    pub state: Puzzle,
    /// Number of moves applied
    pub applied: usize,
    /// The move that could not be made, if any
    pub failed: Option<IllegalMoveError>,
}

impl Replay {
    /// Every move was applied
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.failed.is_none()
    }
}

/// Apply `moves` to `raw` until one is illegal
#[must_use]
pub fn replay(raw: &Puzzle, moves: &[Move]) -> Replay {
    let mut state = raw.clone();
    for (applied, &mv) in moves.iter().enumerate() {
        match state.apply(mv) {
            Ok(next) => state = next,
            Err(err) => {
                return Replay {
                    state,
                    applied,
                    failed: Some(err),
                };
            }
        }
    }

    Replay {
        state,
        applied: moves.len(),
        failed: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IllegalReason;

    fn puzzle(grid: &[&[&str]], capacity: usize) -> Puzzle {
        let owned: Vec<Vec<&str>> = grid.iter().map(|c| c.to_vec()).collect();
        Puzzle::from_grid(&owned, Some(capacity)).unwrap()
    }

    #[test]
    fn stops_at_hidden_item() {
        let raw = puzzle(&[&["RED", "?", "BLUE"], &["BLUE", "BLUE"], &["RED", "RED"]], 3);
        let moves = [Move::new(0, 1), Move::new(0, 2)];
        let result = replay(&raw, &moves);

        assert!(!result.completed());
        assert_eq!(result.applied, 1);
        let err = result.failed.unwrap();
        assert_eq!(err.mv, Move::new(0, 2));
        assert_eq!(err.reason, IllegalReason::SourceHidden);
        assert_eq!(result.state.container(1).unwrap().len(), 3);
    }

    #[test]
    fn completes_on_visible_moves() {
        let raw = puzzle(&[&["RED", "BLUE"], &["RED"], &["BLUE"]], 2);
        let result = replay(&raw, &[Move::new(0, 2), Move::new(0, 1)]);
        assert!(result.completed());
        assert_eq!(result.applied, 2);
        assert!(result.state.is_goal());
    }

    #[test]
    fn empty_replay_is_identity() {
        let raw = puzzle(&[&["?", "RED"], &[]], 2);
        let result = replay(&raw, &[]);
        assert_eq!(result.state, raw);
        assert!(result.completed());
    }
}
