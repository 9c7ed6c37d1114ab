//! Errors for malformed puzzles and illegal moves

use super::Move;

/// A puzzle configuration that cannot be represented
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    /// Colour token outside the known vocabulary
    #[error("unknown colour '{0}'")]
    UnknownColour(String),
    /// Capacity of zero, or inferred from a puzzle with no items
    #[error("container capacity must be at least 1")]
    ZeroCapacity,
    /// Container holds more items than the capacity allows
    #[error("container {container} holds {len} items but capacity is {capacity}")]
    OverCapacity {
        container: usize,
        len: usize,
        capacity: usize,
    },
    /// Puzzle has no containers at all
    #[error("puzzle has no containers")]
    NoContainers,
    /// Slot addressed by a reveal does not exist
    #[error("container {container} has no item at position {position}")]
    NoSuchSlot { container: usize, position: usize },
    /// Slot addressed by a reveal is not hidden
    #[error("container {container} position {position} is already known")]
    SlotNotHidden { container: usize, position: usize },
    /// Reveal supplied the hidden marker itself
    #[error("a revealed colour must be concrete")]
    RevealUnknown,
}

/// Why a move is not legal in a given state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalReason {
    /// Source or destination index out of range
    OutOfRange,
    /// Source and destination are the same container
    SameContainer,
    /// Nothing to move
    SourceEmpty,
    /// Source top item is still hidden
    SourceHidden,
    /// Destination is at capacity
    DestinationFull,
    /// Destination top does not match the moving item
    ColourMismatch,
}

impl IllegalReason {
    const fn describe(self) -> &'static str {
        match self {
            Self::OutOfRange => "container index out of range",
            Self::SameContainer => "source and destination are the same",
            Self::SourceEmpty => "source container is empty",
            Self::SourceHidden => "source top item is hidden",
            Self::DestinationFull => "destination container is full",
            Self::ColourMismatch => "destination top colour differs",
        }
    }
}

/// Attempted to apply a move that violates the legality rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal move {mv}: {}", reason.describe())]
pub struct IllegalMoveError {
    pub mv: Move,
    pub reason: IllegalReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_move_message() {
        let err = IllegalMoveError {
            mv: Move::new(0, 2),
            reason: IllegalReason::DestinationFull,
        };
        assert_eq!(
            err.to_string(),
            "illegal move (0, 2): destination container is full"
        );
    }

    #[test]
    fn over_capacity_message() {
        let err = PuzzleError::OverCapacity {
            container: 1,
            len: 5,
            capacity: 4,
        };
        assert_eq!(
            err.to_string(),
            "container 1 holds 5 items but capacity is 4"
        );
    }
}
