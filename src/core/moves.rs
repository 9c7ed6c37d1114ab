//! Moves between containers

use std::fmt;

/// Transfer of the top item from one container to another
///
/// Containers are referenced by their position in the puzzle, the same
/// indices the puzzle file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub src: usize,
    pub dest: usize,
}

/// Ordered sequence of moves from a start state to a goal state
pub type SearchPath = Vec<Move>;

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(src: usize, dest: usize) -> Self {
        Self { src, dest }
    }

    /// The move in the opposite direction
    ///
    /// Moves are not self-inverse in general: applying the reverse only
    /// undoes a move when the item can legally travel back.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        Self {
            src: self.dest,
            dest: self.src,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.src, self.dest)
    }
}

impl From<(usize, usize)> for Move {
    fn from((src, dest): (usize, usize)) -> Self {
        Self::new(src, dest)
    }
}
