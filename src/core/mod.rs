//! Core domain types for stack puzzles
//!
//! This module contains the puzzle model with no search logic: colours,
//! containers, moves, and the immutable puzzle state with its legality rules.

mod colour;
mod container;
mod error;
mod moves;
mod puzzle;

pub use colour::Colour;
pub use container::Container;
pub use error::{IllegalMoveError, IllegalReason, PuzzleError};
pub use moves::{Move, SearchPath};
pub use puzzle::{Puzzle, Slot, StateKey};
