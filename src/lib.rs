//! Chroma Oracle
//!
//! A solver for colour-sorting puzzles: containers of stacked coloured items
//! where only the top item can move and only onto a matching colour or into
//! empty space. Items may be hidden until uncovered; for those puzzles the
//! crate enumerates every consistent completion and reports the moves that
//! are safe whatever the hidden items turn out to be.
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_oracle::core::Puzzle;
//! use chroma_oracle::solver::Solver;
//!
//! let puzzle = Puzzle::from_grid(
//!     &[vec!["RED", "BLUE"], vec!["BLUE", "RED"], vec![]],
//!     Some(2),
//! ).unwrap();
//!
//! let result = Solver::default().solve(&puzzle);
//! println!("Solution: {:?}", result.outcome.path());
//! ```

// Core domain types
pub mod core;

// Search algorithms
pub mod solver;

// Hidden-item enumeration and resolution
pub mod mystery;

// Guaranteed-move analysis and sessions
pub mod strategy;

// Puzzle files
pub mod levels;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
