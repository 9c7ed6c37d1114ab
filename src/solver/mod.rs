//! Puzzle search engine
//!
//! Breadth-first search for shortest solutions and depth-first search for
//! fast ones, behind a common `SearchAlgorithm` trait.

mod algorithm;
mod bfs;
mod dfs;
mod engine;
mod ordering;
pub mod search;
mod tree;

pub use algorithm::{Algorithm, SearchAlgorithm};
pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use engine::{Solver, apply_path, solve};
pub use ordering::{MoveOrdering, greedy_score};
pub use search::{
    NoProgress, SearchLimits, SearchObserver, SearchOutcome, SearchProgress, SearchResult,
    SearchStats,
};
