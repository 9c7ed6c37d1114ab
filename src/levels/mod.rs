//! Puzzle files
//!
//! Loads puzzles from JSON files and writes solved candidates back beside
//! them.

pub mod loader;

pub use loader::{
    LevelError, list_puzzle_files, load_puzzle, read_grid, save_candidates, save_puzzle,
    solved_dir, validate_counts,
};
