//! Command implementations

pub mod benchmark;
pub mod match_steps;
pub mod mystery;
pub mod solve;
pub mod strategy;

pub use benchmark::{AlgorithmStats, BenchmarkConfig, BenchmarkReport, random_puzzle, run_benchmark};
pub use match_steps::{FileMatch, MatchReport, MatchVerdict, compare_openings, run_match};
pub use mystery::{MysteryReport, run_mystery};
pub use solve::{SolveReport, solve_puzzle};
pub use strategy::{SessionAction, parse_action, run_interactive, run_strategy};
