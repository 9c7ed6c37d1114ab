//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
pub mod progress;

pub use display::{
    print_benchmark_report, print_match_report, print_moves, print_mystery_report,
    print_puzzle, print_session_help, print_session_step, print_solve_report,
    print_strategy_report, print_termination,
};
pub use progress::SpinnerObserver;
