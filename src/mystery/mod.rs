//! Puzzles with hidden items
//!
//! A hidden item is unknown until the items above it are moved away. This
//! module enumerates every concrete completion consistent with the visible
//! colour counts, solves each one, and reports what the solutions have in
//! common: the moves that are safe whatever the hidden items turn out to be,
//! and the hidden colours every solvable completion agrees on.

mod assignments;
mod hidden;
mod prefix;
mod replay;
mod resolver;
mod rules;

pub use assignments::{Assignments, enumerate_assignments};
pub use hidden::{Deduction, apply_deductions, deduce_hidden, identify_hidden_items};
pub use prefix::{CommonPrefix, PrefixStatus, find_common_prefix, first_move_tallies};
pub use replay::{Replay, replay};
pub use resolver::{
    BATCH_SIZE, Candidate, MysteryResolver, Resolution, ResolverConfig, SolvePolicy,
    find_all_solutions,
};
pub use rules::{ColourBudget, CountRule, InconsistentHiddenState};
