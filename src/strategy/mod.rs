//! Safe play under hidden information
//!
//! `analyze` reports everything known about a puzzle in one pass;
//! `StrategySession` plays the guaranteed moves one at a time and accepts
//! revealed items as they become visible.

mod report;
mod session;

pub use report::{StrategyReport, analyze};
pub use session::{
    SessionError, SessionState, SessionStep, StepOutcome, StrategySession, Termination,
};
