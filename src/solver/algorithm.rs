//! Search algorithm selection
//!
//! Defines the `SearchAlgorithm` trait and the runtime-selectable wrapper.

use std::fmt;

use super::bfs::BreadthFirst;
use super::dfs::DepthFirst;
use super::search::{SearchLimits, SearchObserver, SearchResult};
use crate::core::Puzzle;

/// A graph search over puzzle states
pub trait SearchAlgorithm {
    /// Short display name
    fn name(&self) -> &'static str;

    /// Search from `start` towards any goal state
    ///
    /// Legitimate negative results (exhausted frontier, cap reached) are
    /// reported in the outcome, never as errors.
    fn search(
        &self,
        start: &Puzzle,
        limits: SearchLimits,
        observer: &mut dyn SearchObserver,
    ) -> SearchResult;
}

/// Enum wrapper for all algorithms
///
/// Allows runtime selection while keeping static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Breadth-first, shortest paths (default)
    BreadthFirst(BreadthFirst),
    /// Depth-first with move ordering
    DepthFirst(DepthFirst),
}

impl Algorithm {
    #[must_use]
    pub const fn bfs() -> Self {
        Self::BreadthFirst(BreadthFirst)
    }

    #[must_use]
    pub fn dfs() -> Self {
        Self::DepthFirst(DepthFirst::default())
    }

    /// Create an algorithm from its name
    ///
    /// Supported names: "bfs", "breadth-first", "dfs", "depth-first" (any case).
    /// Defaults to breadth-first if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" | "depth_first" => Self::dfs(),
            _ => Self::bfs(),
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Self::bfs()
    }
}

impl SearchAlgorithm for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst(a) => a.name(),
            Self::DepthFirst(a) => a.name(),
        }
    }

    fn search(
        &self,
        start: &Puzzle,
        limits: SearchLimits,
        observer: &mut dyn SearchObserver,
    ) -> SearchResult {
        match self {
            Self::BreadthFirst(a) => a.search(start, limits, observer),
            Self::DepthFirst(a) => a.search(start, limits, observer),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::BreadthFirst(_) => "Breadth-First Search",
            Self::DepthFirst(_) => "Depth-First Search",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_recognises_aliases() {
        assert_eq!(Algorithm::from_name("bfs"), Algorithm::bfs());
        assert_eq!(Algorithm::from_name("BFS"), Algorithm::bfs());
        assert_eq!(Algorithm::from_name("DFS"), Algorithm::dfs());
        assert_eq!(Algorithm::from_name("depth-first"), Algorithm::dfs());
    }

    #[test]
    fn from_name_defaults_to_bfs() {
        assert_eq!(Algorithm::from_name("astar"), Algorithm::bfs());
        assert_eq!(Algorithm::default(), Algorithm::bfs());
    }

    #[test]
    fn names_and_labels() {
        assert_eq!(Algorithm::bfs().name(), "BFS");
        assert_eq!(Algorithm::dfs().name(), "DFS");
        assert_eq!(Algorithm::dfs().to_string(), "Depth-First Search");
    }
}
