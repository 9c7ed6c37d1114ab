//! Search limits, outcomes and progress reporting shared by all algorithms

use crate::core::SearchPath;

/// Default node-expansion cap
pub const DEFAULT_MAX_EXPANSIONS: usize = 1_000_000;

/// How often (in expansions) observers receive progress
pub const PROGRESS_INTERVAL: usize = 1024;

/// Resource caps for a single search
///
/// The expansion cap is the only cancellation mechanism: a caller wanting an
/// early stop configures a smaller cap before searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of states expanded, `None` for no cap
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_expansions: None,
        }
    }

    #[must_use]
    pub const fn with_max_expansions(max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }

    /// Whether another expansion would exceed the cap
    #[inline]
    #[must_use]
    pub const fn reached(&self, expanded: usize) -> bool {
        match self.max_expansions {
            Some(max) => expanded >= max,
            None => false,
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::with_max_expansions(DEFAULT_MAX_EXPANSIONS)
    }
}

/// Final classification of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A goal was reached by this path (empty if the start was a goal)
    Solved(SearchPath),
    /// The frontier emptied without reaching a goal
    Unsolvable,
    /// The expansion cap stopped the search before it finished
    LimitExceeded,
}

impl SearchOutcome {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    #[must_use]
    pub fn path(&self) -> Option<&SearchPath> {
        match self {
            Self::Solved(path) => Some(path),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_path(self) -> Option<SearchPath> {
        match self {
            Self::Solved(path) => Some(path),
            _ => None,
        }
    }
}

/// Counters collected during a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States taken off the frontier and expanded
    pub expanded: usize,
    /// Distinct states discovered, the start included
    pub visited: usize,
    /// Largest frontier size seen
    pub max_frontier: usize,
}

/// Outcome plus counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

impl SearchResult {
    #[must_use]
    pub const fn new(outcome: SearchOutcome, stats: SearchStats) -> Self {
        Self { outcome, stats }
    }
}

/// Snapshot delivered to observers while a search runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProgress {
    pub expanded: usize,
    pub frontier: usize,
    pub visited: usize,
}

/// Receives progress events from a running search
///
/// Searches behave identically whether or not anything observes them.
pub trait SearchObserver {
    fn on_progress(&mut self, progress: SearchProgress);
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl SearchObserver for NoProgress {
    fn on_progress(&mut self, _progress: SearchProgress) {}
}

impl<F: FnMut(SearchProgress)> SearchObserver for F {
    fn on_progress(&mut self, progress: SearchProgress) {
        self(progress);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Move;

    #[test]
    fn limits_reached() {
        let limits = SearchLimits::with_max_expansions(3);
        assert!(!limits.reached(2));
        assert!(limits.reached(3));
        assert!(!SearchLimits::unlimited().reached(usize::MAX));
    }

    #[test]
    fn default_limits_are_capped() {
        assert_eq!(
            SearchLimits::default().max_expansions,
            Some(DEFAULT_MAX_EXPANSIONS)
        );
    }

    #[test]
    fn outcome_accessors() {
        let solved = SearchOutcome::Solved(vec![Move::new(0, 1)]);
        assert!(solved.is_solved());
        assert_eq!(solved.path(), Some(&vec![Move::new(0, 1)]));
        assert_eq!(solved.into_path(), Some(vec![Move::new(0, 1)]));

        assert!(!SearchOutcome::Unsolvable.is_solved());
        assert_eq!(SearchOutcome::LimitExceeded.path(), None);
    }

    #[test]
    fn closures_observe_progress() {
        let mut seen = Vec::new();
        let mut observer = |p: SearchProgress| seen.push(p.expanded);
        observer.on_progress(SearchProgress {
            expanded: 5,
            frontier: 1,
            visited: 6,
        });
        assert_eq!(seen, vec![5]);
    }
}
