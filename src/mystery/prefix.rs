//! Agreement between candidate solutions

use rustc_hash::FxHashMap;

use crate::core::{Move, SearchPath};

/// What the shared prefix of a set of solution paths means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixStatus {
    /// At least one move is common to every solution
    Guaranteed,
    /// Every solution is the empty path
    AlreadySolved,
    /// Solutions disagree on the very first move
    Diverged,
    /// There were no solutions to compare
    NoSolutions,
}

/// Longest run of leading moves shared by every solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPrefix {
    pub moves: SearchPath,
    pub status: PrefixStatus,
}

impl CommonPrefix {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// First move that is safe whatever the hidden items are
    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.moves.first().copied()
    }
}

/// Longest common prefix across solution paths
///
/// An empty input is reported as `NoSolutions`, distinct from a set of empty
/// paths (`AlreadySolved`).
///
/// # Examples
/// ```
/// use chroma_oracle::core::Move;
/// use chroma_oracle::mystery::{find_common_prefix, PrefixStatus};
///
/// let a = Move::new(0, 1);
/// let paths = vec![
///     vec![a, Move::new(1, 2)],
///     vec![a, Move::new(2, 1)],
/// ];
/// let prefix = find_common_prefix(&paths);
/// assert_eq!(prefix.moves, vec![a]);
/// assert_eq!(prefix.status, PrefixStatus::Guaranteed);
/// ```
#[must_use]
pub fn find_common_prefix<P: AsRef<[Move]>>(paths: &[P]) -> CommonPrefix {
    let Some((first, rest)) = paths.split_first() else {
        return CommonPrefix {
            moves: Vec::new(),
            status: PrefixStatus::NoSolutions,
        };
    };

    let first = first.as_ref();
    let shared = rest.iter().fold(first.len(), |shared, path| {
        first
            .iter()
            .zip(path.as_ref())
            .take(shared)
            .take_while(|(a, b)| a == b)
            .count()
    });

    let status = if shared > 0 {
        PrefixStatus::Guaranteed
    } else if paths.iter().all(|p| p.as_ref().is_empty()) {
        PrefixStatus::AlreadySolved
    } else {
        PrefixStatus::Diverged
    };

    CommonPrefix {
        moves: first[..shared].to_vec(),
        status,
    }
}

/// How many solutions open with each move
///
/// Sorted by count (descending), then by move. Empty paths are skipped.
#[must_use]
pub fn first_move_tallies<P: AsRef<[Move]>>(paths: &[P]) -> Vec<(Move, usize)> {
    let mut counts: FxHashMap<Move, usize> = FxHashMap::default();
    for first in paths.iter().filter_map(|p| p.as_ref().first()) {
        *counts.entry(*first).or_insert(0) += 1;
    }

    let mut tallies: Vec<(Move, usize)> = counts.into_iter().collect();
    tallies.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    tallies
}
