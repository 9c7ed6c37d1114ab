//! Match command
//!
//! Compares the opening moves of each candidate file in a folder against a
//! reference puzzle's opening moves.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::warn;

use crate::core::{Move, SearchPath};
use crate::levels::{list_puzzle_files, load_puzzle};
use crate::solver::{SearchAlgorithm, Solver};

/// How a candidate's opening compares with the reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchVerdict {
    /// The first moves are identical
    Match,
    /// Some leading moves agree
    Partial { matched: usize },
    /// The very first move differs
    Differ,
    /// The candidate could not be solved
    NoSolution,
}

/// One compared file
#[derive(Debug, Clone)]
pub struct FileMatch {
    pub path: PathBuf,
    pub moves: SearchPath,
    pub verdict: MatchVerdict,
}

/// Result of comparing a folder against a reference
#[derive(Debug, Clone)]
pub struct MatchReport {
    /// Opening moves of the reference solution
    pub reference: SearchPath,
    /// Number of moves compared
    pub steps: usize,
    pub files: Vec<FileMatch>,
    /// Files that could not be loaded, with the reason
    pub skipped: Vec<(PathBuf, String)>,
}

impl MatchReport {
    /// Files whose opening equals the reference's
    #[must_use]
    pub fn full_matches(&self) -> Vec<&Path> {
        self.files
            .iter()
            .filter(|f| f.verdict == MatchVerdict::Match)
            .map(|f| f.path.as_path())
            .collect()
    }
}

/// Compare the first `steps` moves of two solutions
#[must_use]
pub fn compare_openings(reference: &[Move], candidate: &[Move], steps: usize) -> MatchVerdict {
    let reference = &reference[..steps.min(reference.len())];
    let candidate = &candidate[..steps.min(candidate.len())];

    if reference == candidate {
        return MatchVerdict::Match;
    }
    match reference
        .iter()
        .zip(candidate)
        .take_while(|(a, b)| a == b)
        .count()
    {
        0 => MatchVerdict::Differ,
        matched => MatchVerdict::Partial { matched },
    }
}

fn opening<A: SearchAlgorithm>(
    path: &Path,
    capacity: Option<usize>,
    steps: usize,
    solver: &Solver<A>,
) -> Result<Option<SearchPath>> {
    let puzzle = load_puzzle(path, capacity)?;
    Ok(solver.solve(&puzzle).outcome.into_path().map(|mut moves| {
        moves.truncate(steps);
        moves
    }))
}

/// Compare every `.json` file in `folder` against `reference`
///
/// # Errors
///
/// Returns an error if the reference cannot be loaded or solved, or the
/// folder cannot be listed. Unreadable candidate files are skipped.
pub fn run_match<A: SearchAlgorithm>(
    folder: &Path,
    reference: &Path,
    steps: usize,
    capacity: Option<usize>,
    solver: &Solver<A>,
) -> Result<MatchReport> {
    let Some(reference_moves) = opening(reference, capacity, steps, solver)
        .with_context(|| format!("failed to load reference {}", reference.display()))?
    else {
        bail!("reference puzzle {} has no solution", reference.display());
    };

    let mut files = Vec::new();
    let mut skipped = Vec::new();
    for path in list_puzzle_files(folder)? {
        match opening(&path, capacity, steps, solver) {
            Ok(Some(moves)) => files.push(FileMatch {
                verdict: compare_openings(&reference_moves, &moves, steps),
                moves,
                path,
            }),
            Ok(None) => files.push(FileMatch {
                path,
                moves: Vec::new(),
                verdict: MatchVerdict::NoSolution,
            }),
            Err(err) => {
                warn!("skipping {}: {err:#}", path.display());
                skipped.push((path, format!("{err:#}")));
            }
        }
    }

    Ok(MatchReport {
        reference: reference_moves,
        steps,
        files,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const A: Move = Move { src: 0, dest: 1 };
    const B: Move = Move { src: 1, dest: 2 };
    const C: Move = Move { src: 2, dest: 0 };

    #[test]
    fn verdicts_from_shared_opening() {
        assert_eq!(compare_openings(&[A, B], &[A, B, C], 2), MatchVerdict::Match);
        assert_eq!(
            compare_openings(&[A, B], &[A, C], 2),
            MatchVerdict::Partial { matched: 1 }
        );
        assert_eq!(compare_openings(&[A, B], &[B, A], 2), MatchVerdict::Differ);
    }

    #[test]
    fn short_solutions_compare_what_they_have() {
        assert_eq!(compare_openings(&[A], &[A], 3), MatchVerdict::Match);
        assert_eq!(
            compare_openings(&[A, B], &[A], 2),
            MatchVerdict::Partial { matched: 1 }
        );
    }

    #[test]
    fn folder_is_matched_against_reference() {
        let dir = std::env::temp_dir().join(format!("chroma_oracle_match_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let folder = dir.join("candidates");
        fs::create_dir_all(&folder).unwrap();

        let reference = dir.join("reference.json");
        fs::write(&reference, r#"[["RED", "BLUE"], ["RED"], ["BLUE"]]"#).unwrap();
        fs::write(folder.join("1.json"), r#"[["RED", "BLUE"], ["RED"], ["BLUE"]]"#).unwrap();
        fs::write(folder.join("2.json"), r#"[["RED", "BLUE"], ["BLUE", "RED"]]"#).unwrap();
        fs::write(folder.join("3.json"), "not json").unwrap();
        fs::write(folder.join("notes.txt"), "ignored").unwrap();

        let report = run_match(&folder, &reference, 2, Some(2), &Solver::default()).unwrap();
        assert_eq!(report.reference, vec![Move::new(0, 2), Move::new(0, 1)]);
        assert_eq!(report.files.len(), 2);
        assert_eq!(report.files[0].verdict, MatchVerdict::Match);
        assert_eq!(report.files[1].verdict, MatchVerdict::NoSolution);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.full_matches(), vec![folder.join("1.json").as_path()]);
    }
}
