//! Mystery command
//!
//! Solves every completion of a puzzle's hidden items and saves the solvable
//! ones beside the puzzle file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::Puzzle;
use crate::levels::save_candidates;
use crate::mystery::{Deduction, MysteryResolver, Resolution, identify_hidden_items};
use crate::solver::SearchAlgorithm;

/// Result of resolving a puzzle's hidden items
#[derive(Debug)]
pub struct MysteryReport {
    pub resolution: Resolution,
    /// Hidden colours of each solvable candidate, in resolution order
    pub assignments: Vec<Vec<Deduction>>,
    /// Files written, in resolution order
    pub saved: Vec<PathBuf>,
}

/// Resolve `puzzle` and save each solvable candidate as `<stem>_solved/<n>.json`
///
/// # Errors
///
/// Returns an error if the visible colours admit no completion or a
/// candidate file cannot be written.
pub fn run_mystery<A: SearchAlgorithm + Sync>(
    puzzle_path: &Path,
    puzzle: &Puzzle,
    resolver: &MysteryResolver<A>,
) -> Result<MysteryReport> {
    let resolution = resolver
        .find_all_solutions(puzzle)
        .context("hidden items cannot be completed")?;

    let assignments = resolution
        .solutions
        .iter()
        .map(|c| identify_hidden_items(puzzle, &c.puzzle))
        .collect();

    let saved = save_candidates(puzzle_path, &resolution.solutions)
        .context("failed to save solved candidates")?;

    Ok(MysteryReport {
        resolution,
        assignments,
        saved,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::levels::{load_puzzle, solved_dir};

    #[test]
    fn saves_every_solvable_candidate() {
        let dir = std::env::temp_dir().join(format!("chroma_oracle_mystery_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("level.json");
        fs::write(&path, r#"[["?", "RED", "RED"], ["?", "BLUE", "BLUE"], []]"#).unwrap();

        let puzzle = load_puzzle(&path, Some(3)).unwrap();
        let report = run_mystery(&path, &puzzle, &MysteryResolver::default()).unwrap();

        assert_eq!(report.resolution.solutions.len(), 2);
        assert_eq!(report.saved.len(), 2);
        assert_eq!(report.saved[0], solved_dir(&path).join("1.json"));
        assert_eq!(report.assignments[0].len(), 2);

        let first = load_puzzle(&report.saved[0], Some(3)).unwrap();
        assert_eq!(first, report.resolution.solutions[0].puzzle);
    }
}
