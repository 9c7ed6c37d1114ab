//! Puzzle file loading and saving
//!
//! A puzzle file is a JSON array of containers, each an array of colour
//! names listed bottom to top. `"?"` marks a hidden item.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::{Colour, Puzzle, PuzzleError};
use crate::mystery::Candidate;

/// Failure reading, writing or validating a puzzle file
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("{}: only .json puzzle files are supported", path.display())]
    UnsupportedFormat { path: PathBuf },
    #[error("cannot access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not a valid puzzle file", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
    #[error("{colour} appears {count} times, expected {capacity}")]
    InvalidCount {
        colour: Colour,
        count: usize,
        capacity: usize,
    },
    #[error("{count} items are hidden; a complete puzzle is required")]
    HiddenItems { count: usize },
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> LevelError + '_ {
    move |source| LevelError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Read the raw colour grid from a puzzle file
///
/// # Errors
/// Returns `LevelError` if the file is not `.json`, cannot be read, or is not
/// an array of string arrays.
pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>, LevelError> {
    let path = path.as_ref();
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(LevelError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(io_error(path))?;
    serde_json::from_str(&content).map_err(|source| LevelError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a puzzle from a file
///
/// The capacity is inferred from the fullest container unless given.
///
/// # Errors
/// Returns `LevelError` if the file cannot be read or describes an invalid
/// puzzle.
///
/// # Examples
/// ```no_run
/// use chroma_oracle::levels::load_puzzle;
///
/// let puzzle = load_puzzle("levels/level_1.json", Some(4)).unwrap();
/// println!("Loaded {} containers", puzzle.len());
/// ```
pub fn load_puzzle<P: AsRef<Path>>(path: P, capacity: Option<usize>) -> Result<Puzzle, LevelError> {
    let grid = read_grid(path)?;
    Ok(Puzzle::from_grid(&grid, capacity)?)
}

/// Check that every colour fills exactly one container
///
/// # Errors
/// Returns `LevelError` for hidden items or a colour count other than the
/// capacity.
pub fn validate_counts(puzzle: &Puzzle) -> Result<(), LevelError> {
    let hidden = puzzle.hidden_slots().len();
    if hidden > 0 {
        return Err(LevelError::HiddenItems { count: hidden });
    }

    let capacity = puzzle.capacity();
    puzzle
        .colour_counts()
        .iter()
        .zip(Colour::CONCRETE)
        .find(|&(&count, _)| count != 0 && count != capacity)
        .map_or(Ok(()), |(&count, colour)| {
            Err(LevelError::InvalidCount {
                colour,
                count,
                capacity,
            })
        })
}

/// Write a puzzle as pretty-printed JSON, creating parent folders
///
/// # Errors
/// Returns `LevelError::Io` if the file cannot be written.
pub fn save_puzzle<P: AsRef<Path>>(path: P, puzzle: &Puzzle) -> Result<(), LevelError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }

    let json = serde_json::to_string_pretty(&puzzle.to_grid()).map_err(|source| {
        LevelError::Json {
            path: path.to_path_buf(),
            source,
        }
    })?;
    fs::write(path, json).map_err(io_error(path))
}

/// Folder that holds the solved candidates of a puzzle file
///
/// `levels/level_1.json` maps to `levels/level_1_solved`.
#[must_use]
pub fn solved_dir(puzzle_path: &Path) -> PathBuf {
    let stem = puzzle_path
        .file_stem()
        .map_or_else(|| "puzzle".into(), |s| s.to_string_lossy());
    puzzle_path.with_file_name(format!("{stem}_solved"))
}

/// Save each candidate as `<n>.json` (1-based) under the puzzle's solved folder
///
/// # Errors
/// Returns `LevelError::Io` if a file cannot be written.
pub fn save_candidates(puzzle_path: &Path, candidates: &[Candidate]) -> Result<Vec<PathBuf>, LevelError> {
    let dir = solved_dir(puzzle_path);
    candidates
        .iter()
        .enumerate()
        .map(|(i, candidate)| {
            let path = dir.join(format!("{}.json", i + 1));
            save_puzzle(&path, &candidate.puzzle)?;
            Ok(path)
        })
        .collect()
}

/// Puzzle files in a folder, sorted by name
///
/// # Errors
/// Returns `LevelError::Io` if the folder cannot be listed.
pub fn list_puzzle_files<P: AsRef<Path>>(folder: P) -> Result<Vec<PathBuf>, LevelError> {
    let folder = folder.as_ref();
    let mut files: Vec<PathBuf> = fs::read_dir(folder)
        .map_err(io_error(folder))?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();
    files.sort();
    Ok(files)
}
