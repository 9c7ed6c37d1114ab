//! Benchmark command
//!
//! Generates random shuffled puzzles from a seed and solves each one with
//! every search algorithm.

use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::core::{Colour, Container, Puzzle, PuzzleError};
use crate::solver::{Algorithm, SearchAlgorithm, SearchLimits, SearchOutcome, Solver};

/// Shape and number of generated puzzles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub count: usize,
    pub colours: usize,
    pub capacity: usize,
    /// Empty containers added to every puzzle
    pub empty: usize,
    pub seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 20,
            colours: 4,
            capacity: 4,
            empty: 2,
            seed: 42,
        }
    }
}

/// Totals for one algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmStats {
    pub algorithm: Algorithm,
    pub solved: usize,
    pub unsolvable: usize,
    pub limited: usize,
    /// Sum of solution lengths over solved puzzles
    pub total_moves: usize,
    pub total_expanded: usize,
    pub duration: Duration,
}

impl AlgorithmStats {
    fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            solved: 0,
            unsolvable: 0,
            limited: 0,
            total_moves: 0,
            total_expanded: 0,
            duration: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn average_moves(&self) -> f64 {
        if self.solved == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.solved as f64
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub config: BenchmarkConfig,
    pub stats: Vec<AlgorithmStats>,
    pub duration: Duration,
}

/// Deal `colours` full sets of `capacity` items at random into containers
///
/// # Errors
///
/// Returns `PuzzleError` if the shape is empty.
pub fn random_puzzle(
    rng: &mut StdRng,
    colours: usize,
    capacity: usize,
    empty: usize,
) -> Result<Puzzle, PuzzleError> {
    let mut items: Vec<Colour> = Colour::CONCRETE
        .iter()
        .take(colours)
        .flat_map(|&colour| std::iter::repeat_n(colour, capacity))
        .collect();
    items.shuffle(rng);

    let containers = items
        .chunks(capacity.max(1))
        .map(|chunk| Container::new(chunk.to_vec()))
        .chain(std::iter::repeat_with(Container::empty).take(empty))
        .collect();
    Puzzle::new(containers, capacity)
}

/// Run the benchmark with BFS and DFS under `limits`
///
/// # Errors
///
/// Returns an error for more colours than the palette holds or an empty
/// puzzle shape.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_benchmark(config: BenchmarkConfig, limits: SearchLimits) -> Result<BenchmarkReport> {
    if config.colours == 0 || config.colours > Colour::COUNT {
        bail!("colours must be between 1 and {}", Colour::COUNT);
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let puzzles = (0..config.count)
        .map(|_| random_puzzle(&mut rng, config.colours, config.capacity, config.empty))
        .collect::<Result<Vec<_>, _>>()?;

    let algorithms = [Algorithm::bfs(), Algorithm::dfs()];
    let pb = ProgressBar::new((puzzles.len() * algorithms.len()) as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();
    let mut stats = Vec::with_capacity(algorithms.len());
    for algorithm in algorithms {
        let solver = Solver::new(algorithm, limits);
        let mut totals = AlgorithmStats::new(algorithm);
        pb.set_message(algorithm.name());

        for puzzle in &puzzles {
            let start = Instant::now();
            let result = solver.solve(puzzle);
            totals.duration += start.elapsed();
            totals.total_expanded += result.stats.expanded;
            match result.outcome {
                SearchOutcome::Solved(path) => {
                    totals.solved += 1;
                    totals.total_moves += path.len();
                }
                SearchOutcome::Unsolvable => totals.unsolvable += 1,
                SearchOutcome::LimitExceeded => totals.limited += 1,
            }
            pb.inc(1);
        }
        stats.push(totals);
    }
    pb.finish_and_clear();

    Ok(BenchmarkReport {
        config,
        stats,
        duration: total_start.elapsed(),
    })
}
