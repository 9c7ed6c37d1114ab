//! Chroma Oracle - CLI
//!
//! Solves colour-sorting puzzles from JSON files, including puzzles with
//! hidden items.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chroma_oracle::{
    commands::{
        BenchmarkConfig, run_benchmark, run_interactive, run_match, run_mystery, run_strategy,
        solve_puzzle,
    },
    levels::{load_puzzle, validate_counts},
    mystery::{CountRule, MysteryResolver, ResolverConfig},
    output::{
        SpinnerObserver, print_benchmark_report, print_match_report, print_mystery_report,
        print_solve_report, print_strategy_report,
    },
    solver::{Algorithm, SearchLimits, Solver},
};
use clap::{Parser, Subcommand};
use log::debug;

#[derive(Parser)]
#[command(
    name = "chroma_oracle",
    about = "Colour-sorting puzzle solver with guaranteed-move analysis for hidden items",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Search algorithm: bfs (default, shortest solutions) or dfs
    #[arg(short, long, global = true, default_value = "bfs")]
    algorithm: String,

    /// Expansion cap per search (0 for no cap)
    #[arg(short = 'm', long, global = true, default_value_t = 1_000_000)]
    max_expansions: usize,

    /// Container capacity (default: size of the fullest container)
    #[arg(short, long, global = true)]
    capacity: Option<usize>,

    /// Hidden item rule: sets (each colour fills one container) or slots
    #[arg(long, global = true, default_value = "sets")]
    count_rule: String,

    /// Stop after this many hidden-item completions
    #[arg(long, global = true)]
    max_candidates: Option<usize>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a fully visible puzzle
    Solve {
        /// Puzzle file (.json)
        puzzle: PathBuf,

        /// Require every colour to fill exactly one container
        #[arg(long)]
        validate: bool,
    },

    /// Find the moves that are safe whatever the hidden items are
    Strategy {
        /// Puzzle file (.json)
        puzzle: PathBuf,

        /// Play step by step, revealing items as they are uncovered
        #[arg(short, long)]
        interactive: bool,
    },

    /// Solve every completion of the hidden items and save the solvable ones
    Mystery {
        /// Puzzle file (.json)
        puzzle: PathBuf,
    },

    /// Compare the opening moves of candidate files with a reference
    Match {
        /// Folder of candidate puzzle files
        folder: PathBuf,

        /// Reference puzzle file
        reference: PathBuf,

        /// Number of opening moves to compare
        #[arg(short = 'n', long, default_value = "2")]
        steps: usize,
    },

    /// Benchmark both algorithms on random puzzles
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Colours per puzzle
        #[arg(long, default_value = "4")]
        colours: usize,

        /// Random seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let algorithm = Algorithm::from_name(&cli.algorithm);
    let limits = match cli.max_expansions {
        0 => SearchLimits::unlimited(),
        max => SearchLimits::with_max_expansions(max),
    };
    let solver = Solver::new(algorithm, limits);
    let resolver = MysteryResolver::new(
        solver,
        ResolverConfig {
            count_rule: CountRule::from_name(&cli.count_rule),
            max_candidates: cli.max_candidates,
            ..ResolverConfig::default()
        },
    );
    debug!("{algorithm} with {limits:?}, {:?}", resolver.config());

    match cli.command {
        Commands::Solve { puzzle, validate } => {
            run_solve_command(&puzzle, cli.capacity, validate, &solver)
        }
        Commands::Strategy {
            puzzle,
            interactive,
        } => {
            if interactive {
                run_interactive(&puzzle, cli.capacity, resolver)
            } else {
                run_strategy_command(&puzzle, cli.capacity, &resolver)
            }
        }
        Commands::Mystery { puzzle } => run_mystery_command(&puzzle, cli.capacity, &resolver),
        Commands::Match {
            folder,
            reference,
            steps,
        } => {
            let report = run_match(&folder, &reference, steps, cli.capacity, &solver)?;
            print_match_report(&report);
            Ok(())
        }
        Commands::Benchmark {
            count,
            colours,
            seed,
        } => {
            let config = BenchmarkConfig {
                count,
                colours,
                capacity: cli.capacity.unwrap_or(BenchmarkConfig::default().capacity),
                seed,
                ..BenchmarkConfig::default()
            };
            println!("Running benchmark on {count} random puzzles...");
            let report = run_benchmark(config, limits)?;
            print_benchmark_report(&report);
            Ok(())
        }
    }
}

fn load(path: &Path, capacity: Option<usize>) -> Result<chroma_oracle::core::Puzzle> {
    load_puzzle(path, capacity).with_context(|| format!("failed to load {}", path.display()))
}

fn run_solve_command(
    path: &Path,
    capacity: Option<usize>,
    validate: bool,
    solver: &Solver,
) -> Result<()> {
    let puzzle = load(path, capacity)?;
    if validate {
        validate_counts(&puzzle).context("puzzle failed validation")?;
    }
    if puzzle.has_hidden() {
        bail!(
            "{} has hidden items; use the strategy or mystery command",
            path.display()
        );
    }

    let mut spinner = SpinnerObserver::new(solver.algorithm().to_string().as_str());
    let report = solve_puzzle(&puzzle, solver, &mut spinner)?;
    spinner.finish();

    print_solve_report(&report, &solver.algorithm().to_string());
    Ok(())
}

fn run_strategy_command(
    path: &Path,
    capacity: Option<usize>,
    resolver: &MysteryResolver,
) -> Result<()> {
    let puzzle = load(path, capacity)?;
    let report = run_strategy(&puzzle, resolver)?;
    print_strategy_report(&report, &puzzle);
    Ok(())
}

fn run_mystery_command(
    path: &Path,
    capacity: Option<usize>,
    resolver: &MysteryResolver,
) -> Result<()> {
    let puzzle = load(path, capacity)?;
    let report = run_mystery(path, &puzzle, resolver)?;
    print_mystery_report(&report);
    Ok(())
}
