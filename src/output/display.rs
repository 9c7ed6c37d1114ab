//! Display functions for command results

use colored::Colorize;

use super::formatters::{container_blocks, container_names, move_line, percent};
use crate::commands::{BenchmarkReport, MatchReport, MatchVerdict, MysteryReport, SolveReport};
use crate::core::{Move, Puzzle};
use crate::mystery::{Deduction, PrefixStatus};
use crate::solver::SearchOutcome;
use crate::strategy::{SessionStep, StrategyReport, Termination};

fn print_header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print a puzzle, one container per line
///
/// Containers that differ from `previous` are marked.
pub fn print_puzzle(title: &str, puzzle: &Puzzle, previous: Option<&Puzzle>) {
    println!("\n{}", title.bold());
    for (i, container) in puzzle.containers().iter().enumerate() {
        let changed = previous
            .and_then(|p| p.container(i))
            .is_some_and(|before| before != container);
        let marker = if changed { "*".yellow().bold() } else { " ".normal() };
        println!(
            "{marker}{i:>3}: {}  {}",
            container_blocks(container, puzzle.capacity()),
            container_names(container).bright_black()
        );
    }
}

/// Print a numbered move list
pub fn print_moves(moves: &[Move]) {
    for (i, &mv) in moves.iter().enumerate() {
        println!("  {}", move_line(i + 1, mv));
    }
}

fn print_deductions(deductions: &[Deduction]) {
    for deduction in deductions {
        println!("  🔍 {deduction}");
    }
}

/// Print the result of solving a puzzle
pub fn print_solve_report(report: &SolveReport, algorithm: &str) {
    print_header("SOLVE");
    print_puzzle("Initial state:", &report.initial, None);
    println!("\nSearching using {algorithm}");

    match &report.result.outcome {
        SearchOutcome::Solved(path) => {
            println!(
                "\n{}",
                format!("✅ Solved in {} moves", path.len()).green().bold()
            );
            print_moves(path);
            if let Some(final_state) = &report.final_state {
                print_puzzle("Final state:", final_state, Some(&report.initial));
            }
        }
        SearchOutcome::Unsolvable => {
            println!("\n{}", "❌ Cannot be solved".red().bold());
        }
        SearchOutcome::LimitExceeded => {
            println!(
                "\n{}",
                "⚠️  Search limit reached before a solution was found"
                    .yellow()
                    .bold()
            );
        }
    }

    let stats = report.result.stats;
    println!(
        "\n   {} expanded, {} states seen, frontier peak {}, {:.2}s",
        stats.expanded,
        stats.visited,
        stats.max_frontier,
        report.duration.as_secs_f64()
    );
}

/// Print a one-shot strategy report
pub fn print_strategy_report(report: &StrategyReport, puzzle: &Puzzle) {
    print_header("WINNING STRATEGY");
    print_puzzle("Initial state:", puzzle, None);

    println!("\n📊 {}", "Candidates:".bright_cyan().bold());
    println!("   Tested:      {}", report.tested);
    println!("   Solvable:    {}", report.solutions);
    if report.limited > 0 {
        println!(
            "   Over limit:  {}",
            report.limited.to_string().yellow()
        );
    }

    if report.incomplete() {
        print_incomplete(report);
        return;
    }

    match report.status {
        PrefixStatus::AlreadySolved => {
            println!("\n{}", "🎉 The puzzle is already solved".green().bold());
            return;
        }
        PrefixStatus::NoSolutions => {
            println!(
                "\n{}",
                "❌ No completion of the hidden items can be solved".red().bold()
            );
            return;
        }
        PrefixStatus::Diverged => {
            println!(
                "\n{}",
                "⚠️  No guaranteed move: reveal more items first".yellow().bold()
            );
        }
        PrefixStatus::Guaranteed => {
            println!(
                "\n{}",
                format!("✅ Guaranteed safe moves: {}", report.guaranteed.len())
                    .green()
                    .bold()
            );
            print_moves(&report.guaranteed);
        }
    }

    if !report.deductions.is_empty() {
        println!("\n{}", "Deduced hidden items:".bright_cyan().bold());
        print_deductions(&report.deductions);
    }
    if report.unique.is_some() {
        println!("\n{}", "✨ Only one completion is solvable".bright_magenta().bold());
    }

    if !report.guaranteed.is_empty() {
        let replay = &report.replay;
        if let Some(failed) = &replay.failed {
            print_puzzle(
                &format!("State after {} moves ({failed}):", replay.applied),
                &replay.state,
                Some(puzzle),
            );
        } else {
            print_puzzle("State after guaranteed moves:", &replay.state, Some(puzzle));
        }
    }

    if report.needs_information() {
        println!("\n{}", "Opening moves across solutions:".bright_cyan().bold());
        for (mv, count) in &report.first_moves {
            println!(
                "  {mv}  {count:>4} ({:5.1}%)",
                percent(*count, report.solutions)
            );
        }
    }
}

fn print_incomplete(report: &StrategyReport) {
    println!(
        "\n{}",
        "⚠️  Not every completion was settled: no move is guaranteed"
            .yellow()
            .bold()
    );
    if report.limited > 0 {
        println!(
            "   {} completions hit the search limit; raise --max-expansions",
            report.limited
        );
    }
    if report.truncated {
        println!("   Enumeration stopped early; raise --max-candidates");
    }
    if !report.first_moves.is_empty() {
        println!(
            "\n{}",
            "Opening moves across the solutions found:".bright_cyan().bold()
        );
        for (mv, count) in &report.first_moves {
            println!("  {mv}  {count:>4}");
        }
    }
}

/// Print interactive session commands
pub fn print_session_help() {
    println!("\n{}", "Commands:".bright_cyan().bold());
    println!("  <enter>, step                  play the next guaranteed move");
    println!("  run                            play guaranteed moves until stuck");
    println!("  reveal CONTAINER POSITION COLOUR  record a revealed item");
    println!("  reload                         reload the puzzle file");
    println!("  show                           print the current state");
    println!("  quit                           leave the session");
}

/// Print one move played by the session
pub fn print_session_step(step: &SessionStep) {
    if !step.deductions.is_empty() {
        println!("{}", "Deduced hidden items:".bright_cyan());
        print_deductions(&step.deductions);
    }
    println!(
        "{} Container {} -> {}  ({} guaranteed)",
        "▶".green().bold(),
        step.mv.src,
        step.mv.dest,
        step.guaranteed
    );
}

/// Print why the session stopped
pub fn print_termination(reason: &Termination) {
    match reason {
        Termination::Solved => println!("{}", "🎉 Solved!".green().bold()),
        Termination::NoGuaranteedMove { first_moves } => {
            println!(
                "{}",
                "⚠️  No guaranteed move. Reveal an item or reload the puzzle."
                    .yellow()
                    .bold()
            );
            for (mv, count) in first_moves {
                println!("   {mv} opens {count} solutions");
            }
        }
        Termination::Unsolvable => println!(
            "{}",
            "❌ No completion of the hidden items can be solved".red().bold()
        ),
        Termination::LimitExceeded => println!(
            "{}",
            "⚠️  Some completions were not settled within the search or candidate limits"
                .yellow()
                .bold()
        ),
        Termination::Inconsistent(err) => {
            println!("{} {err}", "❌ Inconsistent puzzle:".red().bold());
        }
    }
}

/// Print the result of resolving hidden items
pub fn print_mystery_report(report: &MysteryReport) {
    print_header("MYSTERY");
    let resolution = &report.resolution;
    println!(
        "\n📊 {} of {} completions solvable",
        resolution.solutions.len().to_string().bright_yellow().bold(),
        resolution.tested
    );
    if resolution.truncated {
        println!("{}", "   Enumeration stopped at the candidate limit".yellow());
    }

    for ((candidate, assignment), path) in resolution
        .solutions
        .iter()
        .zip(&report.assignments)
        .zip(&report.saved)
    {
        println!(
            "\n{} ({} moves)",
            path.display().to_string().bold(),
            candidate.path.len()
        );
        print_deductions(assignment);
    }
}

/// Print the comparison of a folder against a reference
pub fn print_match_report(report: &MatchReport) {
    print_header("MATCH FIRST STEPS");
    let reference: Vec<String> = report.reference.iter().map(ToString::to_string).collect();
    println!(
        "\nReference first {} moves: {}",
        report.steps,
        reference.join(" ")
    );

    for file in &report.files {
        let name = file
            .path
            .file_name()
            .map_or_else(|| file.path.display().to_string(), |n| n.to_string_lossy().into_owned());
        match file.verdict {
            MatchVerdict::Match => println!(
                "{} {name}: first {} moves equal",
                "MATCH".green().bold(),
                report.steps
            ),
            MatchVerdict::Partial { matched } => println!(
                "{} {name}: {matched}/{} moves match",
                "PARTIAL".yellow().bold(),
                report.steps
            ),
            MatchVerdict::Differ => println!(
                "{} {name}: 0/{} moves match",
                "DIFFER".red().bold(),
                report.steps
            ),
            MatchVerdict::NoSolution => println!("{name}: no solution"),
        }
    }
    for (path, reason) in &report.skipped {
        println!("Skipping {}: {reason}", path.display());
    }

    println!("\nDone. {} full matches found.", report.full_matches().len());
}

/// Print the result of a benchmark
pub fn print_benchmark_report(report: &BenchmarkReport) {
    print_header("BENCHMARK RESULTS");
    let config = report.config;
    println!(
        "\n🎲 {} puzzles: {} colours, capacity {}, {} empty, seed {}",
        config.count, config.colours, config.capacity, config.empty, config.seed
    );

    for stats in &report.stats {
        println!("\n📊 {}", stats.algorithm.to_string().bright_cyan().bold());
        println!(
            "   Solved:        {} ({:.1}%)",
            stats.solved.to_string().green(),
            percent(stats.solved, config.count)
        );
        println!("   Unsolvable:    {}", stats.unsolvable.to_string().red());
        println!("   Limit reached: {}", stats.limited.to_string().yellow());
        println!(
            "   Average moves: {}",
            format!("{:.2}", stats.average_moves()).bright_yellow().bold()
        );
        println!("   Expanded:      {}", stats.total_expanded);
        println!("   Time taken:    {:.2}s", stats.duration.as_secs_f64());
    }

    println!("\n   Total time:    {:.2}s", report.duration.as_secs_f64());
}
