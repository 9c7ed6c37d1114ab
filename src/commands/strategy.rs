//! Strategy commands
//!
//! One-shot analysis of a puzzle with hidden items, and the interactive
//! session that plays guaranteed moves while the player reveals items.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};

use crate::core::{Colour, Puzzle, Slot};
use crate::levels::load_puzzle;
use crate::mystery::MysteryResolver;
use crate::output::{
    print_puzzle, print_session_help, print_session_step, print_termination,
};
use crate::solver::SearchAlgorithm;
use crate::strategy::{
    SessionState, StepOutcome, StrategyReport, StrategySession, Termination, analyze,
};

/// Analyze `puzzle` without playing any move
///
/// # Errors
///
/// Returns an error if the visible colours admit no completion.
pub fn run_strategy<A: SearchAlgorithm + Clone + Sync>(
    puzzle: &Puzzle,
    resolver: &MysteryResolver<A>,
) -> Result<StrategyReport> {
    analyze(puzzle, resolver).context("hidden items cannot be completed")
}

/// A command typed during an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Play the next guaranteed move
    Step,
    /// Play guaranteed moves until the session stops
    Run,
    /// Record a revealed item
    Reveal { slot: Slot, colour: Colour },
    /// Replace the working state with the puzzle file's current contents
    Reload,
    Show,
    Help,
    Quit,
}

/// Parse one line of session input
///
/// An empty line steps once.
///
/// # Errors
///
/// Returns an error for unknown commands or malformed reveal arguments.
pub fn parse_action(line: &str) -> Result<SessionAction> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(SessionAction::Step);
    };

    let action = match command.to_ascii_lowercase().as_str() {
        "s" | "step" => SessionAction::Step,
        "r" | "run" => SessionAction::Run,
        "reload" => SessionAction::Reload,
        "show" => SessionAction::Show,
        "h" | "help" | "?" => SessionAction::Help,
        "q" | "quit" | "exit" => SessionAction::Quit,
        "reveal" => {
            let (Some(container), Some(position), Some(colour)) =
                (words.next(), words.next(), words.next())
            else {
                bail!("usage: reveal CONTAINER POSITION COLOUR");
            };
            let slot = Slot {
                container: container
                    .parse()
                    .with_context(|| format!("invalid container '{container}'"))?,
                position: position
                    .parse()
                    .with_context(|| format!("invalid position '{position}'"))?,
            };
            let colour: Colour = colour.parse()?;
            SessionAction::Reveal { slot, colour }
        }
        other => bail!("unknown command '{other}' (type 'help')"),
    };

    if words.next().is_some() {
        bail!("too many arguments for '{command}'");
    }
    Ok(action)
}

fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn step_once<A: SearchAlgorithm + Sync>(session: &mut StrategySession<A>) -> bool {
    match session.step() {
        StepOutcome::Moved(step) => {
            print_session_step(&step);
            true
        }
        StepOutcome::Terminated(reason) => {
            print_termination(&reason);
            false
        }
    }
}

/// Run the interactive session on a puzzle file
///
/// # Errors
///
/// Returns an error if the puzzle file cannot be loaded or reading input
/// fails.
pub fn run_interactive<A: SearchAlgorithm + Sync>(
    path: &Path,
    capacity: Option<usize>,
    resolver: MysteryResolver<A>,
) -> Result<()> {
    let initial = load_puzzle(path, capacity)
        .with_context(|| format!("failed to load {}", path.display()))?;
    let capacity = Some(initial.capacity());
    let mut session = StrategySession::new(initial, resolver);

    print_session_help();
    print_puzzle("Initial state", session.working_state(), None);

    loop {
        if session.state() == &SessionState::Terminated(Termination::Solved) {
            println!("\nPuzzle solved in {} moves.", session.history().len());
            return Ok(());
        }

        let Some(line) = get_user_input("\nCommand")? else {
            return Ok(());
        };
        let action = match parse_action(&line) {
            Ok(action) => action,
            Err(err) => {
                println!("{err:#}");
                continue;
            }
        };

        match action {
            SessionAction::Step => {
                let before = session.working_state().clone();
                if step_once(&mut session) {
                    print_puzzle("State after move", session.working_state(), Some(&before));
                }
            }
            SessionAction::Run => {
                let before = session.working_state().clone();
                while step_once(&mut session) {}
                print_puzzle("Current state", session.working_state(), Some(&before));
            }
            SessionAction::Reveal { slot, colour } => match session.reveal(slot, colour) {
                Ok(()) => print_puzzle("Current state", session.working_state(), None),
                Err(err) => println!("{err}"),
            },
            SessionAction::Reload => {
                let result = load_puzzle(path, capacity)
                    .map_err(|e| anyhow!(e))
                    .and_then(|puzzle| session.replace_state(puzzle).map_err(|e| anyhow!(e)));
                match result {
                    Ok(()) => print_puzzle("Reloaded state", session.working_state(), None),
                    Err(err) => println!("{err:#}"),
                }
            }
            SessionAction::Show => print_puzzle("Current state", session.working_state(), None),
            SessionAction::Help => print_session_help(),
            SessionAction::Quit => return Ok(()),
        }
    }
}
