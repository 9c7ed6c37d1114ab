//! Inferring hidden items from candidate solutions

use std::fmt;

use super::resolver::Candidate;
use crate::core::{Colour, Puzzle, Slot};

/// A hidden slot together with the colour it must hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Deduction {
    pub slot: Slot,
    pub colour: Colour,
}

impl fmt::Display for Deduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "container {} position {} is {}",
            self.slot.container, self.slot.position, self.colour
        )
    }
}

/// Hidden slots on which every solvable candidate agrees
///
/// Returns nothing when there are no candidates, since any colour is then
/// equally (un)supported.
#[must_use]
pub fn deduce_hidden(raw: &Puzzle, solutions: &[Candidate]) -> Vec<Deduction> {
    let Some((first, rest)) = solutions.split_first() else {
        return Vec::new();
    };

    raw.hidden_slots()
        .into_iter()
        .filter_map(|slot| {
            let colour = first.puzzle.colour_at(slot)?;
            rest.iter()
                .all(|c| c.puzzle.colour_at(slot) == Some(colour))
                .then_some(Deduction { slot, colour })
        })
        .collect()
}

/// Colours a concrete candidate assigns to the hidden slots of `raw`
///
/// Both puzzles must share a layout; slots missing from `resolved` are
/// skipped.
#[must_use]
pub fn identify_hidden_items(raw: &Puzzle, resolved: &Puzzle) -> Vec<Deduction> {
    raw.hidden_slots()
        .into_iter()
        .filter_map(|slot| {
            resolved
                .colour_at(slot)
                .filter(|colour| !colour.is_unknown())
                .map(|colour| Deduction { slot, colour })
        })
        .collect()
}

/// Substitute deduced colours into `raw`
///
/// Deductions naming slots that are not hidden in `raw` are ignored.
#[must_use]
pub fn apply_deductions(raw: &Puzzle, deductions: &[Deduction]) -> Puzzle {
    let (slots, colours): (Vec<Slot>, Vec<Colour>) = deductions
        .iter()
        .filter(|d| !d.colour.is_unknown() && raw.colour_at(d.slot).is_some_and(Colour::is_unknown))
        .map(|d| (d.slot, d.colour))
        .unzip();
    raw.with_assignment(&slots, &colours)
}
