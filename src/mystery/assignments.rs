//! Lazy enumeration of hidden-item assignments
//!
//! Hidden slots are filled one at a time in slot order, trying colours in
//! canonical order. A colour is only offered while its budget lasts, so every
//! yielded candidate satisfies the count rule and no two candidates repeat.

use std::iter::FusedIterator;

use super::rules::{ColourBudget, CountRule, InconsistentHiddenState};
use crate::core::{Colour, Puzzle, Slot};

/// Iterator over fully concrete candidates for a partially hidden puzzle
///
/// Candidates are produced on demand by backtracking; nothing beyond the
/// current partial assignment is held in memory. Cloning before the first
/// `next` gives an independent enumeration of the same sequence.
#[derive(Debug, Clone)]
pub struct Assignments {
    base: Puzzle,
    slots: Vec<Slot>,
    budget: [usize; Colour::COUNT],
    choices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Assignments {
    /// Prepare the enumeration for `puzzle` under `rule`
    ///
    /// A puzzle with no hidden items yields itself exactly once.
    ///
    /// # Errors
    /// Returns `InconsistentHiddenState` if the visible counts break `rule`.
    pub fn new(puzzle: &Puzzle, rule: CountRule) -> Result<Self, InconsistentHiddenState> {
        let slots = puzzle.hidden_slots();
        let budget = if slots.is_empty() {
            ColourBudget::empty()
        } else {
            ColourBudget::for_puzzle(puzzle, rule)?
        };

        Ok(Self {
            base: puzzle.clone(),
            exhausted: budget.total() < slots.len(),
            choices: Vec::with_capacity(slots.len()),
            budget: budget.as_array(),
            slots,
            started: false,
        })
    }

    /// Hidden slots in the order they are filled
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The puzzle being completed
    #[must_use]
    pub const fn base(&self) -> &Puzzle {
        &self.base
    }

    fn first_available(&self, from: usize) -> Option<usize> {
        (from..Colour::COUNT).find(|&i| self.budget[i] > 0)
    }

    fn take(&mut self, colour: usize) {
        self.budget[colour] -= 1;
        self.choices.push(colour);
    }

    /// Extend the partial assignment to every slot
    ///
    /// Total budget never drops below the slots left to fill, so a colour is
    /// always available.
    fn fill(&mut self) -> bool {
        while self.choices.len() < self.slots.len() {
            match self.first_available(0) {
                Some(colour) => self.take(colour),
                None => return false,
            }
        }
        true
    }

    /// Advance the deepest slot that still has an untried colour
    fn backtrack(&mut self) -> bool {
        while let Some(last) = self.choices.pop() {
            self.budget[last] += 1;
            if let Some(next) = self.first_available(last + 1) {
                self.take(next);
                return true;
            }
        }
        false
    }

    fn current(&self) -> Puzzle {
        let colours: Vec<Colour> = self
            .choices
            .iter()
            .map(|&i| Colour::CONCRETE[i])
            .collect();
        self.base.with_assignment(&self.slots, &colours)
    }
}

impl Iterator for Assignments {
    type Item = Puzzle;

    fn next(&mut self) -> Option<Puzzle> {
        if self.exhausted {
            return None;
        }

        let advanced = if self.started {
            self.backtrack() && self.fill()
        } else {
            self.started = true;
            self.fill()
        };

        if advanced {
            Some(self.current())
        } else {
            self.exhausted = true;
            None
        }
    }
}

impl FusedIterator for Assignments {}

/// Enumerate every concrete completion of `puzzle` consistent with `rule`
///
/// # Errors
/// Returns `InconsistentHiddenState` if no completion can satisfy `rule`.
pub fn enumerate_assignments(
    puzzle: &Puzzle,
    rule: CountRule,
) -> Result<Assignments, InconsistentHiddenState> {
    Assignments::new(puzzle, rule)
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    fn puzzle(grid: &[&[&str]], capacity: usize) -> Puzzle {
        let owned: Vec<Vec<&str>> = grid.iter().map(|c| c.to_vec()).collect();
        Puzzle::from_grid(&owned, Some(capacity)).unwrap()
    }

    #[test]
    fn no_hidden_items_yields_input_once() {
        let p = puzzle(&[&["RED", "BLUE"], &["BLUE", "RED"], &[]], 2);
        let all: Vec<Puzzle> = enumerate_assignments(&p, CountRule::CompleteSets)
            .unwrap()
            .collect();
        assert_eq!(all, vec![p]);
    }

    #[test]
    fn single_completion_is_forced() {
        let p = puzzle(
            &[&["?", "?", "RED", "RED"], &["BLUE", "BLUE", "BLUE", "BLUE"], &[]],
            4,
        );
        let all: Vec<Puzzle> = enumerate_assignments(&p, CountRule::CompleteSets)
            .unwrap()
            .collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].colour_counts()[Colour::Red.index().unwrap()], 4);
        assert!(!all[0].has_hidden());
    }

    #[test]
    fn swaps_enumerated_in_canonical_order() {
        let p = puzzle(
            &[
                &["?", "RED", "RED", "RED"],
                &["?", "BLUE", "BLUE", "BLUE"],
                &[],
            ],
            4,
        );
        let firsts: Vec<(Colour, Colour)> = enumerate_assignments(&p, CountRule::CompleteSets)
            .unwrap()
            .map(|c| {
                (
                    c.container(0).unwrap().items()[0],
                    c.container(1).unwrap().items()[0],
                )
            })
            .collect();
        assert_eq!(
            firsts,
            vec![(Colour::Red, Colour::Blue), (Colour::Blue, Colour::Red)]
        );
    }

    #[test]
    fn wholly_hidden_colours_yield_distinct_candidates() {
        let p = puzzle(&[&["?", "?"], &["?", "?"], &["RED", "RED"], &[]], 2);
        let all: Vec<Puzzle> = enumerate_assignments(&p, CountRule::CompleteSets)
            .unwrap()
            .collect();
        // Arrangements of PINK PINK BROWN BROWN over four slots
        assert_eq!(all.len(), 6);

        let keys: FxHashSet<_> = all.iter().map(Puzzle::canonical_key).collect();
        assert_eq!(keys.len(), all.len());
        for candidate in &all {
            let counts = candidate.colour_counts();
            assert!(counts.iter().all(|&n| n == 0 || n == 2));
        }
    }

    #[test]
    fn slot_bound_counts_stay_within_total_slots() {
        let p = puzzle(&[&["?", "?"], &["RED"]], 2);
        let all: Vec<Puzzle> = enumerate_assignments(&p, CountRule::SlotBound)
            .unwrap()
            .collect();
        // Thirteen colours per slot, no colour can overflow four slots
        assert_eq!(all.len(), 13 * 13);
        for candidate in &all {
            assert!(candidate.colour_counts().iter().all(|&n| n <= 4));
        }
    }

    #[test]
    fn restartable_and_deterministic() {
        let p = puzzle(&[&["?", "?"], &["?", "?"], &["RED", "RED"], &[]], 2);
        let fresh = enumerate_assignments(&p, CountRule::CompleteSets).unwrap();
        let copy = fresh.clone();
        let first: Vec<Puzzle> = fresh.collect();
        let second: Vec<Puzzle> = copy.collect();
        assert_eq!(first, second);

        let again: Vec<Puzzle> = enumerate_assignments(&p, CountRule::CompleteSets)
            .unwrap()
            .collect();
        assert_eq!(first, again);
    }

    #[test]
    fn exhausted_iterator_stays_empty() {
        let p = puzzle(&[&["?", "RED"], &["BLUE", "BLUE"], &[]], 2);
        let mut it = enumerate_assignments(&p, CountRule::CompleteSets).unwrap();
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn inconsistent_counts_are_reported() {
        let p = puzzle(&[&["RED", "RED"], &["RED", "?"], &[]], 2);
        assert!(matches!(
            enumerate_assignments(&p, CountRule::CompleteSets),
            Err(InconsistentHiddenState::TooMany { .. })
        ));
    }
}
