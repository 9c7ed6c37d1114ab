//! Colour-count rules bounding what hidden items may be
//!
//! A rule turns the visible colour counts into a per-colour budget: how many
//! hidden slots may still take each colour. The enumerator spends the budget
//! slot by slot, so an assignment is cut off the moment a colour would exceed
//! its share.

use crate::core::{Colour, Puzzle};

/// How hidden items relate to the visible colour counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountRule {
    /// Every colour fills exactly one container (default)
    ///
    /// A visible colour with `k` items takes at most `capacity - k` hidden
    /// slots. Leftover hidden slots form whole colours that are not visible
    /// at all; those are drawn from the first unused colours in canonical
    /// order, since wholly hidden colours are interchangeable.
    #[default]
    CompleteSets,
    /// A colour may take any slot up to `capacity × containers` items in total
    SlotBound,
}

impl CountRule {
    /// Create a rule from its name
    ///
    /// Supported names: "sets", "complete-sets", "slots", "slot-bound".
    /// Defaults to complete sets if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "slots" | "slot-bound" | "slot_bound" => Self::SlotBound,
            _ => Self::CompleteSets,
        }
    }
}

/// The visible colour counts cannot be completed by any assignment
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InconsistentHiddenState {
    #[error("colour {colour} appears {count} times, more than the {max} allowed")]
    TooMany {
        colour: Colour,
        count: usize,
        max: usize,
    },
    #[error("visible colours need {needed} more items but only {hidden} are hidden")]
    TooFewHidden { hidden: usize, needed: usize },
    #[error(
        "{leftover} hidden items remain after completing the visible colours, \
         which is not a multiple of {capacity}"
    )]
    Leftover { leftover: usize, capacity: usize },
    #[error("{needed} wholly hidden colours are required but only {available} colours are unused")]
    NotEnoughColours { needed: usize, available: usize },
}

/// Remaining hidden slots each colour may take, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourBudget {
    remaining: [usize; Colour::COUNT],
}

impl ColourBudget {
    /// Budget with no room for any colour
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            remaining: [0; Colour::COUNT],
        }
    }

    /// Derive the budget for `puzzle` under `rule`
    ///
    /// # Errors
    /// Returns `InconsistentHiddenState` when the visible counts already break
    /// the rule or the hidden slots cannot be shared out under it.
    pub fn for_puzzle(puzzle: &Puzzle, rule: CountRule) -> Result<Self, InconsistentHiddenState> {
        let counts = puzzle.colour_counts();
        let hidden = puzzle.hidden_slots().len();

        match rule {
            CountRule::CompleteSets => complete_sets(&counts, hidden, puzzle.capacity()),
            CountRule::SlotBound => slot_bound(&counts, puzzle.total_slots()),
        }
    }

    #[inline]
    #[must_use]
    pub fn remaining(&self, colour: Colour) -> usize {
        colour.index().map_or(0, |i| self.remaining[i])
    }

    /// Sum over all colours, saturating at `usize::MAX`
    #[must_use]
    pub fn total(&self) -> usize {
        self.remaining.iter().fold(0, |sum: usize, &n| sum.saturating_add(n))
    }

    pub(crate) const fn as_array(&self) -> [usize; Colour::COUNT] {
        self.remaining
    }
}

fn complete_sets(
    counts: &[usize; Colour::COUNT],
    hidden: usize,
    capacity: usize,
) -> Result<ColourBudget, InconsistentHiddenState> {
    let mut remaining = [0; Colour::COUNT];

    for (i, &count) in counts.iter().enumerate() {
        if count > capacity {
            return Err(InconsistentHiddenState::TooMany {
                colour: Colour::CONCRETE[i],
                count,
                max: capacity,
            });
        }
        if count > 0 {
            remaining[i] = capacity - count;
        }
    }

    let needed = remaining.iter().fold(0, |sum: usize, &n| sum.saturating_add(n));
    if hidden < needed {
        return Err(InconsistentHiddenState::TooFewHidden { hidden, needed });
    }

    let leftover = hidden - needed;
    if leftover % capacity != 0 {
        return Err(InconsistentHiddenState::Leftover { leftover, capacity });
    }

    let new_colours = leftover / capacity;
    let unused: Vec<usize> = (0..Colour::COUNT).filter(|&i| counts[i] == 0).collect();
    if unused.len() < new_colours {
        return Err(InconsistentHiddenState::NotEnoughColours {
            needed: new_colours,
            available: unused.len(),
        });
    }
    for &i in unused.iter().take(new_colours) {
        remaining[i] = capacity;
    }

    Ok(ColourBudget { remaining })
}

fn slot_bound(
    counts: &[usize; Colour::COUNT],
    total_slots: usize,
) -> Result<ColourBudget, InconsistentHiddenState> {
    let mut remaining = [0; Colour::COUNT];

    for (i, &count) in counts.iter().enumerate() {
        if count > total_slots {
            return Err(InconsistentHiddenState::TooMany {
                colour: Colour::CONCRETE[i],
                count,
                max: total_slots,
            });
        }
        remaining[i] = total_slots - count;
    }

    Ok(ColourBudget { remaining })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(grid: &[&[&str]], capacity: usize) -> Puzzle {
        let owned: Vec<Vec<&str>> = grid.iter().map(|c| c.to_vec()).collect();
        Puzzle::from_grid(&owned, Some(capacity)).unwrap()
    }

    #[test]
    fn complete_sets_fills_visible_colours() {
        let p = puzzle(
            &[&["?", "?", "RED", "RED"], &["BLUE", "BLUE", "BLUE", "BLUE"], &[]],
            4,
        );
        let budget = ColourBudget::for_puzzle(&p, CountRule::CompleteSets).unwrap();
        assert_eq!(budget.remaining(Colour::Red), 2);
        assert_eq!(budget.remaining(Colour::Blue), 0);
        assert_eq!(budget.total(), 2);
    }

    #[test]
    fn complete_sets_adds_first_unused_colours() {
        let p = puzzle(&[&["?", "?"], &["?", "?"], &["RED", "RED"], &[]], 2);
        let budget = ColourBudget::for_puzzle(&p, CountRule::CompleteSets).unwrap();
        assert_eq!(budget.remaining(Colour::Red), 0);
        assert_eq!(budget.remaining(Colour::Pink), 2);
        assert_eq!(budget.remaining(Colour::Brown), 2);
        assert_eq!(budget.total(), 4);
    }

    #[test]
    fn complete_sets_rejects_overfull_colour() {
        let p = puzzle(&[&["RED", "RED"], &["RED", "?"], &[]], 2);
        assert_eq!(
            ColourBudget::for_puzzle(&p, CountRule::CompleteSets),
            Err(InconsistentHiddenState::TooMany {
                colour: Colour::Red,
                count: 3,
                max: 2
            })
        );
    }

    #[test]
    fn complete_sets_rejects_ragged_leftover() {
        let p = puzzle(&[&["?", "?"], &["RED", "RED", "RED"], &[]], 3);
        assert_eq!(
            ColourBudget::for_puzzle(&p, CountRule::CompleteSets),
            Err(InconsistentHiddenState::Leftover {
                leftover: 2,
                capacity: 3
            })
        );
    }

    #[test]
    fn complete_sets_accepts_whole_hidden_colour() {
        let p = puzzle(&[&["?", "?", "?"], &["RED", "RED", "RED"], &[]], 3);
        let budget = ColourBudget::for_puzzle(&p, CountRule::CompleteSets).unwrap();
        assert_eq!(budget.remaining(Colour::Pink), 3);
        assert_eq!(budget.total(), 3);
    }

    #[test]
    fn complete_sets_rejects_missing_items() {
        let p = puzzle(&[&["?", "RED", "RED"], &["BLUE"], &[]], 3);
        assert_eq!(
            ColourBudget::for_puzzle(&p, CountRule::CompleteSets),
            Err(InconsistentHiddenState::TooFewHidden {
                hidden: 1,
                needed: 3
            })
        );
    }

    #[test]
    fn complete_sets_rejects_too_many_hidden_colours() {
        let grid: Vec<Vec<&str>> = (0..14).map(|_| vec!["?"]).collect();
        let p = Puzzle::from_grid(&grid, Some(1)).unwrap();
        assert_eq!(
            ColourBudget::for_puzzle(&p, CountRule::CompleteSets),
            Err(InconsistentHiddenState::NotEnoughColours {
                needed: 14,
                available: 13
            })
        );
    }

    #[test]
    fn slot_bound_caps_by_total_slots() {
        let p = puzzle(&[&["?"], &["RED"]], 2);
        let budget = ColourBudget::for_puzzle(&p, CountRule::SlotBound).unwrap();
        assert_eq!(budget.remaining(Colour::Red), 3);
        assert_eq!(budget.remaining(Colour::Blue), 4);
        assert_eq!(budget.remaining(Colour::Unknown), 0);
    }

    #[test]
    fn huge_capacity_does_not_overflow() {
        let p = puzzle(&[&["?"], &["RED"]], usize::MAX);
        let budget = ColourBudget::for_puzzle(&p, CountRule::SlotBound).unwrap();
        assert_eq!(budget.remaining(Colour::Red), usize::MAX - 1);
        assert_eq!(budget.total(), usize::MAX);

        let p = puzzle(&[&["?", "RED"], &["BLUE"]], usize::MAX);
        assert_eq!(
            ColourBudget::for_puzzle(&p, CountRule::CompleteSets),
            Err(InconsistentHiddenState::TooFewHidden {
                hidden: 1,
                needed: usize::MAX
            })
        );
    }

    #[test]
    fn rule_from_name() {
        assert_eq!(CountRule::from_name("slots"), CountRule::SlotBound);
        assert_eq!(CountRule::from_name("SETS"), CountRule::CompleteSets);
        assert_eq!(CountRule::from_name("anything"), CountRule::CompleteSets);
    }
}
