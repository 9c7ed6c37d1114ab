//! Immutable puzzle state
//!
//! A `Puzzle` is an ordered collection of containers sharing one capacity.
//! Every operation is pure: applying a move yields a new value and leaves the
//! original untouched.

use std::fmt;

use super::error::IllegalReason;
use super::{Colour, Container, IllegalMoveError, Move, PuzzleError};

/// Position of one item: container index and height from the bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    pub container: usize,
    pub position: usize,
}

/// Compact, order-sensitive identity of a puzzle state
///
/// Two states have equal keys exactly when they hold the same items in the
/// same containers. Used for visited-set membership during search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey(Box<[u8]>);

const CONTAINER_SEPARATOR: u8 = u8::MAX;

/// Snapshot of every container in a puzzle
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    containers: Vec<Container>,
    capacity: usize,
}

impl Puzzle {
    /// Create a puzzle from containers and a uniform capacity
    ///
    /// # Errors
    /// Returns `PuzzleError` if there are no containers, the capacity is zero,
    /// or a container holds more than `capacity` items.
    pub fn new(containers: Vec<Container>, capacity: usize) -> Result<Self, PuzzleError> {
        if containers.is_empty() {
            return Err(PuzzleError::NoContainers);
        }
        if capacity == 0 {
            return Err(PuzzleError::ZeroCapacity);
        }
        if let Some((container, c)) = containers
            .iter()
            .enumerate()
            .find(|(_, c)| c.len() > capacity)
        {
            return Err(PuzzleError::OverCapacity {
                container,
                len: c.len(),
                capacity,
            });
        }

        Ok(Self {
            containers,
            capacity,
        })
    }

    /// Build a puzzle from colour tokens, bottom to top per container
    ///
    /// When `capacity` is `None` it is inferred as the longest container.
    ///
    /// # Errors
    /// Returns `PuzzleError` for unknown colour tokens or an invalid shape.
    ///
    /// # Examples
    /// ```
    /// use chroma_oracle::core::Puzzle;
    ///
    /// let puzzle = Puzzle::from_grid(&[vec!["RED", "?"], vec![]], None).unwrap();
    /// assert_eq!(puzzle.capacity(), 2);
    /// assert_eq!(puzzle.hidden_slots().len(), 1);
    /// ```
    pub fn from_grid<S: AsRef<str>>(
        grid: &[Vec<S>],
        capacity: Option<usize>,
    ) -> Result<Self, PuzzleError> {
        let containers = grid
            .iter()
            .map(|tokens| {
                tokens
                    .iter()
                    .map(|t| t.as_ref().parse::<Colour>())
                    .collect::<Result<Vec<_>, _>>()
                    .map(Container::new)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let capacity =
            capacity.unwrap_or_else(|| containers.iter().map(Container::len).max().unwrap_or(0));

        Self::new(containers, capacity)
    }

    /// Colour tokens per container, bottom to top
    #[must_use]
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        self.containers
            .iter()
            .map(|c| c.items().iter().map(|colour| colour.name().to_string()).collect())
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    #[inline]
    #[must_use]
    pub fn container(&self, index: usize) -> Option<&Container> {
        self.containers.get(index)
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of containers
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Always false for a constructed puzzle; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Total number of item slots (`capacity × containers`), saturating at
    /// `usize::MAX`
    #[must_use]
    pub fn total_slots(&self) -> usize {
        self.capacity.saturating_mul(self.containers.len())
    }

    /// Total number of items, hidden ones included
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.containers.iter().map(Container::len).sum()
    }

    /// Count of each concrete colour, indexed by canonical order
    #[must_use]
    pub fn colour_counts(&self) -> [usize; Colour::COUNT] {
        let mut counts = [0; Colour::COUNT];
        for colour in self.containers.iter().flat_map(Container::items) {
            if let Some(i) = colour.index() {
                counts[i] += 1;
            }
        }
        counts
    }

    /// Positions of hidden items, in container then height order
    #[must_use]
    pub fn hidden_slots(&self) -> Vec<Slot> {
        self.containers
            .iter()
            .enumerate()
            .flat_map(|(container, c)| {
                c.items()
                    .iter()
                    .enumerate()
                    .filter(|(_, colour)| colour.is_unknown())
                    .map(move |(position, _)| Slot {
                        container,
                        position,
                    })
            })
            .collect()
    }

    /// Whether any item is hidden
    #[must_use]
    pub fn has_hidden(&self) -> bool {
        self.containers.iter().any(|c| c.hidden_count() > 0)
    }

    /// Colour at a slot
    #[must_use]
    pub fn colour_at(&self, slot: Slot) -> Option<Colour> {
        self.containers
            .get(slot.container)
            .and_then(|c| c.items().get(slot.position).copied())
    }

    /// Check a move against the legality rule
    ///
    /// # Errors
    /// Returns the first rule the move violates.
    pub fn check_move(&self, mv: Move) -> Result<(), IllegalReason> {
        if mv.src == mv.dest {
            return Err(IllegalReason::SameContainer);
        }
        let (Some(src), Some(dest)) = (self.containers.get(mv.src), self.containers.get(mv.dest))
        else {
            return Err(IllegalReason::OutOfRange);
        };
        let Some(moving) = src.top() else {
            return Err(IllegalReason::SourceEmpty);
        };
        if moving.is_unknown() {
            return Err(IllegalReason::SourceHidden);
        }
        if dest.len() >= self.capacity {
            return Err(IllegalReason::DestinationFull);
        }
        match dest.top() {
            Some(top) if !top.matches(moving) => Err(IllegalReason::ColourMismatch),
            _ => Ok(()),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// Every legal move, ordered by source then destination index
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let n = self.containers.len();
        (0..n)
            .flat_map(|src| (0..n).map(move |dest| Move::new(src, dest)))
            .filter(|&mv| self.is_legal(mv))
            .collect()
    }

    /// Apply a move, producing the successor state
    ///
    /// # Errors
    /// Returns `IllegalMoveError` if the move is not legal here.
    pub fn apply(&self, mv: Move) -> Result<Self, IllegalMoveError> {
        self.check_move(mv)
            .map_err(|reason| IllegalMoveError { mv, reason })?;

        let mut next = self.clone();
        if let Some(item) = next.containers[mv.src].pop() {
            next.containers[mv.dest].push(item);
        }
        Ok(next)
    }

    /// Every container is empty or complete
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.containers
            .iter()
            .all(|c| c.is_settled(self.capacity))
    }

    /// Order-sensitive key for visited sets
    #[must_use]
    pub fn canonical_key(&self) -> StateKey {
        let mut bytes = Vec::with_capacity(self.total_items() + self.containers.len());
        for container in &self.containers {
            bytes.extend(container.items().iter().map(|&c| c as u8));
            bytes.push(CONTAINER_SEPARATOR);
        }
        StateKey(bytes.into_boxed_slice())
    }

    /// Replace one hidden item with its revealed colour
    ///
    /// # Errors
    /// Returns `PuzzleError` if the slot does not exist, is not hidden, or
    /// `colour` is itself the hidden marker.
    pub fn reveal(&self, slot: Slot, colour: Colour) -> Result<Self, PuzzleError> {
        if colour.is_unknown() {
            return Err(PuzzleError::RevealUnknown);
        }
        match self.colour_at(slot) {
            None => Err(PuzzleError::NoSuchSlot {
                container: slot.container,
                position: slot.position,
            }),
            Some(current) if !current.is_unknown() => Err(PuzzleError::SlotNotHidden {
                container: slot.container,
                position: slot.position,
            }),
            Some(_) => {
                let mut next = self.clone();
                next.containers[slot.container].set(slot.position, colour);
                Ok(next)
            }
        }
    }

    /// Substitute colours into slots without validation
    ///
    /// `slots` and `colours` are paired by index.
    pub(crate) fn with_assignment(&self, slots: &[Slot], colours: &[Colour]) -> Self {
        let mut next = self.clone();
        for (slot, &colour) in slots.iter().zip(colours) {
            next.containers[slot.container].set(slot.position, colour);
        }
        next
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, container) in self.containers.iter().enumerate() {
            write!(f, "{i}:")?;
            for colour in container.items() {
                write!(f, " {colour}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
