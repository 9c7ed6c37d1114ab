//! Fixed-capacity stack of coloured items

use super::Colour;

/// Ordered items, index 0 is the bottom and the last index is the top
///
/// Capacity is uniform across a puzzle and owned by [`super::Puzzle`];
/// containers only store their items, so two containers with the same
/// items are interchangeable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Container {
    items: Vec<Colour>,
}

impl Container {
    #[must_use]
    pub const fn new(items: Vec<Colour>) -> Self {
        Self { items }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Items from bottom to top
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[Colour] {
        &self.items
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Top item, if any
    #[inline]
    #[must_use]
    pub fn top(&self) -> Option<Colour> {
        self.items.last().copied()
    }

    /// Whether the container holds `capacity` items of one concrete colour
    #[must_use]
    pub fn is_complete(&self, capacity: usize) -> bool {
        match self.items.first() {
            Some(&first) => {
                self.items.len() == capacity && self.items.iter().all(|&c| first.matches(c))
            }
            None => false,
        }
    }

    /// Empty or complete
    #[inline]
    #[must_use]
    pub fn is_settled(&self, capacity: usize) -> bool {
        self.is_empty() || self.is_complete(capacity)
    }

    /// Whether every item is the same concrete colour (any fill level)
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.items
            .first()
            .is_some_and(|&first| self.items.iter().all(|&c| first.matches(c)))
    }

    /// Length of the run of equal concrete items on top
    #[must_use]
    pub fn top_run(&self) -> usize {
        let Some(top) = self.top() else {
            return 0;
        };
        self.items
            .iter()
            .rev()
            .take_while(|&&c| top.matches(c))
            .count()
    }

    /// Number of hidden items
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.items.iter().filter(|c| c.is_unknown()).count()
    }

    pub(crate) fn push(&mut self, colour: Colour) {
        self.items.push(colour);
    }

    pub(crate) fn pop(&mut self) -> Option<Colour> {
        self.items.pop()
    }

    pub(crate) fn set(&mut self, position: usize, colour: Colour) {
        self.items[position] = colour;
    }
}

impl From<Vec<Colour>> for Container {
    fn from(items: Vec<Colour>) -> Self {
        Self::new(items)
    }
}
