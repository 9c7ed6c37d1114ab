//! Colour vocabulary
//!
//! A closed set of item colours plus the `Unknown` marker for hidden items.

use std::fmt;
use std::str::FromStr;

use super::PuzzleError;

/// Colour of a single item in a container
///
/// Concrete colours are declared in canonical order; enumeration of hidden
/// items always tries them in this order. `Unknown` marks an item whose real
/// colour has not been revealed yet and never compares as matching anything
/// for move legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Colour {
    Red,
    Pink,
    Brown,
    Green,
    LightGreen,
    DarkGreen,
    Yellow,
    Blue,
    LightBlue,
    DarkBlue,
    Grey,
    Purple,
    Orange,
    Unknown,
}

impl Colour {
    /// All concrete colours in canonical order
    pub const CONCRETE: [Self; 13] = [
        Self::Red,
        Self::Pink,
        Self::Brown,
        Self::Green,
        Self::LightGreen,
        Self::DarkGreen,
        Self::Yellow,
        Self::Blue,
        Self::LightBlue,
        Self::DarkBlue,
        Self::Grey,
        Self::Purple,
        Self::Orange,
    ];

    /// Number of concrete colours
    pub const COUNT: usize = Self::CONCRETE.len();

    /// Check whether this is the hidden-item marker
    #[inline]
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Position in the canonical ordering (concrete colours only)
    ///
    /// Returns `None` for `Unknown`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.is_unknown() {
            None
        } else {
            Some(self as usize)
        }
    }

    /// Colour at a canonical index
    #[inline]
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::CONCRETE.get(index).copied()
    }

    /// Whether two items may be stacked on each other
    ///
    /// Hidden items never match, not even another hidden item.
    #[inline]
    #[must_use]
    pub fn matches(self, other: Self) -> bool {
        !self.is_unknown() && self == other
    }

    /// Token used in puzzle files
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Pink => "PINK",
            Self::Brown => "BROWN",
            Self::Green => "GREEN",
            Self::LightGreen => "LIGHT_GREEN",
            Self::DarkGreen => "DARK_GREEN",
            Self::Yellow => "YELLOW",
            Self::Blue => "BLUE",
            Self::LightBlue => "LIGHT_BLUE",
            Self::DarkBlue => "DARK_BLUE",
            Self::Grey => "GREY",
            Self::Purple => "PURPLE",
            Self::Orange => "ORANGE",
            Self::Unknown => "?",
        }
    }

    /// Terminal colour used when drawing this item
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Red => (220, 40, 40),
            Self::Pink => (255, 153, 204),
            Self::Brown => (110, 79, 43),
            Self::Green => (102, 153, 0),
            Self::LightGreen => (153, 255, 153),
            Self::DarkGreen => (0, 100, 0),
            Self::Yellow => (240, 220, 40),
            Self::Blue => (40, 80, 230),
            Self::LightBlue => (102, 255, 255),
            Self::DarkBlue => (0, 0, 139),
            Self::Grey => (170, 170, 170),
            Self::Purple => (135, 60, 230),
            Self::Orange => (255, 150, 50),
            Self::Unknown => (60, 60, 60),
        }
    }
}

impl FromStr for Colour {
    type Err = PuzzleError;

    /// Parse a colour token
    ///
    /// Accepts the canonical names case-insensitively, with `-` or ` ` in place
    /// of `_`, and both `?` and `UNKNOWN` for hidden items.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let normalized = token.trim().to_ascii_uppercase().replace(['-', ' '], "_");

        if normalized == "?" || normalized == "UNKNOWN" {
            return Ok(Self::Unknown);
        }

        Self::CONCRETE
            .iter()
            .copied()
            .find(|colour| colour.name() == normalized)
            .ok_or_else(|| PuzzleError::UnknownColour(token.to_string()))
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
