//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::{Colour, Container, Move};

/// Two-character block drawn in the item's colour
#[must_use]
pub fn colour_block(colour: Colour) -> ColoredString {
    if colour.is_unknown() {
        return "??".bright_white().on_black();
    }
    let (r, g, b) = colour.rgb();
    "██".truecolor(r, g, b)
}

/// Container drawn as coloured blocks, padded to `capacity`
#[must_use]
pub fn container_blocks(container: &Container, capacity: usize) -> String {
    let mut line: String = container
        .items()
        .iter()
        .map(|&c| colour_block(c).to_string())
        .collect();
    for _ in container.len()..capacity {
        line.push_str(&"··".bright_black().to_string());
    }
    line
}

/// Container as colour names, bottom to top
#[must_use]
pub fn container_names(container: &Container) -> String {
    if container.is_empty() {
        return "(empty)".to_string();
    }
    container
        .items()
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Numbered move line, 1-based
#[must_use]
pub fn move_line(number: usize, mv: Move) -> String {
    format!("{number}. Container {} -> {}", mv.src, mv.dest)
}

/// Share of `part` in `whole` as a percentage
#[must_use]
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_bottom_to_top() {
        let c = Container::new(vec![Colour::Red, Colour::Unknown, Colour::LightBlue]);
        assert_eq!(container_names(&c), "RED ? LIGHT_BLUE");
        assert_eq!(container_names(&Container::empty()), "(empty)");
    }

    #[test]
    fn move_lines_are_numbered() {
        assert_eq!(move_line(3, Move::new(0, 2)), "3. Container 0 -> 2");
    }

    #[test]
    fn blocks_pad_to_capacity() {
        colored::control::set_override(false);
        let c = Container::new(vec![Colour::Red]);
        assert_eq!(container_blocks(&c, 3), "██····");
        assert_eq!(colour_block(Colour::Unknown).to_string(), "??");
    }

    #[test]
    fn percent_of_nothing_is_zero() {
        assert!((percent(1, 4) - 25.0).abs() < f64::EPSILON);
        assert!(percent(0, 0).abs() < f64::EPSILON);
    }
}
