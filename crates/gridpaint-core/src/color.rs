//! Fixed 16-color console palette.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a color name is not part of the palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown color: {0}")]
pub struct ColorParseError(pub String);

/// Color of a shape or cell, one of the 16 console colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    #[default]
    White,
}

impl Color {
    /// Every palette entry, in console order.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::DarkBlue,
        Color::DarkGreen,
        Color::DarkCyan,
        Color::DarkRed,
        Color::DarkMagenta,
        Color::DarkYellow,
        Color::Gray,
        Color::DarkGray,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Yellow,
        Color::White,
    ];

    /// Display name, as accepted by [`Color::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::DarkBlue => "DarkBlue",
            Color::DarkGreen => "DarkGreen",
            Color::DarkCyan => "DarkCyan",
            Color::DarkRed => "DarkRed",
            Color::DarkMagenta => "DarkMagenta",
            Color::DarkYellow => "DarkYellow",
            Color::Gray => "Gray",
            Color::DarkGray => "DarkGray",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Cyan => "Cyan",
            Color::Red => "Red",
            Color::Magenta => "Magenta",
            Color::Yellow => "Yellow",
            Color::White => "White",
        }
    }

    /// SGR foreground code for ANSI terminals.
    pub fn ansi_code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::DarkRed => 31,
            Color::DarkGreen => 32,
            Color::DarkYellow => 33,
            Color::DarkBlue => 34,
            Color::DarkMagenta => 35,
            Color::DarkCyan => 36,
            Color::Gray => 37,
            Color::DarkGray => 90,
            Color::Red => 91,
            Color::Green => 92,
            Color::Yellow => 93,
            Color::Blue => 94,
            Color::Magenta => 95,
            Color::Cyan => 96,
            Color::White => 97,
        }
    }

    /// Parse user input, falling back to white when it is empty or unknown.
    pub fn parse_or_default(input: &str) -> Self {
        input.trim().parse().unwrap_or_default()
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Color::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ColorParseError(wanted.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("blue".parse::<Color>(), Ok(Color::Blue));
        assert_eq!("DARKRED".parse::<Color>(), Ok(Color::DarkRed));
        assert_eq!(" Yellow ".parse::<Color>(), Ok(Color::Yellow));
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!("teal".parse::<Color>(), Err(ColorParseError(name)) if name == "teal"));
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(Color::parse_or_default(""), Color::White);
        assert_eq!(Color::parse_or_default("nope"), Color::White);
        assert_eq!(Color::parse_or_default("green"), Color::Green);
    }

    #[test]
    fn test_names_round_trip() {
        for color in Color::ALL {
            assert_eq!(color.name().parse::<Color>(), Ok(color));
        }
    }
}
