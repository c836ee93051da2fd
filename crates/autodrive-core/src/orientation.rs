//! Compass headings and their rotations.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// The heading of a car on the grid.
///
/// North is increasing `y`, east is increasing `x`.
///
/// # Examples
///
/// ```
/// use autodrive_core::Orientation;
///
/// let o = Orientation::parse("n").unwrap();
/// assert_eq!(o, Orientation::North);
/// assert_eq!(o.turn_left(), Orientation::West);
/// assert_eq!(o.turn_right(), Orientation::East);
/// assert_eq!(o.offset(), (0, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Facing increasing `y`.
    North,
    /// Facing decreasing `y`.
    South,
    /// Facing increasing `x`.
    East,
    /// Facing decreasing `x`.
    West,
}

impl Orientation {
    /// All four headings, in `N, E, S, W` order.
    pub const ALL: [Orientation; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Parse a single-letter heading code, case-insensitive.
    ///
    /// Surrounding whitespace is ignored. Anything other than one of
    /// `N`, `S`, `E`, `W` fails with [`ParseError::InvalidOrientation`].
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let trimmed = text.trim();
        match trimmed {
            "N" | "n" => Ok(Self::North),
            "S" | "s" => Ok(Self::South),
            "E" | "e" => Ok(Self::East),
            "W" | "w" => Ok(Self::West),
            _ => Err(ParseError::InvalidOrientation {
                input: trimmed.to_owned(),
            }),
        }
    }

    /// The heading 90° counter-clockwise: N → W → S → E → N.
    pub fn turn_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// The heading 90° clockwise: N → E → S → W → N.
    pub fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Returns the `(dx, dy)` displacement of one forward move.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::South => (0, -1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    /// The single-letter code used in reports.
    pub fn code(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Orientation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
