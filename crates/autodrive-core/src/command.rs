//! Command symbols and command scripts.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// A single command a car can execute in one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Rotate 90° counter-clockwise in place (`L`).
    TurnLeft,
    /// Rotate 90° clockwise in place (`R`).
    TurnRight,
    /// Move one cell along the current heading (`F`).
    Forward,
}

impl Command {
    /// Decode one command character, case-insensitive.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'L' => Some(Self::TurnLeft),
            'R' => Some(Self::TurnRight),
            'F' => Some(Self::Forward),
            _ => None,
        }
    }

    /// The uppercase symbol for this command.
    pub fn symbol(self) -> char {
        match self {
            Self::TurnLeft => 'L',
            Self::TurnRight => 'R',
            Self::Forward => 'F',
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An ordered sequence of commands for one car.
///
/// Parsed from text over the alphabet `{L, R, F}`, case-insensitive.
/// Surrounding whitespace is ignored; an empty script is valid and means
/// the car never moves.
///
/// # Examples
///
/// ```
/// use autodrive_core::{Command, Script};
///
/// let s: Script = "ffRl".parse().unwrap();
/// assert_eq!(s.len(), 4);
/// assert_eq!(s.get(2), Some(Command::TurnRight));
/// assert_eq!(s.to_string(), "FFRL");
/// assert!("FX".parse::<Script>().is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Script(Vec<Command>);

impl Script {
    /// An empty script.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse a command string.
    ///
    /// Fails with [`ParseError::InvalidCommandSymbol`] on the first
    /// character outside `L`, `R`, `F` (either case).
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        text.trim()
            .chars()
            .enumerate()
            .map(|(index, symbol)| {
                Command::from_symbol(symbol)
                    .ok_or(ParseError::InvalidCommandSymbol { symbol, index })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the script has no commands.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The command at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Command> {
        self.0.get(index).copied()
    }

    /// The commands as a slice.
    pub fn commands(&self) -> &[Command] {
        &self.0
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cmd in &self.0 {
            write!(f, "{cmd}")?;
        }
        Ok(())
    }
}

impl FromStr for Script {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Vec<Command>> for Script {
    fn from(commands: Vec<Command>) -> Self {
        Self(commands)
    }
}

impl FromIterator<Command> for Script {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_case() {
        let s = Script::parse("lRf").unwrap();
        assert_eq!(
            s.commands(),
            &[Command::TurnLeft, Command::TurnRight, Command::Forward]
        );
        assert_eq!(s.to_string(), "LRF");
    }

    #[test]
    fn parse_empty_is_valid() {
        let s = Script::parse("  ").unwrap();
        assert!(s.is_empty());
        assert_eq!(s.get(0), None);
    }

    #[test]
    fn parse_reports_first_bad_symbol() {
        assert_eq!(
            Script::parse("FFxL?"),
            Err(ParseError::InvalidCommandSymbol {
                symbol: 'x',
                index: 2
            })
        );
        // Inner whitespace is not a command.
        assert!(matches!(
            Script::parse("F F"),
            Err(ParseError::InvalidCommandSymbol { symbol: ' ', .. })
        ));
    }

    #[test]
    fn symbols_round_trip() {
        for cmd in [Command::TurnLeft, Command::TurnRight, Command::Forward] {
            assert_eq!(Command::from_symbol(cmd.symbol()), Some(cmd));
        }
        assert_eq!(Command::from_symbol('G'), None);
    }
}
