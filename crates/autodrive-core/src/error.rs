//! Error types for parsing operator input into core values.

use std::error::Error;
use std::fmt;

/// Errors from turning raw text into [`Orientation`](crate::Orientation),
/// [`Script`](crate::Script) or [`AgentName`](crate::AgentName) values.
///
/// All variants are recoverable at the point of input: the caller reports
/// them and asks again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The heading is not one of `N`, `S`, `E`, `W` (any case).
    InvalidOrientation {
        /// The rejected input, trimmed.
        input: String,
    },
    /// A command script contains a character outside `L`, `R`, `F`.
    InvalidCommandSymbol {
        /// The offending character as typed.
        symbol: char,
        /// Character index of the symbol within the script.
        index: usize,
    },
    /// An agent name is empty after trimming.
    EmptyName,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOrientation { input } => {
                write!(f, "invalid direction: '{input}'. Must be one of N, S, E, W")
            }
            Self::InvalidCommandSymbol { symbol, index } => {
                write!(
                    f,
                    "invalid command '{symbol}' at position {index}: commands must only contain L, R, or F"
                )
            }
            Self::EmptyName => write!(f, "car name must not be empty"),
        }
    }
}

impl Error for ParseError {}
