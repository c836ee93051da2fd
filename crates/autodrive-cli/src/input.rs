//! Parsing of operator input lines into engine values.
//!
//! Every function here takes one raw line as typed and either returns the
//! value or an [`InputError`] whose `Display` is shown to the operator.

use std::error::Error;
use std::fmt;

use autodrive_core::{AgentName, Orientation, ParseError, Position, Script};
use autodrive_engine::{ConfigError, FieldConfig, PlacementError};

/// Anything wrong with a line of operator input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    /// The line does not have the expected shape.
    MalformedLine {
        /// Human-readable shape, e.g. `"x y"`.
        expected: &'static str,
        /// The line as typed, trimmed.
        got: String,
    },
    /// A token that should be an integer is not one.
    InvalidNumber {
        /// The offending token.
        token: String,
    },
    /// Heading, command or name rejected by the core parser.
    Parse(ParseError),
    /// Field dimensions rejected.
    Config(ConfigError),
    /// Car placement rejected by the field.
    Placement(PlacementError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine { expected, got } => {
                write!(f, "expected input in '{expected}' format, got '{got}'")
            }
            Self::InvalidNumber { token } => write!(f, "'{token}' is not a whole number"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::Placement(e) => write!(f, "{e}"),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Placement(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for InputError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<ConfigError> for InputError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<PlacementError> for InputError {
    fn from(e: PlacementError) -> Self {
        Self::Placement(e)
    }
}

fn parse_int(token: &str) -> Result<i32, InputError> {
    token.parse().map_err(|_| InputError::InvalidNumber {
        token: token.to_owned(),
    })
}

fn split_exact<'a, const N: usize>(
    line: &'a str,
    expected: &'static str,
) -> Result<[&'a str; N], InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    tokens
        .try_into()
        .map_err(|_| InputError::MalformedLine {
            expected,
            got: line.trim().to_owned(),
        })
}

/// Parse `"<width> <height>"` and validate the dimensions.
pub fn parse_dimensions(line: &str) -> Result<FieldConfig, InputError> {
    let [w, h] = split_exact::<2>(line, "x y")?;
    let config = FieldConfig::new(parse_int(w)?, parse_int(h)?);
    config.validate()?;
    Ok(config)
}

/// Parse a car name.
pub fn parse_name(line: &str) -> Result<AgentName, InputError> {
    Ok(AgentName::new(line)?)
}

/// Parse `"<x> <y> <heading>"`.
pub fn parse_placement(line: &str) -> Result<(Position, Orientation), InputError> {
    let [x, y, heading] = split_exact::<3>(line, "x y Direction")?;
    let position = Position::new(parse_int(x)?, parse_int(y)?);
    let heading = Orientation::parse(heading)?;
    Ok((position, heading))
}

/// Parse a command line over `L`, `R`, `F`, any case.
pub fn parse_script(line: &str) -> Result<Script, InputError> {
    Ok(Script::parse(line)?)
}
