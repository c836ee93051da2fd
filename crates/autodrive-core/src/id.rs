//! Strongly-typed identifiers: [`AgentName`] and [`StepId`].

use crate::error::ParseError;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// The name of a car, unique within a field.
///
/// Always non-empty and free of surrounding whitespace. Ordering is the
/// byte-wise ordering of the underlying string, which is the order used
/// for every report.
///
/// # Examples
///
/// ```
/// use autodrive_core::AgentName;
///
/// let a = AgentName::new("  A ").unwrap();
/// assert_eq!(a.as_str(), "A");
/// assert!(AgentName::new("   ").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentName(String);

impl AgentName {
    /// Build a name from user input, trimming surrounding whitespace.
    ///
    /// Returns [`ParseError::EmptyName`] if nothing is left.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ParseError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AgentName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for AgentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets name-keyed maps be queried with a plain `&str`.
impl Borrow<str> for AgentName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A 1-based step number.
///
/// Step 1 is the first synchronized round of a run. Step numbering
/// continues across repeated runs of the same field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u32);

impl StepId {
    /// The step after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StepId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed_and_non_empty() {
        assert_eq!(AgentName::new(" car1\t").unwrap().as_str(), "car1");
        assert_eq!(AgentName::new(""), Err(ParseError::EmptyName));
        assert_eq!("\n".parse::<AgentName>(), Err(ParseError::EmptyName));
    }

    #[test]
    fn names_order_bytewise() {
        let mut names: Vec<AgentName> = ["b", "B", "a", "A10", "A2"]
            .iter()
            .map(|n| AgentName::new(n).unwrap())
            .collect();
        names.sort();
        let sorted: Vec<&str> = names.iter().map(AgentName::as_str).collect();
        assert_eq!(sorted, vec!["A10", "A2", "B", "a", "b"]);
    }

    #[test]
    fn step_id_next_and_display() {
        assert_eq!(StepId(0).next(), StepId(1));
        assert_eq!(StepId::from(7).to_string(), "7");
    }
}
