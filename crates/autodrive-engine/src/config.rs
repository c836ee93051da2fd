//! Field configuration, validation, and error types.
//!
//! [`FieldConfig`] is the builder-input for constructing a [`Field`].
//! [`validate()`](FieldConfig::validate) checks the dimensions and yields
//! the [`Bounds`] the engine clamps against.
//!
//! [`Field`]: crate::Field

use std::error::Error;
use std::fmt;

use autodrive_core::Bounds;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`FieldConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height is zero or negative.
    NonPositiveDimension {
        /// Which dimension: `"width"` or `"height"`.
        name: &'static str,
        /// The rejected value.
        value: i32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDimension { name, value } => {
                write!(f, "{name} must be a positive number, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── FieldConfig ────────────────────────────────────────────────────

/// Dimensions of a simulation field.
///
/// # Examples
///
/// ```
/// use autodrive_engine::{ConfigError, FieldConfig};
///
/// let bounds = FieldConfig::new(10, 8).validate().unwrap();
/// assert_eq!((bounds.width(), bounds.height()), (10, 8));
///
/// assert_eq!(
///     FieldConfig::new(0, 8).validate(),
///     Err(ConfigError::NonPositiveDimension { name: "width", value: 0 }),
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    /// Number of columns. Must be positive.
    pub width: i32,
    /// Number of rows. Must be positive.
    pub height: i32,
}

impl FieldConfig {
    /// Create a config. Nothing is checked until [`validate()`](Self::validate).
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Validate the dimensions and return the field bounds.
    ///
    /// Width is checked before height.
    pub fn validate(&self) -> Result<Bounds, ConfigError> {
        if self.width <= 0 {
            return Err(ConfigError::NonPositiveDimension {
                name: "width",
                value: self.width,
            });
        }
        if self.height <= 0 {
            return Err(ConfigError::NonPositiveDimension {
                name: "height",
                value: self.height,
            });
        }
        Bounds::new(self.width, self.height).ok_or(ConfigError::NonPositiveDimension {
            name: "width",
            value: self.width,
        })
    }
}

impl Default for FieldConfig {
    /// A 10 x 10 field.
    fn default() -> Self {
        Self::new(10, 10)
    }
}
