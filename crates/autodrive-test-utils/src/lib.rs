//! Test utilities for autodrive development.
//!
//! Provides terse constructors for cars and fields ([`car`], [`field`]),
//! a [`TestFieldBuilder`] for multi-car setups, and the canonical
//! scenarios in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use autodrive_core::{AgentName, Orientation, Position, Script};
use autodrive_engine::{Car, Field, FieldConfig};

/// Build a car from literals.
///
/// # Panics
///
/// Panics if `name` is blank or `script` contains a symbol other than
/// `L`, `R`, `F`. Test input is expected to be well-formed.
pub fn car(name: &str, x: i32, y: i32, heading: Orientation, script: &str) -> Car {
    let name = AgentName::new(name).unwrap_or_else(|e| panic!("bad test car name {name:?}: {e}"));
    let script =
        Script::parse(script).unwrap_or_else(|e| panic!("bad test script {script:?}: {e}"));
    Car::new(name, Position::new(x, y), heading, script)
}

/// Build a field and place every car on it, in order.
///
/// # Panics
///
/// Panics if the dimensions are invalid or any placement is rejected.
pub fn field(width: i32, height: i32, cars: impl IntoIterator<Item = Car>) -> Field {
    let mut f = Field::new(FieldConfig::new(width, height))
        .unwrap_or_else(|e| panic!("bad test field {width}x{height}: {e}"));
    for c in cars {
        let name = c.name().clone();
        f.add_car(c)
            .unwrap_or_else(|e| panic!("test car {name} rejected: {e}"));
    }
    f
}

/// Builder for fields with several cars.
///
/// ```
/// use autodrive_core::Orientation;
/// use autodrive_test_utils::TestFieldBuilder;
///
/// let field = TestFieldBuilder::new(10, 10)
///     .car("A", 1, 1, Orientation::North, "FF")
///     .car("B", 3, 1, Orientation::North, "FF")
///     .build();
/// assert_eq!(field.len(), 2);
/// ```
pub struct TestFieldBuilder {
    width: i32,
    height: i32,
    cars: Vec<Car>,
}

impl TestFieldBuilder {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cars: Vec::new(),
        }
    }

    pub fn car(mut self, name: &str, x: i32, y: i32, heading: Orientation, script: &str) -> Self {
        self.cars.push(car(name, x, y, heading, script));
        self
    }

    pub fn build(self) -> Field {
        field(self.width, self.height, self.cars)
    }
}

impl Default for TestFieldBuilder {
    /// An empty 10 x 10 field.
    fn default() -> Self {
        Self::new(10, 10)
    }
}
