//! Autodrive: a deterministic grid simulation of scripted self-driving cars.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the autodrive sub-crates. Adding `autodrive` as a single dependency is
//! enough to build fields, place cars and run them.
//!
//! # Quick start
//!
//! ```rust
//! use autodrive::prelude::*;
//!
//! let mut field = Field::new(FieldConfig::new(10, 10)).unwrap();
//! field
//!     .add_car(Car::new(
//!         AgentName::new("A").unwrap(),
//!         Position::new(1, 2),
//!         Orientation::North,
//!         Script::parse("FFRFFFFRRL").unwrap(),
//!     ))
//!     .unwrap();
//! field
//!     .add_car(Car::new(
//!         AgentName::new("B").unwrap(),
//!         Position::new(7, 8),
//!         Orientation::West,
//!         Script::parse("FFLFFFFFFF").unwrap(),
//!     ))
//!     .unwrap();
//!
//! let report = field.run();
//! assert!(report.is_collision());
//! assert_eq!(
//!     report.lines(),
//!     vec![
//!         "A, collides with B at (5,4) at step 7",
//!         "B, collides with A at (5,4) at step 7",
//!     ]
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `autodrive-core` | Headings, positions, bounds, command scripts, names |
//! | [`engine`] | `autodrive-engine` | Fields, cars, step execution, run reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`autodrive-core`).
///
/// [`types::Orientation`], [`types::Position`], [`types::Bounds`],
/// [`types::Script`] and the [`types::ParseError`] they share.
pub use autodrive_core as types;

/// Step engine (`autodrive-engine`).
///
/// [`engine::Field`] owns the cars and runs them; [`engine::RunReport`]
/// describes the outcome.
pub use autodrive_engine as engine;

/// Common imports for typical autodrive usage.
///
/// ```rust
/// use autodrive::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use autodrive_core::{AgentName, Bounds, Command, Orientation, Position, Script, StepId};

    // Errors
    pub use autodrive_core::ParseError;
    pub use autodrive_engine::{ConfigError, PlacementError};

    // Engine
    pub use autodrive_engine::{
        Car, CarState, CollisionRecord, Field, FieldConfig, FinalState, RunMetrics, RunReport,
    };
}
