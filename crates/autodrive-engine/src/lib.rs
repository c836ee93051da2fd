//! Simulation engine for autodrive fields.
//!
//! A [`Field`] owns a set of [`Car`]s on a bounded grid and advances them
//! in synchronized steps: every active car executes one command, then all
//! cars are checked for shared cells. The first step that produces a
//! collision ends the run. [`Field::run`] returns a [`RunReport`] whose
//! [`lines()`](RunReport::lines) are sorted by car name.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod car;
pub mod config;
pub mod field;
pub mod metrics;
pub mod report;

pub use car::{Car, CarState, Execution};
pub use config::{ConfigError, FieldConfig};
pub use field::{Field, PlacementError};
pub use metrics::RunMetrics;
pub use report::{CollisionRecord, FinalState, RunReport};
