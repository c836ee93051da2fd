//! Core types for the autodrive grid simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the engine and the operator interface:
//! compass headings, grid positions and bounds, command scripts,
//! agent names, step identifiers, and the parse error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod id;
pub mod orientation;
pub mod position;

pub use command::{Command, Script};
pub use error::ParseError;
pub use id::{AgentName, StepId};
pub use orientation::Orientation;
pub use position::{Bounds, Position};
