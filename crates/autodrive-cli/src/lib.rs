//! Interactive operator interface for the autodrive grid simulation.
//!
//! The `autodrive` binary wraps a [`Session`] around standard input and
//! output. Input lines are turned into engine values by the functions in
//! [`input`]; every rejection is reported and asked for again.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod input;
pub mod session;

pub use input::InputError;
pub use session::Session;
