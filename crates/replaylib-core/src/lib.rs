//! replaylib-core: Shared types and parsing primitives for replaylib.
//!
//! This crate defines the pieces the format decoders have in common:
//!
//! - [`Error`] / [`Result`] -- error handling for the fallible entry points
//! - [`text`] -- line splitting and strict numeric token parsers used by
//!   both the Sub-GHz and infrared decoders
//!
//! Nothing in this crate performs I/O; decoders operate on text that the
//! caller has already read into memory.

pub mod error;
pub mod text;

pub use error::{Error, Result};
