//! # replaylib -- Capture-file decoding for signal replay
//!
//! `replaylib` decodes the human-readable capture formats written by
//! Flipper-style signal recorders into typed, ordered replay commands that
//! a transmitter driver can consume directly. Two formats are supported:
//! Sub-GHz `.sub` captures (RAW timing streams, BinRAW byte streams, and
//! keyed RC-switch/Princeton frames) and infrared `.ir` remote files.
//!
//! The library is pure decoding: no I/O, no async, no hardware. Callers
//! read the file, hand in its text plus a provenance path, and get back an
//! in-memory command sequence. Everything is safe to run concurrently on
//! independent inputs.
//!
//! ## Quick Start
//!
//! ```
//! use replaylib::subghz;
//!
//! let capture = "Protocol: RAW\n\
//!                Preset: FuriHalSubGhzPresetOok650Async\n\
//!                Frequency: 433920000\n\
//!                RAW_Data: 527 -518 1040 -1042 527 0\n";
//!
//! let commands = subghz::decode_file(capture, "/ext/subghz/doorbell.sub")?;
//! for line in subghz::summarize(&commands) {
//!     println!("{line}");
//! }
//! # Ok::<(), replaylib::Error>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized as a workspace of focused crates:
//!
//! | Crate                 | Purpose                                        |
//! |-----------------------|------------------------------------------------|
//! | `replaylib-core`      | Error types, line/numeric parsing primitives   |
//! | `replaylib-subghz`    | Sub-GHz `.sub` capture decoder                 |
//! | `replaylib-infrared`  | Infrared `.ir` remote file decoder             |
//! | **`replaylib`**       | This facade crate -- re-exports everything     |
//!
//! ## Decode contract
//!
//! Decoders never fail on malformed content: unparseable tokens and lines
//! contribute nothing to the output. The `decode_file` entry points add a
//! structural gate in front (`is_valid`) for callers that want to reject
//! files that are not captures at all; the underlying `transform`
//! functions stay infallible.

pub use replaylib_core::{Error, Result};

/// Infrared `.ir` remote file decoding. See [`replaylib_infrared`].
pub mod infrared {
    pub use replaylib_infrared::*;
}

/// Sub-GHz `.sub` capture decoding. See [`replaylib_subghz`].
pub mod subghz {
    pub use replaylib_subghz::*;
}
