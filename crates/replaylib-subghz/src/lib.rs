//! Sub-GHz capture file decoder for replaylib.
//!
//! This crate decodes the line-oriented `Key: Value` capture format written
//! by Flipper-style Sub-GHz recorders into typed replay commands. It
//! provides:
//!
//! - **Transformation** ([`transform`]) -- single-pass decode of a capture
//!   document into an ordered [`SubGhzCommand`] sequence, with structural
//!   validation ([`is_valid`], [`decode_file`]) for callers that want to
//!   reject non-captures up front.
//! - **Protocol resolution** ([`protocol`]) -- mapping of free-text
//!   protocol names onto the closed set the replay hardware can drive.
//! - **Command model** ([`command`]) -- the tagged replay-command type
//!   consumed by playback engines.
//! - **Summaries** ([`summary`]) -- human-readable one-liners for UIs.
//!
//! Decoding is fully synchronous and performs no I/O; callers hand in text
//! they have already read, plus a provenance path that is stamped onto
//! every command.
//!
//! # Example
//!
//! ```
//! use replaylib_subghz::{transform, Protocol};
//!
//! let capture = "Protocol: Princeton_1527\n\
//!                Preset: FuriHalSubGhzPresetOok650Async\n\
//!                Frequency: 433920000\n\
//!                Bit: 24\n\
//!                Key: 0xA1B2C3\n";
//!
//! let commands = transform(capture, "/ext/subghz/gate.sub");
//! assert_eq!(commands.len(), 2);
//! assert_eq!(commands[0].protocol(), Protocol::Princeton);
//! assert_eq!(commands[0].bits(), 24);
//! assert_eq!(commands[1].key(), 0xA1B2C3);
//! ```

pub mod command;
pub mod protocol;
pub mod summary;
pub mod transform;

// Re-export the primary types for ergonomic `use replaylib_subghz::*`.
pub use command::{Payload, SubGhzCommand};
pub use protocol::Protocol;
pub use summary::{summarize, summarize_one};
pub use transform::{decode_file, is_valid, transform};
