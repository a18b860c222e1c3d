//! Infrared remote file decoder for replaylib.
//!
//! This crate decodes Flipper-style `.ir` remote files into typed button
//! commands. A remote file is a sequence of named button blocks, each
//! either a parsed protocol frame (protocol + address + command code) or a
//! raw timing capture (carrier frequency, duty cycle, mark/space timings).
//!
//! Like the Sub-GHz decoder, everything here is synchronous, I/O-free, and
//! permissive: malformed values contribute nothing and never abort a
//! decode.
//!
//! # Example
//!
//! ```
//! use replaylib_infrared::{transform, InfraredProtocol};
//!
//! let remote = "name: Power\n\
//!               type: parsed\n\
//!               protocol: NEC\n\
//!               address: 04 00 00 00\n\
//!               command: 08 00 00 00\n";
//!
//! let commands = transform(remote);
//! assert_eq!(commands.len(), 1);
//! assert_eq!(commands[0].protocol, InfraredProtocol::Nec);
//! assert_eq!(commands[0].address, 0x0004);
//! ```

pub mod command;
pub mod protocol;
pub mod transform;

// Re-export the primary types for ergonomic `use replaylib_infrared::*`.
pub use command::InfraredCommand;
pub use protocol::InfraredProtocol;
pub use transform::{decode_file, function_names, is_valid, transform};
