//! Remote-file to command-sequence transformation.
//!
//! An infrared remote file is a sequence of button blocks, each opened by
//! a `name:` line:
//!
//! ```text
//! Filetype: IR signals file
//! Version: 1
//! #
//! name: Power
//! type: parsed
//! protocol: NEC
//! address: 04 00 00 00
//! command: 08 00 00 00
//! #
//! name: Vol_up
//! type: raw
//! frequency: 38000
//! duty_cycle: 0.330000
//! data: 504 3432 504 1704 504 740
//! ```
//!
//! Keys are lower-case and matched exactly; `#` separator lines and
//! anything else without a colon are skipped. As with the Sub-GHz decoder,
//! values that fail to parse contribute nothing and never abort the scan.

use tracing::debug;

use replaylib_core::text::{parse_hex_u64, parse_u16, parse_u32, split_key_value};
use replaylib_core::{Error, Result};

use crate::command::InfraredCommand;
use crate::protocol::InfraredProtocol;

/// Structural validation: does this document look like a remote file?
///
/// True iff the first line begins with `Filetype:` and the second with
/// `Version:`.
pub fn is_valid(content: &str) -> bool {
    let mut lines = content.lines();
    matches!(lines.next(), Some(first) if first.starts_with("Filetype:"))
        && matches!(lines.next(), Some(second) if second.starts_with("Version:"))
}

/// Validate and decode a remote file in one step.
pub fn decode_file(content: &str, source: &str) -> Result<Vec<InfraredCommand>> {
    if !is_valid(content) {
        return Err(Error::InvalidInfrared(
            "missing Filetype/Version header".into(),
        ));
    }
    let commands = transform(content);
    debug!(source, count = commands.len(), "decoded infrared remote file");
    Ok(commands)
}

/// Decode a remote file into its button commands, in file order.
///
/// A `name:` line flushes the command under construction (if it was ever
/// named) and starts a new one; the trailing command is flushed at end of
/// input. Blocks that never receive a name produce nothing.
pub fn transform(content: &str) -> Vec<InfraredCommand> {
    let mut out = Vec::new();
    let mut current = InfraredCommand::default();

    for line in content.lines() {
        let Some((key, value)) = split_key_value(line) else {
            continue;
        };

        match key {
            "name" => {
                if !current.name.is_empty() {
                    out.push(current);
                }
                current = InfraredCommand {
                    name: value.to_string(),
                    ..Default::default()
                };
            }
            "type" if value == "raw" => {
                current.protocol = InfraredProtocol::Raw;
            }
            "protocol" => {
                current.protocol = InfraredProtocol::resolve(value);
                current.protocol_name = value.to_string();
            }
            "address" => {
                if let Some(v) = parse_hex_le(value, 2) {
                    current.address = v as u16;
                }
            }
            "command" => {
                if let Some(v) = parse_hex_le(value, 1) {
                    current.function = v as u8;
                }
            }
            "frequency" => {
                // The replay driver wants the carrier in kHz.
                if let Some(hz) = parse_u32(value) {
                    current.frequency_khz = hz / 1000;
                }
            }
            "duty_cycle" => {
                if let Ok(d) = value.parse::<f32>() {
                    current.duty_cycle = d;
                }
            }
            "data" => {
                current.timings = value
                    .split_ascii_whitespace()
                    .filter_map(parse_u16)
                    .collect();
            }
            _ => {}
        }
    }

    if !current.name.is_empty() {
        out.push(current);
    }
    out
}

/// One name per command, in file order. Feeds remote-browser UIs.
pub fn function_names(commands: &[InfraredCommand]) -> Vec<String> {
    commands.iter().map(|c| c.name.clone()).collect()
}

/// Parse a spaced hex byte stream as a little-endian integer, reading at
/// most `byte_limit` bytes.
///
/// Remote files spell a 16-bit address `04 00 00 00`; with a two-byte
/// window that parses to `0x0004`. Any invalid token within the window
/// rejects the value.
fn parse_hex_le(value: &str, byte_limit: usize) -> Option<u64> {
    let mut result = 0u64;
    for (i, token) in value
        .split_ascii_whitespace()
        .take(byte_limit)
        .enumerate()
    {
        let byte = parse_hex_u64(token)?;
        if byte > 0xFF {
            return None;
        }
        result |= byte << (8 * i);
    }
    Some(result)
}
