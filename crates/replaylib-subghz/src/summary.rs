//! Human-readable one-line summaries of decoded commands.
//!
//! Summaries are what a terminal UI shows while a capture plays back:
//!
//! ```text
//! [RAW] FuriHalSubGhzPresetOok650Async @ 433920000Hz timings=512
//! [RcSwitch] <no preset> @ 315000000Hz bits=24 key=0xa1b2c3 te=350us
//! ```
//!
//! Formatting is pure and independent of assembly; any command sequence
//! can be summarised, whatever produced it.

use std::fmt::Write;

use crate::command::{Payload, SubGhzCommand};

/// Format one summary line per command.
pub fn summarize(commands: &[SubGhzCommand]) -> Vec<String> {
    commands.iter().map(summarize_one).collect()
}

/// Format a single command as a one-line summary.
///
/// The trailing fields depend on the protocol: RAW shows its timing count,
/// BinRAW its byte count, and keyed protocols show whichever of bits, key
/// (lower-case hex), and TE are non-zero, in that order.
pub fn summarize_one(cmd: &SubGhzCommand) -> String {
    let mut s = String::new();
    let preset = if cmd.preset.is_empty() {
        "<no preset>"
    } else {
        cmd.preset.as_str()
    };
    let _ = write!(
        s,
        "[{}] {} @ {}Hz",
        cmd.protocol(),
        preset,
        cmd.frequency_hz
    );

    match &cmd.payload {
        Payload::Raw { timings } => {
            let _ = write!(s, " timings={}", timings.len());
        }
        Payload::BinRaw { bytes } => {
            let _ = write!(s, " bytes={}", bytes.len());
        }
        Payload::Keyed { bits, key, .. } => {
            if *bits != 0 {
                let _ = write!(s, " bits={bits}");
            }
            if *key != 0 {
                let _ = write!(s, " key=0x{key:x}");
            }
            if cmd.te_us != 0 {
                let _ = write!(s, " te={}us", cmd.te_us);
            }
        }
    }
    s
}
