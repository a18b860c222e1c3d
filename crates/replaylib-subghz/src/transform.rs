//! Capture-file to command-sequence transformation.
//!
//! A Sub-GHz capture is line-oriented `Key: Value` text, e.g.:
//!
//! ```text
//! Filetype: Flipper SubGhz Key File
//! Version: 1
//! Frequency: 433920000
//! Preset: FuriHalSubGhzPresetOok650Async
//! Protocol: Princeton
//! Bit: 24
//! Key: 00 00 00 00 00 A1 B2 C3
//! ```
//!
//! Decoding is a single forward pass that accumulates field state, followed
//! by one assembly step that turns the accumulated state into replay
//! commands. The contract is permissive end to end: lines that do not
//! parse contribute nothing, and [`transform`] never fails. Use
//! [`is_valid`] (or [`decode_file`], which combines the two) to reject
//! documents that are structurally not captures.

use tracing::debug;

use replaylib_core::text::{
    parse_hex_bytes, parse_hex_u64, parse_i32, parse_u16, parse_u32, split_key_value,
};
use replaylib_core::{Error, Result};

use crate::command::{Payload, SubGhzCommand};
use crate::protocol::Protocol;

/// Structural validation: does this document look like a Sub-GHz capture?
///
/// True iff the document contains, anywhere, at least one `Protocol` line,
/// one `Preset` line, and one `Frequency` line (keys matched
/// case-insensitively). Duplicates and ordering do not matter, and value
/// correctness is not checked -- a document can be valid here and still
/// decode to nothing.
pub fn is_valid(content: &str) -> bool {
    let mut has_protocol = false;
    let mut has_preset = false;
    let mut has_frequency = false;

    for line in content.lines() {
        let Some((key, _)) = split_key_value(line) else {
            continue;
        };
        if key.eq_ignore_ascii_case("Protocol") {
            has_protocol = true;
        } else if key.eq_ignore_ascii_case("Preset") {
            has_preset = true;
        } else if key.eq_ignore_ascii_case("Frequency") {
            has_frequency = true;
        }
    }

    has_protocol && has_preset && has_frequency
}

/// Validate and decode a capture in one step.
///
/// Returns [`Error::InvalidSubGhz`] when [`is_valid`] rejects the document,
/// otherwise `Ok(transform(content, source))`.
pub fn decode_file(content: &str, source: &str) -> Result<Vec<SubGhzCommand>> {
    if !is_valid(content) {
        return Err(Error::InvalidSubGhz(
            "missing Protocol, Preset, or Frequency line".into(),
        ));
    }
    let commands = transform(content, source);
    debug!(source, count = commands.len(), "decoded Sub-GHz capture");
    Ok(commands)
}

/// Transient field state built up over the line scan.
///
/// Scalars are last-seen-wins; the lists are append-only and preserve file
/// order. `RAW_Data` and `Data_RAW` are two spellings of the same field
/// and feed one list.
#[derive(Default)]
struct Accumulator {
    protocol_name: String,
    preset: String,
    frequency_hz: u32,
    te_us: u16,
    bits: Vec<i32>,
    bits_raw: Vec<i32>,
    keys: Vec<u64>,
    raw_lines: Vec<String>,
}

/// Decode a capture document into an ordered sequence of replay commands.
///
/// Never fails: malformed lines and unparseable tokens are skipped, and a
/// document with nothing replayable yields an empty sequence. `source` is
/// the originating path, stamped onto every command for traceability.
pub fn transform(content: &str, source: &str) -> Vec<SubGhzCommand> {
    let mut out = Vec::new();
    let mut acc = Accumulator::default();

    for line in content.lines() {
        let Some((key, value)) = split_key_value(line) else {
            continue;
        };

        if key.eq_ignore_ascii_case("Protocol") {
            acc.protocol_name = value.to_string();
        } else if key.eq_ignore_ascii_case("Preset") {
            acc.preset = value.to_string();
        } else if key.eq_ignore_ascii_case("Frequency") {
            if let Some(hz) = parse_u32(value) {
                acc.frequency_hz = hz;
            }
        } else if key.eq_ignore_ascii_case("TE") {
            if let Some(te) = parse_u16(value) {
                acc.te_us = te;
            }
        } else if key.eq_ignore_ascii_case("Bit") {
            if let Some(v) = parse_i32(value) {
                acc.bits.push(v);
            }
        } else if key.eq_ignore_ascii_case("Bit_RAW") {
            if let Some(v) = parse_i32(value) {
                acc.bits_raw.push(v);
            }
        } else if key.eq_ignore_ascii_case("Key") {
            if let Some(k) = parse_hex_u64(value) {
                acc.keys.push(k);
            }
        } else if key.eq_ignore_ascii_case("RAW_Data") || key.eq_ignore_ascii_case("Data_RAW") {
            acc.raw_lines.push(value.to_string());
        } else if key.eq_ignore_ascii_case("BinRAW") {
            // BinRAW lines are not accumulated: each valid line becomes a
            // command immediately, carrying the scalar state as of this
            // point in the scan.
            match parse_hex_bytes(value) {
                Some(bytes) if !bytes.is_empty() => {
                    out.push(SubGhzCommand {
                        preset: acc.preset.clone(),
                        frequency_hz: acc.frequency_hz,
                        te_us: acc.te_us,
                        payload: Payload::BinRaw { bytes },
                        source: source.to_string(),
                    });
                }
                _ => debug!(line = value, "skipping invalid BinRAW line"),
            }
        }
    }

    let protocol = Protocol::resolve(&acc.protocol_name);
    assemble(&acc, protocol, source, &mut out);
    out
}

/// End-of-scan assembly: accumulated state + resolved protocol -> commands.
fn assemble(acc: &Accumulator, protocol: Protocol, source: &str, out: &mut Vec<SubGhzCommand>) {
    let command = |payload: Payload| SubGhzCommand {
        preset: acc.preset.clone(),
        frequency_hz: acc.frequency_hz,
        te_us: acc.te_us,
        payload,
        source: source.to_string(),
    };

    // A declared RAW protocol is exclusive: the capture is its timing
    // stream, and any stray Bit/Key lines are dropped. Compatibility rule
    // inherited from the file format, not an error.
    if protocol == Protocol::Raw {
        let timings = join_timings(&acc.raw_lines);
        if !timings.is_empty() {
            out.push(command(Payload::Raw { timings }));
        }
        return;
    }

    // Timing lines under a non-RAW declared protocol still replay: the
    // capture data is preserved even when the header mis-declares it.
    if !acc.raw_lines.is_empty() {
        let timings = join_timings(&acc.raw_lines);
        if !timings.is_empty() {
            out.push(command(Payload::Raw { timings }));
        }
    }

    // Unknown is not replayable as such; keyed data under an unrecognised
    // protocol goes out as a generic RC switch frame.
    let keyed_protocol = if protocol == Protocol::Unknown {
        Protocol::RcSwitch
    } else {
        protocol
    };

    for &bits in acc.bits.iter().chain(acc.bits_raw.iter()) {
        out.push(command(Payload::Keyed {
            protocol: keyed_protocol,
            bits: bits.max(0) as u16,
            key: 0,
        }));
    }

    for &key in &acc.keys {
        out.push(command(Payload::Keyed {
            protocol: keyed_protocol,
            bits: 0,
            key,
        }));
    }
}

/// Merge raw-timing text lines into one flat duration sequence.
///
/// Tokenizes each line on whitespace (tabs included), parses signed
/// decimal durations, and drops zero values -- some captures terminate
/// their timing stream with a `0`. Order is preserved across lines and
/// within a line; unparseable tokens are skipped.
fn join_timings(lines: &[String]) -> Vec<i32> {
    let mut out = Vec::new();
    for line in lines {
        for token in line.split_ascii_whitespace() {
            if let Some(v) = parse_i32(token) {
                if v != 0 {
                    out.push(v);
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---------------------------------------------------------------
    // Validation
    // ---------------------------------------------------------------

    #[test]
    fn valid_needs_all_three_keys() {
        assert!(is_valid(
            "Protocol: RAW\nPreset: FM\nFrequency: 433920000\n"
        ));
        assert!(!is_valid("Protocol: RAW\nPreset: FM\n"));
        assert!(!is_valid("Protocol: RAW\nFrequency: 433920000\n"));
        assert!(!is_valid("Preset: FM\nFrequency: 433920000\n"));
    }

    #[test]
    fn valid_is_order_and_case_insensitive() {
        assert!(is_valid(
            "frequency: 1\nPRESET: x\nnoise\nprotocol: RAW\n"
        ));
    }

    #[test]
    fn valid_rejects_empty() {
        assert!(!is_valid(""));
    }

    #[test]
    fn valid_does_not_check_values() {
        // Structurally valid even though nothing here will decode.
        assert!(is_valid("Protocol:\nPreset:\nFrequency: bogus\n"));
    }

    // ---------------------------------------------------------------
    // Scalar accumulation
    // ---------------------------------------------------------------

    #[test]
    fn last_seen_scalar_wins() {
        let cmds = transform(
            "Protocol: RAW\nFrequency: 315000000\nFrequency: 433920000\nRAW_Data: 1 2\n",
            "a.sub",
        );
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].frequency_hz, 433_920_000);
    }

    #[test]
    fn unparseable_scalar_keeps_prior_value() {
        let cmds = transform(
            "Protocol: RAW\nFrequency: 433920000\nFrequency: oops\nTE: many\nRAW_Data: 1\n",
            "a.sub",
        );
        assert_eq!(cmds[0].frequency_hz, 433_920_000);
        assert_eq!(cmds[0].te_us, 0);
    }

    // ---------------------------------------------------------------
    // RAW assembly
    // ---------------------------------------------------------------

    #[test]
    fn raw_joins_lines_and_drops_zeros() {
        let cmds = transform(
            "Protocol: RAW\nPreset: FM\nFrequency: 433920000\nRAW_Data: 100 -200 300 0\n",
            "gate.sub",
        );
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].protocol(), Protocol::Raw);
        assert_eq!(cmds[0].timings(), &[100, -200, 300]);
        assert_eq!(cmds[0].frequency_hz, 433_920_000);
        assert_eq!(cmds[0].source, "gate.sub");
    }

    #[test]
    fn raw_preserves_order_across_lines() {
        let cmds = transform(
            "Protocol: RAW\nRAW_Data: 1 -2\nData_RAW: 3 -4\nRAW_Data: 5\n",
            "a.sub",
        );
        assert_eq!(cmds[0].timings(), &[1, -2, 3, -4, 5]);
    }

    #[test]
    fn raw_handles_tab_separated_timings() {
        let cmds = transform("Protocol: RAW\nRAW_Data: 100\t-200\t300\n", "a.sub");
        assert_eq!(cmds[0].timings(), &[100, -200, 300]);
    }

    #[test]
    fn raw_skips_bad_tokens() {
        let cmds = transform("Protocol: RAW\nRAW_Data: 100 xyz -200\n", "a.sub");
        assert_eq!(cmds[0].timings(), &[100, -200]);
    }

    #[test]
    fn raw_with_no_timings_emits_nothing() {
        let cmds = transform("Protocol: RAW\nRAW_Data: 0 0 0\n", "a.sub");
        assert!(cmds.is_empty());
        let cmds = transform("Protocol: RAW\n", "a.sub");
        assert!(cmds.is_empty());
    }

    #[test]
    fn raw_is_exclusive_and_drops_keyed_data() {
        let cmds = transform(
            "Protocol: RAW\nRAW_Data: 1 2\nBit: 24\nKey: 0xA1\n",
            "a.sub",
        );
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].protocol(), Protocol::Raw);
    }

    // ---------------------------------------------------------------
    // Keyed assembly
    // ---------------------------------------------------------------

    #[test]
    fn unknown_with_keyed_data_escalates_to_rcswitch() {
        let cmds = transform(
            "Protocol: Something\nPreset: X\nFrequency: 315000000\nBit: 24\nKey: 0xA1B2C3\n",
            "a.sub",
        );
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0].protocol(), Protocol::RcSwitch);
        assert_eq!(cmds[0].bits(), 24);
        assert_eq!(cmds[1].protocol(), Protocol::RcSwitch);
        assert_eq!(cmds[1].key(), 0xA1B2C3);
        assert!(cmds.iter().all(|c| c.frequency_hz == 315_000_000));
    }

    #[test]
    fn unknown_without_keyed_data_emits_nothing() {
        let cmds = transform(
            "Protocol: Something\nPreset: X\nFrequency: 315000000\n",
            "a.sub",
        );
        assert!(cmds.is_empty());
    }

    #[test]
    fn bit_list_then_bit_raw_list_order() {
        let cmds = transform(
            "Protocol: RcSwitch\nBit_RAW: 12\nBit: 24\nBit: 32\n",
            "a.sub",
        );
        // Bit values first, then Bit_RAW values, regardless of file order.
        let bits: Vec<u16> = cmds.iter().map(|c| c.bits()).collect();
        assert_eq!(bits, vec![24, 32, 12]);
    }

    #[test]
    fn negative_bit_count_clamps_to_zero() {
        let cmds = transform("Protocol: RcSwitch\nBit: -5\n", "a.sub");
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].bits(), 0);
    }

    #[test]
    fn one_command_per_key() {
        let cmds = transform(
            "Protocol: Princeton_1527\nKey: 0xA1\nKey: 0xB2\n",
            "a.sub",
        );
        assert_eq!(cmds.len(), 2);
        assert!(cmds
            .iter()
            .all(|c| c.protocol() == Protocol::Princeton));
        assert_eq!(cmds[0].key(), 0xA1);
        assert_eq!(cmds[1].key(), 0xB2);
    }

    #[test]
    fn misdeclared_protocol_still_replays_timings() {
        let cmds = transform(
            "Protocol: RcSwitch\nRAW_Data: 100 -200\nBit: 24\n",
            "a.sub",
        );
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0].protocol(), Protocol::Raw);
        assert_eq!(cmds[0].timings(), &[100, -200]);
        assert_eq!(cmds[1].protocol(), Protocol::RcSwitch);
        assert_eq!(cmds[1].bits(), 24);
    }

    // ---------------------------------------------------------------
    // BinRAW inline emission
    // ---------------------------------------------------------------

    #[test]
    fn binraw_emits_inline() {
        let cmds = transform("BinRAW: A1 B2 0C\n", "a.sub");
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].protocol(), Protocol::BinRaw);
        assert_eq!(cmds[0].bytes(), &[0xA1, 0xB2, 0x0C]);
    }

    #[test]
    fn binraw_invalid_token_discards_whole_line() {
        let cmds = transform("BinRAW: A1 B2 ZZ\n", "a.sub");
        assert!(cmds.is_empty());
    }

    #[test]
    fn binraw_uses_scalars_seen_so_far() {
        let cmds = transform(
            "Frequency: 315000000\nBinRAW: A1\nFrequency: 433920000\nBinRAW: B2\n",
            "a.sub",
        );
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0].frequency_hz, 315_000_000);
        assert_eq!(cmds[1].frequency_hz, 433_920_000);
    }

    #[test]
    fn binraw_lines_emit_one_command_each() {
        let cmds = transform("BinRAW: A1 B2\nBinRAW: 0C\n", "a.sub");
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0].bytes(), &[0xA1, 0xB2]);
        assert_eq!(cmds[1].bytes(), &[0x0C]);
    }

    // ---------------------------------------------------------------
    // Contract-level properties
    // ---------------------------------------------------------------

    #[test]
    fn empty_input_decodes_to_nothing() {
        assert!(transform("", "a.sub").is_empty());
    }

    #[test]
    fn decoding_is_idempotent() {
        let content = "Protocol: RAW\nPreset: FM\nFrequency: 433920000\n\
                       RAW_Data: 100 -200 300\nBinRAW: A1 B2\n";
        assert_eq!(transform(content, "a.sub"), transform(content, "a.sub"));
    }

    #[test]
    fn lines_without_colon_are_ignored() {
        let cmds = transform(
            "# comment\nProtocol: RAW\ngarbage line\nRAW_Data: 1 2\n\n",
            "a.sub",
        );
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].timings(), &[1, 2]);
    }

    #[test]
    fn decode_file_rejects_invalid_document() {
        let err = decode_file("RAW_Data: 1 2\n", "a.sub").unwrap_err();
        assert!(err.to_string().contains("not a valid Sub-GHz capture"));
    }

    #[test]
    fn decode_file_accepts_valid_document() {
        let cmds = decode_file(
            "Protocol: RAW\nPreset: FM\nFrequency: 433920000\nRAW_Data: 1 2\n",
            "a.sub",
        )
        .unwrap();
        assert_eq!(cmds.len(), 1);
    }
}
