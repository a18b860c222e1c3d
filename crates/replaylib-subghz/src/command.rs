//! The replay command model.
//!
//! A [`SubGhzCommand`] is the decoder's sole output unit: one transmittable
//! action for the replay engine. The protocol-specific portion lives in a
//! tagged [`Payload`] union so that, say, the timing vector of a RAW
//! command cannot be read off a keyed command by mistake. For consumers
//! that want the flat record view, the accessor methods return zero/empty
//! defaults for fields that are not meaningful to the command's variant.

use crate::protocol::Protocol;

/// Protocol-specific payload of a replay command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// RAW: a flat sequence of signed timing durations in microseconds.
    /// Positive values are carrier-on, negative carrier-off.
    Raw {
        /// Signal timings, zero terminators already stripped.
        timings: Vec<i32>,
    },

    /// BinRAW: a literal byte stream to shift out.
    BinRaw {
        /// Decoded payload bytes, in file order.
        bytes: Vec<u8>,
    },

    /// A keyed remote frame (RC switch, Princeton, and relatives).
    Keyed {
        /// The resolved protocol driving this frame. Never
        /// [`Protocol::Raw`] or [`Protocol::Unknown`]; unknown keyed
        /// captures are escalated to [`Protocol::RcSwitch`] at assembly.
        protocol: Protocol,
        /// Number of bits to transmit. Zero when only the key is known.
        bits: u16,
        /// Key/address payload. Zero when only the bit count is known.
        key: u64,
    },
}

/// One decoded replay command from a Sub-GHz capture file.
///
/// Commands are immutable once assembled. All commands decoded from a
/// single document share its final preset/frequency/TE scalars, with one
/// exception: inline BinRAW commands carry the scalars as of the line that
/// produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubGhzCommand {
    /// Modulation/configuration preset label, passed through unvalidated.
    pub preset: String,
    /// Carrier frequency in hertz.
    pub frequency_hz: u32,
    /// Base timing unit in microseconds, for keyed protocols.
    pub te_us: u16,
    /// Protocol-specific payload.
    pub payload: Payload,
    /// Originating file path, caller-supplied and opaque.
    pub source: String,
}

impl SubGhzCommand {
    /// The protocol this command replays under.
    pub fn protocol(&self) -> Protocol {
        match &self.payload {
            Payload::Raw { .. } => Protocol::Raw,
            Payload::BinRaw { .. } => Protocol::BinRaw,
            Payload::Keyed { protocol, .. } => *protocol,
        }
    }

    /// Bit count for keyed commands; zero otherwise.
    pub fn bits(&self) -> u16 {
        match &self.payload {
            Payload::Keyed { bits, .. } => *bits,
            _ => 0,
        }
    }

    /// Key/address payload for keyed commands; zero otherwise.
    pub fn key(&self) -> u64 {
        match &self.payload {
            Payload::Keyed { key, .. } => *key,
            _ => 0,
        }
    }

    /// Raw signal timings; empty for non-RAW commands.
    pub fn timings(&self) -> &[i32] {
        match &self.payload {
            Payload::Raw { timings } => timings,
            _ => &[],
        }
    }

    /// Payload bytes; empty for non-BinRAW commands.
    pub fn bytes(&self) -> &[u8] {
        match &self.payload {
            Payload::BinRaw { bytes } => bytes,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed(protocol: Protocol, bits: u16, key: u64) -> SubGhzCommand {
        SubGhzCommand {
            preset: "FuriHalSubGhzPresetOok650Async".into(),
            frequency_hz: 433_920_000,
            te_us: 350,
            payload: Payload::Keyed {
                protocol,
                bits,
                key,
            },
            source: "/ext/subghz/gate.sub".into(),
        }
    }

    #[test]
    fn keyed_accessors() {
        let cmd = keyed(Protocol::Princeton, 24, 0xA1B2C3);
        assert_eq!(cmd.protocol(), Protocol::Princeton);
        assert_eq!(cmd.bits(), 24);
        assert_eq!(cmd.key(), 0xA1B2C3);
        assert!(cmd.timings().is_empty());
        assert!(cmd.bytes().is_empty());
    }

    #[test]
    fn raw_accessors_default_keyed_fields() {
        let cmd = SubGhzCommand {
            preset: String::new(),
            frequency_hz: 315_000_000,
            te_us: 0,
            payload: Payload::Raw {
                timings: vec![100, -200, 300],
            },
            source: String::new(),
        };
        assert_eq!(cmd.protocol(), Protocol::Raw);
        assert_eq!(cmd.timings(), &[100, -200, 300]);
        assert_eq!(cmd.bits(), 0);
        assert_eq!(cmd.key(), 0);
    }

    #[test]
    fn commands_compare_structurally() {
        assert_eq!(
            keyed(Protocol::RcSwitch, 24, 1),
            keyed(Protocol::RcSwitch, 24, 1)
        );
        assert_ne!(
            keyed(Protocol::RcSwitch, 24, 1),
            keyed(Protocol::RcSwitch, 24, 2)
        );
    }
}
