//! Sub-GHz protocol identification.
//!
//! Capture files name their protocol as free text on a `Protocol:` line.
//! [`Protocol::resolve`] maps that text onto the closed set of protocols
//! the replay hardware can drive. Resolution is forgiving about case for
//! the fixed names and accepts any `Princeton`-prefixed family name
//! (`Princeton_1527` and friends), since Flipper firmwares disagree on the
//! exact suffix.

use std::fmt;

/// A Sub-GHz protocol the replay engine understands.
///
/// `Unknown` is a resolution result, not a terminal state: the command
/// assembler escalates it to [`Protocol::RcSwitch`] whenever the capture
/// carries bit or key data, because an unrecognised keyed protocol is
/// still replayable as a generic RC switch frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// Raw signal timings (durations in microseconds), no bit structure.
    Raw,
    /// Literal byte stream, hex-encoded in the file.
    BinRaw,
    /// Generic RC switch remote (fixed-code keyed protocol).
    RcSwitch,
    /// Princeton PT22xx family of keyed remotes.
    Princeton,
    /// Protocol name not recognised.
    Unknown,
}

impl Protocol {
    /// Resolve a free-text protocol name from a capture file.
    ///
    /// Checks are ordered: exact case-insensitive `RAW`, exact
    /// case-insensitive `BinRAW`, exact case-insensitive `RcSwitch` /
    /// `RCSwitch`, then a case-sensitive prefix match on `Princeton`.
    /// Anything else resolves to [`Protocol::Unknown`].
    ///
    /// # Example
    ///
    /// ```
    /// use replaylib_subghz::Protocol;
    ///
    /// assert_eq!(Protocol::resolve("raw"), Protocol::Raw);
    /// assert_eq!(Protocol::resolve("Princeton_1527"), Protocol::Princeton);
    /// assert_eq!(Protocol::resolve("KeeLoq"), Protocol::Unknown);
    /// ```
    pub fn resolve(name: &str) -> Protocol {
        if name.eq_ignore_ascii_case("RAW") {
            Protocol::Raw
        } else if name.eq_ignore_ascii_case("BinRAW") {
            Protocol::BinRaw
        } else if name.eq_ignore_ascii_case("RcSwitch") {
            Protocol::RcSwitch
        } else if name.starts_with("Princeton") {
            Protocol::Princeton
        } else {
            Protocol::Unknown
        }
    }

    /// The canonical display name, as used in summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Raw => "RAW",
            Protocol::BinRaw => "BinRAW",
            Protocol::RcSwitch => "RcSwitch",
            Protocol::Princeton => "Princeton",
            Protocol::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
