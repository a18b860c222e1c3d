//! Infrared protocol identification.
//!
//! Remote files name their protocol in lower-ish case free text
//! (`protocol: NECext`). The enum below covers the protocols that appear
//! in Flipper `.ir` files; anything else resolves to
//! [`InfraredProtocol::Unknown`], with the original name preserved on the
//! command so nothing is lost.

use std::fmt;

/// An infrared protocol family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfraredProtocol {
    /// NEC, 8-bit address and command.
    Nec,
    /// Extended NEC, 16-bit address and command.
    NecExt,
    /// Samsung 32-bit variant.
    Samsung32,
    /// Philips RC5.
    Rc5,
    /// Philips RC6.
    Rc6,
    /// Sony SIRC, 12-bit.
    Sirc,
    /// Sony SIRC, 15-bit.
    Sirc15,
    /// Sony SIRC, 20-bit.
    Sirc20,
    /// Panasonic/Kaseikyo 48-bit.
    Kaseikyo,
    /// RCA 24-bit.
    Rca,
    /// Raw timing capture (`type: raw` blocks).
    Raw,
    /// Protocol name not recognised.
    Unknown,
}

impl InfraredProtocol {
    /// Resolve a protocol name as written in a remote file.
    ///
    /// Matching is case-insensitive; unrecognised names resolve to
    /// [`InfraredProtocol::Unknown`] rather than failing.
    pub fn resolve(name: &str) -> InfraredProtocol {
        if name.eq_ignore_ascii_case("NEC") {
            InfraredProtocol::Nec
        } else if name.eq_ignore_ascii_case("NECext") {
            InfraredProtocol::NecExt
        } else if name.eq_ignore_ascii_case("Samsung32") {
            InfraredProtocol::Samsung32
        } else if name.eq_ignore_ascii_case("RC5") {
            InfraredProtocol::Rc5
        } else if name.eq_ignore_ascii_case("RC6") {
            InfraredProtocol::Rc6
        } else if name.eq_ignore_ascii_case("SIRC") {
            InfraredProtocol::Sirc
        } else if name.eq_ignore_ascii_case("SIRC15") {
            InfraredProtocol::Sirc15
        } else if name.eq_ignore_ascii_case("SIRC20") {
            InfraredProtocol::Sirc20
        } else if name.eq_ignore_ascii_case("Kaseikyo") {
            InfraredProtocol::Kaseikyo
        } else if name.eq_ignore_ascii_case("RCA") {
            InfraredProtocol::Rca
        } else {
            InfraredProtocol::Unknown
        }
    }

    /// The canonical display name, matching the on-file spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfraredProtocol::Nec => "NEC",
            InfraredProtocol::NecExt => "NECext",
            InfraredProtocol::Samsung32 => "Samsung32",
            InfraredProtocol::Rc5 => "RC5",
            InfraredProtocol::Rc6 => "RC6",
            InfraredProtocol::Sirc => "SIRC",
            InfraredProtocol::Sirc15 => "SIRC15",
            InfraredProtocol::Sirc20 => "SIRC20",
            InfraredProtocol::Kaseikyo => "Kaseikyo",
            InfraredProtocol::Rca => "RCA",
            InfraredProtocol::Raw => "raw",
            InfraredProtocol::Unknown => "Unknown",
        }
    }
}

impl Default for InfraredProtocol {
    fn default() -> Self {
        InfraredProtocol::Unknown
    }
}

impl fmt::Display for InfraredProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
