//! The infrared remote command model.

use crate::protocol::InfraredProtocol;

/// One button definition decoded from an infrared remote file.
///
/// Parsed-protocol commands carry `address`/`function`; raw commands carry
/// the carrier parameters and an owned timing vector. Fields not
/// meaningful to the command's protocol are left at their defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfraredCommand {
    /// Button name from the `name:` line (e.g. `"Power"`).
    pub name: String,
    /// Resolved protocol family.
    pub protocol: InfraredProtocol,
    /// Protocol name exactly as written in the file, for protocols the
    /// enum does not cover.
    pub protocol_name: String,
    /// Device address (little-endian from the file's byte spelling).
    pub address: u16,
    /// Function/command code.
    pub function: u8,
    /// Carrier frequency in kHz. Raw commands only.
    pub frequency_khz: u32,
    /// Carrier duty cycle, 0.0 to 1.0. Raw commands only.
    pub duty_cycle: f32,
    /// Raw mark/space timings in microseconds. Raw commands only.
    pub timings: Vec<u16>,
}

impl InfraredCommand {
    /// True for `type: raw` commands, which replay their timing vector
    /// instead of an encoded protocol frame.
    pub fn is_raw(&self) -> bool {
        self.protocol == InfraredProtocol::Raw
    }
}
