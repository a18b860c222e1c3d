//! Line splitting and strict numeric token parsers.
//!
//! Capture files are line-oriented `Key: Value` text. The helpers here do
//! the low-level lifting shared by every decoder: splitting a line at its
//! first colon and converting value tokens to fixed-width integers.
//!
//! All parsers are strict about token shape -- a trailing non-numeric
//! character rejects the whole token -- but the rejection is expressed as
//! `None`, never as an error. Decoders treat a `None` as "this line
//! contributes nothing" and keep scanning.

/// Characters stripped from both ends of a key or value.
///
/// Newlines never appear here because the input is split into lines before
/// these helpers see it; carriage returns do, on files saved with CRLF
/// endings.
const TRIM: &[char] = &[' ', '\t', '\r'];

/// Split one line into a trimmed `(key, value)` pair at its first colon.
///
/// Returns `None` for lines without a colon; such lines are not part of the
/// format and are skipped by every decoder.
///
/// # Example
///
/// ```
/// use replaylib_core::text::split_key_value;
///
/// assert_eq!(
///     split_key_value("Frequency: 433920000\r"),
///     Some(("Frequency", "433920000"))
/// );
/// assert_eq!(split_key_value("# a comment line"), None);
/// ```
pub fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    Some((key.trim_matches(TRIM), value.trim_matches(TRIM)))
}

/// Parse a whole token as an unsigned 32-bit decimal integer.
///
/// The entire token must convert; `"433920000Hz"` is rejected, not
/// truncated to its numeric prefix.
pub fn parse_u32(token: &str) -> Option<u32> {
    token.parse().ok()
}

/// Parse a whole token as an unsigned 16-bit decimal integer.
///
/// Values above `u16::MAX` are rejected rather than wrapped.
pub fn parse_u16(token: &str) -> Option<u16> {
    token.parse().ok()
}

/// Parse a whole token as a signed 32-bit decimal integer.
pub fn parse_i32(token: &str) -> Option<i32> {
    token.parse().ok()
}

/// Parse a hex string into a 64-bit value.
///
/// Internal whitespace is stripped first, so the on-file spelling
/// `"00 00 00 00 00 A1 B2 C3"` and the compact `"0xA1B2C3"` both parse.
/// After stripping an optional `0x`/`0X` prefix, every remaining character
/// must be a hex digit.
///
/// # Example
///
/// ```
/// use replaylib_core::text::parse_hex_u64;
///
/// assert_eq!(parse_hex_u64("0xA1B2C3"), Some(0xA1B2C3));
/// assert_eq!(parse_hex_u64("00 00 A1 B2"), Some(0xA1B2));
/// assert_eq!(parse_hex_u64("A1G2"), None);
/// assert_eq!(parse_hex_u64("0x"), None);
/// ```
pub fn parse_hex_u64(token: &str) -> Option<u64> {
    let compact: String = token.chars().filter(|c| *c != ' ' && *c != '\t').collect();
    let digits = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

/// Parse a whitespace-separated stream of hex bytes, e.g. `"A1 b2 0C"`.
///
/// All-or-nothing per line: if any token fails to parse as a byte-sized
/// hex value, the whole line is rejected and `None` is returned. A line
/// with no tokens yields an empty vector, which callers treat the same as
/// a rejection.
pub fn parse_hex_bytes(line: &str) -> Option<Vec<u8>> {
    let mut bytes = Vec::new();
    for token in line.split_ascii_whitespace() {
        let value = parse_hex_u64(token)?;
        if value > 0xFF {
            return None;
        }
        bytes.push(value as u8);
    }
    Some(bytes)
}
