//! Error types for replaylib.
//!
//! The decoders themselves are deliberately infallible: malformed lines and
//! unparseable tokens contribute nothing to the output rather than raising
//! errors. The only fallible operations are the `decode_file` entry points,
//! which reject documents that fail structural validation before decoding.

/// The error type for all replaylib operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document is not a structurally valid Sub-GHz capture.
    ///
    /// A valid capture contains at least one `Protocol`, one `Preset`, and
    /// one `Frequency` line. The message names what was missing.
    #[error("not a valid Sub-GHz capture: {0}")]
    InvalidSubGhz(String),

    /// The document is not a structurally valid infrared remote file.
    ///
    /// A valid remote file opens with a `Filetype:` line followed by a
    /// `Version:` line.
    #[error("not a valid infrared remote file: {0}")]
    InvalidInfrared(String),
}

/// A convenience `Result` alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;
