//! Error types for bit reads, hex lexing and EDID decoding.

use thiserror::Error;

/// Errors produced when reading bits from a byte slice (see [crate::bits]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// Requested bit range is beyond the end of the data.
    #[error("bit range is beyond the end of the data")]
    OutOfBounds,
    /// More than 64 bits were requested in a single read.
    #[error("more than 64 bits requested in a single read")]
    TooManyBitsRead,
}

/// Errors produced by [crate::hex::parse_hex].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// A token is not exactly two hexadecimal digits.
    #[error("invalid hex pair {token:?} at position {position}")]
    InvalidPair {
        /// Zero-based index of the token among all whitespace-separated tokens.
        position: usize,
        token: String,
    },
}

/// Errors produced when decoding an EDID block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Input is not exactly one EDID block long.
    #[error("expected {expected} bytes of EDID data, got {actual}")]
    InvalidInput { expected: usize, actual: usize },
    /// Bytes 0..8 are not the fixed EDID header. Decoding stops here.
    #[error("invalid EDID header")]
    InvalidHeader,
    /// The 128 bytes do not sum to 0 modulo 256.
    ///
    /// Reported as a diagnostic on the [crate::report::Report]; only returned
    /// as an error when [crate::decoder::DecoderConfig::strict_checksum] is set.
    #[error("invalid EDID checksum (byte sum {sum:#04x})")]
    InvalidChecksum { sum: u8 },
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Hex(#[from] HexError),
}
