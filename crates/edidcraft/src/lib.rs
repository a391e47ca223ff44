//! # edidcraft
//!
//! Decoder for the 128-byte EDID base block a display exposes to describe
//! itself.
//!
//! Each field is described in [layout] as one or more bit ranges of the block.
//! Decoding validates the header, reads every field into a typed [Edid], and
//! renders it into an ordered, human-readable [Report] that ends with the
//! checksum verdict.
//!
//! ## Example
//!
//! ```
//! let dump = "00 FF FF FF FF FF FF 00 10 AC 79 42 4C 47 5A 42 0F 22 01 04 B5 3C 22 78 \
//!             3A DF 15 AD 50 44 AD 25 0F 50 54 A5 4B 00 D1 00 D1 C0 B3 00 A9 40 81 80 \
//!             81 00 71 4F E1 C0 4D D0 00 A0 F0 70 3E 80 30 20 35 00 55 50 21 00 00 1A \
//!             00 00 00 FF 00 32 33 5A 53 4A 30 34 0A 20 20 20 20 20 00 00 00 FC 00 44 \
//!             45 4C 4C 20 55 32 37 32 33 51 45 0A 00 00 00 FD 00 17 56 0F 8C 36 01 0A \
//!             20 20 20 20 20 20 01 2A";
//!
//! let report = edidcraft::Decoder::default().report_hex(dump).unwrap();
//! assert_eq!(report.lines()[0], "Valid EDID header");
//! assert_eq!(report.lines()[1], "Manufacturer ID: DEL");
//! assert!(report.is_checksum_valid());
//! ```

pub mod bits;
pub mod block;
pub mod context;
pub mod decoder;
pub mod edid;
pub mod errors;
pub mod fields;
pub mod fragment;
pub mod hex;
pub mod layout;
pub mod report;
#[cfg(feature = "serde")]
pub mod serde;

pub use block::EdidBlock;
pub use decoder::{Decoder, DecoderConfig, decode, report};
pub use edid::Edid;
pub use errors::{DecodeError, HexError, ReadError};
pub use hex::{HexPolicy, parse_hex};
pub use report::{Render, Report};
