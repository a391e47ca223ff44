//! JSON-deserializable decoder configuration.
//!
//! These types describe decoder options as they appear in configuration
//! files or in the JSON passed to the WASM bindings, and convert into
//! [crate::decoder::DecoderConfig]. Every field is optional.

use serde::{Deserialize, Serialize};

use crate::{decoder::DecoderConfig, hex::HexPolicy};

/// Handling of malformed tokens in hex dumps.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
pub enum HexPolicyDef {
    /// Reject the dump.
    #[default]
    Strict,
    /// Keep the bytes before the malformed token.
    Truncate,
}

/// Decoder options.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct DecoderConfigDef {
    #[serde(default)]
    pub hex_policy: HexPolicyDef,
    /// Pad short hex dumps with zeros to a full block.
    #[serde(default)]
    pub zero_fill: bool,
    /// Treat a bad checksum as a decode failure.
    #[serde(default)]
    pub strict_checksum: bool,
}

impl From<HexPolicyDef> for HexPolicy {
    fn from(value: HexPolicyDef) -> Self {
        match value {
            HexPolicyDef::Strict => HexPolicy::Strict,
            HexPolicyDef::Truncate => HexPolicy::Truncate,
        }
    }
}

impl From<DecoderConfigDef> for DecoderConfig {
    fn from(value: DecoderConfigDef) -> Self {
        let mut config = DecoderConfig::default();
        config
            .set_hex_policy(value.hex_policy.into())
            .set_zero_fill(value.zero_fill)
            .set_strict_checksum(value.strict_checksum);
        config
    }
}
