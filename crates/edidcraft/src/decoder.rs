//! Configurable front-end turning raw bytes or hex dumps into [Edid]s and [Report]s.

use log::debug;

use crate::{
    block::EdidBlock,
    edid::Edid,
    errors::DecodeError,
    hex::{self, HexPolicy},
    layout::BLOCK_LEN,
    report::{Render, Report},
};

/// Decoder options.
///
/// Use the builder-style setters (`set_hex_policy`, `set_zero_fill`,
/// `set_strict_checksum`) to configure.
///
/// # Example
///
/// ```
/// use edidcraft::decoder::{Decoder, DecoderConfig};
/// use edidcraft::hex::HexPolicy;
///
/// let mut config = DecoderConfig::default();
/// config.set_hex_policy(HexPolicy::Truncate).set_zero_fill(true);
/// let report = Decoder::new(config).report_hex("00 FF FF FF FF FF FF 00").unwrap();
/// assert_eq!(report.lines()[0], "Valid EDID header");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecoderConfig {
    /// How hex dumps with malformed tokens are lexed.
    pub hex_policy: HexPolicy,
    /// If true, hex dumps shorter than one block are padded with zeros.
    pub zero_fill: bool,
    /// If true, a bad checksum fails the decode instead of being a diagnostic.
    pub strict_checksum: bool,
}

impl DecoderConfig {
    pub fn set_hex_policy(&mut self, hex_policy: HexPolicy) -> &mut Self {
        self.hex_policy = hex_policy;
        self
    }

    pub fn set_zero_fill(&mut self, zero_fill: bool) -> &mut Self {
        self.zero_fill = zero_fill;
        self
    }

    pub fn set_strict_checksum(&mut self, strict_checksum: bool) -> &mut Self {
        self.strict_checksum = strict_checksum;
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Decodes one block into typed fields.
    pub fn decode(&self, data: &[u8]) -> Result<Edid, DecodeError> {
        let block = EdidBlock::try_from(data)?;
        let edid = Edid::parse(&block)?;

        if self.config.strict_checksum && !edid.is_checksum_valid() {
            return Err(DecodeError::InvalidChecksum { sum: edid.checksum });
        }

        Ok(edid)
    }

    /// Decodes one block into a text report.
    ///
    /// An invalid header is not an error here: the report then holds the
    /// single line `Invalid EDID header` and an [DecodeError::InvalidHeader]
    /// diagnostic.
    pub fn report(&self, data: &[u8]) -> Result<Report, DecodeError> {
        let block = EdidBlock::try_from(data)?;
        let mut report = Report::new();

        let edid = match Edid::parse(&block) {
            Err(DecodeError::InvalidHeader) => {
                report.push("Invalid EDID header");
                report.push_diagnostic(DecodeError::InvalidHeader);
                return Ok(report);
            }
            other => other?,
        };

        if !edid.is_checksum_valid() {
            let invalid = DecodeError::InvalidChecksum { sum: edid.checksum };
            if self.config.strict_checksum {
                return Err(invalid);
            }
            report.push_diagnostic(invalid);
        }

        edid.render(&mut report);
        debug!("rendered {} report lines", report.lines().len());

        Ok(report)
    }

    pub fn decode_hex(&self, text: &str) -> Result<Edid, DecodeError> {
        self.decode(&self.lex(text)?)
    }

    pub fn report_hex(&self, text: &str) -> Result<Report, DecodeError> {
        self.report(&self.lex(text)?)
    }

    fn lex(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        let mut bytes = hex::parse_hex(text, self.config.hex_policy)?;
        debug!("lexed {} bytes from hex dump", bytes.len());

        if self.config.zero_fill && bytes.len() < BLOCK_LEN {
            bytes.resize(BLOCK_LEN, 0);
        }

        Ok(bytes)
    }
}

/// [Decoder::decode] with the default configuration.
pub fn decode(data: &[u8]) -> Result<Edid, DecodeError> {
    Decoder::default().decode(data)
}

/// [Decoder::report] with the default configuration.
pub fn report(data: &[u8]) -> Result<Report, DecodeError> {
    Decoder::default().report(data)
}
