//! The fully decoded base block.

use log::{debug, trace, warn};

use crate::{
    block::EdidBlock,
    context::DecodeContext,
    errors::DecodeError,
    fields::{
        Chromaticity, EstablishedTimings, Features, Gamma, ManufactureDate, ManufacturerId,
        ProductCode, ScreenSize, SerialNumber, StandardTimings, Version, VideoInput,
    },
    report::{Render, Report},
};

/// Every field of an EDID base block whose header was valid, in block order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Edid {
    pub manufacturer: ManufacturerId,
    pub product: ProductCode,
    pub serial: SerialNumber,
    pub manufacture_date: ManufactureDate,
    pub version: Version,
    pub video_input: VideoInput,
    pub screen_size: ScreenSize,
    pub gamma: Gamma,
    pub features: Features,
    pub chromaticity: Chromaticity,
    pub established_timings: EstablishedTimings,
    pub standard_timings: StandardTimings,
    /// Sum of all 128 bytes modulo 256; 0 for a valid block.
    pub checksum: u8,
    checksum_valid: bool,
}

impl Edid {
    /// Decodes every field. Fails with [DecodeError::InvalidHeader] before
    /// reading anything else if bytes 0..8 are not the EDID header.
    pub fn parse(block: &EdidBlock<'_>) -> Result<Self, DecodeError> {
        if !block.validate_header() {
            warn!("invalid EDID header: {:02X?}", &block.as_bytes()[..8]);
            return Err(DecodeError::InvalidHeader);
        }
        debug!("valid EDID header");

        let ctx = DecodeContext::new(block)?;
        trace!("input kind: {:?}", ctx.input);

        let edid = Edid {
            manufacturer: ManufacturerId::parse(block)?,
            product: ProductCode::parse(block)?,
            serial: SerialNumber::parse(block)?,
            manufacture_date: ManufactureDate::parse(block)?,
            version: Version::parse(block)?,
            video_input: VideoInput::parse(block, &ctx)?,
            screen_size: ScreenSize::parse(block)?,
            gamma: Gamma::parse(block)?,
            features: Features::parse(block, &ctx)?,
            chromaticity: Chromaticity::parse(block)?,
            established_timings: EstablishedTimings::parse(block)?,
            standard_timings: StandardTimings::parse(block)?,
            checksum: block.checksum_sum(),
            checksum_valid: block.validate_checksum(),
        };
        trace!("decoded fields: {edid:?}");

        if !edid.checksum_valid {
            warn!("invalid EDID checksum: byte sum {:#04x}", edid.checksum);
        }

        Ok(edid)
    }

    /// [EdidBlock::validate_checksum] of the block this was decoded from.
    pub fn is_checksum_valid(&self) -> bool {
        self.checksum_valid
    }
}

impl Render for Edid {
    fn render(&self, report: &mut Report) {
        report.push("Valid EDID header");
        self.manufacturer.render(report);
        self.product.render(report);
        self.serial.render(report);
        self.manufacture_date.render(report);
        self.version.render(report);
        self.video_input.render(report);
        self.screen_size.render(report);
        self.gamma.render(report);
        self.features.render(report);
        self.chromaticity.render(report);
        self.established_timings.render(report);
        self.standard_timings.render(report);

        if self.is_checksum_valid() {
            report.push("Checksum is valid");
        } else {
            report.push("Checksum is invalid");
        }
    }
}
