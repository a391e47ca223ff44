//! Vendor and product identification, bytes 8..=19.

use std::fmt::{self, Write};

use crate::{
    block::EdidBlock,
    errors::ReadError,
    layout,
    report::{Render, Report},
};

/// Three-letter PNP vendor code.
///
/// Each 5-bit group maps 1..=26 to `A`..=`Z`. Other group values are passed
/// through unchanged, so 0 becomes `@` and 27..=31 become `[`, `\`, `]`, `^`, `_`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(into = "String"))]
pub struct ManufacturerId(pub [u8; 3]);

impl ManufacturerId {
    pub fn parse(block: &EdidBlock<'_>) -> Result<Self, ReadError> {
        let mut letters = [0u8; 3];
        for (letter, fragments) in letters.iter_mut().zip(layout::MANUFACTURER_LETTERS) {
            *letter = Self::letter(block.assemble(fragments)? as u8);
        }
        Ok(Self(letters))
    }

    fn letter(group: u8) -> u8 {
        (b'A' - 1) + (group & 0x1F)
    }

    /// True if all three letters are in `A`..=`Z`.
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(u8::is_ascii_uppercase)
    }
}

impl fmt::Display for ManufacturerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            f.write_char(b as char)?;
        }
        Ok(())
    }
}

impl From<ManufacturerId> for String {
    fn from(value: ManufacturerId) -> Self {
        value.to_string()
    }
}

impl Render for ManufacturerId {
    fn render(&self, report: &mut Report) {
        report.push(format!("Manufacturer ID: {self}"));
    }
}

/// Vendor-assigned product code, little-endian at 10..=11.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProductCode(pub u16);

impl ProductCode {
    pub fn parse(block: &EdidBlock<'_>) -> Result<Self, ReadError> {
        Ok(Self(block.assemble(layout::PRODUCT_CODE)? as u16))
    }
}

impl Render for ProductCode {
    fn render(&self, report: &mut Report) {
        report.push(format!("Product Code: {0} (0x{0:04X})", self.0));
    }
}

/// Serial number, little-endian at 12..=15.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SerialNumber(pub u32);

impl SerialNumber {
    pub fn parse(block: &EdidBlock<'_>) -> Result<Self, ReadError> {
        Ok(Self(block.assemble(layout::SERIAL_NUMBER)? as u32))
    }
}

impl Render for SerialNumber {
    fn render(&self, report: &mut Report) {
        report.push(format!("Serial Number: {0} (0x{0:08X})", self.0));
    }
}

/// Week and year of manufacture. The week is kept raw: 0 and 0xFF are legal
/// sentinels and are not interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ManufactureDate {
    pub week: u8,
    pub year: u16,
}

impl ManufactureDate {
    pub const BASE_YEAR: u16 = 1990;

    pub fn parse(block: &EdidBlock<'_>) -> Result<Self, ReadError> {
        Ok(Self {
            week: block.read_u8(layout::WEEK)?,
            year: Self::BASE_YEAR + u16::from(block.read_u8(layout::YEAR_OFFSET)?),
        })
    }
}

impl Render for ManufactureDate {
    fn render(&self, report: &mut Report) {
        report.push(format!(
            "Manufacture Date: Year {}, Week {}",
            self.year, self.week
        ));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Version {
    pub version: u8,
    pub revision: u8,
}

impl Version {
    pub fn parse(block: &EdidBlock<'_>) -> Result<Self, ReadError> {
        Ok(Self {
            version: block.read_u8(layout::VERSION)?,
            revision: block.read_u8(layout::REVISION)?,
        })
    }
}

impl Render for Version {
    fn render(&self, report: &mut Report) {
        report.push(format!("EDID Version: {}.{}", self.version, self.revision));
    }
}
