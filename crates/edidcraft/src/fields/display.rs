//! Basic display parameters: physical size and gamma, bytes 21..=23.

use crate::{
    block::EdidBlock,
    errors::ReadError,
    layout,
    report::{Render, Report},
};

/// Maximum image size in centimetres, raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScreenSize {
    pub horizontal_cm: u8,
    pub vertical_cm: u8,
}

impl ScreenSize {
    pub fn parse(block: &EdidBlock<'_>) -> Result<Self, ReadError> {
        Ok(Self {
            horizontal_cm: block.read_u8(layout::SCREEN_WIDTH_CM)?,
            vertical_cm: block.read_u8(layout::SCREEN_HEIGHT_CM)?,
        })
    }
}

impl Render for ScreenSize {
    fn render(&self, report: &mut Report) {
        report.push(format!(
            "Screen Size: {} cm x {} cm",
            self.horizontal_cm, self.vertical_cm
        ));
    }
}

/// Display transfer characteristic, stored as `gamma * 100 - 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(into = "f64"))]
pub struct Gamma(pub u8);

impl Gamma {
    pub fn parse(block: &EdidBlock<'_>) -> Result<Self, ReadError> {
        Ok(Self(block.read_u8(layout::GAMMA)?))
    }

    pub fn value(&self) -> f64 {
        (f64::from(self.0) + 100.0) / 100.0
    }
}

impl From<Gamma> for f64 {
    fn from(value: Gamma) -> Self {
        value.value()
    }
}

impl Render for Gamma {
    fn render(&self, report: &mut Report) {
        report.push(format!("Display Gamma: {:.2}", self.value()));
    }
}
