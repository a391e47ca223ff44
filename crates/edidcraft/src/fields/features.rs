//! Supported features, byte 24.

use crate::{
    block::EdidBlock,
    context::{DecodeContext, InputKind},
    errors::ReadError,
    layout,
    report::{Render, Report},
};

/// Colour encoding support, bits 4..=3. The table depends on the input kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DisplayType {
    Digital(u8),
    Analog(u8),
}

impl DisplayType {
    const DIGITAL: [&'static str; 4] = [
        "RGB 4:4:4",
        "RGB 4:4:4 & YCrCb 4:4:4",
        "RGB 4:4:4 & YCrCb 4:2:2",
        "RGB 4:4:4 & YCrCb 4:4:4 & YCrCb 4:2:2",
    ];

    const ANALOG: [&'static str; 4] = [
        "Monochrome or Grayscale",
        "RGB Color",
        "Non-RGB Color",
        "Undefined",
    ];

    pub fn new(input: InputKind, raw: u8) -> Self {
        match input {
            InputKind::Digital => DisplayType::Digital(raw & 0x03),
            InputKind::Analog => DisplayType::Analog(raw & 0x03),
        }
    }

    pub fn label(&self) -> &'static str {
        match *self {
            DisplayType::Digital(raw) => Self::DIGITAL[usize::from(raw & 0x03)],
            DisplayType::Analog(raw) => Self::ANALOG[usize::from(raw & 0x03)],
        }
    }
}

/// Decoded feature byte.
///
/// Bits 1 and 0 are read twice, once as DPMS power states and once as
/// timing flags; both readings are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Features {
    pub standby: bool,
    pub suspend: bool,
    pub active_off: bool,
    pub display_type: DisplayType,
    pub srgb_default: bool,
    pub preferred_timing: bool,
    pub continuous_timing: bool,
}

impl Features {
    pub fn parse(block: &EdidBlock<'_>, ctx: &DecodeContext) -> Result<Self, ReadError> {
        Ok(Self {
            standby: block.flag(layout::FEATURE_STANDBY)?,
            suspend: block.flag(layout::FEATURE_SUSPEND)?,
            active_off: block.flag(layout::FEATURE_ACTIVE_OFF)?,
            display_type: DisplayType::new(ctx.input, block.read_u8(layout::FEATURE_DISPLAY_TYPE)?),
            srgb_default: block.flag(layout::FEATURE_SRGB_DEFAULT)?,
            preferred_timing: block.flag(layout::FEATURE_PREFERRED_TIMING)?,
            continuous_timing: block.flag(layout::FEATURE_CONTINUOUS_TIMING)?,
        })
    }
}

impl Render for Features {
    fn render(&self, report: &mut Report) {
        report.push("Supported Features:");

        if self.standby {
            report.push(" - Standby Supported");
        }
        if self.suspend {
            report.push(" - Suspend Supported");
        }
        if self.active_off {
            report.push(" - Active-Off Supported");
        }

        report.push(format!(" - Display Type: {}", self.display_type.label()));

        if self.srgb_default {
            report.push(" - sRGB Color Space Default");
        }
        if self.preferred_timing {
            report.push(" - Preferred Timing Mode");
        }
        if self.continuous_timing {
            report.push(" - Continuous Timing Support");
        }
    }
}
