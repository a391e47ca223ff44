//! Video input definition, byte 20.

use crate::{
    block::EdidBlock,
    context::{DecodeContext, InputKind},
    errors::ReadError,
    layout,
    report::{Render, Report},
};

/// Colour bit depth of a digital input, bits 6..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BitDepth {
    Undefined,
    Bits6,
    Bits8,
    Bits10,
    Bits12,
    Bits14,
    Bits16,
    Reserved,
}

impl BitDepth {
    const TABLE: [BitDepth; 8] = [
        BitDepth::Undefined,
        BitDepth::Bits6,
        BitDepth::Bits8,
        BitDepth::Bits10,
        BitDepth::Bits12,
        BitDepth::Bits14,
        BitDepth::Bits16,
        BitDepth::Reserved,
    ];

    pub fn from_raw(raw: u8) -> Self {
        Self::TABLE[usize::from(raw & 0x07)]
    }

    pub fn label(&self) -> &'static str {
        match self {
            BitDepth::Undefined => "Undefined",
            BitDepth::Bits6 => "6",
            BitDepth::Bits8 => "8",
            BitDepth::Bits10 => "10",
            BitDepth::Bits12 => "12",
            BitDepth::Bits14 => "14",
            BitDepth::Bits16 => "16",
            BitDepth::Reserved => "Reserved",
        }
    }
}

/// Digital interface standard, bits 3..=0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Interface {
    Undefined,
    Dvi,
    HdmiA,
    HdmiB,
    Mddi,
    DisplayPort,
    /// Any value above 5.
    Reserved(u8),
}

impl Interface {
    pub fn from_raw(raw: u8) -> Self {
        match raw & 0x0F {
            0 => Interface::Undefined,
            1 => Interface::Dvi,
            2 => Interface::HdmiA,
            3 => Interface::HdmiB,
            4 => Interface::Mddi,
            5 => Interface::DisplayPort,
            other => Interface::Reserved(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interface::Undefined => "Undefined",
            Interface::Dvi => "DVI",
            Interface::HdmiA => "HDMIa",
            Interface::HdmiB => "HDMIb",
            Interface::Mddi => "MDDI",
            Interface::DisplayPort => "DisplayPort",
            Interface::Reserved(_) => "Reserved or Unknown",
        }
    }
}

/// Video white and sync levels relative to blank, bits 6..=5 of an analog input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SignalLevel {
    /// +0.7 / -0.3 V
    Level0700_0300,
    /// +0.714 / -0.286 V
    Level0714_0286,
    /// Labelled +1.000 / -0.286 V (1.0 V p-p).
    Level1000_0286,
    /// +0.7 / 0 V
    Level0700_0000,
}

impl SignalLevel {
    pub fn from_raw(raw: u8) -> Self {
        match raw & 0x03 {
            0 => SignalLevel::Level0700_0300,
            1 => SignalLevel::Level0714_0286,
            2 => SignalLevel::Level1000_0286,
            _ => SignalLevel::Level0700_0000,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SignalLevel::Level0700_0300 => "0.700, 0.300 (1.0 V p-p)",
            SignalLevel::Level0714_0286 => "0.714, 0.286 (1.0 V p-p)",
            SignalLevel::Level1000_0286 => "1.000, 0.286 (1.0 V p-p)",
            SignalLevel::Level0700_0000 => "0.700, 0.000 (0.7 V p-p)",
        }
    }
}

bitflags::bitflags! {
    /// Sync types supported by an analog input, bits 3..=0.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct SyncTypes: u8 {
        const SEPARATE = 0b1000;
        const COMPOSITE = 0b0100;
        const SYNC_ON_GREEN = 0b0010;
        const SERRATION = 0b0001;
    }
}

impl SyncTypes {
    /// Report order, highest bit first.
    const LABELS: [(SyncTypes, &'static str); 4] = [
        (SyncTypes::SEPARATE, "Separate Sync H & V Signals"),
        (SyncTypes::COMPOSITE, "Composite Sync H & V Signals"),
        (SyncTypes::SYNC_ON_GREEN, "Composite Sync Signal on Green Video"),
        (SyncTypes::SERRATION, "Serration on Vertical Sync"),
    ];

    pub fn labels(self) -> impl Iterator<Item = &'static str> {
        Self::LABELS
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, label)| label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DigitalInput {
    pub bit_depth: BitDepth,
    pub interface: Interface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnalogInput {
    pub signal_level: SignalLevel,
    /// Blank-to-black setup (pedestal) expected.
    pub blank_to_black_setup: bool,
    pub sync: SyncTypes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum VideoInput {
    Digital(DigitalInput),
    Analog(AnalogInput),
}

impl VideoInput {
    /// Only the fields of the branch selected by `ctx` are read.
    pub fn parse(block: &EdidBlock<'_>, ctx: &DecodeContext) -> Result<Self, ReadError> {
        match ctx.input {
            InputKind::Digital => Ok(VideoInput::Digital(DigitalInput {
                bit_depth: BitDepth::from_raw(block.read_u8(layout::DIGITAL_BIT_DEPTH)?),
                interface: Interface::from_raw(block.read_u8(layout::DIGITAL_INTERFACE)?),
            })),
            InputKind::Analog => Ok(VideoInput::Analog(AnalogInput {
                signal_level: SignalLevel::from_raw(block.read_u8(layout::ANALOG_SIGNAL_LEVEL)?),
                blank_to_black_setup: block.flag(layout::ANALOG_SETUP)?,
                sync: SyncTypes::from_bits_truncate(block.read_u8(layout::ANALOG_SYNC)?),
            })),
        }
    }
}

impl Render for VideoInput {
    fn render(&self, report: &mut Report) {
        match self {
            VideoInput::Digital(digital) => {
                report.push("Video Input Type: Digital");
                report.push(format!("   Bits per colour: {}", digital.bit_depth.label()));
                report.push(format!("   Interface: {}", digital.interface.label()));
            }
            VideoInput::Analog(analog) => {
                report.push("Video Input Type: Analog");
                report.push(format!("   Signal Level: {}", analog.signal_level.label()));
                if analog.blank_to_black_setup {
                    report.push("Video setup: Blank-to-Black setup or pedestal");
                } else {
                    report.push("Video setup: Blank level = Black level");
                }
                report.push("   Sync Types Supported:");
                for label in analog.sync.labels() {
                    report.push(format!("   -{label}"));
                }
            }
        }
    }
}
