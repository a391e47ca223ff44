//! Established timings (bytes 35..=37) and standard timings (bytes 38..=53).

use crate::{
    block::EdidBlock,
    errors::ReadError,
    layout,
    report::{Render, Report},
};

/// Legacy modes flagged by established timings I and II, most significant bit first.
pub const ESTABLISHED_TIMING_LABELS: [&str; 16] = [
    "720x400 @ 70Hz",
    "720x400 @ 88Hz",
    "640x480 @ 60Hz",
    "640x480 @ 67Hz",
    "640x480 @ 72Hz",
    "640x480 @ 75Hz",
    "800x600 @ 56Hz",
    "800x600 @ 60Hz",
    "800x600 @ 72Hz",
    "800x600 @ 75Hz",
    "832x624 @ 75Hz",
    "1024x768 @ 87Hz (interlaced)",
    "1024x768 @ 60Hz",
    "1024x768 @ 70Hz",
    "1024x768 @ 75Hz",
    "1280x1024 @ 75Hz",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EstablishedTimings {
    /// Bytes 35 and 36; bit 15 is the first table entry.
    pub bitmap: u16,
    /// Byte 37, vendor specific and never decoded.
    pub manufacturer_reserved: u8,
}

impl EstablishedTimings {
    pub fn parse(block: &EdidBlock<'_>) -> Result<Self, ReadError> {
        Ok(Self {
            bitmap: block.assemble(layout::ESTABLISHED_TIMINGS)? as u16,
            manufacturer_reserved: block.read_u8(layout::MANUFACTURER_TIMINGS)?,
        })
    }

    /// Labels of all flagged modes in table order.
    pub fn supported(&self) -> impl Iterator<Item = &'static str> {
        let bitmap = self.bitmap;
        ESTABLISHED_TIMING_LABELS
            .into_iter()
            .enumerate()
            .filter(move |(i, _)| bitmap & (0x8000 >> i) != 0)
            .map(|(_, label)| label)
    }
}

impl Render for EstablishedTimings {
    fn render(&self, report: &mut Report) {
        report.push("Established Timings:");
        for label in self.supported() {
            report.push(format!(" - {label}"));
        }
        if self.manufacturer_reserved != 0 {
            report.push(format!(
                " - Manufacturer reserved timings: 0x{:02X}",
                self.manufacturer_reserved
            ));
        }
    }
}

/// Image aspect ratio of a standard timing, bits 7..=6 of its second byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AspectRatio {
    R16_10,
    R4_3,
    R5_4,
    R16_9,
}

impl AspectRatio {
    pub fn from_raw(raw: u8) -> Self {
        match raw & 0x03 {
            0 => AspectRatio::R16_10,
            1 => AspectRatio::R4_3,
            2 => AspectRatio::R5_4,
            _ => AspectRatio::R16_9,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::R16_10 => "16:10",
            AspectRatio::R4_3 => "4:3",
            AspectRatio::R5_4 => "5:4",
            AspectRatio::R16_9 => "16:9",
        }
    }

    /// Vertical over horizontal as `(numerator, denominator)`.
    pub fn vertical_ratio(&self) -> (u32, u32) {
        match self {
            AspectRatio::R16_10 => (10, 16),
            AspectRatio::R4_3 => (3, 4),
            AspectRatio::R5_4 => (4, 5),
            AspectRatio::R16_9 => (9, 16),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StandardTiming {
    /// Slot index 0..8 the timing was read from.
    pub slot: usize,
    pub horizontal: u32,
    /// Derived from `horizontal` and `aspect`, truncated.
    pub vertical: u32,
    pub aspect: AspectRatio,
    pub refresh_hz: u32,
}

impl StandardTiming {
    /// Both bytes set to 0x01 mark an unused slot.
    pub const UNUSED: u16 = 0x0101;

    /// Returns `None` for an unused slot.
    pub fn parse(block: &EdidBlock<'_>, slot: usize) -> Result<Option<Self>, ReadError> {
        if block.read(layout::standard_timing_raw(slot))? == u64::from(Self::UNUSED) {
            return Ok(None);
        }

        let resolution = block.read_u8(layout::standard_timing_resolution(slot))?;
        let horizontal = (u32::from(resolution) + 31) * 8;
        let aspect = AspectRatio::from_raw(block.read_u8(layout::standard_timing_aspect(slot))?);
        let (num, den) = aspect.vertical_ratio();
        let refresh_hz = u32::from(block.read_u8(layout::standard_timing_refresh(slot))?) + 60;

        Ok(Some(Self {
            slot,
            horizontal,
            vertical: horizontal * num / den,
            aspect,
            refresh_hz,
        }))
    }
}

/// The used standard timing slots in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StandardTimings(pub Vec<StandardTiming>);

impl StandardTimings {
    pub fn parse(block: &EdidBlock<'_>) -> Result<Self, ReadError> {
        let mut timings = Vec::with_capacity(layout::STANDARD_TIMING_COUNT);
        for slot in 0..layout::STANDARD_TIMING_COUNT {
            if let Some(timing) = StandardTiming::parse(block, slot)? {
                timings.push(timing);
            }
        }
        Ok(Self(timings))
    }
}

impl Render for StandardTimings {
    fn render(&self, report: &mut Report) {
        report.push("Standard Timings:");
        for t in &self.0 {
            report.push(format!(
                " - {} x {} ({}) @ {}Hz",
                t.horizontal,
                t.vertical,
                t.aspect.label(),
                t.refresh_hz
            ));
        }
    }
}
