//! Per-decode context shared by the field extractors.

use crate::{block::EdidBlock, errors::ReadError, layout};

/// Signal interface selected by bit 7 of the video input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InputKind {
    Analog,
    Digital,
}

/// Values derived once from the block and read by several extractors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeContext {
    pub input: InputKind,
}

impl DecodeContext {
    pub fn new(block: &EdidBlock<'_>) -> Result<Self, ReadError> {
        let input = if block.flag(layout::INPUT_DIGITAL)? {
            InputKind::Digital
        } else {
            InputKind::Analog
        };

        Ok(Self { input })
    }
}
