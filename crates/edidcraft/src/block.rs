//! Borrowed, length-checked view of one EDID base block.

use crate::{
    bits,
    errors::{DecodeError, ReadError},
    fragment::{self, Fragment},
    layout::{BLOCK_LEN, HEADER},
};

/// Exactly [BLOCK_LEN] bytes of externally owned EDID data. Never mutated.
#[derive(Debug, Clone, Copy)]
pub struct EdidBlock<'a> {
    bytes: &'a [u8; BLOCK_LEN],
}

impl<'a> EdidBlock<'a> {
    pub fn new(bytes: &'a [u8; BLOCK_LEN]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &'a [u8; BLOCK_LEN] {
        self.bytes
    }

    /// True iff bytes 0..8 are the fixed EDID header.
    pub fn validate_header(&self) -> bool {
        self.bytes[..HEADER.len()] == HEADER
    }

    /// Sum of all 128 bytes modulo 256.
    pub fn checksum_sum(&self) -> u8 {
        bits::byte_sum(self.bytes)
    }

    /// True iff the block sums to 0 modulo 256.
    pub fn validate_checksum(&self) -> bool {
        self.checksum_sum() == 0
    }

    /// Reads one fragment as an unsigned value.
    pub fn read(&self, fragment: Fragment) -> Result<u64, ReadError> {
        fragment.read(self.bytes)
    }

    /// Reads a fragment that is at most 8 bits wide.
    pub fn read_u8(&self, fragment: Fragment) -> Result<u8, ReadError> {
        Ok(self.read(fragment)? as u8)
    }

    pub fn flag(&self, fragment: Fragment) -> Result<bool, ReadError> {
        Ok(self.read(fragment)? != 0)
    }

    /// Concatenates several fragments, first one most significant.
    pub fn assemble(&self, fragments: &[Fragment]) -> Result<u64, ReadError> {
        fragment::assemble(self.bytes, fragments)
    }
}

impl<'a> TryFrom<&'a [u8]> for EdidBlock<'a> {
    type Error = DecodeError;

    fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
        let bytes: &[u8; BLOCK_LEN] = value.try_into().map_err(|_| DecodeError::InvalidInput {
            expected: BLOCK_LEN,
            actual: value.len(),
        })?;

        Ok(EdidBlock::new(bytes))
    }
}
