//! Bit fragments and how they are concatenated into field values.

use crate::{bits, errors::ReadError};

/// A contiguous run of bits inside the block, addressed MSB-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fragment {
    pub offset_bits: usize,
    pub len_bits: usize,
}

impl Fragment {
    pub const fn new(offset_bits: usize, len_bits: usize) -> Self {
        Fragment {
            offset_bits,
            len_bits,
        }
    }

    /// The whole byte at `offset`.
    pub const fn byte(offset: usize) -> Self {
        Fragment::new(offset * 8, 8)
    }

    /// Bits `hi..=lo` of the byte at `offset`, numbered 7 (MSB) down to 0.
    pub const fn bits(offset: usize, hi: usize, lo: usize) -> Self {
        Fragment::new(offset * 8 + (7 - hi), hi - lo + 1)
    }

    /// A single bit of the byte at `offset`.
    pub const fn bit(offset: usize, bit: usize) -> Self {
        Fragment::bits(offset, bit, bit)
    }

    pub fn read(&self, data: &[u8]) -> Result<u64, ReadError> {
        bits::read_bits_at(data, self.offset_bits, self.len_bits)
    }
}

/// Concatenates `fragments` into one value, first fragment most significant.
pub fn assemble(data: &[u8], fragments: &[Fragment]) -> Result<u64, ReadError> {
    let total_bits: usize = fragments.iter().map(|f| f.len_bits).sum();
    if total_bits > 64 {
        return Err(ReadError::TooManyBitsRead);
    }

    let mut value = 0u64;
    let mut remaining = total_bits;

    for fragment in fragments {
        remaining -= fragment.len_bits;
        value |= fragment.read(data)? << remaining;
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_constructor() {
        assert_eq!(Fragment::bits(20, 6, 4), Fragment::new(161, 3));
        assert_eq!(Fragment::bit(24, 0), Fragment::new(199, 1));
        assert_eq!(Fragment::byte(2), Fragment::new(16, 8));
    }

    #[test]
    fn test_assemble_single() {
        let data = [0b11_000001, 0b10000_101];
        assert_eq!(assemble(&data, &[Fragment::bits(0, 7, 6)]).unwrap(), 3);
        assert_eq!(assemble(&data, &[Fragment::bits(1, 2, 0)]).unwrap(), 5);
    }

    #[test]
    fn test_non_consecutive_fragments() {
        let data: [u8; 4] = [0b00000001, 0b00000010, 0b00000100, 0b00001000];

        let first = assemble(&data, &[Fragment::byte(0), Fragment::byte(2)]).unwrap();
        assert_eq!(first, 0b00000001_00000100);

        let second = assemble(&data, &[Fragment::byte(1), Fragment::byte(3)]).unwrap();
        assert_eq!(second, 0b00000010_00001000);
    }

    #[test]
    fn test_assemble_little_endian_by_order() {
        let data = [0x79, 0x42];
        assert_eq!(
            assemble(&data, &[Fragment::byte(1), Fragment::byte(0)]).unwrap(),
            0x4279
        );
    }

    #[test]
    fn test_assemble_high_and_low_bits() {
        // 8 high bits from byte 1, 2 low bits from bits 7-6 of byte 0
        let data = [0b10_000000, 0xFF];
        assert_eq!(
            assemble(&data, &[Fragment::byte(1), Fragment::bits(0, 7, 6)]).unwrap(),
            0x3FE
        );
    }

    #[test]
    fn test_assemble_too_wide() {
        let data = [0u8; 16];
        let fragments = [Fragment::new(0, 40), Fragment::new(40, 40)];
        assert_eq!(
            assemble(&data, &fragments).unwrap_err(),
            ReadError::TooManyBitsRead
        );
    }

    #[test]
    fn test_assemble_out_of_bounds() {
        let data = [0u8; 2];
        assert_eq!(
            assemble(&data, &[Fragment::byte(2)]).unwrap_err(),
            ReadError::OutOfBounds
        );
    }
}
