//! Low-level bit read utilities for byte slices.
//!
//! Bits are addressed in MSB-first order: bit 0 is the high bit of the first byte.

use crate::errors::ReadError;

/// Reads a single bit at `bit_pos` (0 = MSB of first byte). Returns 0 or 1.
pub fn read_bit_at(data: &[u8], bit_pos: usize) -> Result<u8, ReadError> {
    if bit_pos >= data.len() * 8 {
        return Err(ReadError::OutOfBounds);
    }

    let byte_index = bit_pos / 8;
    let bit_index = bit_pos % 8;

    Ok((data[byte_index] >> (7 - bit_index)) & 1)
}

/// Reads `n` bits starting at `bit_pos` as an unsigned value (max 64 bits). MSB-first.
pub fn read_bits_at(data: &[u8], bit_pos: usize, n: usize) -> Result<u64, ReadError> {
    if n > 64 {
        return Err(ReadError::TooManyBitsRead);
    }

    if bit_pos
        .checked_add(n)
        .is_none_or(|end| end > data.len() * 8)
    {
        return Err(ReadError::OutOfBounds);
    }

    let mut value = 0u64;
    let mut pos = bit_pos;

    for _ in 0..n {
        let bit = read_bit_at(data, pos)? as u64;
        value = (value << 1) | bit;
        pos += 1;
    }

    Ok(value)
}

/// Wrapping sum of all bytes.
pub fn byte_sum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
}
