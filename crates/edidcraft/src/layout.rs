//! Fixed layout of the EDID 1.x base block.
//!
//! Every field is a list of [Fragment]s concatenated most significant first.
//! Byte and bit positions are those of the VESA EDID base block.

use crate::fragment::Fragment;

/// Length of the base block in bytes.
pub const BLOCK_LEN: usize = 128;

/// Fixed 8-byte pattern at offsets 0..8.
pub const HEADER: [u8; 8] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];

// Manufacturer ID: big-endian 16-bit value at 8..=9, bit 15 reserved,
// three 5-bit letters at bits 14-10, 9-5 and 4-0.
pub const MANUFACTURER_LETTERS: [&[Fragment]; 3] = [
    &[Fragment::bits(8, 6, 2)],
    &[Fragment::bits(8, 1, 0), Fragment::bits(9, 7, 5)],
    &[Fragment::bits(9, 4, 0)],
];

// Little-endian values: high byte first.
pub const PRODUCT_CODE: &[Fragment] = &[Fragment::byte(11), Fragment::byte(10)];
pub const SERIAL_NUMBER: &[Fragment] = &[
    Fragment::byte(15),
    Fragment::byte(14),
    Fragment::byte(13),
    Fragment::byte(12),
];

pub const WEEK: Fragment = Fragment::byte(16);
pub const YEAR_OFFSET: Fragment = Fragment::byte(17);
pub const VERSION: Fragment = Fragment::byte(0x12);
pub const REVISION: Fragment = Fragment::byte(0x13);

// Video input definition, byte 20.
pub const INPUT_DIGITAL: Fragment = Fragment::bit(20, 7);
pub const DIGITAL_BIT_DEPTH: Fragment = Fragment::bits(20, 6, 4);
pub const DIGITAL_INTERFACE: Fragment = Fragment::bits(20, 3, 0);
pub const ANALOG_SIGNAL_LEVEL: Fragment = Fragment::bits(20, 6, 5);
pub const ANALOG_SETUP: Fragment = Fragment::bit(20, 4);
pub const ANALOG_SYNC: Fragment = Fragment::bits(20, 3, 0);

pub const SCREEN_WIDTH_CM: Fragment = Fragment::byte(21);
pub const SCREEN_HEIGHT_CM: Fragment = Fragment::byte(22);
pub const GAMMA: Fragment = Fragment::byte(23);

// Supported features, byte 24. Bits 1 and 0 back two entries each.
pub const FEATURE_STANDBY: Fragment = Fragment::bit(24, 6);
pub const FEATURE_SUSPEND: Fragment = Fragment::bit(24, 1);
pub const FEATURE_ACTIVE_OFF: Fragment = Fragment::bit(24, 0);
pub const FEATURE_DISPLAY_TYPE: Fragment = Fragment::bits(24, 4, 3);
pub const FEATURE_SRGB_DEFAULT: Fragment = Fragment::bit(24, 2);
pub const FEATURE_PREFERRED_TIMING: Fragment = Fragment::bit(24, 1);
pub const FEATURE_CONTINUOUS_TIMING: Fragment = Fragment::bit(24, 0);

// Chromaticity: 8 high bits from 27..=34, 2 low bits packed in bytes 25 and 26.
pub const RED_X: &[Fragment] = &[Fragment::byte(27), Fragment::bits(25, 7, 6)];
pub const RED_Y: &[Fragment] = &[Fragment::byte(28), Fragment::bits(25, 5, 4)];
pub const GREEN_X: &[Fragment] = &[Fragment::byte(29), Fragment::bits(25, 3, 2)];
pub const GREEN_Y: &[Fragment] = &[Fragment::byte(30), Fragment::bits(25, 1, 0)];
pub const BLUE_X: &[Fragment] = &[Fragment::byte(31), Fragment::bits(26, 7, 6)];
pub const BLUE_Y: &[Fragment] = &[Fragment::byte(32), Fragment::bits(26, 5, 4)];
pub const WHITE_X: &[Fragment] = &[Fragment::byte(33), Fragment::bits(26, 3, 2)];
pub const WHITE_Y: &[Fragment] = &[Fragment::byte(34), Fragment::bits(26, 1, 0)];

/// Established timings I and II as one 16-bit bitmap, MSB = first table entry.
pub const ESTABLISHED_TIMINGS: &[Fragment] = &[Fragment::byte(35), Fragment::byte(36)];
pub const MANUFACTURER_TIMINGS: Fragment = Fragment::byte(37);

pub const STANDARD_TIMING_OFFSET: usize = 38;
pub const STANDARD_TIMING_COUNT: usize = 8;

/// Horizontal resolution byte of standard timing slot `slot`.
pub const fn standard_timing_resolution(slot: usize) -> Fragment {
    Fragment::byte(STANDARD_TIMING_OFFSET + slot * 2)
}

pub const fn standard_timing_aspect(slot: usize) -> Fragment {
    Fragment::bits(STANDARD_TIMING_OFFSET + slot * 2 + 1, 7, 6)
}

pub const fn standard_timing_refresh(slot: usize) -> Fragment {
    Fragment::bits(STANDARD_TIMING_OFFSET + slot * 2 + 1, 5, 0)
}

/// Both bytes of standard timing slot `slot`, first byte high.
pub const fn standard_timing_raw(slot: usize) -> Fragment {
    Fragment::new((STANDARD_TIMING_OFFSET + slot * 2) * 8, 16)
}
