use edidcraft::{
    Decoder, DecoderConfig, HexPolicy,
    fields::{BitDepth, DigitalInput, Interface, ManufacturerId, ProductCode, VideoInput},
};

const DELL_U2723QE: &str = "00 FF FF FF FF FF FF 00 10 AC 79 42 4C 47 5A 42 0F 22 01 04 B5 3C 22 78 3A DF 15 AD 50 44 AD 25 0F 50 54 A5 4B 00 D1 00 D1 C0 B3 00 A9 40 81 80 81 00 71 4F E1 C0 4D D0 00 A0 F0 70 3E 80 30 20 35 00 55 50 21 00 00 1A 00 00 00 FF 00 32 33 5A 53 4A 30 34 0A 20 20 20 20 20 00 00 00 FC 00 44 45 4C 4C 20 55 32 37 32 33 51 45 0A 00 00 00 FD 00 17 56 0F 8C 36 01 0A 20 20 20 20 20 20 01 2A";

const EXPECTED: &str = "\
Valid EDID header
Manufacturer ID: DEL
Product Code: 17017 (0x4279)
Serial Number: 1113212748 (0x425A474C)
Manufacture Date: Year 2024, Week 15
EDID Version: 1.4
Video Input Type: Digital
   Bits per colour: 10
   Interface: DisplayPort
Screen Size: 60 cm x 34 cm
Display Gamma: 2.20
Supported Features:
 - Suspend Supported
 - Display Type: RGB 4:4:4 & YCrCb 4:4:4 & YCrCb 4:2:2
 - Preferred Timing Mode
Color Characteristics (Chromaticity Coordinates):
  Red   : (X = 0.6787, Y = 0.3135)
  Green : (X = 0.2686, Y = 0.6787)
  Blue  : (X = 0.1445, Y = 0.0596)
  White : (X = 0.3135, Y = 0.3291)
Established Timings:
 - 720x400 @ 70Hz
 - 640x480 @ 60Hz
 - 640x480 @ 75Hz
 - 800x600 @ 60Hz
 - 800x600 @ 75Hz
 - 1024x768 @ 60Hz
 - 1024x768 @ 75Hz
 - 1280x1024 @ 75Hz
Standard Timings:
 - 1920 x 1200 (16:10) @ 60Hz
 - 1920 x 1080 (16:9) @ 60Hz
 - 1680 x 1050 (16:10) @ 60Hz
 - 1600 x 1200 (4:3) @ 60Hz
 - 1280 x 1024 (5:4) @ 60Hz
 - 1280 x 800 (16:10) @ 60Hz
 - 1152 x 864 (4:3) @ 75Hz
 - 2048 x 1152 (16:9) @ 60Hz
Checksum is valid
";

#[test]
fn test_sample_report_text() {
    let report = Decoder::default().report_hex(DELL_U2723QE).unwrap();
    assert_eq!(report.to_string(), EXPECTED);
    assert!(report.diagnostics().is_empty());
}

#[test]
fn test_sample_bytes_and_hex_agree() {
    let bytes = edidcraft::parse_hex(DELL_U2723QE, HexPolicy::Strict).unwrap();
    assert_eq!(bytes.len(), 128);
    assert_eq!(
        edidcraft::report(&bytes).unwrap(),
        Decoder::default().report_hex(DELL_U2723QE).unwrap()
    );
}

#[test]
fn test_sample_typed() {
    let edid = Decoder::default().decode_hex(DELL_U2723QE).unwrap();
    assert_eq!(edid.manufacturer, ManufacturerId(*b"DEL"));
    assert_eq!(edid.product, ProductCode(0x4279));
    assert_eq!(
        edid.video_input,
        VideoInput::Digital(DigitalInput {
            bit_depth: BitDepth::Bits10,
            interface: Interface::DisplayPort,
        })
    );
    assert_eq!(edid.standard_timings.0.len(), 8);
    assert!(edid.is_checksum_valid());
}

#[test]
fn test_sample_corrupted_checksum() {
    let mut bytes = edidcraft::parse_hex(DELL_U2723QE, HexPolicy::Strict).unwrap();
    bytes[127] = bytes[127].wrapping_add(1);

    let report = edidcraft::report(&bytes).unwrap();
    assert_eq!(report.lines().last().unwrap(), "Checksum is invalid");
    assert!(!report.is_checksum_valid());

    let mut config = DecoderConfig::default();
    config.set_strict_checksum(true);
    assert!(Decoder::new(config).report(&bytes).is_err());
}

#[test]
fn test_sample_with_sentinel_slot() {
    let mut bytes = edidcraft::parse_hex(DELL_U2723QE, HexPolicy::Strict).unwrap();
    // replace 1280x800 (slot 5) with the unused marker
    bytes[48] = 0x01;
    bytes[49] = 0x01;

    let report = edidcraft::report(&bytes).unwrap().to_string();
    assert!(!report.contains("1280 x 800"));
    assert!(report.contains("1280 x 1024 (5:4) @ 60Hz"));
    assert!(report.contains("1152 x 864 (4:3) @ 75Hz"));
}
