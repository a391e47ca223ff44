use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

const DELL_U2723QE: &str = "00 FF FF FF FF FF FF 00 10 AC 79 42 4C 47 5A 42 0F 22 01 04 B5 3C 22 78 3A DF 15 AD 50 44 AD 25 0F 50 54 A5 4B 00 D1 00 D1 C0 B3 00 A9 40 81 80 81 00 71 4F E1 C0 4D D0 00 A0 F0 70 3E 80 30 20 35 00 55 50 21 00 00 1A 00 00 00 FF 00 32 33 5A 53 4A 30 34 0A 20 20 20 20 20 00 00 00 FC 00 44 45 4C 4C 20 55 32 37 32 33 51 45 0A 00 00 00 FD 00 17 56 0F 8C 36 01 0A 20 20 20 20 20 20 01 2A";

fn edid_decode() -> Command {
    Command::new(env!("CARGO_BIN_EXE_edid-decode"))
}

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("edid-decode-{}-{name}", std::process::id()))
}

fn sample_bytes() -> Vec<u8> {
    edidcraft::parse_hex(DELL_U2723QE, edidcraft::HexPolicy::Strict).unwrap()
}

fn with_stdin(mut command: Command, input: &[u8]) -> Output {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_valid_hex_exits_zero() {
    let output = edid_decode().args(["--hex", DELL_U2723QE]).output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Valid EDID header\nManufacturer ID: DEL\n"));
    assert!(stdout.ends_with("Checksum is valid\n"));
}

#[test]
fn test_invalid_header_exits_two() {
    let output = edid_decode()
        .args(["--zero-fill", "--hex", "01"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "Invalid EDID header\n");
}

#[test]
fn test_invalid_header_json_exits_two() {
    let output = edid_decode()
        .args(["--json", "--zero-fill", "--hex", "01"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "null\n");
}

#[test]
fn test_short_binary_file_exits_one() {
    let path = scratch("short.bin");
    fs::write(&path, [0x00, 0xFF, 0xFF]).unwrap();

    let output = edid_decode().arg("--binary").arg(&path).output().unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("expected 128 bytes of EDID data, got 3"));
}

#[test]
fn test_binary_file_matches_hex() {
    let path = scratch("sample.bin");
    fs::write(&path, sample_bytes()).unwrap();

    let binary = edid_decode().arg("--binary").arg(&path).output().unwrap();
    fs::remove_file(&path).unwrap();
    let hex = edid_decode().args(["--hex", DELL_U2723QE]).output().unwrap();

    assert_eq!(binary.status.code(), Some(0));
    assert_eq!(binary.stdout, hex.stdout);
}

#[test]
fn test_stdin_dash_reads_hex() {
    let mut command = edid_decode();
    command.arg("-");
    let output = with_stdin(command, DELL_U2723QE.as_bytes());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Valid EDID header\n"));
}

#[test]
fn test_stdin_binary() {
    let mut command = edid_decode();
    command.arg("--binary");
    let output = with_stdin(command, &sample_bytes());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Product Code: 17017 (0x4279)\n"));
}

#[test]
fn test_output_file_matches_stdout() {
    let path = scratch("report.txt");

    let written = edid_decode()
        .args(["--hex", DELL_U2723QE, "-o"])
        .arg(&path)
        .output()
        .unwrap();
    let report = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(written.status.code(), Some(0));
    assert!(written.stdout.is_empty());

    let printed = edid_decode().args(["--hex", DELL_U2723QE]).output().unwrap();
    assert_eq!(report, String::from_utf8(printed.stdout).unwrap());
}
