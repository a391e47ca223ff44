//! `edid-decode`: decode an EDID base block from a hex dump or raw bytes.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use edidcraft::{DecodeError, Decoder, DecoderConfig, HexPolicy};
use log::{debug, info};

#[derive(Parser)]
#[command(name = "edid-decode")]
#[command(about = "Decode a 128-byte EDID base block into a readable report")]
#[command(version)]
struct Cli {
    /// Input file; `-` or absent reads stdin
    input: Option<PathBuf>,

    /// Decode this hex string instead of reading a file
    #[arg(long, conflicts_with_all = ["input", "binary"])]
    hex: Option<String>,

    /// Input is raw bytes rather than a hex dump
    #[arg(short, long)]
    binary: bool,

    /// Stop at the first malformed hex pair instead of failing
    #[arg(long)]
    truncate: bool,

    /// Pad short hex dumps with zeros to 128 bytes
    #[arg(long)]
    zero_fill: bool,

    /// Fail on an invalid checksum
    #[arg(long)]
    strict_checksum: bool,

    /// Print the decoded fields as JSON
    #[arg(long)]
    json: bool,

    /// Write the output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

enum Input {
    Hex(String),
    Bytes(Vec<u8>),
}

fn read_input(cli: &Cli) -> Result<Input> {
    if let Some(hex) = &cli.hex {
        return Ok(Input::Hex(hex.clone()));
    }

    let mut raw = Vec::new();
    match &cli.input {
        Some(path) if path.as_os_str() != "-" => {
            raw = fs::read(path)
                .with_context(|| format!("reading {}", path.display()))?;
        }
        _ => {
            io::stdin()
                .read_to_end(&mut raw)
                .context("reading stdin")?;
        }
    }
    debug!("read {} input bytes", raw.len());

    if cli.binary {
        Ok(Input::Bytes(raw))
    } else {
        let text = String::from_utf8(raw).context("hex dump is not valid UTF-8")?;
        Ok(Input::Hex(text))
    }
}

fn config(cli: &Cli) -> DecoderConfig {
    let mut config = DecoderConfig::default();
    config
        .set_zero_fill(cli.zero_fill)
        .set_strict_checksum(cli.strict_checksum);
    if cli.truncate {
        config.set_hex_policy(HexPolicy::Truncate);
    }
    config
}

/// Returns the text to emit and whether the block passed the header gate.
///
/// In JSON mode an invalid header is emitted as `null`.
fn render(cli: &Cli, decoder: &Decoder, input: &Input) -> Result<(String, bool)> {
    if cli.json {
        let decoded = match input {
            Input::Hex(text) => decoder.decode_hex(text),
            Input::Bytes(bytes) => decoder.decode(bytes),
        };
        let edid = match decoded {
            Err(DecodeError::InvalidHeader) => return Ok(("null\n".to_string(), false)),
            other => other.context("decoding EDID")?,
        };
        let mut json = serde_json::to_string_pretty(&edid).context("serializing EDID")?;
        json.push('\n');
        return Ok((json, true));
    }

    let report = match input {
        Input::Hex(text) => decoder.report_hex(text),
        Input::Bytes(bytes) => decoder.report(bytes),
    }
    .context("decoding EDID")?;

    Ok((report.to_string(), report.is_header_valid()))
}

fn run(cli: &Cli) -> Result<bool> {
    let input = read_input(cli)?;
    let decoder = Decoder::new(config(cli));
    let (text, header_valid) = render(cli, &decoder, &input)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("writing {}", path.display()))?;
            info!("report written to {}", path.display());
        }
        None => {
            io::stdout()
                .write_all(text.as_bytes())
                .context("writing stdout")?;
        }
    }

    Ok(header_valid)
}

/// 0 when decoded, 2 on an invalid header, 1 on any other failure.
fn exit_status(outcome: &Result<bool>) -> u8 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 2,
        Err(_) => 1,
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = run(&cli);
    if let Err(e) = &outcome {
        eprintln!("edid-decode: {e:#}");
    }
    ExitCode::from(exit_status(&outcome))
}
