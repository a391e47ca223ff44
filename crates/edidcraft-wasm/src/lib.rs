//! WASM bindings for the `edidcraft` EDID decoder.
//!
//! The entry point from JavaScript is [`WasmDecoder`]. It is configured once
//! from a JSON string matching [`edidcraft::serde::DecoderConfigDef`] and then
//! used to decode many blocks:
//!
//! ```text
//! // const decoder = new WasmDecoder(JSON.stringify({ zero_fill: true }));
//! // console.log(decoder.report_hex("00 FF FF FF FF FF FF 00 ..."));
//! // const edid = decoder.decode(bytes);
//! // console.log(edid.manufacturer, edid.standard_timings);
//! ```
//!
//! Errors are returned as `JsValue` strings holding the `Debug` form of the
//! Rust error.

mod convert;

use edidcraft::{Decoder, DecoderConfig};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmDecoder {
    decoder: Decoder,
}

#[wasm_bindgen]
impl WasmDecoder {
    /// Creates a decoder from a JSON configuration. An empty string selects
    /// the defaults (strict hex, no zero fill, checksum as a diagnostic).
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmDecoder, JsValue> {
        let def = convert::parse_config(config_json).map_err(convert::error_to_js)?;
        let config = DecoderConfig::from(def);
        Ok(WasmDecoder {
            decoder: Decoder::new(config),
        })
    }

    /// Text report for a 128-byte block.
    pub fn report(&self, data: &[u8]) -> Result<String, JsValue> {
        let report = self.decoder.report(data).map_err(convert::error_to_js)?;
        Ok(report.to_string())
    }

    /// Text report for a hex dump.
    pub fn report_hex(&self, text: &str) -> Result<String, JsValue> {
        let report = self
            .decoder
            .report_hex(text)
            .map_err(convert::error_to_js)?;
        Ok(report.to_string())
    }

    /// Report as `{ lines, diagnostics }`.
    pub fn report_lines(&self, data: &[u8]) -> Result<JsValue, JsValue> {
        let report = self.decoder.report(data).map_err(convert::error_to_js)?;
        convert::to_js(&convert::ReportOut::from(report))
    }

    /// Typed fields as a JS object. Fails on an invalid header.
    pub fn decode(&self, data: &[u8]) -> Result<JsValue, JsValue> {
        let edid = self.decoder.decode(data).map_err(convert::error_to_js)?;
        convert::to_js(&edid)
    }
}
