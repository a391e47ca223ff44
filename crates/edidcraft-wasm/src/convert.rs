use edidcraft::{Report, serde::DecoderConfigDef};
use serde::Serialize;
use wasm_bindgen::JsValue;

pub fn error_to_js<E: std::fmt::Debug>(err: E) -> JsValue {
    JsValue::from_str(&format!("{:?}", err))
}

/// Empty input means the default configuration.
pub fn parse_config(config_json: &str) -> Result<DecoderConfigDef, serde_json::Error> {
    if config_json.trim().is_empty() {
        return Ok(DecoderConfigDef::default());
    }
    serde_json::from_str(config_json)
}

/// A report as JavaScript sees it: the text lines plus any diagnostics.
#[derive(Serialize)]
pub struct ReportOut {
    pub lines: Vec<String>,
    pub diagnostics: Vec<String>,
}

impl From<Report> for ReportOut {
    fn from(report: Report) -> Self {
        let diagnostics = report.diagnostics().iter().map(|d| d.to_string()).collect();
        ReportOut {
            lines: report.into_lines(),
            diagnostics,
        }
    }
}

pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use edidcraft::serde::HexPolicyDef;

    #[test]
    fn test_parse_config_empty_is_default() {
        assert_eq!(parse_config("").unwrap(), DecoderConfigDef::default());
        assert_eq!(parse_config("  ").unwrap(), DecoderConfigDef::default());
    }

    #[test]
    fn test_parse_config_partial() {
        let def = parse_config(r#"{ "hex_policy": "Truncate" }"#).unwrap();
        assert_eq!(def.hex_policy, HexPolicyDef::Truncate);
        assert!(!def.zero_fill);
        assert!(!def.strict_checksum);
    }

    #[test]
    fn test_parse_config_rejects_unknown_policy() {
        assert!(parse_config(r#"{ "hex_policy": "Lenient" }"#).is_err());
    }

    #[test]
    fn test_report_out_keeps_diagnostics() {
        let mut data = [0u8; 128];
        data[0] = 0x01;
        let out = ReportOut::from(edidcraft::report(&data).unwrap());
        assert_eq!(out.lines, ["Invalid EDID header"]);
        assert_eq!(out.diagnostics, ["invalid EDID header"]);
    }
}
