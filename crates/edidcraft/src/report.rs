//! Human-readable decode output.

use std::fmt;

use crate::errors::DecodeError;

/// Ordered text lines produced by one decoding pass, plus any diagnostics
/// raised along the way. Append-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
    diagnostics: Vec<DecodeError>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn push_diagnostic(&mut self, diagnostic: DecodeError) {
        self.diagnostics.push(diagnostic);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn diagnostics(&self) -> &[DecodeError] {
        &self.diagnostics
    }

    pub fn is_header_valid(&self) -> bool {
        !self.diagnostics.contains(&DecodeError::InvalidHeader)
    }

    /// False when the header was invalid, since the checksum is then never checked.
    pub fn is_checksum_valid(&self) -> bool {
        self.is_header_valid()
            && !self
                .diagnostics
                .iter()
                .any(|d| matches!(d, DecodeError::InvalidChecksum { .. }))
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Appends the textual rendering of a decoded value to a [Report].
pub trait Render {
    fn render(&self, report: &mut Report);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_terminates_every_line() {
        let mut report = Report::new();
        report.push("Valid EDID header");
        report.push(String::from("EDID Version: 1.4"));
        assert_eq!(report.to_string(), "Valid EDID header\nEDID Version: 1.4\n");
    }

    #[test]
    fn test_empty_report() {
        let report = Report::new();
        assert_eq!(report.to_string(), "");
        assert!(report.is_header_valid());
        assert!(report.is_checksum_valid());
    }

    #[test]
    fn test_diagnostics() {
        let mut report = Report::new();
        report.push_diagnostic(DecodeError::InvalidChecksum { sum: 3 });
        assert!(report.is_header_valid());
        assert!(!report.is_checksum_valid());

        let mut report = Report::new();
        report.push_diagnostic(DecodeError::InvalidHeader);
        assert!(!report.is_header_valid());
        assert!(!report.is_checksum_valid());
    }
}
