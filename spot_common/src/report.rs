//! The JSON object written to stdout.
//!
//! Serialization goes through serde_json so every value is escaped, with a
//! formatter that reproduces the established byte layout:
//! `{"au": "…","auDelta": "…","ag": "…","agDelta": "…","time": "…"}`.
use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use serde_json::ser::{Formatter, Serializer};

use crate::board::SpotBoard;
use crate::error::SpotError;
use crate::result::Result;

/// Formatted spot report. Field order is the output key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotReport {
    /// Gold spot, two decimals.
    pub au: String,
    /// Gold delta, two decimals.
    #[serde(rename = "auDelta")]
    pub au_delta: String,
    /// Silver spot, two decimals.
    pub ag: String,
    /// Silver delta, two decimals.
    #[serde(rename = "agDelta")]
    pub ag_delta: String,
    /// Silver `effective_at`, verbatim.
    pub time: String,
}

impl TryFrom<&SpotBoard> for SpotReport {
    type Error = SpotError;

    fn try_from(board: &SpotBoard) -> Result<Self> {
        Ok(SpotReport {
            au: board.gold.rate_text()?,
            au_delta: board.gold.delta_text()?,
            ag: board.silver.rate_text()?,
            ag_delta: board.silver.delta_text()?,
            time: board.silver.effective_at.clone(),
        })
    }
}

impl SpotReport {
    /// Encode the report to JSON bytes in the stdout layout.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(128);
        let mut ser = Serializer::with_formatter(&mut buf, ReportFormatter);
        self.serialize(&mut ser)?;
        Ok(buf)
    }

    /// Same as [`Self::to_json_bytes`], as a `String`.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(String::from_utf8(self.to_json_bytes()?)?)
    }

    /// Writes the report and a trailing newline in a single write.
    pub fn write_line<W: Write>(&self, mut writer: W) -> Result<()> {
        let mut line = self.to_json_bytes()?;
        line.push(b'\n');
        writer.write_all(&line)?;
        writer.flush()?;
        Ok(())
    }
}

/// Compact output, except for a space after each key's colon.
struct ReportFormatter;

impl Formatter for ReportFormatter {
    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(time: &str) -> SpotReport {
        SpotReport {
            au: "1234.57".into(),
            au_delta: "0.00".into(),
            ag: "28.10".into(),
            ag_delta: "0.12".into(),
            time: time.into(),
        }
    }

    #[test]
    fn layout_matches_established_format() {
        assert_eq!(
            report("2024-01-01T12:00:00Z").to_json_string().unwrap(),
            r#"{"au": "1234.57","auDelta": "0.00","ag": "28.10","agDelta": "0.12","time": "2024-01-01T12:00:00Z"}"#
        );
    }

    #[test]
    fn time_is_escaped() {
        let text = report("12:00 \"EST\"\\\n").to_json_string().unwrap();
        assert!(text.ends_with(r#""time": "12:00 \"EST\"\\\n"}"#), "{text}");
        let back: SpotReport = serde_json::from_str(&text).unwrap();
        assert_eq!(back.time, "12:00 \"EST\"\\\n");
    }

    #[test]
    fn write_line_appends_single_newline() {
        let mut out = Vec::new();
        report("t").write_line(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\n"));
        assert_eq!(text.matches('\n').count(), 1);
    }
}
