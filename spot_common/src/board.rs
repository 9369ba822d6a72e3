//! Gold and silver quotes parsed out of an upstream summary body.
//!
//! Parsing happens in two passes so the failure can be classified: first the
//! body is read as generic JSON (a failure there is a `Parse` error), then
//! each metal's entry is picked by its fixed position and decoded into a
//! `SpotQuote` (any mismatch there is a `Schema` error).
use serde::Deserialize;
use serde_json::Value;

use crate::error::SpotError;
use crate::metals::Metal;
use crate::quote::SpotQuote;
use crate::result::Result;

/// The two quotes a report is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotBoard {
    /// Gold quote (upstream position 0).
    pub gold: SpotQuote,
    /// Silver quote (upstream position 1).
    pub silver: SpotQuote,
}

impl SpotBoard {
    /// Parses a raw response body.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(&value)
    }

    /// Builds the board from an already parsed JSON document.
    pub fn from_value(value: &Value) -> Result<Self> {
        let entries = value.as_array().ok_or_else(|| {
            SpotError::Schema(format!("expected a JSON array, got {}", json_kind(value)))
        })?;

        Ok(SpotBoard {
            gold: quote_for(entries, Metal::Gold)?,
            silver: quote_for(entries, Metal::Silver)?,
        })
    }

    /// Quote for the given metal.
    pub fn get(&self, metal: Metal) -> &SpotQuote {
        match metal {
            Metal::Gold => &self.gold,
            Metal::Silver => &self.silver,
        }
    }
}

fn quote_for(entries: &[Value], metal: Metal) -> Result<SpotQuote> {
    let entry = entries.get(metal.position()).ok_or_else(|| {
        SpotError::Schema(format!(
            "no {} entry at index {} (array has {} element(s))",
            metal.name(),
            metal.position(),
            entries.len()
        ))
    })?;

    SpotQuote::deserialize(entry)
        .map_err(|e| SpotError::Schema(format!("{} entry: {}", metal.name(), e)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
