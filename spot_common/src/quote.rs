//! A single upstream spot quote and the two-decimal rounding rule.
//!
//! Upstream numbers are taken as exact decimals from their JSON text, never
//! through binary floating point, so `1234.565` rounds to `1234.57`.
//! Rounding is half away from zero; a zero result is rendered unsigned.
//! Magnitudes below `1e-28` count as zero; magnitudes too large to carry two
//! fractional digits (above roughly `7.9e26`) are rejected.

use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};
use serde_json::Number;

use crate::error::SpotError;
use crate::net::STALE_AFTER;
use crate::result::Result;

/// Number of fractional digits in every rendered price.
pub const PRICE_DP: u32 = 2;

/// Below the smallest non-zero decimal; such values render as zero.
const NEGLIGIBLE: f64 = 1e-28;

/// One entry of the upstream summary array. Fields beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpotQuote {
    /// Spot price in USD.
    #[serde(deserialize_with = "decimal_from_number")]
    pub rate: Decimal,
    /// Signed change since the provider's reference point.
    #[serde(deserialize_with = "decimal_from_number")]
    pub delta: Decimal,
    /// Time the rate became valid, exactly as upstream sent it.
    pub effective_at: String,
}

impl SpotQuote {
    /// Rate rounded and rendered with two fractional digits.
    pub fn rate_text(&self) -> Result<String> {
        format_price(self.rate)
    }

    /// Delta rounded and rendered with two fractional digits.
    pub fn delta_text(&self) -> Result<String> {
        format_price(self.delta)
    }

    /// Age of the quote at `now`, if `effective_at` is RFC 3339.
    pub fn age_at(&self, now: DateTime<Utc>) -> Option<TimeDelta> {
        DateTime::parse_from_rfc3339(&self.effective_at)
            .ok()
            .map(|at| now.signed_duration_since(at.with_timezone(&Utc)))
    }

    /// `true` when the quote is older than `STALE_AFTER`. Unparseable or
    /// future timestamps are never stale.
    pub fn is_stale_at(&self, now: DateTime<Utc>) -> bool {
        self.age_at(now)
            .and_then(|age| age.to_std().ok())
            .is_some_and(|age| age > STALE_AFTER)
    }
}

/// Rounds half away from zero to two places and fixes the scale at two,
/// folding negative zero into zero. Fails when the value is too large to
/// keep two fractional digits.
pub fn round_price(value: Decimal) -> Result<Decimal> {
    let mut rounded = value.round_dp_with_strategy(PRICE_DP, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    // rescale silently keeps fewer digits when the mantissa is full
    rounded.rescale(PRICE_DP);
    if rounded.scale() != PRICE_DP {
        return Err(SpotError::Schema(format!(
            "{value} is too large to render with {PRICE_DP} decimals"
        )));
    }
    Ok(rounded)
}

/// Renders `value` as a fixed-point string with exactly two fractional digits.
pub fn format_price(value: Decimal) -> Result<String> {
    Ok(round_price(value)?.to_string())
}

/// Converts a JSON number to an exact decimal using its shortest text form.
///
/// Values too small for a decimal become zero; values too large to render
/// with two fractional digits are an error.
pub fn decimal_from_json(number: &Number) -> std::result::Result<Decimal, rust_decimal::Error> {
    let text = number.to_string();
    let value = match Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text)) {
        Ok(value) => value,
        Err(_) if number.as_f64().is_some_and(|v| v.abs() < NEGLIGIBLE) => Decimal::ZERO,
        Err(e) => return Err(e),
    };

    if round_price(value).is_err() {
        return Err(if value.is_sign_negative() {
            rust_decimal::Error::LessThanMinimumPossibleValue
        } else {
            rust_decimal::Error::ExceedsMaximumPossibleValue
        });
    }
    Ok(value)
}

fn decimal_from_number<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    decimal_from_json(&number).map_err(|e| serde::de::Error::custom(format!("{number}: {e}")))
}
