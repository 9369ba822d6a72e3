//! Metals covered by the spot summary.
//!
//! The upstream summary is an ordered array with no identifying key per
//! entry, so each metal is bound to a fixed array position. That binding is
//! the contract; nothing else in the crate indexes the array directly.

use strum_macros::{Display, EnumIter, EnumString};

/// Supported metals. `Display`/`FromStr` use the chemical symbol, which is
/// also the key prefix in the output report.
#[derive(Debug, Clone, Copy, Display, EnumString, EnumIter, Hash, Eq, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum Metal {
    /// Gold, position 0 upstream.
    #[strum(serialize = "au")]
    Gold,
    /// Silver, position 1 upstream.
    #[strum(serialize = "ag")]
    Silver,
}

impl Metal {
    /// Index of this metal's entry in the upstream summary array.
    pub const fn position(self) -> usize {
        match self {
            Metal::Gold => 0,
            Metal::Silver => 1,
        }
    }

    /// Human readable name for log and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Metal::Gold => "gold",
            Metal::Silver => "silver",
        }
    }
}
