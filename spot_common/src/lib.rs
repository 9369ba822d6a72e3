//! Gold and silver spot prices, from upstream summary to output line.
//!
//! The upstream summary is a JSON array whose first two entries are gold and
//! silver. [`SpotBoard`] picks them out and [`SpotReport`] renders the
//! five-key object the client prints:
//!
//! ```
//! use spot_common::{SpotBoard, SpotReport};
//!
//! let body = r#"[{"rate": 2000, "delta": 1.005, "effective_at": "t0"},
//!                {"rate": 24.5, "delta": -0.2, "effective_at": "t1"}]"#;
//! let board = SpotBoard::from_json(body)?;
//! let report = SpotReport::try_from(&board)?;
//! assert_eq!(
//!     report.to_json_string()?,
//!     r#"{"au": "2000.00","auDelta": "1.01","ag": "24.50","agDelta": "-0.20","time": "t1"}"#
//! );
//! # Ok::<(), spot_common::SpotError>(())
//! ```
//!
//! Prices are exact decimals rounded half away from zero ([`quote::round_price`]).
//! Failures are classified by [`SpotError`]: fetch, parse (not JSON) or
//! schema (JSON of the wrong shape, or a number out of range).
#![warn(missing_docs)]
pub mod board;
pub mod error;
pub mod metals;
pub mod net;
pub mod quote;
pub mod report;
pub mod result;

pub use board::SpotBoard;
pub use error::SpotError;
pub use report::SpotReport;
pub use result::Result;
