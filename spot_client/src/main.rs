//! Spot Client — fetches the gold and silver spot summary once and prints a
//! single JSON line to stdout:
//!
//! ```text
//! {"au": "1234.57","auDelta": "0.00","ag": "28.10","agDelta": "0.12","time": "2024-01-01T12:00:00Z"}
//! ```
//!
//! Any failure (network, HTTP status, malformed JSON, unexpected shape) is
//! logged once to stderr and the process exits with status 1 without writing
//! to stdout.
//!
//! Usage example (CLI):
//! ```bash
//! RUST_LOG=debug spot_client
//! ```
#![warn(missing_docs)]
mod args;
mod fetcher;

use std::io::{self, Write};
use std::process::ExitCode;

use crate::args::Args;
use crate::fetcher::{HttpSource, SpotSource};
use chrono::Utc;
use clap::Parser;
use log::{debug, error, warn};
use spot_common::metals::Metal;
use spot_common::{Result, SpotBoard, SpotReport};
use strum::IntoEnumIterator;

/// Fetches, parses and writes one report. Nothing reaches `out` unless the
/// whole report was built.
fn run<S: SpotSource, W: Write>(source: &S, out: W) -> Result<SpotReport> {
    let body = source.fetch()?;
    let board = SpotBoard::from_json(&body)?;
    check_freshness(&board);

    let report = SpotReport::try_from(&board)?;
    report.write_line(out)?;
    Ok(report)
}

fn check_freshness(board: &SpotBoard) {
    let now = Utc::now();
    for metal in Metal::iter() {
        let quote = board.get(metal);
        debug!(
            "{}: rate={} delta={} effective_at={}",
            metal, quote.rate, quote.delta, quote.effective_at
        );
        match quote.age_at(now) {
            Some(age) if quote.is_stale_at(now) => {
                warn!("{} quote is stale: {}s old", metal.name(), age.num_seconds());
            }
            Some(_) => {}
            None => debug!("{} effective_at is not RFC 3339, age unknown", metal.name()),
        }
    }
}

/// Logs a failure once and maps the outcome to the process exit status.
fn exit_status(outcome: &Result<SpotReport>) -> u8 {
    match outcome {
        Ok(_) => 0,
        Err(e) => {
            error!("Spot lookup failed ({}): {}", e.kind(), e);
            1
        }
    }
}

fn main() -> ExitCode {
    init_logger();
    let _args = Args::parse();

    let outcome = HttpSource::new().and_then(|source| run(&source, io::stdout().lock()));
    ExitCode::from(exit_status(&outcome))
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
