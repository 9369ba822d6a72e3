//! Command-line arguments for the spot client.
//!
//! The endpoint and output shape are fixed, so the parser only provides
//! `--help` and `--version`. Log verbosity comes from `RUST_LOG`.
use clap::Parser;

/// Fetch gold and silver spot prices and print them as one JSON line.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_no_arguments() {
        assert!(Args::try_parse_from(["spot_client"]).is_ok());
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Args::try_parse_from(["spot_client", "--url", "http://x"]).is_err());
    }
}
