//! `Result` alias for the spot pipeline; the error defaults to [`SpotError`].
use crate::error::SpotError;

/// Result of any step from fetch to output, failing with a [`SpotError`].
pub type Result<T, E = SpotError> = std::result::Result<T, E>;
