//! Fixed upstream endpoint and HTTP constants.

use std::time::Duration;

/// Spot price summary endpoint, USD-denominated. Refreshed upstream roughly
/// every 60 seconds.
pub const SPOT_URL: &str = "https://www.providentmetals.com/services/spot/summary.USD.json";

/// Upper bound for the whole request, connect through body read.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Quotes older than this are reported as stale in the log.
pub const STALE_AFTER: Duration = Duration::from_secs(10 * 60);
