//! TTL freshness policy for cached series rows.
//!
//! Pure decision logic: given the stored fetch timestamp and the current
//! time, decide whether a cached row may be served or must be evicted and
//! re-fetched.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

/// How long a cached series row stays servable after its fetch.
pub const CACHE_TTL: Duration = Duration::from_secs(48 * 60 * 60);

/// Outcome of evaluating a cached row against the TTL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Within the TTL; serve the cached row without a network call.
    Fresh,
    /// Past the TTL; evict and re-fetch.
    Stale,
    /// The stored timestamp does not parse; evict and re-fetch.
    ///
    /// Never treated as fresh: without a verifiable timestamp the row's age
    /// is unknown, and an unverifiable row must not be served.
    Corrupt,
}

/// Evaluates a stored RFC 3339 fetch timestamp against `ttl`.
///
/// A row is [`Freshness::Stale`] when `now - fetched_at > ttl`; a row aged
/// exactly `ttl` is still fresh.
#[must_use]
pub fn evaluate(fetched_at: &str, now: DateTime<Utc>, ttl: Duration) -> Freshness {
    let Ok(parsed) = DateTime::parse_from_rfc3339(fetched_at) else {
        return Freshness::Corrupt;
    };

    let ttl = TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX);
    if now.signed_duration_since(parsed.with_timezone(&Utc)) > ttl {
        Freshness::Stale
    } else {
        Freshness::Fresh
    }
}
