//! Publication-date parsing and age-based filtering.
//!
//! The feed's date format is not contractually fixed, so parsing is lenient:
//! RFC 2822 (the usual RSS `pubDate` form) is tried first as a fast path,
//! then `dateparser` handles looser formats. An unparsable date is an
//! explicit skip, never silently treated as fresh or expired.

use chrono::{DateTime, Duration, Utc};

use super::error::EpisodeError;

/// Parses a feed-supplied publication date into a UTC timestamp.
///
/// # Errors
///
/// Returns [`EpisodeError::MalformedDate`] when the text cannot be parsed by
/// either the RFC 2822 fast path or the lenient fallback.
pub fn parse_pub_date(text: &str) -> Result<DateTime<Utc>, EpisodeError> {
    // Fast path: RFC 2822, the standard RSS pubDate format
    if let Ok(dt) = DateTime::parse_from_rfc2822(text.trim()) {
        return Ok(dt.with_timezone(&Utc));
    }

    // Fall back to dateparser for natural/loose formats
    dateparser::parse(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| EpisodeError::malformed_date(text))
}

/// Decides whether an episode published at `published` is still within the
/// program's maximum age.
///
/// The cutoff is `now - max_age_days`; the lower bound is inclusive, so an
/// episode published exactly at the cutoff is accepted.
#[must_use]
pub fn within_max_age(published: DateTime<Utc>, max_age_days: i64, now: DateTime<Utc>) -> bool {
    published >= now - Duration::days(max_age_days)
}
