//! Error types for episode parsing and filtering.

use thiserror::Error;

/// Per-item conditions raised while turning a feed item into an episode.
///
/// None of these abort the run; the runner skips the offending item. A
/// [`EpisodeError::NoMatch`] is an expected, frequent outcome logged at debug
/// level, while the malformed variants warrant a warning.
#[derive(Debug, Error)]
pub enum EpisodeError {
    /// The title does not follow the `"<base> (S<n>/E<n>)"` naming pattern.
    #[error("title does not match the episode naming pattern")]
    NoMatch,

    /// The captured season/episode digits could not be parsed as integers.
    ///
    /// The pattern only captures digits, so this is a defensive condition
    /// for values exceeding the integer range.
    #[error("could not parse season/episode numbers in {title:?}")]
    MalformedEpisode {
        /// The raw title whose digit groups failed to parse.
        title: String,
    },

    /// The feed-supplied publication date could not be parsed.
    #[error("could not parse publication date {value:?}")]
    MalformedDate {
        /// The raw date text that failed to parse.
        value: String,
    },
}

impl EpisodeError {
    /// Creates a malformed-episode error for a title.
    pub fn malformed_episode(title: impl Into<String>) -> Self {
        Self::MalformedEpisode {
            title: title.into(),
        }
    }

    /// Creates a malformed-date error for a raw date string.
    pub fn malformed_date(value: impl Into<String>) -> Self {
        Self::MalformedDate {
            value: value.into(),
        }
    }
}
