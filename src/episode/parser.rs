//! Title pattern extraction of series, season, and episode numbers.
//!
//! Feed titles follow the convention `"<base> (S<season>/E<episode>)"`.
//! Titles not matching the pattern are rejected with
//! [`EpisodeError::NoMatch`]; the caller treats this as an expected skip.

use std::sync::LazyLock;

use regex::Regex;

use super::error::EpisodeError;

/// Matches `"<base> (S<digits>/E<digits>)"` from the start of the title.
///
/// Anchored at the start only; trailing text after the parenthetical is
/// permitted.
#[allow(clippy::expect_used)]
static EPISODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*) \(S(\d+)/E(\d+)\)").expect("episode regex is valid") // Static pattern, safe to panic
});

/// An episode extracted from a feed title, with the season offset applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEpisode {
    /// Base title with `" - "` subtitle separators normalized to `": "`.
    pub base_title: String,
    /// Season number after subtracting the program's season offset.
    ///
    /// May be zero or negative when the offset exceeds the feed's reported
    /// season; rendered as-is.
    pub season: i64,
    /// Episode number as reported by the feed.
    pub episode: u64,
}

impl ParsedEpisode {
    /// Renders the canonical episode title, e.g. `"Tatort - S02E05"`.
    ///
    /// Season and episode are zero-padded to at least two digits; larger
    /// values keep their full digit count.
    #[must_use]
    pub fn formatted_title(&self) -> String {
        format!(
            "{} - S{:02}E{:02}",
            self.base_title, self.season, self.episode
        )
    }
}

/// Parses a raw feed title into a [`ParsedEpisode`].
///
/// The `season_offset` is subtracted from the feed's reported season number
/// to align with the operator's own numbering.
///
/// # Errors
///
/// Returns [`EpisodeError::NoMatch`] when the title does not follow the
/// episode naming pattern, and [`EpisodeError::MalformedEpisode`] when the
/// captured digit groups cannot be parsed (defensive; out-of-range values).
pub fn parse_title(title: &str, season_offset: i64) -> Result<ParsedEpisode, EpisodeError> {
    let captures = EPISODE_PATTERN
        .captures(title)
        .ok_or(EpisodeError::NoMatch)?;

    let base = &captures[1];
    let season: i64 = captures[2]
        .parse()
        .map_err(|_| EpisodeError::malformed_episode(title))?;
    let episode: u64 = captures[3]
        .parse()
        .map_err(|_| EpisodeError::malformed_episode(title))?;

    Ok(ParsedEpisode {
        base_title: base.replace(" - ", ": "),
        season: season - season_offset,
        episode,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title_extracts_base_season_episode() {
        let parsed = parse_title("Tatort (S2/E5)", 0).unwrap();
        assert_eq!(parsed.base_title, "Tatort");
        assert_eq!(parsed.season, 2);
        assert_eq!(parsed.episode, 5);
    }

    #[test]
    fn test_parse_title_rejects_non_matching_title() {
        let result = parse_title("Tatort: Die Nachricht", 0);
        assert!(matches!(result, Err(EpisodeError::NoMatch)));
    }

    #[test]
    fn test_parse_title_rejects_missing_episode_part() {
        let result = parse_title("Tatort (S2)", 0);
        assert!(matches!(result, Err(EpisodeError::NoMatch)));
    }

    #[test]
    fn test_parse_title_allows_trailing_text() {
        let parsed = parse_title("Tatort (S2/E5) (Audiodeskription)", 0).unwrap();
        assert_eq!(parsed.season, 2);
        assert_eq!(parsed.episode, 5);
    }

    #[test]
    fn test_parse_title_applies_season_offset() {
        let parsed = parse_title("Tatort (S5/E1)", 2).unwrap();
        assert_eq!(parsed.season, 3);
        assert_eq!(parsed.formatted_title(), "Tatort - S03E01");
    }

    #[test]
    fn test_parse_title_offset_may_produce_non_positive_season() {
        let parsed = parse_title("Tatort (S1/E3)", 2).unwrap();
        assert_eq!(parsed.season, -1);
    }

    #[test]
    fn test_parse_title_normalizes_subtitle_separator() {
        let parsed = parse_title("Show - Special (S1/E2)", 0).unwrap();
        assert_eq!(parsed.base_title, "Show: Special");
        assert_eq!(parsed.formatted_title(), "Show: Special - S01E02");
    }

    #[test]
    fn test_formatted_title_zero_pads_to_two_digits() {
        let parsed = parse_title("Show (S3/E7)", 0).unwrap();
        assert_eq!(parsed.formatted_title(), "Show - S03E07");
    }

    #[test]
    fn test_formatted_title_does_not_truncate_large_numbers() {
        let parsed = parse_title("Show (S12/E134)", 0).unwrap();
        assert_eq!(parsed.formatted_title(), "Show - S12E134");
    }

    #[test]
    fn test_parse_title_overflowing_digits_is_malformed() {
        let result = parse_title("Show (S99999999999999999999/E1)", 0);
        assert!(matches!(result, Err(EpisodeError::MalformedEpisode { .. })));
    }
}
