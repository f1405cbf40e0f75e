//! Season-folder path resolution.
//!
//! Maps a program category, season number, and file extension to a
//! deterministic on-disk path. The resolved full path doubles as the dedup
//! key: a file already present there means the episode was handled before.
//!
//! The category and file name come from external feed data, so both are
//! conservatively sanitized against path separators and traversal segments
//! before being used as path components.

use std::path::{Path, PathBuf};

/// Placeholder for a path segment that sanitizes down to nothing.
const EMPTY_SEGMENT: &str = "_";

/// A resolved on-disk target for one episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Season folder, `{output_root}/{category}/Season {NN}`.
    pub folder: PathBuf,
    /// File name, `{formatted_title}.{extension}`.
    pub file_name: String,
}

impl ResolvedTarget {
    /// Returns the full target path, the dedup key for this episode.
    #[must_use]
    pub fn full_path(&self) -> PathBuf {
        self.folder.join(&self.file_name)
    }
}

/// Resolves the on-disk target for an episode.
///
/// The `category` is the feed's own program name (authoritative for
/// grouping), not the configured search name. The extension is taken
/// verbatim from the text after the last `.` of the link; no validation
/// against known media extensions is performed.
#[must_use]
pub fn resolve_target(
    output_root: &Path,
    category: &str,
    season: i64,
    formatted_title: &str,
    link: &str,
) -> ResolvedTarget {
    let extension = link.rsplit('.').next().unwrap_or(link);
    let file_name = sanitize_segment(&format!("{formatted_title}.{extension}"));

    ResolvedTarget {
        folder: output_root
            .join(sanitize_segment(category))
            .join(format!("Season {season:02}")),
        file_name,
    }
}

/// Sanitizes one path segment of external origin.
///
/// Strips path separators, NUL, and other control characters, then trims
/// surrounding whitespace. Segments that would escape the folder (`.`,
/// `..`) or end up empty are replaced with a placeholder. Characters the
/// canonical naming depends on (`:` from subtitle normalization) pass
/// through untouched.
fn sanitize_segment(segment: &str) -> String {
    let cleaned: String = segment
        .chars()
        .filter(|c| !matches!(c, '/' | '\\') && !c.is_control())
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        EMPTY_SEGMENT.to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_target_builds_season_tree() {
        let target = resolve_target(
            Path::new("/media"),
            "Tatort",
            2,
            "Tatort - S02E05",
            "https://example.com/video/file.mp4",
        );
        assert_eq!(target.folder, Path::new("/media/Tatort/Season 02"));
        assert_eq!(target.file_name, "Tatort - S02E05.mp4");
        assert_eq!(
            target.full_path(),
            Path::new("/media/Tatort/Season 02/Tatort - S02E05.mp4")
        );
    }

    #[test]
    fn test_resolve_target_zero_pads_season_folder() {
        let target = resolve_target(Path::new("/media"), "Show", 7, "Show - S07E01", "x.webm");
        assert_eq!(target.folder, Path::new("/media/Show/Season 07"));
    }

    #[test]
    fn test_resolve_target_keeps_extension_verbatim() {
        let target = resolve_target(
            Path::new("/media"),
            "Show",
            1,
            "Show - S01E01",
            "https://example.com/clip.XYZ",
        );
        assert_eq!(target.file_name, "Show - S01E01.XYZ");
    }

    #[test]
    fn test_resolve_target_link_without_dot_uses_whole_link() {
        let target = resolve_target(
            Path::new("/media"),
            "Show",
            1,
            "Show - S01E01",
            "no-extension",
        );
        assert_eq!(target.file_name, "Show - S01E01.no-extension");
    }

    #[test]
    fn test_resolve_target_negative_season_renders_as_is() {
        let target = resolve_target(Path::new("/media"), "Show", -1, "Show - S-1E03", "a.mp4");
        assert_eq!(target.folder, Path::new("/media/Show/Season -1"));
    }

    #[test]
    fn test_sanitize_strips_path_separators_from_category() {
        let target = resolve_target(
            Path::new("/media"),
            "../evil/show",
            1,
            "Show - S01E01",
            "a.mp4",
        );
        assert_eq!(target.folder, Path::new("/media/..evilshow/Season 01"));
    }

    #[test]
    fn test_sanitize_rejects_traversal_segment() {
        let target = resolve_target(Path::new("/media"), "..", 1, "Show - S01E01", "a.mp4");
        assert_eq!(target.folder, Path::new("/media/_/Season 01"));
    }

    #[test]
    fn test_sanitize_preserves_colon_from_subtitle_normalization() {
        let target = resolve_target(
            Path::new("/media"),
            "Show",
            1,
            "Show: Special - S01E02",
            "a.mp4",
        );
        assert_eq!(target.file_name, "Show: Special - S01E02.mp4");
    }
}
