//! YAML configuration loading for programs and the global rate limit.
//!
//! The configuration file holds an optional global `rate-limit` string and a
//! list of program entries. A missing or malformed file is a fatal startup
//! error; everything below configuration load is recoverable.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default maximum episode age in days when a program does not specify one.
const DEFAULT_MAX_AGE_DAYS: i64 = 365;

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("configuration file not found at {path}")]
    NotFound {
        /// The path that was checked.
        path: PathBuf,
    },

    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML or has the wrong shape.
    #[error("failed to parse configuration file {path}: {source}")]
    Parse {
        /// The path that failed to parse.
        path: PathBuf,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },
}

/// Top-level configuration: global rate limit plus the program list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AppConfig {
    /// Optional transfer rate cap, e.g. `"250k"`, passed to the transfer tool.
    pub rate_limit: Option<String>,

    /// Programs to search for. An absent list means an empty run, not an error.
    #[serde(default)]
    pub programs: Vec<ProgramConfig>,
}

/// Per-program settings controlling query construction and filtering.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProgramConfig {
    /// Program name used to build the search query.
    pub name: String,

    /// Minimum episode length in minutes, filtered server-side via the query.
    #[serde(default)]
    pub min_length: u32,

    /// Offset subtracted from the feed's reported season number.
    #[serde(default)]
    pub season_offset: i64,

    /// Maximum episode age in days; older episodes are skipped.
    #[serde(default = "default_max_age")]
    pub max_age: i64,
}

fn default_max_age() -> i64 {
    DEFAULT_MAX_AGE_DAYS
}

impl AppConfig {
    /// Loads the configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when the file does not exist,
    /// [`ConfigError::Io`] when it cannot be read, and [`ConfigError::Parse`]
    /// when it is not valid YAML of the expected shape.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            "rate-limit: 250k\nprograms:\n  - name: Tatort\n    min-length: 60\n    season-offset: 2\n    max-age: 30\n",
        );

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.rate_limit.as_deref(), Some("250k"));
        assert_eq!(config.programs.len(), 1);

        let program = &config.programs[0];
        assert_eq!(program.name, "Tatort");
        assert_eq!(program.min_length, 60);
        assert_eq!(program.season_offset, 2);
        assert_eq!(program.max_age, 30);
    }

    #[test]
    fn test_load_applies_program_defaults() {
        let file = write_config("programs:\n  - name: Polizeiruf 110\n");

        let config = AppConfig::load(file.path()).unwrap();
        let program = &config.programs[0];
        assert_eq!(program.min_length, 0);
        assert_eq!(program.season_offset, 0);
        assert_eq!(program.max_age, 365);
    }

    #[test]
    fn test_load_without_programs_is_empty_run() {
        let file = write_config("rate-limit: 1m\n");

        let config = AppConfig::load(file.path()).unwrap();
        assert!(config.programs.is_empty());
        assert_eq!(config.rate_limit.as_deref(), Some("1m"));
    }

    #[test]
    fn test_load_missing_file_returns_not_found() {
        let result = AppConfig::load(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        let file = write_config("programs: [unclosed\n");

        let result = AppConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_program_without_name_is_parse_error() {
        let file = write_config("programs:\n  - min-length: 20\n");

        let result = AppConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_unknown_keys_are_tolerated() {
        let file = write_config("programs:\n  - name: Tatort\n    comment: keep this one\n");

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.programs[0].name, "Tatort");
    }
}
