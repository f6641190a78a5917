use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;
use crate::validation::validate_config_duration;

/// Worklog configuration
///
/// Durations are stored as strings ("8h", "1h30m") and validated when
/// read; an explicit `Config` is passed into core entry points instead of
/// ambient global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the journal JSON file
    pub journal_path: PathBuf,

    /// Minimum work time per day, drives the expected end time
    pub min_work_time: String,

    /// Maximum work time per day
    pub max_work_time: String,

    /// A break at least this long counts as lunch
    pub lunch_time: String,
}

impl Config {
    pub fn min_work_duration(&self) -> Result<Duration> {
        validate_config_duration(&self.min_work_time, "min_work_time")
    }

    pub fn max_work_duration(&self) -> Result<Duration> {
        validate_config_duration(&self.max_work_time, "max_work_time")
    }

    pub fn lunch_duration(&self) -> Result<Duration> {
        validate_config_duration(&self.lunch_time, "lunch_time")
    }
}

impl Default for Config {
    /// The journal lives in the home directory so every working directory
    /// sees the same file; falls back to the working directory when no
    /// home can be determined.
    fn default() -> Self {
        let journal_path = match dirs::home_dir() {
            Some(home) => home.join("journal.json"),
            None => PathBuf::from("journal.json"),
        };
        Self {
            journal_path,
            min_work_time: "8h".to_string(),
            max_work_time: "10h".to_string(),
            lunch_time: "1h".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.journal_path.ends_with("journal.json"));
        match dirs::home_dir() {
            Some(home) => assert!(config.journal_path.starts_with(home)),
            None => assert_eq!(config.journal_path, PathBuf::from("journal.json")),
        }
        assert_eq!(config.min_work_time, "8h");
        assert_eq!(config.max_work_time, "10h");
        assert_eq!(config.lunch_time, "1h");
    }

    #[test]
    fn test_config_durations_parse() {
        let config = Config::default();
        assert_eq!(config.min_work_duration().unwrap(), Duration::hours(8));
        assert_eq!(config.max_work_duration().unwrap(), Duration::hours(10));
        assert_eq!(config.lunch_duration().unwrap(), Duration::hours(1));
    }

    #[test]
    fn test_config_duration_error_names_field() {
        let config = Config {
            lunch_time: "bogus".to_string(),
            ..Config::default()
        };
        let err = config.lunch_duration().unwrap_err();
        assert!(err.to_string().contains("lunch_time"));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.min_work_time, "8h");
        assert_eq!(parsed.journal_path, config.journal_path);
    }
}
