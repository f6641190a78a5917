//! CLI command implementations

pub mod breaks;
pub mod config;
pub mod edit;
pub mod end;
pub mod export;
pub mod note;
pub mod report;
pub mod start;
pub mod status;

use std::path::PathBuf;

/// Resolve the config file path: explicit flag, else
/// `~/.config/worklog/worklog.toml`, falling back to the working directory
/// when no home directory can be determined.
pub(crate) fn config_path_or_default(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(default_config_path)
}

fn default_config_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".config").join("worklog").join("worklog.toml"),
        None => PathBuf::from("worklog.toml"),
    }
}
