use std::path::PathBuf;

use crate::cli::config_path_or_default;
use crate::config;
use crate::error::Result;
use crate::models::format_duration;
use crate::query;
use crate::store;
use crate::validation;

/// Mark today's workday entry as finished
pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = config::load_or_default(&config_path_or_default(config_path))?;
    let mut entries = store::load_entries(&config.journal_path)?;

    let (_, idx) = query::find_current_day_entry(&entries)?;
    entries[idx].end_day();

    let check = validation::validate_entry(&entries[idx]);
    if let Some(err) = check.error {
        return Err(err);
    }
    store::save_entries(&entries, &config.journal_path)?;

    let entry = &entries[idx];
    println!(
        "Workday closed at {}. Total work time: {}",
        entry
            .end_time
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_default(),
        format_duration(entry.total_work_time())
    );
    Ok(())
}
