use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use std::path::PathBuf;

use crate::cli::config_path_or_default;
use crate::config;
use crate::error::{Result, WorklogError};
use crate::models::day_key;
use crate::query;
use crate::store;
use crate::validation;

/// Adjust the start and/or end time of an entry (defaults to today).
///
/// Times are given as HH:MM; the entry keeps its calendar date.
pub fn run(
    config_path: Option<PathBuf>,
    date: Option<String>,
    start: Option<String>,
    end: Option<String>,
) -> Result<()> {
    if start.is_none() && end.is_none() {
        return Err(WorklogError::Validation {
            field: "edit".to_string(),
            reason: "nothing to change, pass --start and/or --end".to_string(),
        });
    }

    let config = config::load_or_default(&config_path_or_default(config_path))?;
    let mut entries = store::load_entries(&config.journal_path)?;

    let id = match date {
        Some(date_str) => {
            let parsed = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
                WorklogError::Validation {
                    field: "date".to_string(),
                    reason: format!("expected YYYY-MM-DD: {}", e),
                }
            })?;
            parsed.format("%Y%m%d").to_string()
        }
        None => day_key(&Local::now()),
    };

    let (mut entry, idx) =
        query::fetch_entry_by_id(&id, &entries).ok_or(WorklogError::EntryNotFound(id))?;

    if let Some(start_str) = start {
        let time = validation::validate_time_format(&start_str)?;
        entry.start_time = at_time_of_day(entry.start_time, time)?;
    }
    if let Some(end_str) = end {
        let time = validation::validate_time_format(&end_str)?;
        entry.end_time = Some(at_time_of_day(entry.start_time, time)?);
    }

    let check = validation::validate_entry(&entry);
    if let Some(err) = check.error {
        return Err(err);
    }

    entries[idx] = entry;
    store::save_entries(&entries, &config.journal_path)?;

    println!("Entry updated.");
    Ok(())
}

/// Same calendar date as `reference`, at the given wall-clock time
fn at_time_of_day(reference: DateTime<Local>, time: NaiveTime) -> Result<DateTime<Local>> {
    reference
        .with_time(time)
        .single()
        .ok_or_else(|| WorklogError::Validation {
            field: "time".to_string(),
            reason: "time does not exist on that date in the local timezone".to_string(),
        })
}
