use chrono::{Duration, Local, NaiveDate};
use std::path::PathBuf;

use crate::cli::config_path_or_default;
use crate::config;
use crate::display;
use crate::error::{Result, WorklogError};
use crate::models::{day_key, format_duration, Break};
use crate::query;
use crate::store;
use crate::validation;

/// Open a new break on today's entry
pub fn start(config_path: Option<PathBuf>, reason: String) -> Result<()> {
    let config = config::load_or_default(&config_path_or_default(config_path))?;
    let mut entries = store::load_entries(&config.journal_path)?;

    let (mut entry, idx) = query::find_current_day_entry(&entries)?;

    let new_break = Break {
        start_time: Local::now(),
        end_time: None,
        reason,
    };
    let check = validation::validate_break(&new_break);
    if let Some(err) = check.error {
        return Err(err);
    }

    entry.breaks.push(new_break);
    entries[idx] = entry;
    store::save_entries(&entries, &config.journal_path)?;

    let entry = &entries[idx];
    println!(
        "Break started. Breaks today: {}, closed break time: {}",
        entry.breaks.len(),
        format_duration(closed_break_time(entry.breaks.as_slice()))
    );
    Ok(())
}

/// Close the most recent break on today's entry
pub fn stop(config_path: Option<PathBuf>) -> Result<()> {
    let config = config::load_or_default(&config_path_or_default(config_path))?;
    let mut entries = store::load_entries(&config.journal_path)?;

    let (mut entry, idx) = query::find_current_day_entry(&entries)?;

    let last = entry.breaks.last_mut().ok_or_else(|| {
        WorklogError::InvalidBreak("no break started for the current day".to_string())
    })?;
    if last.end_time.is_some() {
        return Err(WorklogError::InvalidBreak(
            "last break was already stopped".to_string(),
        ));
    }
    last.end_time = Some(Local::now());
    let duration = last.duration();

    entries[idx] = entry;
    store::save_entries(&entries, &config.journal_path)?;

    let entry = &entries[idx];
    println!(
        "Break stopped after {}. Breaks today: {}, closed break time: {}",
        format_duration(duration),
        entry.breaks.len(),
        format_duration(closed_break_time(entry.breaks.as_slice()))
    );
    Ok(())
}

/// List the breaks recorded for a day (defaults to today)
pub fn list(config_path: Option<PathBuf>, date: Option<String>) -> Result<()> {
    let config = config::load_or_default(&config_path_or_default(config_path))?;
    let entries = store::load_entries(&config.journal_path)?;

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

    let (entry, _) =
        query::fetch_entry_by_id(&id, &entries).ok_or(WorklogError::EntryNotFound(id))?;

    let header = format!("# Breaks: {}\n\n", entry.start_time.format("%Y-%m-%d"));
    if entry.breaks.is_empty() {
        display::print_markdown(&format!("{}No breaks recorded.", header));
    } else {
        display::print_markdown(&format!(
            "{}{}",
            header,
            crate::renderer::render_breaks(&entry)
        ));
    }
    Ok(())
}

fn closed_break_time(breaks: &[Break]) -> Duration {
    breaks
        .iter()
        .filter(|b| b.end_time.is_some())
        .fold(Duration::zero(), |acc, b| acc + b.duration())
}
