//! Read-only lookup, filter and aggregation over the in-memory entry
//! collection
//!
//! Lookups hand out a detached clone plus the index of the stored entry;
//! callers mutate by writing back through the index. The collection stays
//! the sole owner of its entries.

use chrono::{DateTime, Datelike, Duration, Local};

use crate::error::{Result, WorklogError};
use crate::models::{day_key, JournalEntry};

/// Find the first entry with the given ID.
///
/// Returns a clone of the matched entry together with its index in the
/// collection, or `None` when no entry matches.
pub fn fetch_entry_by_id(id: &str, entries: &[JournalEntry]) -> Option<(JournalEntry, usize)> {
    entries
        .iter()
        .position(|entry| entry.id == id)
        .map(|idx| (entries[idx].clone(), idx))
}

/// Filter entries that fall in the same ISO-8601 week (and week-based
/// year) as the reference date.
///
/// Weeks start on Monday; the first week of the year is defined by the ISO
/// rule. Fails with `NoEntries` when the input is empty or nothing
/// matches.
pub fn fetch_entries_by_week_date(
    entries: &[JournalEntry],
    reference: DateTime<Local>,
) -> Result<Vec<JournalEntry>> {
    if entries.is_empty() {
        return Err(WorklogError::NoEntries("week filter".to_string()));
    }

    let week = reference.iso_week();
    let matched: Vec<JournalEntry> = entries
        .iter()
        .filter(|entry| {
            let entry_week = entry.start_time.iso_week();
            entry_week.year() == week.year() && entry_week.week() == week.week()
        })
        .cloned()
        .collect();

    if matched.is_empty() {
        return Err(WorklogError::NoEntries("the current week".to_string()));
    }
    Ok(matched)
}

/// Filter entries that fall in the same calendar year and month as the
/// reference date. Same failure semantics as the week filter.
pub fn fetch_entries_by_month_date(
    entries: &[JournalEntry],
    reference: DateTime<Local>,
) -> Result<Vec<JournalEntry>> {
    if entries.is_empty() {
        return Err(WorklogError::NoEntries("month filter".to_string()));
    }

    let matched: Vec<JournalEntry> = entries
        .iter()
        .filter(|entry| {
            entry.start_time.year() == reference.year()
                && entry.start_time.month() == reference.month()
        })
        .cloned()
        .collect();

    if matched.is_empty() {
        return Err(WorklogError::NoEntries("the requested month".to_string()));
    }
    Ok(matched)
}

/// Sum the wall-clock span of every entry.
///
/// Fails with `InvalidEntry` as soon as any entry's end time is absent or
/// not strictly after its start time. An empty input yields zero.
pub fn calculate_total_time(entries: &[JournalEntry]) -> Result<Duration> {
    let mut total = Duration::zero();
    for entry in entries {
        let end = entry.end_time.ok_or_else(|| WorklogError::InvalidEntry {
            id: entry.id.clone(),
            reason: "end time must be after start time".to_string(),
        })?;
        if end <= entry.start_time {
            return Err(WorklogError::InvalidEntry {
                id: entry.id.clone(),
                reason: "end time must be after start time".to_string(),
            });
        }
        total = total + (end - entry.start_time);
    }
    Ok(total)
}

/// Find the entry for the current day, keyed by the system clock
pub fn find_current_day_entry(entries: &[JournalEntry]) -> Result<(JournalEntry, usize)> {
    if entries.is_empty() {
        return Err(WorklogError::NoEntries("current day lookup".to_string()));
    }

    let current_day_id = day_key(&Local::now());
    fetch_entry_by_id(&current_day_id, entries)
        .ok_or(WorklogError::EntryNotFound(current_day_id))
}
