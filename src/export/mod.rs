//! Journal data export
//!
//! Flattens journal entries into break and timesheet rows and writes them
//! to JSON or CSV files, with optional date / last-N-days filtering.

use chrono::{DateTime, Duration, Local, NaiveDate};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{Result, WorklogError};
use crate::models::{format_duration, JournalEntry};

/// One exported break, flattened to strings for both output formats
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakRow {
    pub date: String,
    pub break_id: usize,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub reason: String,
}

/// One exported day of the timesheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimesheetRow {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub work_time: String,
    pub break_time: String,
    pub number_breaks: usize,
    pub number_notes: usize,
}

/// Aggregates over the exported entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub total_entries: usize,
    pub total_work_time: String,
    pub total_break_time: String,
    pub total_breaks: usize,
}

/// Root object of a JSON timesheet export
#[derive(Debug, Clone, Serialize)]
pub struct TimesheetDocument {
    pub generated_at: DateTime<Local>,
    pub date_range: String,
    pub entries: Vec<JournalEntry>,
    pub summary: ExportSummary,
}

/// Narrow the entries per the export flags.
///
/// A specific date selects at most that day's entry; `last` keeps entries
/// started within the last N days; neither keeps everything. Returns the
/// selection together with a human-readable label for it.
pub fn filter_entries(
    entries: &[JournalEntry],
    date: Option<&str>,
    last: Option<u32>,
) -> Result<(Vec<JournalEntry>, String)> {
    if let Some(date_str) = date {
        let parsed = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
            WorklogError::Validation {
                field: "date".to_string(),
                reason: format!("expected YYYY-MM-DD: {}", e),
            }
        })?;
        let id = parsed.format("%Y%m%d").to_string();
        let matched: Vec<JournalEntry> = entries
            .iter()
            .filter(|entry| entry.id == id)
            .cloned()
            .collect();
        return Ok((matched, date_str.to_string()));
    }

    if let Some(days) = last {
        if days > 0 {
            let cutoff = Local::now() - Duration::days(i64::from(days));
            let matched: Vec<JournalEntry> = entries
                .iter()
                .filter(|entry| entry.start_time > cutoff)
                .cloned()
                .collect();
            return Ok((matched, format!("Last {} days", days)));
        }
    }

    Ok((entries.to_vec(), "All time".to_string()))
}

/// One row per break, numbered within its day starting at 1
pub fn break_rows(entries: &[JournalEntry]) -> Vec<BreakRow> {
    let mut rows = Vec::new();
    for entry in entries {
        for (i, br) in entry.breaks.iter().enumerate() {
            let (end_time, duration) = match br.end_time {
                Some(end) => (
                    end.format("%H:%M:%S").to_string(),
                    format_duration(br.duration()),
                ),
                None => (String::new(), String::new()),
            };
            rows.push(BreakRow {
                date: entry.start_time.format("%Y-%m-%d").to_string(),
                break_id: i + 1,
                start_time: br.start_time.format("%H:%M:%S").to_string(),
                end_time,
                duration,
                reason: br.reason.clone(),
            });
        }
    }
    rows
}

/// One row per day; an open day exports an empty end time
pub fn timesheet_rows(entries: &[JournalEntry]) -> Vec<TimesheetRow> {
    entries
        .iter()
        .map(|entry| TimesheetRow {
            date: entry.start_time.format("%Y-%m-%d").to_string(),
            start_time: entry.start_time.format("%H:%M:%S").to_string(),
            end_time: entry
                .end_time
                .map(|end| end.format("%H:%M:%S").to_string())
                .unwrap_or_default(),
            work_time: format_duration(entry.total_work_time()),
            break_time: format_duration(closed_break_time(entry)),
            number_breaks: entry.breaks.len(),
            number_notes: entry.notes.len(),
        })
        .collect()
}

pub fn summarize(entries: &[JournalEntry]) -> ExportSummary {
    let total_work = entries
        .iter()
        .fold(Duration::zero(), |acc, e| acc + e.total_work_time());
    let total_break = entries
        .iter()
        .fold(Duration::zero(), |acc, e| acc + closed_break_time(e));
    ExportSummary {
        total_entries: entries.len(),
        total_work_time: format_duration(total_work),
        total_break_time: format_duration(total_break),
        total_breaks: entries.iter().map(|e| e.breaks.len()).sum(),
    }
}

/// Resolve the output path: explicit, or `worklog_<kind>_<timestamp>.<ext>`
pub fn output_path(output: Option<PathBuf>, kind: &str, format: &str) -> PathBuf {
    output.unwrap_or_else(|| {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        PathBuf::from(format!("worklog_{}_{}.{}", kind, timestamp, format))
    })
}

/// Write rows pretty-printed as a JSON array
pub fn write_json_rows<T: Serialize>(rows: &[T], path: &Path) -> Result<()> {
    let data = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, data)?;
    Ok(())
}

/// Write a full timesheet document as JSON
pub fn write_json_document(document: &TimesheetDocument, path: &Path) -> Result<()> {
    let data = serde_json::to_string_pretty(document)?;
    std::fs::write(path, data)?;
    Ok(())
}

/// Write rows as CSV, headers derived from the row fields
pub fn write_csv_rows<T: Serialize>(rows: &[T], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Reject anything but the two supported formats
pub fn check_format(format: &str) -> Result<()> {
    match format {
        "json" | "csv" => Ok(()),
        other => Err(WorklogError::Validation {
            field: "format".to_string(),
            reason: format!("unsupported format: {}. Use 'json' or 'csv'", other),
        }),
    }
}

fn closed_break_time(entry: &JournalEntry) -> Duration {
    entry
        .breaks
        .iter()
        .filter(|b| b.end_time.is_some())
        .fold(Duration::zero(), |acc, b| acc + b.duration())
}
