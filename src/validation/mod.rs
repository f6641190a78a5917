//! Validation rules for data entering the store
//!
//! Validators return a `ValidationResult` value carrying the verdict and a
//! structured error, instead of failing deep inside persistence.

use chrono::{Duration, NaiveTime};

use crate::error::{Result, WorklogError};
use crate::models::{is_zero_time, Break, JournalEntry, Note};

/// Outcome of a validation check
#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<WorklogError>,
}

impl ValidationResult {
    fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    fn invalid(error: WorklogError) -> Self {
        Self {
            is_valid: false,
            error: Some(error),
        }
    }
}

/// Validate a note's contents and tags
pub fn validate_note(note: &Note) -> ValidationResult {
    if note.contents.trim().is_empty() {
        return ValidationResult::invalid(WorklogError::EmptyNote);
    }

    // Blank tags are filtered here but the cleaned list is not applied to
    // the note, and the verdict ignores it.
    let _valid_tags: Vec<&str> = note
        .tags
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();

    ValidationResult::valid()
}

/// Validate a break interval
pub fn validate_break(br: &Break) -> ValidationResult {
    if is_zero_time(&br.start_time) {
        return ValidationResult::invalid(WorklogError::Validation {
            field: "break_start_time".to_string(),
            reason: "break start time cannot be zero".to_string(),
        });
    }

    if let Some(end) = br.end_time {
        if end <= br.start_time {
            return ValidationResult::invalid(WorklogError::InvalidBreak(
                "break end time must be after start time".to_string(),
            ));
        }
    }

    if br.reason.trim().is_empty() {
        return ValidationResult::invalid(WorklogError::InvalidBreak(
            "break reason cannot be empty".to_string(),
        ));
    }

    ValidationResult::valid()
}

/// Validate a journal entry and all of its breaks
pub fn validate_entry(entry: &JournalEntry) -> ValidationResult {
    if entry.id.is_empty() {
        return ValidationResult::invalid(WorklogError::Validation {
            field: "id".to_string(),
            reason: "entry ID cannot be empty".to_string(),
        });
    }

    if is_zero_time(&entry.start_time) {
        return ValidationResult::invalid(WorklogError::Validation {
            field: "start_time".to_string(),
            reason: "start time cannot be zero".to_string(),
        });
    }

    if let Some(end) = entry.end_time {
        if end <= entry.start_time {
            return ValidationResult::invalid(WorklogError::InvalidEntry {
                id: entry.id.clone(),
                reason: "end time must be after start time".to_string(),
            });
        }
    }

    for (i, br) in entry.breaks.iter().enumerate() {
        let result = validate_break(br);
        if !result.is_valid {
            let cause = result
                .error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            return ValidationResult::invalid(WorklogError::Validation {
                field: "breaks".to_string(),
                reason: format!("break {} is invalid: {}", i, cause),
            });
        }
    }

    ValidationResult::valid()
}

/// Parse a wall-clock time in `HH:MM` format (24-hour, one or two digit
/// hour)
pub fn validate_time_format(time_str: &str) -> Result<NaiveTime> {
    if time_str.trim().is_empty() {
        return Err(WorklogError::Validation {
            field: "time".to_string(),
            reason: "time string cannot be empty".to_string(),
        });
    }

    NaiveTime::parse_from_str(time_str, "%H:%M").map_err(|source| {
        WorklogError::InvalidTimeFormat {
            input: time_str.to_string(),
            source,
        }
    })
}

/// Parse a configured duration string such as "1h30m", "45m" or "8h"
pub fn validate_config_duration(duration_str: &str, field_name: &str) -> Result<Duration> {
    if duration_str.trim().is_empty() {
        return Err(WorklogError::Validation {
            field: field_name.to_string(),
            reason: "duration cannot be empty".to_string(),
        });
    }

    parse_duration(duration_str.trim()).map_err(|cause| WorklogError::Validation {
        field: field_name.to_string(),
        reason: format!("invalid duration format: {}", cause),
    })
}

/// Parse a sequence of `<number><unit>` components where unit is one of
/// h, m, s
fn parse_duration(s: &str) -> std::result::Result<Duration, String> {
    let mut total = Duration::zero();
    let mut digits = String::new();
    let mut seen_component = false;

    for c in s.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        if digits.is_empty() {
            return Err(format!("unexpected character '{}'", c));
        }
        let value: i64 = digits
            .parse()
            .map_err(|_| format!("invalid number '{}'", digits))?;
        total = total
            + match c {
                'h' => Duration::hours(value),
                'm' => Duration::minutes(value),
                's' => Duration::seconds(value),
                other => return Err(format!("unknown unit '{}'", other)),
            };
        digits.clear();
        seen_component = true;
    }

    if !digits.is_empty() {
        return Err(format!("missing unit after '{}'", digits));
    }
    if !seen_component {
        return Err("no duration components".to_string());
    }
    Ok(total)
}
