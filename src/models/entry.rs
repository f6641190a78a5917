use chrono::{DateTime, Datelike, Duration, Local};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::{Result, WorklogError};

/// A single annotation on a workday, with optional tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Note contents
    #[serde(rename = "Contents")]
    pub contents: String,

    /// Tags for this particular note
    #[serde(rename = "Tags", default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A bounded (or still-open) interval excluded from work-time accounting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
    pub start_time: DateTime<Local>,
    #[serde(default, deserialize_with = "de_opt_time")]
    pub end_time: Option<DateTime<Local>>,
    pub reason: String,
}

/// One calendar day's record of work start/end, breaks and notes.
///
/// The `id` is the day key (`YYYYMMDD`); exactly one entry per day is
/// expected in the store, enforced by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub start_time: DateTime<Local>,
    #[serde(default, deserialize_with = "de_opt_time")]
    pub end_time: Option<DateTime<Local>>,
    #[serde(default, deserialize_with = "de_null_vec")]
    pub notes: Vec<Note>,
    #[serde(default, deserialize_with = "de_null_vec")]
    pub breaks: Vec<Break>,
}

/// In-progress view of today's entry, computed against the configured
/// minimum work time and lunch threshold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkdayStatus {
    /// Work time accumulated so far, truncated at the start of an open break
    pub current_work: Duration,
    /// When the day is expected to end given the minimum work time
    pub expected_end: DateTime<Local>,
    /// Time left until the expected end, floored at zero
    pub remaining: Duration,
    /// Whether a break at least as long as the lunch threshold was taken
    pub has_lunch_break: bool,
}

/// Format a chrono timestamp as the `YYYYMMDD` day key
pub fn day_key(time: &DateTime<Local>) -> String {
    time.format("%Y%m%d").to_string()
}

/// Compact duration rendering: "7h45m", "15m", "30s", "0s"
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if minutes > 0 || (hours > 0 && seconds > 0) {
        out.push_str(&format!("{}m", minutes));
    }
    if seconds > 0 || out.is_empty() {
        out.push_str(&format!("{}s", seconds));
    }
    out
}

/// Legacy journal files encode an absent timestamp as the zero time
/// (year 1); both that and JSON null must read back as `None`.
fn de_opt_time<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Local>>, D::Error>
where
    D: Deserializer<'de>,
{
    let time: Option<DateTime<Local>> = Option::deserialize(deserializer)?;
    Ok(time.filter(|t| t.year() > 1))
}

/// Legacy journal files encode empty collections as JSON null
fn de_null_vec<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(items.unwrap_or_default())
}

/// Zero timestamps only occur in hand-edited or legacy files; treated as
/// "not set" by validation
pub(crate) fn is_zero_time(time: &DateTime<Local>) -> bool {
    time.year() <= 1
}

impl Break {
    /// Wall-clock length of the break; zero while the break is still open
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end - self.start_time,
            None => Duration::zero(),
        }
    }
}

impl JournalEntry {
    /// Create a fresh entry for the current day, started now
    pub fn new() -> Self {
        let now = Local::now();
        Self {
            id: day_key(&now),
            start_time: now,
            end_time: None,
            notes: Vec::new(),
            breaks: Vec::new(),
        }
    }

    /// Total work time for a closed day: wall-clock elapsed minus the sum
    /// of all closed breaks. Open breaks subtract nothing; an unclosed day
    /// reports zero.
    pub fn total_work_time(&self) -> Duration {
        let end = match self.end_time {
            Some(end) => end,
            None => return Duration::zero(),
        };
        let break_time = self
            .breaks
            .iter()
            .filter(|b| b.end_time.is_some())
            .fold(Duration::zero(), |acc, b| acc + b.duration());
        (end - self.start_time) - break_time
    }

    /// Append a note to the entry.
    ///
    /// A tag list containing exactly one empty string normalizes to no tags.
    pub fn add_note(&mut self, mut note: Note) -> Result<()> {
        if note.contents.trim().is_empty() {
            return Err(WorklogError::EmptyNote);
        }
        if note.tags.len() == 1 && note.tags[0].is_empty() {
            note.tags = Vec::new();
        }
        self.notes.push(note);
        Ok(())
    }

    /// Close the entry at the current time. Calling again overwrites the
    /// previous end time.
    pub fn end_day(&mut self) {
        self.end_time = Some(Local::now());
    }

    /// In-progress status for an unclosed day.
    ///
    /// Unlike `total_work_time`, an open break truncates the accumulated
    /// work time at the moment the break started. The expected end accounts
    /// for closed breaks and adds the lunch threshold when no qualifying
    /// break was taken yet.
    pub fn progress(
        &self,
        min_work_time: Duration,
        lunch_time: Duration,
        now: DateTime<Local>,
    ) -> WorkdayStatus {
        let mut current_work = now - self.start_time;

        let mut closed_break_time = Duration::zero();
        let mut open_break_start: Option<DateTime<Local>> = None;
        for br in &self.breaks {
            match br.end_time {
                Some(_) => closed_break_time = closed_break_time + br.duration(),
                None => open_break_start = Some(br.start_time),
            }
        }

        if let Some(break_start) = open_break_start {
            current_work = break_start - self.start_time;
        }
        current_work = current_work - closed_break_time;

        let has_lunch_break = self.breaks.iter().any(|b| b.duration() >= lunch_time);

        let mut expected_end = self.start_time + min_work_time + closed_break_time;
        if !has_lunch_break {
            expected_end = expected_end + lunch_time;
        }

        let remaining = (expected_end - now).max(Duration::zero());

        WorkdayStatus {
            current_work,
            expected_end,
            remaining,
            has_lunch_break,
        }
    }
}

impl Default for JournalEntry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}", self.contents)?;
        if !self.tags.is_empty() {
            write!(f, " [{}]", self.tags.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for JournalEntry {
    /// Deterministic multi-line rendering: date header, start/end/time
    /// line, then one bullet per note with no trailing blank lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.start_time.format("%H:%M:%S").to_string();
        let (end, total) = match self.end_time {
            Some(end) => (
                end.format("%H:%M:%S").to_string(),
                format_duration(self.total_work_time()),
            ),
            None => ("Ongoing".to_string(), "N/A".to_string()),
        };
        writeln!(f, "Date: {}", self.start_time.format("%Y-%m-%d"))?;
        writeln!(f, "Start: {} | End: {} | Time: {}", start, end, total)?;
        writeln!(f)?;
        let notes: Vec<String> = self.notes.iter().map(Note::to_string).collect();
        write!(f, "{}", notes.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_break_duration_closed() {
        let start = local(2024, 1, 15, 12, 0, 0);
        let br = Break {
            start_time: start,
            end_time: Some(start + Duration::minutes(30)),
            reason: "coffee".to_string(),
        };
        assert_eq!(br.duration(), Duration::minutes(30));
    }

    #[test]
    fn test_break_duration_open_is_zero() {
        let br = Break {
            start_time: local(2024, 1, 15, 12, 0, 0),
            end_time: None,
            reason: "ongoing".to_string(),
        };
        assert_eq!(br.duration(), Duration::zero());
    }

    #[test]
    fn test_total_work_time_unclosed_entry_is_zero() {
        let entry = JournalEntry {
            id: "20240115".to_string(),
            start_time: local(2024, 1, 15, 9, 0, 0),
            end_time: None,
            notes: vec![],
            breaks: vec![],
        };
        assert_eq!(entry.total_work_time(), Duration::zero());
    }

    #[test]
    fn test_total_work_time_no_breaks() {
        let start = local(2024, 1, 15, 9, 0, 0);
        let entry = JournalEntry {
            id: "20240115".to_string(),
            start_time: start,
            end_time: Some(start + Duration::hours(8)),
            notes: vec![],
            breaks: vec![],
        };
        assert_eq!(entry.total_work_time(), Duration::hours(8));
    }

    #[test]
    fn test_total_work_time_subtracts_closed_breaks() {
        let start = local(2024, 1, 15, 9, 0, 0);
        let entry = JournalEntry {
            id: "20240115".to_string(),
            start_time: start,
            end_time: Some(start + Duration::hours(8)),
            notes: vec![],
            breaks: vec![Break {
                start_time: start + Duration::hours(3),
                end_time: Some(start + Duration::hours(4)),
                reason: "lunch".to_string(),
            }],
        };
        assert_eq!(entry.total_work_time(), Duration::hours(7));
    }

    #[test]
    fn test_total_work_time_multiple_breaks() {
        let start = local(2024, 1, 15, 9, 0, 0);
        let entry = JournalEntry {
            id: "20240115".to_string(),
            start_time: start,
            end_time: Some(start + Duration::hours(9)),
            notes: vec![],
            breaks: vec![
                Break {
                    start_time: start + Duration::hours(2),
                    end_time: Some(start + Duration::hours(2) + Duration::minutes(15)),
                    reason: "coffee".to_string(),
                },
                Break {
                    start_time: start + Duration::hours(4),
                    end_time: Some(start + Duration::hours(5)),
                    reason: "lunch".to_string(),
                },
            ],
        };
        assert_eq!(
            entry.total_work_time(),
            Duration::hours(7) + Duration::minutes(45)
        );
    }

    #[test]
    fn test_total_work_time_ignores_open_break() {
        let start = local(2024, 1, 15, 9, 0, 0);
        let entry = JournalEntry {
            id: "20240115".to_string(),
            start_time: start,
            end_time: Some(start + Duration::hours(8)),
            notes: vec![],
            breaks: vec![Break {
                start_time: start + Duration::hours(4),
                end_time: None,
                reason: "ongoing".to_string(),
            }],
        };
        assert_eq!(entry.total_work_time(), Duration::hours(8));
    }

    #[test]
    fn test_add_note_rejects_empty_contents() {
        let mut entry = JournalEntry::new();
        let result = entry.add_note(Note {
            contents: "   ".to_string(),
            tags: vec![],
        });
        assert!(matches!(result, Err(WorklogError::EmptyNote)));
        assert!(entry.notes.is_empty());
    }

    #[test]
    fn test_add_note_normalizes_single_empty_tag() {
        let mut entry = JournalEntry::new();
        entry
            .add_note(Note {
                contents: "standup".to_string(),
                tags: vec!["".to_string()],
            })
            .unwrap();
        assert!(entry.notes[0].tags.is_empty());
    }

    #[test]
    fn test_add_note_keeps_tags() {
        let mut entry = JournalEntry::new();
        entry
            .add_note(Note {
                contents: "deploy".to_string(),
                tags: vec!["ops".to_string(), "release".to_string()],
            })
            .unwrap();
        assert_eq!(entry.notes[0].tags.len(), 2);
    }

    #[test]
    fn test_end_day_overwrites_previous_end() {
        let mut entry = JournalEntry::new();
        entry.end_day();
        let first = entry.end_time.unwrap();
        entry.end_day();
        assert!(entry.end_time.unwrap() >= first);
    }

    #[test]
    fn test_day_key_format() {
        let time = local(2024, 3, 7, 10, 0, 0);
        assert_eq!(day_key(&time), "20240307");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::zero()), "0s");
        assert_eq!(format_duration(Duration::seconds(30)), "30s");
        assert_eq!(format_duration(Duration::minutes(15)), "15m");
        assert_eq!(format_duration(Duration::hours(7)), "7h");
        assert_eq!(
            format_duration(Duration::hours(7) + Duration::minutes(45)),
            "7h45m"
        );
        assert_eq!(
            format_duration(Duration::hours(1) + Duration::seconds(30)),
            "1h0m30s"
        );
    }

    #[test]
    fn test_display_closed_entry() {
        let start = local(2024, 1, 15, 9, 0, 0);
        let mut entry = JournalEntry {
            id: "20240115".to_string(),
            start_time: start,
            end_time: Some(start + Duration::hours(8)),
            notes: vec![],
            breaks: vec![Break {
                start_time: start + Duration::hours(3),
                end_time: Some(start + Duration::hours(4)),
                reason: "lunch".to_string(),
            }],
        };
        entry
            .add_note(Note {
                contents: "reviewed PRs".to_string(),
                tags: vec!["review".to_string()],
            })
            .unwrap();
        entry
            .add_note(Note {
                contents: "standup".to_string(),
                tags: vec![],
            })
            .unwrap();

        let rendered = entry.to_string();
        assert_eq!(
            rendered,
            "Date: 2024-01-15\nStart: 09:00:00 | End: 17:00:00 | Time: 7h\n\n- reviewed PRs [review]\n- standup"
        );
    }

    #[test]
    fn test_display_ongoing_entry() {
        let entry = JournalEntry {
            id: "20240115".to_string(),
            start_time: local(2024, 1, 15, 9, 0, 0),
            end_time: None,
            notes: vec![],
            breaks: vec![],
        };
        let rendered = entry.to_string();
        assert!(rendered.contains("End: Ongoing"));
        assert!(rendered.contains("Time: N/A"));
    }

    #[test]
    fn test_progress_no_breaks() {
        let start = local(2024, 1, 15, 9, 0, 0);
        let now = start + Duration::hours(4);
        let entry = JournalEntry {
            id: "20240115".to_string(),
            start_time: start,
            end_time: None,
            notes: vec![],
            breaks: vec![],
        };
        let status = entry.progress(Duration::hours(8), Duration::hours(1), now);
        assert_eq!(status.current_work, Duration::hours(4));
        // Lunch not yet taken, so the expected end includes it
        assert_eq!(status.expected_end, start + Duration::hours(9));
        assert_eq!(status.remaining, Duration::hours(5));
        assert!(!status.has_lunch_break);
    }

    #[test]
    fn test_progress_truncates_at_open_break() {
        let start = local(2024, 1, 15, 9, 0, 0);
        let now = start + Duration::hours(5);
        let entry = JournalEntry {
            id: "20240115".to_string(),
            start_time: start,
            end_time: None,
            notes: vec![],
            breaks: vec![Break {
                start_time: start + Duration::hours(4),
                end_time: None,
                reason: "lunch".to_string(),
            }],
        };
        let status = entry.progress(Duration::hours(8), Duration::hours(1), now);
        assert_eq!(status.current_work, Duration::hours(4));
    }

    #[test]
    fn test_progress_counts_closed_lunch_break() {
        let start = local(2024, 1, 15, 9, 0, 0);
        let now = start + Duration::hours(6);
        let entry = JournalEntry {
            id: "20240115".to_string(),
            start_time: start,
            end_time: None,
            notes: vec![],
            breaks: vec![Break {
                start_time: start + Duration::hours(3),
                end_time: Some(start + Duration::hours(4)),
                reason: "lunch".to_string(),
            }],
        };
        let status = entry.progress(Duration::hours(8), Duration::hours(1), now);
        assert_eq!(status.current_work, Duration::hours(5));
        assert!(status.has_lunch_break);
        // Break pushes the end out, lunch is not added twice
        assert_eq!(status.expected_end, start + Duration::hours(9));
    }

    #[test]
    fn test_progress_remaining_floors_at_zero() {
        let start = local(2024, 1, 15, 9, 0, 0);
        let now = start + Duration::hours(12);
        let entry = JournalEntry {
            id: "20240115".to_string(),
            start_time: start,
            end_time: None,
            notes: vec![],
            breaks: vec![],
        };
        let status = entry.progress(Duration::hours(8), Duration::hours(1), now);
        assert_eq!(status.remaining, Duration::zero());
    }

    #[test]
    fn test_end_time_zero_timestamp_reads_as_none() {
        let json = r#"{
            "id": "20240115",
            "start_time": "2024-01-15T09:00:00+00:00",
            "end_time": "0001-01-01T00:00:00Z",
            "notes": null,
            "breaks": null
        }"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert!(entry.end_time.is_none());
        assert!(entry.notes.is_empty());
        assert!(entry.breaks.is_empty());
    }

    #[test]
    fn test_entry_round_trip() {
        let start = local(2024, 1, 15, 9, 0, 0);
        let entry = JournalEntry {
            id: "20240115".to_string(),
            start_time: start,
            end_time: Some(start + Duration::hours(8)),
            notes: vec![Note {
                contents: "wrote docs".to_string(),
                tags: vec!["docs".to_string()],
            }],
            breaks: vec![Break {
                start_time: start + Duration::hours(4),
                end_time: None,
                reason: "walk".to_string(),
            }],
        };
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: JournalEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}
