//! Markdown renderer module
//!
//! Generates report output in Markdown format: single-day, weekly and
//! monthly reports, break listings and the in-progress status view.

use crate::models::{format_duration, JournalEntry, WorkdayStatus};
use crate::query;

/// Render a single day's entry
pub fn render_day(entry: &JournalEntry) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "# Workday: {}\n\n",
        entry.start_time.format("%Y-%m-%d")
    ));
    output.push_str(&render_time_line(entry));

    if !entry.notes.is_empty() {
        output.push_str("\n\n## Notes\n\n");
        let notes: Vec<String> = entry.notes.iter().map(|n| n.to_string()).collect();
        output.push_str(&notes.join("\n"));
    }

    if !entry.breaks.is_empty() {
        output.push_str("\n\n## Breaks\n\n");
        output.push_str(&render_breaks(entry));
    }

    output.trim_end().to_string()
}

/// Render a multi-day report with a summary table
pub fn render_period(title: &str, entries: &[JournalEntry]) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n", title));

    for entry in entries {
        output.push('\n');
        output.push_str(&format!(
            "## {}\n\n",
            entry.start_time.format("%Y-%m-%d")
        ));
        output.push_str(&render_time_line(entry));
        output.push('\n');
        for note in &entry.notes {
            output.push_str(&format!("{}\n", note));
        }
    }

    // An entry that is still open makes the wall-clock total undefined
    let total = match query::calculate_total_time(entries) {
        Ok(total) => format_duration(total),
        Err(_) => "N/A".to_string(),
    };
    let worked = entries
        .iter()
        .fold(chrono::Duration::zero(), |acc, e| acc + e.total_work_time());

    output.push_str("\n## Summary\n\n");
    output.push_str("| Days | Clocked Time | Work Time |\n");
    output.push_str("|------|--------------|----------|\n");
    output.push_str(&format!(
        "| {} | {} | {} |",
        entries.len(),
        total,
        format_duration(worked)
    ));

    output
}

/// Render one bullet per break, open breaks marked ongoing
pub fn render_breaks(entry: &JournalEntry) -> String {
    let lines: Vec<String> = entry
        .breaks
        .iter()
        .map(|br| {
            let start = br.start_time.format("%H:%M:%S");
            match br.end_time {
                Some(end) => format!(
                    "- {} - {} ({}): {}",
                    start,
                    end.format("%H:%M:%S"),
                    format_duration(br.duration()),
                    br.reason
                ),
                None => format!("- {} - ongoing: {}", start, br.reason),
            }
        })
        .collect();
    lines.join("\n")
}

/// Render the in-progress status view for an unclosed day
pub fn render_status(entry: &JournalEntry, status: &WorkdayStatus) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "# Workday Status: {}\n\n",
        entry.start_time.format("%Y-%m-%d")
    ));
    output.push_str(&format!(
        "**Started:** {}\n\n",
        entry.start_time.format("%H:%M:%S")
    ));
    output.push_str(&format!(
        "**Current work time:** {}\n\n",
        format_duration(status.current_work)
    ));
    output.push_str(&format!(
        "**Expected end:** {}\n\n",
        status.expected_end.format("%H:%M:%S")
    ));
    output.push_str(&format!(
        "**Remaining:** {}\n\n",
        format_duration(status.remaining)
    ));
    if status.has_lunch_break {
        output.push_str("**Lunch break:** taken");
    } else {
        output.push_str("**Lunch break:** not yet taken");
    }

    output
}

fn render_time_line(entry: &JournalEntry) -> String {
    let start = entry.start_time.format("%H:%M:%S").to_string();
    let (end, total) = match entry.end_time {
        Some(end) => (
            end.format("%H:%M:%S").to_string(),
            format_duration(entry.total_work_time()),
        ),
        None => ("Ongoing".to_string(), "N/A".to_string()),
    };
    format!("**Start:** {} | **End:** {} | **Time:** {}", start, end, total)
}
