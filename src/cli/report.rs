use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::path::PathBuf;

use crate::cli::config_path_or_default;
use crate::config;
use crate::display;
use crate::error::{Result, WorklogError};
use crate::query;
use crate::renderer;
use crate::store;

/// Render a report: today's entry by default, or the current ISO week, or
/// a calendar month
pub fn run(config_path: Option<PathBuf>, week: bool, month: Option<String>) -> Result<()> {
    let config = config::load_or_default(&config_path_or_default(config_path))?;
    let entries = store::load_entries(&config.journal_path)?;

    let markdown = if week {
        let now = Local::now();
        let matched = query::fetch_entries_by_week_date(&entries, now)?;
        renderer::render_period(&format!("Weekly Report: {}", now.format("%G-W%V")), &matched)
    } else if let Some(month_str) = month {
        let reference = parse_month(&month_str)?;
        let matched = query::fetch_entries_by_month_date(&entries, reference)?;
        renderer::render_period(
            &format!("Monthly Report: {}", reference.format("%Y-%m")),
            &matched,
        )
    } else {
        let (entry, _) = query::find_current_day_entry(&entries)?;
        renderer::render_day(&entry)
    };

    display::print_markdown(&markdown);
    Ok(())
}

/// An empty month string means the current month
fn parse_month(month_str: &str) -> Result<DateTime<Local>> {
    if month_str.is_empty() {
        return Ok(Local::now());
    }
    let date = NaiveDate::parse_from_str(&format!("{}-01", month_str), "%Y-%m-%d").map_err(
        |e| WorklogError::Validation {
            field: "month".to_string(),
            reason: format!("expected YYYY-MM: {}", e),
        },
    )?;
    let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| WorklogError::Validation {
        field: "month".to_string(),
        reason: "invalid month start".to_string(),
    })?;
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .ok_or_else(|| WorklogError::Validation {
            field: "month".to_string(),
            reason: "month start does not exist in the local timezone".to_string(),
        })
}
