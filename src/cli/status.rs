use chrono::Local;
use std::path::PathBuf;

use crate::cli::config_path_or_default;
use crate::config;
use crate::display;
use crate::error::Result;
use crate::query;
use crate::renderer;
use crate::store;

/// Show the in-progress view for today's entry: current work time,
/// expected end time, remaining time and the lunch-break flag
pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = config::load_or_default(&config_path_or_default(config_path))?;
    let min_work_time = config.min_work_duration()?;
    let max_work_time = config.max_work_duration()?;
    let lunch_time = config.lunch_duration()?;

    let entries = store::load_entries(&config.journal_path)?;
    let (entry, _) = query::find_current_day_entry(&entries)?;

    if entry.end_time.is_some() {
        println!("Workday already closed.\n");
        display::print_markdown(&renderer::render_day(&entry));
        return Ok(());
    }

    let status = entry.progress(min_work_time, lunch_time, Local::now());
    let mut markdown = renderer::render_status(&entry, &status);
    if status.current_work > max_work_time {
        markdown.push_str("\n\n**Warning:** over the maximum work time, go home!");
    }
    display::print_markdown(&markdown);
    Ok(())
}
