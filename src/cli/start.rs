use chrono::Local;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::cli::config_path_or_default;
use crate::config;
use crate::error::Result;
use crate::models::{day_key, JournalEntry};
use crate::query;
use crate::store;

/// Start a new workday entry for today.
///
/// If an entry for today already exists, asks for confirmation on stdin
/// before overwriting it.
pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = config::load_or_default(&config_path_or_default(config_path))?;
    let mut entries = store::load_entries(&config.journal_path)?;

    let now = Local::now();
    let date_str = now.format("%Y-%m-%d");

    match query::fetch_entry_by_id(&day_key(&now), &entries) {
        Some((_, idx)) => {
            print!(
                "There is already an entry for {}. Do you want to override it? (y/N): ",
                date_str
            );
            io::stdout().flush()?;
            if !confirmed()? {
                println!("No changes made.");
                return Ok(());
            }
            entries[idx] = JournalEntry::new();
            store::save_entries(&entries, &config.journal_path)?;
            println!("Entry for {} overwritten.", date_str);
        }
        None => {
            entries.push(JournalEntry::new());
            store::save_entries(&entries, &config.journal_path)?;
            println!("Added new journal entry for {}", date_str);
        }
    }

    Ok(())
}

/// Single synchronous line read; anything but "y" declines
fn confirmed() -> Result<bool> {
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
