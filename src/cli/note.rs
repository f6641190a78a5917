use std::path::PathBuf;

use crate::cli::config_path_or_default;
use crate::config;
use crate::error::{Result, WorklogError};
use crate::models::Note;
use crate::query;
use crate::store;
use crate::validation;

/// Add a note to today's workday entry
pub fn run(config_path: Option<PathBuf>, contents: String, tags: Vec<String>) -> Result<()> {
    let config = config::load_or_default(&config_path_or_default(config_path))?;
    let mut entries = store::load_entries(&config.journal_path)?;

    let (mut entry, idx) = match query::find_current_day_entry(&entries) {
        Ok(found) => found,
        Err(err @ WorklogError::EntryNotFound(_)) => {
            eprintln!("Please run 'worklog start' first to create a new entry.");
            return Err(err);
        }
        Err(err) => return Err(err),
    };

    let note = Note { contents, tags };
    let check = validation::validate_note(&note);
    if let Some(err) = check.error {
        return Err(err);
    }

    entry.add_note(note)?;
    entries[idx] = entry;
    store::save_entries(&entries, &config.journal_path)?;

    println!("Added note to current day.");
    Ok(())
}

/// Replace the note at `index` on today's entry. The replacement keeps no
/// tags.
pub fn edit(config_path: Option<PathBuf>, index: usize, contents: String) -> Result<()> {
    let config = config::load_or_default(&config_path_or_default(config_path))?;
    let mut entries = store::load_entries(&config.journal_path)?;

    let (mut entry, idx) = match query::find_current_day_entry(&entries) {
        Ok(found) => found,
        Err(err @ WorklogError::EntryNotFound(_)) => {
            eprintln!("Please run 'worklog start' first to create a new entry.");
            return Err(err);
        }
        Err(err) => return Err(err),
    };

    if index >= entry.notes.len() {
        return Err(WorklogError::Validation {
            field: "note".to_string(),
            reason: format!(
                "index {} is out of range for {} notes",
                index,
                entry.notes.len()
            ),
        });
    }

    let note = Note {
        contents,
        tags: Vec::new(),
    };
    let check = validation::validate_note(&note);
    if let Some(err) = check.error {
        return Err(err);
    }

    entry.notes[index] = note;
    entries[idx] = entry;
    store::save_entries(&entries, &config.journal_path)?;

    println!("Edited note {} on the current day.", index);
    Ok(())
}
