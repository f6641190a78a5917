use chrono::Local;
use std::path::PathBuf;

use crate::cli::config_path_or_default;
use crate::config;
use crate::error::Result;
use crate::export;
use crate::store;

/// Export break data to a JSON or CSV file
pub fn breaks(
    config_path: Option<PathBuf>,
    format: String,
    output: Option<PathBuf>,
    date: Option<String>,
    last: Option<u32>,
) -> Result<()> {
    export::check_format(&format)?;
    let config = config::load_or_default(&config_path_or_default(config_path))?;
    let entries = store::load_entries(&config.journal_path)?;

    let (matched, range) = export::filter_entries(&entries, date.as_deref(), last)?;
    let rows = export::break_rows(&matched);

    let path = export::output_path(output, "breaks", &format);
    match format.as_str() {
        "csv" => export::write_csv_rows(&rows, &path)?,
        _ => export::write_json_rows(&rows, &path)?,
    }

    println!("Exported breaks data ({}) to {}", range, path.display());
    Ok(())
}

/// Export timesheet data to a JSON or CSV file.
///
/// The JSON format carries the full entries plus a summary; CSV is one row
/// per day.
pub fn timesheet(
    config_path: Option<PathBuf>,
    format: String,
    output: Option<PathBuf>,
    date: Option<String>,
    last: Option<u32>,
) -> Result<()> {
    export::check_format(&format)?;
    let config = config::load_or_default(&config_path_or_default(config_path))?;
    let entries = store::load_entries(&config.journal_path)?;

    let (matched, range) = export::filter_entries(&entries, date.as_deref(), last)?;

    let path = export::output_path(output, "timesheet", &format);
    match format.as_str() {
        "csv" => export::write_csv_rows(&export::timesheet_rows(&matched), &path)?,
        _ => {
            let document = export::TimesheetDocument {
                generated_at: Local::now(),
                date_range: range.clone(),
                summary: export::summarize(&matched),
                entries: matched,
            };
            export::write_json_document(&document, &path)?;
        }
    }

    println!("Exported timesheet data ({}) to {}", range, path.display());
    Ok(())
}
