//! Journal persistence
//!
//! Loads and saves the versioned journal file and migrates legacy files
//! forward. Migrations are an ordered ladder of pure steps over the raw
//! JSON entries; step `i` upgrades from schema version `i` to `i + 1`.

use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, WorklogError};
use crate::models::{Journal, JournalEntry, SCHEMA_VERSION};

type MigrationStep = fn(Vec<Value>) -> Vec<Value>;

/// Step `i` upgrades raw entries from schema version `i`
const MIGRATIONS: &[MigrationStep] = &[materialize_break_lists];

/// Wrap the entries in a `Journal` at the current schema version and write
/// them to `path`, replacing any previous contents
pub fn save_entries(entries: &[JournalEntry], path: &Path) -> Result<()> {
    let journal = Journal::new(entries.to_vec());
    let data = serde_json::to_vec(&journal)?;
    fs::write(path, data).map_err(|source| WorklogError::JournalIo {
        operation: "write".to_string(),
        source,
    })
}

/// Load the journal file at `path`.
///
/// A missing file is an initialization signal: an empty journal at the
/// current schema version is created and an empty collection returned.
/// Files with an older schema version (including the legacy bare-array
/// format, implicit version 0) are migrated and persisted back before
/// returning.
pub fn load_entries(path: &Path) -> Result<Vec<JournalEntry>> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            save_entries(&[], path)?;
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(WorklogError::JournalIo {
                operation: "read".to_string(),
                source,
            })
        }
    };

    let (version, mut raw_entries) = decode_root(&data)?;

    if version < SCHEMA_VERSION {
        raw_entries = migrate(raw_entries, version);
        let entries: Vec<JournalEntry> = serde_json::from_value(Value::Array(raw_entries))?;
        save_entries(&entries, path)?;
        return Ok(entries);
    }

    let entries = serde_json::from_value(Value::Array(raw_entries))?;
    Ok(entries)
}

/// Split the raw file into its schema version and raw entry values.
///
/// A top-level array is the legacy pre-versioning layout, implicit
/// version 0.
fn decode_root(data: &[u8]) -> Result<(i64, Vec<Value>)> {
    let root: Value = serde_json::from_slice(data)?;
    match root {
        Value::Object(mut obj) => {
            let version = obj.get("version").and_then(Value::as_i64).unwrap_or(0);
            let entries = match obj.remove("entries") {
                Some(Value::Array(entries)) => entries,
                Some(Value::Null) | None => Vec::new(),
                Some(_) => return Err(malformed("'entries' must be an array")),
            };
            Ok((version, entries))
        }
        Value::Array(entries) => Ok((0, entries)),
        _ => Err(malformed("journal root must be an object or an array")),
    }
}

fn malformed(reason: &str) -> WorklogError {
    WorklogError::JournalIo {
        operation: "decode".to_string(),
        source: std::io::Error::new(ErrorKind::InvalidData, reason.to_string()),
    }
}

/// Apply every migration step from `from_version` up to the current
/// schema version, in order
fn migrate(mut entries: Vec<Value>, from_version: i64) -> Vec<Value> {
    let first = from_version.max(0) as usize;
    for step in MIGRATIONS.iter().skip(first) {
        entries = step(entries);
    }
    entries
}

/// 0 -> 1: entries written before breaks existed get an empty break list
fn materialize_break_lists(entries: Vec<Value>) -> Vec<Value> {
    entries
        .into_iter()
        .map(|mut entry| {
            if let Value::Object(obj) = &mut entry {
                let missing = matches!(obj.get("breaks"), None | Some(Value::Null));
                if missing {
                    obj.insert("breaks".to_string(), Value::Array(Vec::new()));
                }
            }
            entry
        })
        .collect()
}
