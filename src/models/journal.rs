use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// Schema version written to new journal files; `store` migrates older
/// files forward to this version on load
pub const SCHEMA_VERSION: i64 = 1;

/// On-disk root object of the journal file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journal {
    /// Schema version of the persisted file
    pub version: i64,
    /// Journal entries in insertion order, not necessarily chronological
    pub entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new(entries: Vec<JournalEntry>) -> Self {
        Self {
            version: SCHEMA_VERSION,
            entries,
        }
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journal_default_is_current_version() {
        let journal = Journal::default();
        assert_eq!(journal.version, SCHEMA_VERSION);
        assert!(journal.entries.is_empty());
    }

    #[test]
    fn test_journal_serialization_shape() {
        let journal = Journal::default();
        let json = serde_json::to_string(&journal).unwrap();
        assert_eq!(json, r#"{"version":1,"entries":[]}"#);
    }
}
