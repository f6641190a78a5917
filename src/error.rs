use thiserror::Error;

/// Worklog error types
#[derive(Error, Debug)]
pub enum WorklogError {
    #[error("cannot add empty note")]
    EmptyNote,

    #[error("no entries found for {0}")]
    NoEntries(String),

    #[error("entry {id} is invalid: {reason}")]
    InvalidEntry { id: String, reason: String },

    #[error("entry with id {0} not found")]
    EntryNotFound(String),

    #[error("failed to parse time '{input}': {source}")]
    InvalidTimeFormat {
        input: String,
        source: chrono::ParseError,
    },

    #[error("invalid break: {0}")]
    InvalidBreak(String),

    #[error("failed to {operation} journal: {source}")]
    JournalIo {
        operation: String,
        source: std::io::Error,
    },

    #[error("validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type for worklog operations
pub type Result<T> = std::result::Result<T, WorklogError>;
