//! Journal entity model
//!
//! Defines Note, Break, JournalEntry and the versioned Journal container,
//! plus the duration arithmetic derived from them.

mod entry;
mod journal;

pub use entry::{day_key, format_duration, Break, JournalEntry, Note, WorkdayStatus};
pub(crate) use entry::is_zero_time;
pub use journal::{Journal, SCHEMA_VERSION};
