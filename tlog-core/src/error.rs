use chrono::NaiveDateTime;
use thiserror::Error;

use crate::entry::EntryId;

/// Errors raised when building or mutating entries of a [`TimeLog`](crate::TimeLog).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("entry ends at {end} before it starts at {start}")]
    EndBeforeStart {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("no entry with id {0}")]
    UnknownEntry(EntryId),
    #[error("an entry with id {0} already exists")]
    DuplicateId(EntryId),
    #[error("no free entry id left")]
    IdsExhausted,
}
