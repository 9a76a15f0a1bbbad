use chrono::{Duration, NaiveDateTime};
use std::fmt;

use crate::error::EntryError;
use crate::tags::extract_tags;

/// Identifier of an entry, unique within one log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single logged time interval with its note and the hashtags found in it.
///
/// Fields are private so that `end >= start` holds for every value and `tags`
/// always matches `note`. The only mutation is [`Entry::edit_note`], which
/// replaces both at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: EntryId,
    start: NaiveDateTime,
    end: NaiveDateTime,
    note: String,
    tags: Vec<String>,
}

impl Entry {
    /// Builds an entry, deriving its tags from `note`.
    ///
    /// Fails with [`EntryError::EndBeforeStart`] when `end < start`. A zero
    /// length interval is valid.
    pub fn new(
        id: EntryId,
        start: NaiveDateTime,
        end: NaiveDateTime,
        note: impl Into<String>,
    ) -> Result<Self, EntryError> {
        if end < start {
            return Err(EntryError::EndBeforeStart { start, end });
        }
        let note = note.into();
        let tags = extract_tags(&note);
        Ok(Self {
            id,
            start,
            end,
            note,
            tags,
        })
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// Hashtags of the note, lower-cased, in order of appearance.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Replaces the note and re-extracts the tags from it.
    pub fn edit_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
        self.tags = extract_tags(&self.note);
    }
}
