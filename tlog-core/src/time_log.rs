//! The in-memory log owned by the caller and the derived view a renderer needs.

use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use crate::entry::{Entry, EntryId};
use crate::error::EntryError;
use crate::filter::{EntryFilter, visible_entries};
use crate::tags::collect_tags;
use crate::totals::total_duration;

/// Ordered list of time entries.
///
/// Entries keep insertion order. Ids are handed out increasingly and are not
/// reused, not even after [`TimeLog::reset`].
#[derive(Debug, Clone)]
pub struct TimeLog {
    entries: Vec<Entry>,
    /// `None` once `u64::MAX` has been used.
    next_id: Option<u64>,
}

/// Everything derived from a log for one filter.
#[derive(Debug)]
pub struct LogView<'a> {
    /// Entries selected by the filter, in log order.
    pub visible: Vec<&'a Entry>,
    /// Every tag of the log, whatever the filter.
    pub tags: Vec<String>,
    /// Duration of the visible entries.
    pub subtotal: Duration,
    /// Duration of the whole log.
    pub total: Duration,
    pub started_at: Option<NaiveDateTime>,
    pub log_len: usize,
}

impl Default for TimeLog {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Adopts already built entries, keeping their order.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self, EntryError> {
        let mut log = Self::new();
        for entry in entries {
            log.insert(entry)?;
        }
        Ok(log)
    }

    /// Creates an entry with the next free id and appends it.
    pub fn log(
        &mut self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        note: impl Into<String>,
    ) -> Result<EntryId, EntryError> {
        let id = EntryId(self.next_id.ok_or(EntryError::IdsExhausted)?);
        let entry = Entry::new(id, start, end, note)?;
        self.insert(entry)?;
        Ok(id)
    }

    /// Appends `entry`. Its id must not be in use.
    pub fn insert(&mut self, entry: Entry) -> Result<(), EntryError> {
        let id = entry.id();
        if self.get(id).is_some() {
            return Err(EntryError::DuplicateId(id));
        }
        self.next_id = match (self.next_id, id.0.checked_add(1)) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };
        debug!(%id, tags = ?entry.tags(), "logged entry");
        self.entries.push(entry);
        Ok(())
    }

    /// Replaces the note of entry `id`, re-deriving its tags.
    pub fn edit(&mut self, id: EntryId, note: impl Into<String>) -> Result<&Entry, EntryError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(EntryError::UnknownEntry(id))?;
        entry.edit_note(note);
        debug!(%id, tags = ?entry.tags(), "edited entry");
        Ok(&*entry)
    }

    pub fn remove(&mut self, id: EntryId) -> Result<Entry, EntryError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id() == id)
            .ok_or(EntryError::UnknownEntry(id))?;
        debug!(%id, "removed entry");
        Ok(self.entries.remove(index))
    }

    /// Drops every entry.
    pub fn reset(&mut self) {
        debug!(count = self.entries.len(), "reset log");
        self.entries.clear();
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tags(&self) -> Vec<String> {
        collect_tags(&self.entries)
    }

    /// Earliest start in the log.
    pub fn started_at(&self) -> Option<NaiveDateTime> {
        self.entries.iter().map(Entry::start).min()
    }

    pub fn total(&self) -> Duration {
        total_duration(&self.entries)
    }

    pub fn subtotal(&self, filter: &EntryFilter) -> Duration {
        total_duration(self.entries.iter().filter(|e| filter.matches(e)))
    }

    pub fn visible(&self, filter: &EntryFilter) -> Vec<&Entry> {
        visible_entries(&self.entries, filter)
    }

    pub fn view(&self, filter: &EntryFilter) -> LogView<'_> {
        let visible = self.visible(filter);
        let subtotal = total_duration(visible.iter().copied());
        LogView {
            visible,
            tags: self.tags(),
            subtotal,
            total: self.total(),
            started_at: self.started_at(),
            log_len: self.entries.len(),
        }
    }
}
