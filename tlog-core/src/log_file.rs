//! Reads an entries document (TOML) into a [`TimeLog`].
//!
//! ```toml
//! [[entries]]
//! id = 1
//! start = "2025-08-15 09:00"
//! end = "2025-08-15 10:30"
//! note = "Worked on #foo and #Bar"
//! ```
//!
//! `id` and `note` are optional. Tags are never read from the document, they
//! are always derived from the note. The document is only read, never written.

use anyhow::anyhow;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::entry::{Entry, EntryId};
use crate::time_log::TimeLog;

/// Represents a non-critical issue that occurred while reading a log.
///
/// These are reported alongside the entries that could be read, without
/// stopping the read.
#[derive(Debug)]
pub enum QueryError {
    FileError { path: PathBuf, error: anyhow::Error },
    InvalidEntry { path: PathBuf, index: usize, error: String },
}

/// A problem found while parsing the document content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("not a valid entries document: {0}")]
    Document(String),
    /// `index` is the 1-based position of the entry in the document.
    #[error("entry {index}: {message}")]
    Entry { index: usize, message: String },
}

#[derive(Debug)]
pub struct ReadLogResult {
    pub entries: Vec<Entry>,
    pub errors: Vec<ParseError>,
}

/// The complete result of reading a log file.
#[derive(Debug)]
pub struct LogQueryResult {
    pub log: TimeLog,
    pub errors: Vec<QueryError>,
}

#[derive(Debug, Deserialize)]
struct RawLog {
    #[serde(default)]
    entries: Vec<toml::Value>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    id: Option<u64>,
    start: String,
    end: String,
    #[serde(default)]
    note: String,
}

/// Parses the content of an entries document.
///
/// Malformed entries are skipped and reported; the rest are returned in
/// document order. Entries without an `id` get ids after the highest explicit
/// one.
pub fn parse_log_content(content: &str, datetime_format: &str) -> ReadLogResult {
    let mut entries = Vec::new();
    let mut errors = Vec::new();

    let raw = match toml::from_str::<RawLog>(content) {
        Ok(raw) => raw,
        Err(error) => {
            errors.push(ParseError::Document(error.to_string()));
            return ReadLogResult { entries, errors };
        }
    };

    // Each table is converted on its own so one bad entry can't sink the rest.
    let mut raw_entries = Vec::with_capacity(raw.entries.len());
    for (position, value) in raw.entries.into_iter().enumerate() {
        let index = position + 1;
        match value.try_into::<RawEntry>() {
            Ok(raw_entry) => raw_entries.push((index, raw_entry)),
            Err(error) => errors.push(ParseError::Entry {
                index,
                message: error.to_string().trim().to_string(),
            }),
        }
    }

    let mut next_id = raw_entries
        .iter()
        .filter_map(|(_, e)| e.id)
        .max()
        .map_or(1, |max| max.saturating_add(1));
    let mut seen_ids = HashSet::new();

    for (index, raw_entry) in raw_entries {
        let id = match raw_entry.id {
            Some(id) => EntryId(id),
            None => {
                let id = EntryId(next_id);
                next_id = next_id.saturating_add(1);
                id
            }
        };

        match build_entry(id, raw_entry, datetime_format) {
            Ok(entry) => {
                if seen_ids.insert(id) {
                    entries.push(entry);
                } else {
                    errors.push(ParseError::Entry {
                        index,
                        message: format!("duplicate id {id}"),
                    });
                }
            }
            Err(message) => errors.push(ParseError::Entry { index, message }),
        }
    }

    errors.sort_by_key(|error| match error {
        ParseError::Document(_) => 0,
        ParseError::Entry { index, .. } => *index,
    });
    ReadLogResult { entries, errors }
}

fn build_entry(id: EntryId, raw: RawEntry, datetime_format: &str) -> Result<Entry, String> {
    let start = parse_datetime(&raw.start, datetime_format)?;
    let end = parse_datetime(&raw.end, datetime_format)?;
    Entry::new(id, start, end, raw.note).map_err(|error| error.to_string())
}

fn parse_datetime(input: &str, datetime_format: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(input.trim(), datetime_format)
        .map_err(|error| format!("invalid date '{input}' (expected {datetime_format}): {error}"))
}

/// Reads the log stored at `path`.
///
/// Designed to be resilient: a missing or unreadable file gives an empty log
/// and a [`QueryError::FileError`], and malformed entries are reported as
/// [`QueryError::InvalidEntry`] while the valid ones are kept.
pub fn read_log_file(path: &Path, datetime_format: &str) -> LogQueryResult {
    let mut log = TimeLog::new();
    let mut errors = Vec::new();

    if !path.exists() {
        errors.push(QueryError::FileError {
            path: path.to_path_buf(),
            error: anyhow!("File does not exist in path: {}", path.display()),
        });
        return LogQueryResult { log, errors };
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) => {
            errors.push(QueryError::FileError {
                path: path.to_path_buf(),
                error: error.into(),
            });
            return LogQueryResult { log, errors };
        }
    };

    let parsed = parse_log_content(&content, datetime_format);
    for entry in parsed.entries {
        if let Err(error) = log.insert(entry) {
            errors.push(QueryError::FileError {
                path: path.to_path_buf(),
                error: error.into(),
            });
        }
    }
    for error in parsed.errors {
        warn!(path = %path.display(), %error, "skipping part of log file");
        errors.push(match error {
            ParseError::Document(_) => QueryError::FileError {
                path: path.to_path_buf(),
                error: anyhow!(error),
            },
            ParseError::Entry { index, message } => QueryError::InvalidEntry {
                path: path.to_path_buf(),
                index,
                error: message,
            },
        });
    }

    debug!(path = %path.display(), entries = log.len(), "read log file");
    LogQueryResult { log, errors }
}
