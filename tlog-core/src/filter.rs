//! Selection of the entries shown for a given filter.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::entry::Entry;

/// Criterion selecting which entries of a log are visible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EntryFilter {
    #[default]
    ShowAll,
    /// Entries whose tags contain this exact tag (e.g. `#foo`).
    ShowTag(String),
}

impl EntryFilter {
    /// Builds a filter from user input.
    ///
    /// An empty input or `all` selects everything. Anything else names a tag:
    /// it is trimmed, lower-cased and prefixed with `#` when missing, so `Foo`,
    /// `#Foo` and `#foo` all select `#foo`.
    pub fn for_tag(input: &str) -> Self {
        let tag = input.trim().to_lowercase();
        if tag.is_empty() || tag == "all" {
            Self::ShowAll
        } else if tag.starts_with('#') {
            Self::ShowTag(tag)
        } else {
            Self::ShowTag(format!("#{tag}"))
        }
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            Self::ShowAll => true,
            Self::ShowTag(tag) => entry.has_tag(tag),
        }
    }
}

impl FromStr for EntryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::for_tag(s))
    }
}

impl fmt::Display for EntryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShowAll => write!(f, "all"),
            Self::ShowTag(tag) => write!(f, "{tag}"),
        }
    }
}

/// Returns the entries selected by `filter`, keeping their order.
///
/// `ShowAll` returns every entry. An empty result is valid.
pub fn visible_entries<'a>(entries: &'a [Entry], filter: &EntryFilter) -> Vec<&'a Entry> {
    let visible: Vec<&Entry> = entries.iter().filter(|e| filter.matches(e)).collect();
    debug!(%filter, total = entries.len(), visible = visible.len(), "filtered entries");
    visible
}
