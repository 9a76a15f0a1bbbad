//! Duration totals over entries.

use chrono::Duration;

use crate::entry::Entry;

/// Sum of `end - start` over `entries`; zero when there are none.
pub fn total_duration<'a, I>(entries: I) -> Duration
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries
        .into_iter()
        .fold(Duration::zero(), |total, entry| total + entry.duration())
}

/// `HH:MM:SS`, with hours running past 24 for long totals.
pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}
