use crate::entry::{Entry, EntryId};
use crate::filter::EntryFilter;
use crate::Config;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(log_file: PathBuf) -> Config {
    Config {
        log_file,
        datetime_format: "%Y-%m-%d %H:%M".to_string(),
        start_format: "%H:%M:%S".to_string(),
        default_filter: EntryFilter::ShowAll,
    }
}

/// A moment in August 2025.
pub fn dt(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 8, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("valid test datetime")
}

pub fn mk_entry(id: u64, start: NaiveDateTime, minutes: i64, note: &str) -> Entry {
    Entry::new(EntryId(id), start, start + Duration::minutes(minutes), note)
        .expect("valid test entry")
}
