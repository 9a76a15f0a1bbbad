pub mod config;
pub mod entry;
pub mod error;
pub mod filter;
pub mod log_file;
pub mod tags;
pub mod time_log;
pub mod totals;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use entry::{Entry, EntryId};
pub use error::EntryError;
pub use filter::{EntryFilter, visible_entries};
pub use log_file::{LogQueryResult, ParseError, QueryError, ReadLogResult, read_log_file};
pub use tags::{collect_tags, extract_tags};
pub use time_log::{LogView, TimeLog};
pub use totals::{format_duration, total_duration};
