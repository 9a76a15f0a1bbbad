use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{debug, warn};

use crate::filter::EntryFilter;

const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const DEFAULT_START_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone)]
pub struct Config {
    /// Entries document read by the viewer.
    pub log_file: PathBuf,
    /// Format of `start` and `end` in the entries document.
    pub datetime_format: String,
    /// Format used to show when the log started.
    pub start_format: String,
    /// Filter applied when none is given on the command line.
    pub default_filter: EntryFilter,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    log_file: Option<PathBuf>,
    datetime_format: Option<String>,
    start_format: Option<String>,
    /// `"all"` or a tag such as `"#work"`.
    default_filter: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native)
    /// and apply defaults for anything missing.
    ///
    /// No config file at all means defaults. A config file that exists but
    /// can't be read or parsed is an error.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_paths())
    }

    fn load_from(paths: &[PathBuf]) -> Result<Self> {
        let file_config = Self::read_file_config(paths)?;
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let log_file = file_config
            .log_file
            .unwrap_or_else(Self::default_log_file);

        let datetime_format =
            Self::checked_format(file_config.datetime_format, DEFAULT_DATETIME_FORMAT);
        let start_format = Self::checked_format(file_config.start_format, DEFAULT_START_FORMAT);

        let default_filter = file_config
            .default_filter
            .as_deref()
            .map(EntryFilter::for_tag)
            .unwrap_or_default();

        Self {
            log_file,
            datetime_format,
            start_format,
            default_filter,
        }
    }

    /// Keeps a user supplied strftime format only if chrono understands it.
    fn checked_format(format: Option<String>, fallback: &str) -> String {
        match format {
            Some(format) if Self::is_valid_format(&format) => format,
            Some(format) => {
                warn!(%format, %fallback, "invalid date format in config, using fallback");
                fallback.to_string()
            }
            None => fallback.to_string(),
        }
    }

    fn is_valid_format(format: &str) -> bool {
        !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
    }

    /// Default entries document: `{data_dir}/tlog/log.toml`
    /// - macOS:   `~/Library/Application Support/tlog/log.toml`
    /// - Linux:   `$XDG_DATA_HOME/tlog/log.toml` or `~/.local/share/tlog/log.toml`
    /// - Windows: `%APPDATA%\tlog\log.toml`
    fn default_log_file() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            base.data_dir().join("tlog").join("log.toml")
        } else {
            PathBuf::from("./tlog/log.toml")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            v.push(b.home_dir().join(".config").join("tlog").join("config.toml"));
            v.push(b.config_dir().join("tlog").join("config.toml"));
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config(paths: &[PathBuf]) -> Result<FileConfig> {
        for path in paths {
            if !path.exists() {
                continue;
            }
            debug!(path = %path.display(), "reading config");
            let s =
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::mk_config;
    use std::path::Path;
    use tempfile::tempdir;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b.home_dir().join(".config").join("tlog").join("config.toml");
            let expected_native = b.config_dir().join("tlog").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_all_keys() {
        let toml = r##"
            log_file = "/tmp/my-log.toml"
            datetime_format = "%d/%m/%Y %H:%M"
            start_format = "%H:%M"
            default_filter = "#Work"
        "##;
        let config = Config::from_file_config(Config::parse_file(toml).unwrap());
        assert_eq!(config.log_file, Path::new("/tmp/my-log.toml"));
        assert_eq!(config.datetime_format, "%d/%m/%Y %H:%M");
        assert_eq!(config.start_format, "%H:%M");
        assert_eq!(config.default_filter, EntryFilter::ShowTag("#work".into()));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_file_config(Config::parse_file("").unwrap());
        assert_eq!(config.datetime_format, DEFAULT_DATETIME_FORMAT);
        assert_eq!(config.start_format, DEFAULT_START_FORMAT);
        assert_eq!(config.default_filter, EntryFilter::ShowAll);
        assert!(config.log_file.ends_with(Path::new("tlog").join("log.toml")));
    }

    #[test]
    fn invalid_formats_fall_back_to_defaults() {
        let toml = r#"
            datetime_format = "%Q and %"
            start_format = "%H:%M"
        "#;
        let config = Config::from_file_config(Config::parse_file(toml).unwrap());
        assert_eq!(config.datetime_format, DEFAULT_DATETIME_FORMAT);
        assert_eq!(config.start_format, "%H:%M");
    }

    #[test]
    fn parse_file_rejects_wrong_types() {
        assert!(Config::parse_file("log_file = 3").is_err());
    }

    #[test]
    fn load_uses_first_existing_file() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");
        let present = tmp.path().join("config.toml");
        fs::write(&present, r#"start_format = "%H:%M""#).unwrap();

        let config = Config::load_from(&[missing, present]).unwrap();
        assert_eq!(config.start_format, "%H:%M");
    }

    #[test]
    fn load_without_config_file_uses_defaults() {
        let tmp = tempdir().unwrap();
        let config = Config::load_from(&[tmp.path().join("missing.toml")]).unwrap();
        assert_eq!(config.datetime_format, DEFAULT_DATETIME_FORMAT);
        assert_eq!(config.default_filter, EntryFilter::ShowAll);
    }

    #[test]
    fn load_fails_on_malformed_config_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "log_file = 3").unwrap();

        let error = Config::load_from(&[path.clone()]).unwrap_err();
        assert!(format!("{error:#}").contains(&format!("parsing {}", path.display())));
    }

    #[test]
    fn mk_config_matches_defaults() {
        let config = mk_config(PathBuf::from("/tmp/log.toml"));
        assert_eq!(config.datetime_format, DEFAULT_DATETIME_FORMAT);
        assert_eq!(config.start_format, DEFAULT_START_FORMAT);
    }
}
