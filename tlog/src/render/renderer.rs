use super::theme::OneDark;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use termimad::{MadSkin, crossterm::style::Stylize};
use tlog_core::{Entry, EntryFilter, LogView, QueryError, format_duration};

const NOTHING_LOGGED: &str = "Nothing logged.";

static TAG_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(^|\s)(#\S*)").ok());

#[derive(Clone)]
pub struct RenderOptions {
    /// strftime format for the "started at" time.
    pub start_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self {
            skin: OneDark::log_skin(),
            opts,
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_plain(&self, text: &str) {
        println!("{text}");
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// Prints the log for `filter`: header, tag bar and visible entries.
    /// With `totals_only` just the header.
    pub fn print_view(&self, view: &LogView, filter: &EntryFilter, totals_only: bool) {
        for line in self.format_view(view, filter, totals_only) {
            println!("{line}");
        }
    }

    fn format_view(&self, view: &LogView, filter: &EntryFilter, totals_only: bool) -> Vec<String> {
        let mut lines = Vec::new();
        if view.log_len > 0 {
            lines.push(self.format_header(view));
        }
        if totals_only {
            return lines;
        }
        if !view.tags.is_empty() {
            lines.push(self.format_tag_bar(&view.tags, filter));
        }
        if view.visible.is_empty() {
            lines.push(if self.opts.use_color {
                NOTHING_LOGGED.with(OneDark::COMMENT).to_string()
            } else {
                NOTHING_LOGGED.to_string()
            });
        } else {
            lines.extend(view.visible.iter().map(|entry| self.format_entry_line(entry)));
        }
        lines
    }

    /// `START 09:00:00   SUBTOTAL 01:30:00   TOTAL 03:00:00`
    fn format_header(&self, view: &LogView) -> String {
        let start = view
            .started_at
            .map(|s| s.format(&self.opts.start_format).to_string())
            .unwrap_or_else(|| "-".to_string());
        let subtotal = format_duration(view.subtotal);
        let total = format_duration(view.total);
        if self.opts.use_color {
            format!(
                "{} {}   {} {}   {} {}",
                "START".with(OneDark::COMMENT),
                start.with(OneDark::CYAN),
                "SUBTOTAL".with(OneDark::COMMENT),
                subtotal.with(OneDark::YELLOW).bold(),
                "TOTAL".with(OneDark::COMMENT),
                total.with(OneDark::RED).bold(),
            )
        } else {
            format!("START {start}   SUBTOTAL {subtotal}   TOTAL {total}")
        }
    }

    /// Every tag of the log plus `all`; the active filter is highlighted
    /// (or bracketed without colors).
    fn format_tag_bar(&self, tags: &[String], filter: &EntryFilter) -> String {
        let items: Vec<String> = tags
            .iter()
            .map(|tag| {
                let active = matches!(filter, EntryFilter::ShowTag(t) if t == tag);
                self.tag_bar_item(tag, active)
            })
            .chain(std::iter::once(
                self.tag_bar_item("all", *filter == EntryFilter::ShowAll),
            ))
            .collect();
        format!("Tags: {}", items.join(" "))
    }

    fn tag_bar_item(&self, label: &str, active: bool) -> String {
        match (self.opts.use_color, active) {
            (true, true) => label.with(OneDark::GREEN).bold().to_string(),
            (true, false) => label.with(OneDark::COMMENT).to_string(),
            (false, true) => format!("[{label}]"),
            (false, false) => label.to_string(),
        }
    }

    /// `01:30:00  Worked on #foo and #Bar  [#foo, #bar]`
    fn format_entry_line(&self, entry: &Entry) -> String {
        let mut duration = format_duration(entry.duration());
        let mut note = entry.note().trim().to_string();
        let mut tags = String::new();
        if !entry.tags().is_empty() {
            tags = format!("[{}]", entry.tags().join(", "));
        }
        if self.opts.use_color {
            duration = duration.with(OneDark::BLUE).bold().to_string();
            note = highlight_tags(&note);
            tags = tags.with(OneDark::COMMENT).to_string();
        }
        [duration, note, tags]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("  ")
    }

    pub fn print_tags(&self, tags: &[String]) {
        for tag in tags {
            if self.opts.use_color {
                println!("{}", tag.as_str().with(OneDark::GREEN));
            } else {
                println!("{tag}");
            }
        }
    }

    pub fn print_errors(&self, errors: &[QueryError]) {
        for line in format_errors(errors) {
            self.print_md(&line);
        }
    }
}

/// Markdown lines listing reader problems under an `Errors` heading.
fn format_errors(errors: &[QueryError]) -> Vec<String> {
    if errors.is_empty() {
        return Vec::new();
    }
    let items = errors.iter().map(|error| match error {
        QueryError::FileError { path, error } => {
            format!("* Could not process '{}': {}", path.display(), error)
        }
        QueryError::InvalidEntry { path, index, error } => {
            format!("* Skipped entry {index} of '{}': {}", path.display(), error)
        }
    });
    std::iter::once("\n# Errors:".to_string()).chain(items).collect()
}

fn highlight_tags(note: &str) -> String {
    match TAG_PATTERN.as_ref() {
        Some(re) => re
            .replace_all(note, |caps: &Captures| {
                let tag = &caps[2];
                format!("{}{}", &caps[1], tag.with(OneDark::GREEN))
            })
            .into_owned(),
        None => note.to_string(),
    }
}
