//! Hashtag extraction from free-text notes.

use std::collections::HashSet;

use crate::entry::Entry;

/// Returns the hashtags of `note`: every whitespace separated word starting
/// with `#`, lower-cased.
///
/// Duplicates are kept and the order is the order of appearance. Words keep
/// any trailing punctuation, so `"#foo,"` stays `"#foo,"`.
///
/// ```
/// # use tlog_core::extract_tags;
/// assert_eq!(extract_tags("Worked on #foo and #Bar"), vec!["#foo", "#bar"]);
/// ```
pub fn extract_tags(note: &str) -> Vec<String> {
    note.split_whitespace()
        .filter(|word| word.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

/// Unique tags across `entries`, in order of first occurrence.
pub fn collect_tags<'a, I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for tag in entries.into_iter().flat_map(Entry::tags) {
        if seen.insert(tag.as_str()) {
            tags.push(tag.clone());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{dt, mk_entry};

    #[test]
    fn extracts_lowercased_hashtags_in_order() {
        assert_eq!(extract_tags("Worked on #foo and #Bar"), ["#foo", "#bar"]);
    }

    #[test]
    fn keeps_duplicates() {
        assert_eq!(
            extract_tags("#a then #B then #A again"),
            ["#a", "#b", "#a"]
        );
    }

    #[test]
    fn note_without_hashtags_has_no_tags() {
        assert!(extract_tags("Plain note, no tags here").is_empty());
        assert!(extract_tags("").is_empty());
        assert!(extract_tags("mid#word is not a tag").is_empty());
    }

    #[test]
    fn splits_on_any_whitespace() {
        assert_eq!(
            extract_tags("first\t#tab\nsecond   #spaces\r\n#crlf"),
            ["#tab", "#spaces", "#crlf"]
        );
    }

    #[test]
    fn keeps_trailing_punctuation() {
        assert_eq!(extract_tags("Meeting with #Ops, then #dev."), ["#ops,", "#dev."]);
    }

    #[test]
    fn extraction_is_idempotent_on_hashtag_only_notes() {
        let tags = extract_tags("Review #Foo #bar #FOO");
        let again = extract_tags(&tags.join(" "));
        assert_eq!(again, tags);
    }

    #[test]
    fn collect_tags_dedups_in_first_occurrence_order() {
        let entries = vec![
            mk_entry(1, dt(15, 9, 0), 30, "#b and #a"),
            mk_entry(2, dt(15, 10, 0), 30, "nothing"),
            mk_entry(3, dt(15, 11, 0), 30, "#c then #A and #b"),
        ];
        assert_eq!(collect_tags(&entries), ["#b", "#a", "#c"]);
    }

    #[test]
    fn collect_tags_of_empty_log_is_empty() {
        let entries: Vec<Entry> = Vec::new();
        assert!(collect_tags(&entries).is_empty());
    }
}
