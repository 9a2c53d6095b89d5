use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use crate::error::{ChangelogError, Result};

/// A type of changelog change as defined by Keep a Changelog.
///
/// https://keepachangelog.com/en/1.0.0/
///
/// Variants are declared in raw-identifier order, so the derived `Ord`
/// is the canonical category order used when composing a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryType {
    Add,
    Change,
    Deprecate,
    Fix,
    Remove,
    Security,
}

impl EntryType {
    pub const ALL: [Self; 6] = [
        Self::Add,
        Self::Change,
        Self::Deprecate,
        Self::Fix,
        Self::Remove,
        Self::Security,
    ];

    /// The raw identifier accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Change => "change",
            Self::Deprecate => "deprecate",
            Self::Fix => "fix",
            Self::Remove => "remove",
            Self::Security => "security",
        }
    }

    /// The Markdown heading title used in entry files and the changelog.
    pub fn title(self) -> &'static str {
        match self {
            Self::Add => "Added",
            Self::Change => "Changed",
            Self::Deprecate => "Deprecated",
            Self::Fix => "Fixed",
            Self::Remove => "Removed",
            Self::Security => "Security",
        }
    }

    /// Reverse lookup from a display title, used when parsing entry files.
    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.title() == title)
    }

    /// All raw identifiers joined as "a, b, and c" for help and error text.
    pub fn sentence_list() -> String {
        match Self::ALL.map(Self::as_str).as_slice() {
            [] => String::new(),
            [only] => (*only).to_string(),
            [head @ .., last] => format!("{}, and {last}", head.join(", ")),
        }
    }
}

impl Display for EntryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = ChangelogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ChangelogError::UnknownEntryType(s.to_string()))
    }
}

/// One pending, unreleased changelog record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub entry_type: EntryType,
    pub text: String,
}

impl Entry {
    /// Creates an entry, normalizing `text` to end with exactly one
    /// trailing newline.
    pub fn new(entry_type: EntryType, text: impl Into<String>) -> Self {
        let text = text.into();
        let text = format!("{}\n", text.trim_end_matches('\n'));
        Self { entry_type, text }
    }

    /// The on-disk form: a `### <Title>` heading line followed by the body.
    pub fn serialize(&self) -> String {
        format!("### {}\n{}", self.entry_type.title(), self.text)
    }

    /// Parses an entry file's contents. The last whitespace-delimited
    /// token of the first line must resolve to a known display title.
    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        let malformed = || ChangelogError::MalformedEntry(path.to_path_buf());

        let (heading, body) = match contents.split_once('\n') {
            Some((heading, body)) => (heading, body),
            None => (contents, ""),
        };

        let title = heading.split_whitespace().last().ok_or_else(malformed)?;
        let entry_type = EntryType::from_title(title).ok_or_else(malformed)?;

        Ok(Self::new(entry_type, body))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn entry_round_trips_through_its_serialized_form() {
        let entry = Entry::new(EntryType::Fix, "- Fix-it Felix vs.\n- Wreck-It Ralph");
        let parsed = Entry::parse(&entry.serialize(), &PathBuf::from("entry.md")).unwrap();

        assert_eq!(parsed, entry);
    }

    #[test]
    fn entry_text_is_normalized_to_a_single_trailing_newline() {
        let entry = Entry::new(EntryType::Add, "- Added a thing\n\n\n");
        assert_eq!(entry.text, "- Added a thing\n");

        let entry = Entry::new(EntryType::Add, "- Added a thing");
        assert_eq!(entry.text, "- Added a thing\n");
    }

    #[test]
    fn serialize_emits_the_title_heading() {
        let entry = Entry::new(EntryType::Deprecate, "- Old API");
        assert_eq!(entry.serialize(), "### Deprecated\n- Old API\n");
    }

    #[test]
    fn parse_rejects_an_unknown_heading() {
        let path = PathBuf::from("changelogs/unreleased/bad.md");
        let result = Entry::parse("### Regressed\n- Uh oh\n", &path);

        assert!(matches!(
            result,
            Err(ChangelogError::MalformedEntry(p)) if p == path
        ));
    }

    #[test]
    fn parse_rejects_an_empty_file() {
        let path = PathBuf::from("empty.md");
        assert!(matches!(
            Entry::parse("", &path),
            Err(ChangelogError::MalformedEntry(_))
        ));
        assert!(matches!(
            Entry::parse("\n", &path),
            Err(ChangelogError::MalformedEntry(_))
        ));
    }

    #[test]
    fn parse_accepts_a_heading_with_no_body_newline() {
        let entry = Entry::parse("### Added", &PathBuf::from("entry.md")).unwrap();
        assert_eq!(entry.entry_type, EntryType::Add);
    }

    #[test]
    fn entry_type_parses_raw_identifiers() {
        assert_eq!("security".parse::<EntryType>().unwrap(), EntryType::Security);

        let err = "nonsense".parse::<EntryType>().unwrap_err();
        assert!(err.user_message().contains("add, change, deprecate, fix, remove, and security"));
    }

    #[test]
    fn canonical_order_matches_raw_identifier_order() {
        let mut sorted = EntryType::ALL;
        sorted.sort();
        assert_eq!(sorted, EntryType::ALL);

        let raw = EntryType::ALL.map(EntryType::as_str);
        let mut raw_sorted = raw;
        raw_sorted.sort_unstable();
        assert_eq!(raw, raw_sorted);
    }

    #[test]
    fn every_title_maps_back_to_its_entry_type() {
        for entry_type in EntryType::ALL {
            assert_eq!(EntryType::from_title(entry_type.title()), Some(entry_type));
        }
        assert_eq!(EntryType::from_title("Broken"), None);
    }
}
