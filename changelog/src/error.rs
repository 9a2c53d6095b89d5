use std::path::PathBuf;

use thiserror::Error;

use crate::document::RELEASE_ANCHOR;
use crate::entry::EntryType;

/// Errors that can occur when recording or publishing changelog entries
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Changelog entry directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Malformed changelog entry at: {0}")]
    MalformedEntry(PathBuf),

    #[error("No unreleased changelog entries were found")]
    NoEntriesFound,

    #[error("Couldn't find the changelog: {0}")]
    ChangelogNotFound(PathBuf),

    #[error("The changelog is missing its release anchor")]
    ReleaseAnchorNotFound,

    #[error("Found {0} release anchors in the changelog, expected exactly one")]
    DuplicateReleaseAnchor(usize),

    #[error("The changelog entry was empty")]
    NoTextEntered,

    #[error("Unknown entry type: {0}")]
    UnknownEntryType(String),

    #[error("An entry file already exists at: {0}")]
    EntryFileExists(PathBuf),

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::DirectoryNotFound(path) => format!(
                "The changelog entry directory doesn't exist: {}",
                path.display()
            ),
            Self::MalformedEntry(path) => format!(
                "Malformed changelog entry at {}: the first line must be a '### <Title>' heading",
                path.display()
            ),
            Self::NoEntriesFound => "No unreleased changelog entries were found.".to_string(),
            Self::ChangelogNotFound(path) => {
                format!("Couldn't find the changelog at {}", path.display())
            }
            Self::ReleaseAnchorNotFound => format!(
                "The changelog has no '{RELEASE_ANCHOR}' anchor. \
                 Add the anchor on its own line above the release history."
            ),
            Self::DuplicateReleaseAnchor(count) => format!(
                "Found {count} '{RELEASE_ANCHOR}' anchors in the changelog, expected exactly one"
            ),
            Self::NoTextEntered => "The changelog entry was empty.".to_string(),
            Self::UnknownEntryType(given) => format!(
                "'{given}' is not a changelog entry type. Valid types are {}.",
                EntryType::sentence_list()
            ),
            Self::EntryFileExists(path) => format!(
                "Refusing to overwrite the existing entry file at {}",
                path.display()
            ),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_context_prefixes_the_user_message() {
        let err = ChangelogError::ReleaseAnchorNotFound.with_context("Publishing 2.0");

        let message = err.user_message();
        assert!(message.starts_with("Publishing 2.0: "));
        assert!(message.contains(RELEASE_ANCHOR));
    }

    #[test]
    fn io_errors_convert_through_from() {
        let err: ChangelogError = std::io::Error::other("disk on fire").into();
        assert!(err.user_message().contains("disk on fire"));
    }
}
