use std::path::{Path, PathBuf};

use chrono::Local;
use uuid::Uuid;

use crate::document;
use crate::error::{ChangelogError, Result};
use crate::fs::FileSystem;
use crate::io::OutputSink;
use crate::store::EntryStore;

/// Inputs for one publish run.
#[derive(Debug, Clone)]
pub struct PublishOptions {
    pub version: String,
    /// Opaque date string; defaults to today as `MM-DD-YYYY` when `None`.
    pub release_date: Option<String>,
    pub dry_run: bool,
    pub changelog_path: PathBuf,
    /// Optional header file whose contents are placed above the anchor.
    /// Missing or unreadable files are skipped silently.
    pub header_path: Option<PathBuf>,
    pub unreleased_dir: PathBuf,
}

/// What a publish run did, or for a dry run, would have done.
#[derive(Debug)]
pub struct PublishSummary {
    pub section: String,
    pub entry_count: usize,
    pub deleted: usize,
    pub failed_deletions: Vec<PathBuf>,
    pub dry_run: bool,
}

/// Merges all pending entries into the changelog under a new version
/// heading, then deletes the consumed entry files.
pub struct PublishEngine<'a> {
    fs: &'a dyn FileSystem,
    out: &'a dyn OutputSink,
}

impl<'a> PublishEngine<'a> {
    pub fn new(fs: &'a dyn FileSystem, out: &'a dyn OutputSink) -> Self {
        Self { fs, out }
    }

    /// The changelog file is left byte-for-byte untouched unless every
    /// step up to and including the final rename succeeds.
    pub fn publish(&self, options: &PublishOptions) -> Result<PublishSummary> {
        let store = EntryStore::new(self.fs, options.unreleased_dir.clone());
        let loaded = store.load_all()?;
        if loaded.is_empty() {
            return Err(ChangelogError::NoEntriesFound);
        }

        let (paths, entries): (Vec<PathBuf>, Vec<_>) = loaded.into_iter().unzip();
        let grouped = document::group_entries(entries);

        let content = self
            .fs
            .read_to_string(&options.changelog_path)
            .map_err(|_| ChangelogError::ChangelogNotFound(options.changelog_path.clone()))?;
        let preserved_body = document::split_at_anchor(&content)?;

        let release_date = options
            .release_date
            .clone()
            .unwrap_or_else(default_release_date);
        let section =
            document::render_release_section(&options.version, &release_date, &grouped);

        self.out.line(&format!("\n{section}"));

        if options.dry_run {
            self.out.warning(&format!(
                "\n(Dry run) would have deleted {} unreleased changelog entries.",
                paths.len()
            ));
            return Ok(PublishSummary {
                section,
                entry_count: paths.len(),
                deleted: 0,
                failed_deletions: Vec::new(),
                dry_run: true,
            });
        }

        let header = self.read_header(options.header_path.as_deref());
        let new_content = document::compose(header.as_deref(), &section, &preserved_body);
        self.write_changelog(&options.changelog_path, &new_content)?;

        let failures = store.delete_all(&paths);
        for (path, err) in &failures {
            self.out.warning(&format!(
                "Couldn't delete the published entry at {}: {err}",
                path.display()
            ));
        }

        self.out.success(&format!(
            "\nNice! {} was updated. Congrats on the release! 🥳🍻",
            options.changelog_path.display()
        ));

        Ok(PublishSummary {
            section,
            entry_count: paths.len(),
            deleted: paths.len() - failures.len(),
            failed_deletions: failures.into_iter().map(|(path, _)| path).collect(),
            dry_run: false,
        })
    }

    fn read_header(&self, header_path: Option<&Path>) -> Option<String> {
        self.fs.read_to_string(header_path?).ok()
    }

    /// Writes the new content to a uniquely named sibling file, then
    /// renames it over the changelog.
    fn write_changelog(&self, path: &Path, contents: &str) -> Result<()> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("CHANGELOG.md");
        let tmp = path.with_file_name(format!(".{file_name}.{}.tmp", Uuid::new_v4()));

        self.fs.write(&tmp, contents).map_err(|err| {
            ChangelogError::Io(err).with_context("Failed to stage the updated changelog")
        })?;
        if let Err(err) = self.fs.rename(&tmp, path) {
            let _ = self.fs.remove_file(&tmp);
            return Err(ChangelogError::Io(err)
                .with_context("Failed to move the staged changelog into place"));
        }

        Ok(())
    }
}

/// Today's date formatted `MM-DD-YYYY`.
pub fn default_release_date() -> String {
    Local::now().format("%m-%d-%Y").to_string()
}
