use std::path::{Path, PathBuf};

use crate::entry::{Entry, EntryType};
use crate::error::{ChangelogError, Result};
use crate::fs::FileSystem;
use crate::io::{Confirmer, EditorLauncher, OutputSink};
use crate::store::EntryStore;

/// Hint placed at the top of the editor buffer; comment lines are
/// stripped from the entry before it is saved.
const EDITOR_HINT: &str = "<!-- Enter your changelog message below this line exactly how you want it to appear in the changelog. Lines surrounded in markdown (HTML) comments will be ignored.-->";

/// Inputs for creating one pending entry.
#[derive(Debug, Clone)]
pub struct LogOptions {
    pub entry_type: EntryType,
    /// Lines recorded as `- {line}` bullets. When empty, the editor is
    /// opened instead.
    pub text: Vec<String>,
    pub editor: String,
    pub unreleased_dir: PathBuf,
}

/// Records a new pending changelog entry file.
pub struct LogEngine<'a> {
    fs: &'a dyn FileSystem,
    out: &'a dyn OutputSink,
    confirmer: &'a dyn Confirmer,
    editor: &'a dyn EditorLauncher,
}

impl<'a> LogEngine<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        out: &'a dyn OutputSink,
        confirmer: &'a dyn Confirmer,
        editor: &'a dyn EditorLauncher,
    ) -> Self {
        Self {
            fs,
            out,
            confirmer,
            editor,
        }
    }

    pub fn create_entry(&self, options: &LogOptions) -> Result<PathBuf> {
        self.ensure_directory(&options.unreleased_dir)?;
        let store = EntryStore::new(self.fs, options.unreleased_dir.clone());

        let text = if options.text.is_empty() {
            self.compose_in_editor(&store, &options.editor)?
        } else {
            options
                .text
                .iter()
                .map(|line| format!("- {line}"))
                .collect::<Vec<_>>()
                .join("\n")
        };

        let entry = Entry::new(options.entry_type, text);
        let path = store.write(&entry)?;

        self.out.line(&format!(
            "\n### {}\n{}",
            entry.entry_type.title(),
            entry.text
        ));
        self.out
            .success(&format!("🙌 Created changelog entry at {}", path.display()));

        Ok(path)
    }

    fn ensure_directory(&self, dir: &Path) -> Result<()> {
        if self.fs.exists(dir) {
            return Ok(());
        }

        let prompt = format!("{} doesn't exist yet. Create it?", dir.display());
        if !self.confirmer.confirm(&prompt)? {
            return Err(ChangelogError::DirectoryNotFound(dir.to_path_buf()));
        }

        Ok(self.fs.create_dir_all(dir)?)
    }

    /// Opens the editor on a pre-seeded buffer file and returns the
    /// uncommented text the user wrote. The buffer is removed on every
    /// path, including errors.
    fn compose_in_editor(&self, store: &EntryStore<'_>, editor: &str) -> Result<String> {
        let buffer_path = store.unique_entry_path();
        self.fs.write(&buffer_path, EDITOR_HINT)?;

        let contents = self
            .editor
            .open(editor, &buffer_path)
            .and_then(|()| self.fs.read_to_string(&buffer_path).map_err(Into::into));
        let removal = self.fs.remove_file(&buffer_path);
        let contents = contents?;
        removal?;

        let text = strip_comment_lines(&contents);
        if text.is_empty() {
            return Err(ChangelogError::NoTextEntered);
        }

        Ok(text)
    }
}

/// Drops HTML-comment lines and trims surrounding whitespace.
fn strip_comment_lines(contents: &str) -> String {
    contents
        .lines()
        .filter(|line| !line.starts_with("<!--") && !line.ends_with("-->"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
