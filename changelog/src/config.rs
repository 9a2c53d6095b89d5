use std::path::PathBuf;

/// Default locations for changelog assets. Passed explicitly into the
/// engines rather than read from process-wide state so tests can run
/// against isolated directories.
#[derive(Debug, Clone)]
pub struct ChangelogConfig {
    pub unreleased_dir: PathBuf,
    pub changelog_path: PathBuf,
    pub header_path: PathBuf,
}

impl ChangelogConfig {
    pub const DEFAULT_UNRELEASED_DIR: &'static str = "changelogs/unreleased";
    pub const DEFAULT_CHANGELOG_FILE: &'static str = "CHANGELOG.md";
    pub const DEFAULT_HEADER_FILE: &'static str = "changelogs/header.md";
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            unreleased_dir: PathBuf::from(Self::DEFAULT_UNRELEASED_DIR),
            changelog_path: PathBuf::from(Self::DEFAULT_CHANGELOG_FILE),
            header_path: PathBuf::from(Self::DEFAULT_HEADER_FILE),
        }
    }
}
