use std::path::PathBuf;

use changelog::{ChangelogConfig, OsFileSystem, PublishEngine, PublishOptions, Result};

use crate::cli::PublishArgs;
use crate::ui::ConsoleSink;

pub fn execute(args: PublishArgs, directory: PathBuf) -> Result<()> {
    let fs = OsFileSystem;
    let sink = ConsoleSink;
    let header_path = args
        .header
        .unwrap_or_else(|| ChangelogConfig::default().header_path);

    PublishEngine::new(&fs, &sink).publish(&PublishOptions {
        version: args.version,
        release_date: args.release_date,
        dry_run: args.dry_run,
        changelog_path: args.changelog_filename,
        header_path: Some(header_path),
        unreleased_dir: directory,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use changelog::EntryType;
    use tempfile::TempDir;

    use super::*;
    use crate::cli::LogArgs;

    // Full log-then-publish round trip through the production
    // collaborators. The editor and prompt are never reached: text is
    // supplied directly and the entry directory already exists.
    #[test]
    fn logged_entries_publish_end_to_end() {
        let temp = TempDir::new().unwrap();
        let unreleased_dir = temp.path().join("unreleased");
        fs::create_dir_all(&unreleased_dir).unwrap();

        let changelog_path = temp.path().join("CHANGELOG.md");
        fs::write(
            &changelog_path,
            "<!--Latest Release-->\n## [1.0] - 01-01-2020\nOld content\n",
        )
        .unwrap();

        crate::log::execute(
            LogArgs {
                entry_type: EntryType::Add,
                editor: "vim".to_string(),
                text: vec!["Added an additive ability to add additions".to_string()],
            },
            unreleased_dir.clone(),
        )
        .unwrap();
        assert_eq!(fs::read_dir(&unreleased_dir).unwrap().count(), 1);

        execute(
            PublishArgs {
                version: "2.0".to_string(),
                release_date: Some("02-02-2021".to_string()),
                dry_run: false,
                changelog_filename: changelog_path.clone(),
                header: None,
            },
            unreleased_dir.clone(),
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(&changelog_path).unwrap(),
            "<!--Latest Release-->\n\
             ## [2.0] - 02-02-2021\n\
             \n\
             ### Added\n\
             - Added an additive ability to add additions\n\
             \n\
             ## [1.0] - 01-01-2020\n\
             Old content\n"
        );
        assert_eq!(fs::read_dir(&unreleased_dir).unwrap().count(), 0);
    }
}
