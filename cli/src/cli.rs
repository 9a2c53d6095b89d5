use std::path::PathBuf;

use changelog::{ChangelogConfig, EntryType};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "changelog")]
#[command(
    author,
    version,
    about = "Curbing cumbersome changelog conflicts",
    long_about = "Creates changelog entries and stores them as single files to avoid merge \
                  conflicts in version control. When it's time to release, `changelog publish` \
                  collects these files and prepends them to your changelog file."
)]
#[command(args_conflicts_with_subcommands = true, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// A directory where unpublished changelog entries are written to and read from
    #[arg(
        short = 'd',
        long = "directory",
        global = true,
        value_name = "path",
        default_value = ChangelogConfig::DEFAULT_UNRELEASED_DIR
    )]
    pub directory: PathBuf,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new changelog entry (the default when no subcommand is given)
    Log(LogArgs),

    /// Collect the unreleased entries and prepend them to the changelog as a new release version
    Publish(PublishArgs),
}

#[derive(Debug, Args)]
pub struct LogArgs {
    /// The type of changelog entry to create (add, change, deprecate, fix, remove, or security)
    #[arg(value_parser = parse_entry_type)]
    pub entry_type: EntryType,

    /// A terminal-based text editor executable in your $PATH used to write your changelog
    /// entry with more precision than the default bulleted list of changes
    #[arg(short, long, default_value = "vim")]
    pub editor: String,

    /// Strings recorded as a bulleted changelog entry; when supplied, no editor is opened
    pub text: Vec<String>,
}

#[derive(Debug, Args)]
pub struct PublishArgs {
    /// The version number associated with the changelog entries to be published
    pub version: String,

    /// The date the version was published, format MM-DD-YYYY (defaults to today)
    pub release_date: Option<String>,

    /// Print the new release section without touching the changelog or deleting any entries
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// The changelog file to which the unreleased entries will be prepended
    #[arg(long, default_value = ChangelogConfig::DEFAULT_CHANGELOG_FILE)]
    pub changelog_filename: PathBuf,

    /// A Markdown file whose contents are prepended above the release anchor; if the file
    /// is missing or unreadable, no text is prepended
    #[arg(short = 'H', long = "header", value_name = "path")]
    pub header: Option<PathBuf>,
}

/// Catches `changelog help` being read as an entry type and steers the
/// user to the help flag instead.
fn parse_entry_type(raw: &str) -> Result<EntryType, String> {
    if raw == "help" {
        return Err("'help' is not an entry type. Did you mean --help?".to_string());
    }

    raw.parse::<EntryType>().map_err(|err| err.user_message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_bare_invocation_defaults_to_the_log_subcommand() {
        let cli = Cli::try_parse_from(["changelog", "add", "New feature"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.log.entry_type, EntryType::Add);
        assert_eq!(cli.log.text, ["New feature"]);
        assert_eq!(cli.directory, PathBuf::from("changelogs/unreleased"));
    }

    #[test]
    fn the_help_token_is_rejected_with_a_pointer_to_the_help_flag() {
        let err = Cli::try_parse_from(["changelog", "help"]).unwrap_err();
        assert!(err.to_string().contains("Did you mean --help?"));
    }

    #[test]
    fn an_unknown_entry_type_lists_the_valid_values() {
        let err = Cli::try_parse_from(["changelog", "log", "oops"]).unwrap_err();
        assert!(
            err.to_string()
                .contains("add, change, deprecate, fix, remove, and security")
        );
    }

    #[test]
    fn publish_arguments_parse() {
        let cli = Cli::try_parse_from([
            "changelog",
            "publish",
            "2.0",
            "02-02-2021",
            "--dry-run",
            "--changelog-filename",
            "HISTORY.md",
            "-H",
            "header.md",
            "-d",
            "pending",
        ])
        .unwrap();

        let Some(Commands::Publish(args)) = cli.command else {
            panic!("expected a publish command");
        };
        assert_eq!(args.version, "2.0");
        assert_eq!(args.release_date.as_deref(), Some("02-02-2021"));
        assert!(args.dry_run);
        assert_eq!(args.changelog_filename, PathBuf::from("HISTORY.md"));
        assert_eq!(args.header, Some(PathBuf::from("header.md")));
        assert_eq!(cli.directory, PathBuf::from("pending"));
    }

    #[test]
    fn the_editor_override_is_accepted() {
        let cli = Cli::try_parse_from(["changelog", "log", "fix", "--editor", "nano"]).unwrap();

        let Some(Commands::Log(args)) = cli.command else {
            panic!("expected a log command");
        };
        assert_eq!(args.editor, "nano");
        assert!(args.text.is_empty());
    }
}
