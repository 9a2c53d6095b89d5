use std::path::PathBuf;

use changelog::{LogEngine, LogOptions, OsFileSystem, Result};

use crate::cli::LogArgs;
use crate::interactive::{ShellEditorLauncher, TerminalConfirmer};
use crate::ui::ConsoleSink;

pub fn execute(args: LogArgs, directory: PathBuf) -> Result<()> {
    let fs = OsFileSystem;
    let sink = ConsoleSink;
    let confirmer = TerminalConfirmer;
    let editor = ShellEditorLauncher;

    LogEngine::new(&fs, &sink, &confirmer, &editor).create_entry(&LogOptions {
        entry_type: args.entry_type,
        text: args.text,
        editor: args.editor,
        unreleased_dir: directory,
    })?;

    Ok(())
}
