use std::io;
use std::path::Path;
use std::process::Command;

use changelog::{ChangelogError, Confirmer, EditorLauncher, Result};
use dialoguer::Confirm;

/// Terminal yes/no prompt backed by dialoguer.
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|err| ChangelogError::Io(io::Error::other(err)))
    }
}

/// Runs the user's editor through `sh -c`, blocking until it exits.
pub struct ShellEditorLauncher;

impl EditorLauncher for ShellEditorLauncher {
    fn open(&self, editor: &str, path: &Path) -> Result<()> {
        let status = Command::new("sh")
            .arg("-c")
            .arg(format!("{editor} {}", path.display()))
            .status()
            .map_err(ChangelogError::Io)?;

        if !status.success() {
            return Err(ChangelogError::Io(io::Error::other(format!(
                "editor '{editor}' exited with {status}"
            ))));
        }

        Ok(())
    }
}
