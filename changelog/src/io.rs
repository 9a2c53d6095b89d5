use std::path::Path;

use crate::error::Result;

/// Destination for user-facing output. The binary renders these with
/// color; tests collect them.
pub trait OutputSink {
    fn line(&self, text: &str);
    fn success(&self, text: &str);
    fn warning(&self, text: &str);
}

/// Interactive yes/no prompt.
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Launches an external text editor against `path`, blocking until the
/// editor process exits.
pub trait EditorLauncher {
    fn open(&self, editor: &str, path: &Path) -> Result<()>;
}
