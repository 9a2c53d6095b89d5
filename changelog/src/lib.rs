//! Records discrete changelog entries as single files and merges them
//! into the project changelog at release time, so many contributors can
//! document changes without fighting over one shared file.

pub mod config;
pub mod document;
pub mod entry;
pub mod error;
pub mod fs;
pub mod io;
pub mod log;
pub mod publish;
pub mod store;

pub use config::ChangelogConfig;
pub use document::{GroupedEntries, RELEASE_ANCHOR, group_entries};
pub use entry::{Entry, EntryType};
pub use error::{ChangelogError, Result};
pub use fs::{FileSystem, OsFileSystem};
pub use io::{Confirmer, EditorLauncher, OutputSink};
pub use log::{LogEngine, LogOptions};
pub use publish::{PublishEngine, PublishOptions, PublishSummary};
pub use store::EntryStore;
