use std::collections::BTreeMap;

use crate::entry::{Entry, EntryType};
use crate::error::{ChangelogError, Result};

/// A Markdown comment marking the boundary between the changelog's
/// static header and the machine-managed release history. Re-emitted
/// verbatim on every publish so the file stays mergeable.
pub const RELEASE_ANCHOR: &str = "<!--Latest Release-->";

/// Pending entries grouped by category. `BTreeMap` iteration yields the
/// canonical category order; entries within a group keep discovery order.
pub type GroupedEntries = BTreeMap<EntryType, Vec<Entry>>;

pub fn group_entries(entries: impl IntoIterator<Item = Entry>) -> GroupedEntries {
    let mut grouped = GroupedEntries::new();
    for entry in entries {
        grouped.entry(entry.entry_type).or_default().push(entry);
    }
    grouped
}

/// Splits changelog `content` at the release anchor and returns the
/// release history that follows it, minus the single newline that
/// separated it from the anchor. Exactly one anchor must be present.
pub fn split_at_anchor(content: &str) -> Result<String> {
    match content.matches(RELEASE_ANCHOR).count() {
        0 => return Err(ChangelogError::ReleaseAnchorNotFound),
        1 => {}
        count => return Err(ChangelogError::DuplicateReleaseAnchor(count)),
    }

    let body = content
        .split_once(RELEASE_ANCHOR)
        .map(|(_, after)| after)
        .ok_or(ChangelogError::ReleaseAnchorNotFound)?;

    Ok(body.strip_prefix('\n').unwrap_or(body).to_string())
}

/// Renders `## [version] - date` followed by one `### <Title>` block per
/// non-empty category. Entry texts are trimmed of trailing newlines and
/// joined with single newlines, so output is stable across runs.
pub fn render_release_section(
    version: &str,
    release_date: &str,
    grouped: &GroupedEntries,
) -> String {
    let mut section = format!("## [{version}] - {release_date}");

    for (entry_type, entries) in grouped {
        section.push_str("\n\n### ");
        section.push_str(entry_type.title());

        for entry in entries {
            section.push('\n');
            section.push_str(entry.text.trim_end_matches('\n'));
        }
    }

    section
}

/// Reassembles the full changelog: optional header text, the anchor
/// line, the new release section, then the preserved release history.
pub fn compose(header: Option<&str>, section: &str, preserved_body: &str) -> String {
    let mut content = String::with_capacity(
        header.map_or(0, str::len) + RELEASE_ANCHOR.len() + section.len() + preserved_body.len() + 3,
    );

    if let Some(header) = header {
        content.push_str(header);
    }
    content.push_str(RELEASE_ANCHOR);
    content.push('\n');
    content.push_str(section);
    content.push_str("\n\n");
    content.push_str(preserved_body);

    content
}
