//! Markdown report assembly and output
//!
//! Reports are collapsible `<details>` fragments meant to be pasted into
//! release notes or pull request bodies. An empty change set renders an
//! explicit placeholder sentence instead of an empty block.

use crate::error::ReportError;
use std::fs;
use std::path::Path;

/// File name of the dependency changes report
pub const CHANGES_REPORT_FILE: &str = "changes.md";

/// File name of the requirement sync report
pub const SYNC_REPORT_FILE: &str = "sync.md";

/// Summary line of the dependency changes report
pub const CHANGES_TITLE: &str = "Changed dependencies";

/// Summary line of the requirement sync report
pub const SYNC_TITLE: &str = "Requirement changes";

/// Placeholder when no dependency changed between the snapshots
pub const NO_CHANGES_PLACEHOLDER: &str = "*No dependencies bumped.*";

/// Placeholder when no requirement was rewritten
pub const NO_SYNC_PLACEHOLDER: &str = "*No requirements changed.*";

/// Placeholder when the manifest has no devDependencies section
pub const NO_DEV_DEPENDENCIES_PLACEHOLDER: &str = "*No dev dependencies found.*";

/// Wraps report lines in a collapsible details block.
///
/// Falls back to the placeholder sentence when there are no lines.
pub fn details_block(title: &str, lines: &[String], placeholder: &str) -> String {
    let body = if lines.is_empty() {
        placeholder.to_string()
    } else {
        lines.join("\n")
    };
    format!(
        "<details><summary>{}</summary>\n\n{}\n</details>",
        title, body
    )
}

/// Writes a rendered report to disk
pub fn write_report(path: &Path, content: &str) -> Result<(), ReportError> {
    fs::write(path, content).map_err(|e| ReportError::write_error(path, e))
}
