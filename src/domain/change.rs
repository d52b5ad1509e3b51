//! Dependency change entries and the deduplicated change log

use std::collections::HashSet;
use std::fmt;

/// Base URL of the hosted package registry used for version links
const REGISTRY_URL: &str = "https://npmjs.com/package";

/// A single observed difference between two dependency tree snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEntry {
    /// Package appeared in the new snapshot
    Added {
        /// Display name of the package
        name: String,
        /// Version it was installed at
        version: String,
    },
    /// Package disappeared from the old snapshot
    Removed {
        /// Display name of the package
        name: String,
        /// Version it was last installed at
        version: String,
    },
    /// Package is present in both snapshots with different versions
    Bumped {
        /// Display name of the package
        name: String,
        /// Version in the old snapshot
        old_version: String,
        /// Version in the new snapshot
        new_version: String,
        /// Commit history link for the package's repository, when resolvable
        commits_link: Option<String>,
    },
}

impl ChangeEntry {
    /// Creates an Added entry
    pub fn added(name: impl Into<String>, version: impl Into<String>) -> Self {
        ChangeEntry::Added {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Creates a Removed entry
    pub fn removed(name: impl Into<String>, version: impl Into<String>) -> Self {
        ChangeEntry::Removed {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Creates a Bumped entry
    pub fn bumped(
        name: impl Into<String>,
        old_version: impl Into<String>,
        new_version: impl Into<String>,
        commits_link: Option<String>,
    ) -> Self {
        ChangeEntry::Bumped {
            name: name.into(),
            old_version: old_version.into(),
            new_version: new_version.into(),
            commits_link,
        }
    }

    /// Registry link for a package at a specific version
    fn registry_link(name: &str, version: &str) -> String {
        format!("{}/{}/v/{}", REGISTRY_URL, name, version)
    }

    /// Renders the entry as a Markdown list item
    pub fn render(&self) -> String {
        match self {
            ChangeEntry::Added { name, version } => {
                format!(
                    "- Installed [`{}@{}`]({})",
                    name,
                    version,
                    Self::registry_link(name, version)
                )
            }
            ChangeEntry::Removed { name, version } => {
                format!(
                    "- Removed [`{}@{}`]({})",
                    name,
                    version,
                    Self::registry_link(name, version)
                )
            }
            ChangeEntry::Bumped {
                name,
                old_version,
                new_version,
                commits_link,
            } => {
                let suffix = match commits_link {
                    Some(link) => format!(" ([see recent commits]({}))", link),
                    None => String::new(),
                };
                format!(
                    "- Bumped [`{}@{}`]({}) to [`{}`]({}){}",
                    name,
                    old_version,
                    Self::registry_link(name, old_version),
                    new_version,
                    Self::registry_link(name, new_version),
                    suffix
                )
            }
        }
    }
}

impl fmt::Display for ChangeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// An ordered collection of rendered change lines with set semantics.
///
/// Two entries that render to the same text collapse into one line; the
/// first occurrence decides the position.
#[derive(Debug, Default)]
pub struct ChangeLog {
    lines: Vec<String>,
    seen: HashSet<String>,
}

impl ChangeLog {
    /// Creates an empty change log
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, ignoring it if an identical line is already present
    pub fn push(&mut self, entry: ChangeEntry) {
        let line = entry.render();
        if self.seen.insert(line.clone()) {
            self.lines.push(line);
        }
    }

    /// Returns the recorded lines in insertion order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the number of distinct recorded lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true when nothing changed
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
