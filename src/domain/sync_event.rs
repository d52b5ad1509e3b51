//! Log entries produced while syncing type-declaration requirements

use std::fmt;

/// Outcome of inspecting a single type-declaration entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// Requirement was rewritten to follow the parent package
    Changed {
        /// The type-declaration package name
        package: String,
        /// Requirement before the sync
        old: String,
        /// Requirement after the sync
        new: String,
    },
    /// No parent dependency was found, entry left as-is
    Ignored {
        /// The type-declaration package name
        package: String,
    },
}

impl SyncEvent {
    /// Creates a Changed event
    pub fn changed(
        package: impl Into<String>,
        old: impl Into<String>,
        new: impl Into<String>,
    ) -> Self {
        SyncEvent::Changed {
            package: package.into(),
            old: old.into(),
            new: new.into(),
        }
    }

    /// Creates an Ignored event
    pub fn ignored(package: impl Into<String>) -> Self {
        SyncEvent::Ignored {
            package: package.into(),
        }
    }

    /// Renders the event as a Markdown list item
    pub fn render(&self) -> String {
        match self {
            SyncEvent::Changed { package, old, new } => {
                format!(
                    "- **{}**: requirement changed from `{}` to `{}`",
                    package, old, new
                )
            }
            SyncEvent::Ignored { package } => {
                format!("- **{}**: ignored due to no parent dependency", package)
            }
        }
    }
}

impl fmt::Display for SyncEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
