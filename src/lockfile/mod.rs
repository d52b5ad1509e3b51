//! Lockfile dependency tree snapshots
//!
//! This module provides:
//! - Parsing of the `{"packages": {...}}` lockfile shape
//! - Document-order iteration over installed entries
//! - Display name derivation from installation path keys

use crate::error::LockfileError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// File name of the current lockfile snapshot
pub const LOCKFILE_FILE: &str = "package-lock.json";

/// File name of the previous lockfile snapshot
pub const PREVIOUS_LOCKFILE_FILE: &str = "package-lock.old.json";

/// Path segment marking a nested installation
const INSTALL_MARKER: &str = "node_modules/";

/// One installed package record inside a lockfile snapshot
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LockEntry {
    /// Declared package name; usually only present on the root entry
    pub name: Option<String>,
    /// Installed version
    pub version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPackageLock {
    #[serde(default)]
    packages: Map<String, Value>,
}

/// A dependency tree snapshot keyed by installation path
#[derive(Debug, Default)]
pub struct PackageLock {
    entries: Vec<(String, LockEntry)>,
    index: HashMap<String, usize>,
}

impl PackageLock {
    /// Reads and parses a lockfile snapshot
    pub fn load(path: &Path) -> Result<Self, LockfileError> {
        let content =
            fs::read_to_string(path).map_err(|e| LockfileError::read_error(path, e))?;
        Self::parse(path, &content)
    }

    /// Parses lockfile content; the path is used for error reporting
    pub fn parse(path: &Path, content: &str) -> Result<Self, LockfileError> {
        let raw: RawPackageLock = serde_json::from_str(content)
            .map_err(|e| LockfileError::parse_error(path, e.to_string()))?;

        let mut entries = Vec::with_capacity(raw.packages.len());
        let mut index = HashMap::with_capacity(raw.packages.len());

        for (key, value) in raw.packages {
            let entry: LockEntry = serde_json::from_value(value)
                .map_err(|e| LockfileError::parse_error(path, format!("entry '{}': {}", key, e)))?;
            index.insert(key.clone(), entries.len());
            entries.push((key, entry));
        }

        Ok(Self { entries, index })
    }

    /// Looks up an entry by installation path
    pub fn get(&self, key: &str) -> Option<&LockEntry> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Returns true if the snapshot contains the installation path
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterates entries in document order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &LockEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Number of entries in the snapshot
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the snapshot has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derives the display name for an installation path.
///
/// The segment after the last `node_modules/` marker wins; an empty
/// segment (root entry, or a key ending in the marker) falls back to the
/// record's own `name`, then to the key itself. Keys without the marker
/// (workspace paths) display as themselves.
pub fn display_name<'a>(key: &'a str, entry: &'a LockEntry) -> &'a str {
    let tail = key.rsplit(INSTALL_MARKER).next().unwrap_or(key);
    if tail.is_empty() {
        entry.name.as_deref().unwrap_or(key)
    } else {
        tail
    }
}
