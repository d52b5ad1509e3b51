//! Lockfile delta classification and the changes report
//!
//! Compares two dependency tree snapshots and reports installed, removed,
//! and bumped packages. Bumped entries get a commit history hyperlink when
//! the package's own manifest declares a repository on a known forge.

use crate::domain::{ChangeEntry, ChangeLog};
use crate::error::{AppError, ManifestError};
use crate::lockfile::{display_name, PackageLock, LOCKFILE_FILE, PREVIOUS_LOCKFILE_FILE};
use crate::manifest::MANIFEST_FILE;
use crate::report::{
    details_block, write_report, CHANGES_REPORT_FILE, CHANGES_TITLE, NO_CHANGES_PLACEHOLDER,
};
use crate::repository::{history_link, RepositoryField};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// The fields read from an installed package's own manifest
#[derive(Debug, Clone, Deserialize)]
pub struct InstalledManifest {
    /// Declared source repository, when any
    pub repository: Option<RepositoryField>,
}

/// Access to installed packages' manifests
pub trait ManifestSource {
    /// Reads the manifest of the package installed at the given path key
    fn manifest(&self, install_path: &str) -> Result<InstalledManifest, ManifestError>;
}

/// Reads installed manifests from the project tree on disk
pub struct FsManifestSource {
    root: PathBuf,
}

impl FsManifestSource {
    /// Creates a source rooted at the project directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ManifestSource for FsManifestSource {
    fn manifest(&self, install_path: &str) -> Result<InstalledManifest, ManifestError> {
        let path = self.root.join(install_path).join(MANIFEST_FILE);
        let content =
            fs::read_to_string(&path).map_err(|e| ManifestError::read_error(&path, e))?;
        serde_json::from_str(&content)
            .map_err(|e| ManifestError::json_parse_error(&path, e.to_string()))
    }
}

/// Configuration for a changes run
#[derive(Debug, Clone)]
pub struct ChangesConfig {
    /// Directory containing both lockfile snapshots and the installed tree
    pub project_root: PathBuf,
    /// Directory the report is written into
    pub output_dir: PathBuf,
}

/// Classifies the differences between two dependency tree snapshots.
///
/// Added and bumped entries are recorded in new-snapshot order, removed
/// entries in old-snapshot order afterwards. Only bumped entries consult
/// the manifest source.
pub fn classify(
    old: &PackageLock,
    new: &PackageLock,
    manifests: &dyn ManifestSource,
) -> Result<ChangeLog, AppError> {
    let mut log = ChangeLog::new();

    for (key, entry) in new.entries() {
        let name = display_name(key, entry);
        let new_version = entry.version.clone().unwrap_or_default();

        let Some(old_entry) = old.get(key) else {
            log.push(ChangeEntry::added(name, new_version));
            continue;
        };

        if old_entry.version == entry.version {
            continue;
        }
        let old_version = old_entry.version.clone().unwrap_or_default();

        let manifest = manifests.manifest(key)?;
        let commits_link = match manifest.repository {
            Some(field) => history_link(&field)?,
            None => None,
        };

        log.push(ChangeEntry::bumped(
            name,
            old_version,
            new_version,
            commits_link,
        ));
    }

    for (key, entry) in old.entries() {
        if new.contains(key) {
            continue;
        }
        let name = display_name(key, entry);
        let version = entry.version.clone().unwrap_or_default();
        log.push(ChangeEntry::removed(name, version));
    }

    Ok(log)
}

/// Runs the report: load both snapshots, classify, emit `changes.md`.
pub fn run(config: &ChangesConfig) -> Result<ChangeLog, AppError> {
    let old = PackageLock::load(&config.project_root.join(PREVIOUS_LOCKFILE_FILE))?;
    let new = PackageLock::load(&config.project_root.join(LOCKFILE_FILE))?;
    let manifests = FsManifestSource::new(&config.project_root);

    let log = classify(&old, &new, &manifests)?;

    let report = details_block(CHANGES_TITLE, log.lines(), NO_CHANGES_PLACEHOLDER);
    write_report(&config.output_dir.join(CHANGES_REPORT_FILE), &report)?;

    Ok(log)
}
