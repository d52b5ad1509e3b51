//! Type-declaration requirement sync
//!
//! Rewrites the requirement of every `@types/*` entry in a manifest so it
//! stays aligned with the requirement of the package it provides types
//! for, and records a log of what was touched. Entries whose parent cannot
//! be found, and ranges the loosening step has no opinion about, are left
//! alone.

use crate::domain::{loosen, parent_package, SyncEvent};
use crate::error::{AppError, ManifestError};
use crate::manifest::{PackageManifest, MANIFEST_FILE};
use crate::report::{
    details_block, write_report, NO_DEV_DEPENDENCIES_PLACEHOLDER, NO_SYNC_PLACEHOLDER,
    SYNC_REPORT_FILE, SYNC_TITLE,
};
use std::path::PathBuf;

/// Sections whose type-declaration entries are reconciled, in processing
/// order
const SYNC_SECTIONS: [&str; 2] = ["devDependencies", "dependencies"];

/// Configuration for a sync run
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Directory containing the package manifest
    pub project_root: PathBuf,
    /// Directory the report is written into
    pub output_dir: PathBuf,
}

/// Result of a sync run
#[derive(Debug)]
pub struct SyncOutcome {
    /// Per-entry decisions in processing order
    pub events: Vec<SyncEvent>,
    /// Whether the manifest was rewritten
    pub manifest_written: bool,
}

/// Aligns type-declaration requirements with their parent packages.
///
/// Processes devDependencies first, then dependencies, each in document
/// order. Parent requirements are looked up across dependencies,
/// devDependencies, and engines.
pub fn reconcile(manifest: &mut PackageManifest) -> Result<Vec<SyncEvent>, ManifestError> {
    let mut events = Vec::new();

    for section in SYNC_SECTIONS {
        for name in manifest.requirement_names(section) {
            let Some(parent) = parent_package(&name) else {
                continue;
            };

            let current = match manifest.requirement(section, &name)? {
                Some(requirement) => requirement.to_string(),
                None => continue,
            };

            let parent_requirement = manifest.parent_requirement(&parent)?.map(str::to_string);
            let Some(parent_requirement) = parent_requirement else {
                events.push(SyncEvent::ignored(&name));
                continue;
            };

            if let Some(derived) = loosen(&parent_requirement) {
                if derived != current {
                    manifest.set_requirement(section, &name, &derived);
                    events.push(SyncEvent::changed(&name, current, derived));
                }
            }
        }
    }

    Ok(events)
}

/// Runs the sync: read the manifest, reconcile, rewrite it, emit the
/// report.
///
/// A manifest without devDependencies is left untouched; only the
/// placeholder report is written.
pub fn run(config: &SyncConfig) -> Result<SyncOutcome, AppError> {
    let manifest_path = config.project_root.join(MANIFEST_FILE);
    let report_path = config.output_dir.join(SYNC_REPORT_FILE);

    let mut manifest = PackageManifest::load(&manifest_path)?;

    if !manifest.has_dev_dependencies() {
        let report = details_block(SYNC_TITLE, &[], NO_DEV_DEPENDENCIES_PLACEHOLDER);
        write_report(&report_path, &report)?;
        return Ok(SyncOutcome {
            events: Vec::new(),
            manifest_written: false,
        });
    }

    let events = reconcile(&mut manifest)?;
    manifest.save()?;

    let lines: Vec<String> = events.iter().map(SyncEvent::render).collect();
    let report = details_block(SYNC_TITLE, &lines, NO_SYNC_PLACEHOLDER);
    write_report(&report_path, &report)?;

    Ok(SyncOutcome {
        events,
        manifest_written: true,
    })
}
