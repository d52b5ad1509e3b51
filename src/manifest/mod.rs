//! package.json reading, inspection, and rewriting
//!
//! This module provides:
//! - A typed view over the manifest JSON document
//! - Parent requirement lookup across dependency sections
//! - Requirement replacement preserving document key order
//! - Serialization with the source file's indentation style

use crate::error::ManifestError;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// File name of the package manifest
pub const MANIFEST_FILE: &str = "package.json";

/// Indentation used when none can be detected from the source
const DEFAULT_INDENT: &str = "  ";

/// Sections consulted when looking up a parent requirement, in precedence
/// order.
const PARENT_SECTIONS: [&str; 3] = ["dependencies", "devDependencies", "engines"];

// First run of spaces or tabs in the document decides the output indent.
static INDENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

/// A package manifest document with its source formatting metadata
#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
    doc: Value,
    indent: String,
}

impl PackageManifest {
    /// Reads and parses a manifest file
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content =
            fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;
        Self::parse(path, &content)
    }

    /// Parses manifest content; the path is kept for error reporting and
    /// writing back
    pub fn parse(path: &Path, content: &str) -> Result<Self, ManifestError> {
        let doc: Value = serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;

        if !doc.is_object() {
            return Err(ManifestError::invalid_shape(
                path,
                "top level is not an object",
            ));
        }

        Ok(Self {
            path: path.to_path_buf(),
            doc,
            indent: detect_indent(content),
        })
    }

    /// Path this manifest was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns a named object section of the manifest, if present
    pub fn section(&self, name: &str) -> Option<&Map<String, Value>> {
        self.doc.get(name).and_then(|v| v.as_object())
    }

    /// Returns true if the manifest declares a devDependencies section
    pub fn has_dev_dependencies(&self) -> bool {
        self.section("devDependencies").is_some()
    }

    /// Package names of a section in document order
    pub fn requirement_names(&self, section: &str) -> Vec<String> {
        self.section(section)
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Current requirement string for a package within a section.
    ///
    /// A present entry that is not a string is a shape error.
    pub fn requirement(&self, section: &str, name: &str) -> Result<Option<&str>, ManifestError> {
        match self.section(section).and_then(|map| map.get(name)) {
            None => Ok(None),
            Some(Value::String(requirement)) => Ok(Some(requirement)),
            Some(_) => Err(ManifestError::invalid_shape(
                &self.path,
                format!("{} entry '{}' is not a string", section, name),
            )),
        }
    }

    /// Looks up the authoritative requirement for a parent package,
    /// consulting dependencies, devDependencies, and engines in that order
    pub fn parent_requirement(&self, name: &str) -> Result<Option<&str>, ManifestError> {
        for section in PARENT_SECTIONS {
            if let Some(requirement) = self.requirement(section, name)? {
                return Ok(Some(requirement));
            }
        }
        Ok(None)
    }

    /// Replaces the requirement of an existing entry; entries that do not
    /// exist are left alone
    pub fn set_requirement(&mut self, section: &str, name: &str, requirement: &str) {
        if let Some(map) = self.doc.get_mut(section).and_then(|v| v.as_object_mut()) {
            if let Some(slot) = map.get_mut(name) {
                *slot = Value::String(requirement.to_string());
            }
        }
    }

    /// Serializes the document with the detected indentation and a trailing
    /// newline, keeping the original key order
    pub fn to_pretty_string(&self) -> Result<String, ManifestError> {
        let mut buf = Vec::new();
        {
            let formatter =
                serde_json::ser::PrettyFormatter::with_indent(self.indent.as_bytes());
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            self.doc
                .serialize(&mut ser)
                .map_err(|e| ManifestError::json_parse_error(&self.path, e.to_string()))?;
        }

        let mut out = String::from_utf8_lossy(&buf).into_owned();
        out.push('\n');
        Ok(out)
    }

    /// Writes the document back to the path it was loaded from
    pub fn save(&self) -> Result<(), ManifestError> {
        let content = self.to_pretty_string()?;
        fs::write(&self.path, content).map_err(|e| ManifestError::write_error(&self.path, e))
    }
}

/// Detects the indentation unit from the first space/tab run in the source
fn detect_indent(content: &str) -> String {
    INDENT_RE
        .find(content)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_INDENT.to_string())
}
