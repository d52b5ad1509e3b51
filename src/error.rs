//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with package.json reading, parsing, and writing
//! - LockfileError: Issues with lockfile snapshot parsing
//! - RepositoryError: Issues with repository URL resolution
//! - ReportError: Issues with report file output

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Lockfile snapshot related errors
    #[error(transparent)]
    Lockfile(#[from] LockfileError),

    /// Repository URL related errors
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Report output related errors
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write manifest file
    #[error("failed to write manifest file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// Document does not have the expected shape
    #[error("unexpected manifest shape in {path}: {message}")]
    InvalidShape { path: PathBuf, message: String },
}

/// Errors related to lockfile snapshot parsing
#[derive(Error, Debug)]
pub enum LockfileError {
    /// Failed to read lockfile
    #[error("failed to read lockfile {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse lockfile {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Errors related to repository URL resolution
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Repository field URL could not be parsed at all
    #[error("could not parse repository url '{url}'")]
    InvalidUrl { url: String },
}

/// Errors related to report output
#[derive(Error, Debug)]
pub enum ReportError {
    /// Failed to write a report file
    #[error("failed to write report {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidShape error
    pub fn invalid_shape(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::InvalidShape {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl LockfileError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LockfileError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ParseError
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        LockfileError::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl ReportError {
    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::WriteError {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_error() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "missing")
    }

    #[test]
    fn test_manifest_error_read() {
        let err = ManifestError::read_error("/path/to/package.json", io_error());
        let msg = format!("{}", err);
        assert!(msg.contains("failed to read manifest file"));
        assert!(msg.contains("package.json"));
    }

    #[test]
    fn test_manifest_error_json_parse() {
        let err = ManifestError::json_parse_error("/path/to/package.json", "unexpected token");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse JSON"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_manifest_error_invalid_shape() {
        let err = ManifestError::invalid_shape(
            "/path/to/package.json",
            "devDependencies entry 'foo' is not a string",
        );
        let msg = format!("{}", err);
        assert!(msg.contains("unexpected manifest shape"));
        assert!(msg.contains("'foo'"));
    }

    #[test]
    fn test_lockfile_error_parse() {
        let err = LockfileError::parse_error("/path/to/package-lock.json", "expected value");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse lockfile"));
        assert!(msg.contains("package-lock.json"));
    }

    #[test]
    fn test_repository_error_invalid_url() {
        let err = RepositoryError::InvalidUrl {
            url: "not a url".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("could not parse repository url"));
        assert!(msg.contains("not a url"));
    }

    #[test]
    fn test_report_error_write() {
        let err = ReportError::write_error("/out/changes.md", io_error());
        let msg = format!("{}", err);
        assert!(msg.contains("failed to write report"));
        assert!(msg.contains("changes.md"));
    }

    #[test]
    fn test_app_error_from_manifest_error() {
        let manifest_err = ManifestError::json_parse_error("/path", "bad");
        let app_err: AppError = manifest_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("failed to parse JSON"));
    }

    #[test]
    fn test_app_error_from_lockfile_error() {
        let lock_err = LockfileError::parse_error("/path", "bad");
        let app_err: AppError = lock_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("failed to parse lockfile"));
    }

    #[test]
    fn test_app_error_from_repository_error() {
        let repo_err = RepositoryError::InvalidUrl {
            url: "x".to_string(),
        };
        let app_err: AppError = repo_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("could not parse repository url"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ManifestError::json_parse_error("/test", "oops");
        let debug = format!("{:?}", err);
        assert!(debug.contains("JsonParseError"));
    }
}
