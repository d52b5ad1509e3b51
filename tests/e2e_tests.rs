//! End-to-end tests for the depsync CLI
//!
//! These tests verify:
//! - Exit codes for success, early-exit, and failure scenarios
//! - Report files are written where the arguments point
//! - The manifest rewrite happens only when it should

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Command under test
fn depsync() -> Command {
    Command::cargo_bin("depsync").expect("binary builds")
}

/// Creates project and output directories inside a tempdir
fn create_test_dirs() -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path().join("project");
    let out = temp_dir.path().join("out");
    fs::create_dir_all(&root).unwrap();
    fs::create_dir_all(&out).unwrap();
    (temp_dir, root, out)
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

mod sync_command {
    use super::*;

    #[test]
    fn test_sync_rewrites_manifest_and_exits_zero() {
        let (_guard, root, out) = create_test_dirs();

        fs::write(
            root.join("package.json"),
            "{\n  \"dependencies\": {\n    \"foo\": \"^1.5.2\"\n  },\n  \"devDependencies\": {\n    \"@types/foo\": \"^1.0.0\"\n  }\n}\n",
        )
        .unwrap();

        depsync()
            .args(["sync", path_arg(&out), path_arg(&root)])
            .assert()
            .success();

        let manifest = fs::read_to_string(root.join("package.json")).unwrap();
        assert!(manifest.contains("\"@types/foo\": \"<=1.5\""));

        let report = fs::read_to_string(out.join("sync.md")).unwrap();
        assert!(report.contains("requirement changed from `^1.0.0` to `<=1.5`"));
    }

    #[test]
    fn test_sync_without_dev_dependencies_exits_zero() {
        let (_guard, root, out) = create_test_dirs();

        let original = "{\n  \"name\": \"bare\"\n}\n";
        fs::write(root.join("package.json"), original).unwrap();

        depsync()
            .args(["sync", path_arg(&out), path_arg(&root)])
            .assert()
            .success();

        // Manifest untouched, placeholder report written.
        assert_eq!(
            fs::read_to_string(root.join("package.json")).unwrap(),
            original
        );
        let report = fs::read_to_string(out.join("sync.md")).unwrap();
        assert!(report.contains("*No dev dependencies found.*"));
    }

    #[test]
    fn test_sync_missing_manifest_fails() {
        let (_guard, root, out) = create_test_dirs();

        depsync()
            .args(["sync", path_arg(&out), path_arg(&root)])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"));
    }
}

mod changes_command {
    use super::*;

    #[test]
    fn test_changes_writes_report() {
        let (_guard, root, out) = create_test_dirs();

        fs::write(
            root.join("package-lock.old.json"),
            r#"{"packages": {}}"#,
        )
        .unwrap();
        fs::write(
            root.join("package-lock.json"),
            r#"{"packages": {"node_modules/foo": {"version": "1.0.0"}}}"#,
        )
        .unwrap();

        depsync()
            .args(["changes", path_arg(&out), path_arg(&root)])
            .assert()
            .success();

        let report = fs::read_to_string(out.join("changes.md")).unwrap();
        assert!(report.contains(
            "- Installed [`foo@1.0.0`](https://npmjs.com/package/foo/v/1.0.0)"
        ));
    }

    #[test]
    fn test_changes_without_snapshots_fails() {
        let (_guard, root, out) = create_test_dirs();

        depsync()
            .args(["changes", path_arg(&out), path_arg(&root)])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"));
    }

    #[test]
    fn test_changes_no_diff_reports_placeholder() {
        let (_guard, root, out) = create_test_dirs();

        let lockfile = r#"{"packages": {"node_modules/foo": {"version": "1.0.0"}}}"#;
        fs::write(root.join("package-lock.old.json"), lockfile).unwrap();
        fs::write(root.join("package-lock.json"), lockfile).unwrap();

        depsync()
            .args(["changes", path_arg(&out), path_arg(&root)])
            .assert()
            .success();

        let report = fs::read_to_string(out.join("changes.md")).unwrap();
        assert!(report.contains("*No dependencies bumped.*"));
    }
}

mod cli_surface {
    use super::*;

    #[test]
    fn test_no_subcommand_is_usage_error() {
        depsync().assert().failure();
    }

    #[test]
    fn test_missing_path_arguments_is_usage_error() {
        depsync().args(["sync", "/tmp"]).assert().failure();
    }

    #[test]
    fn test_version_flag() {
        depsync()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("depsync"));
    }

    #[test]
    fn test_help_lists_subcommands() {
        depsync()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("changes"))
            .stdout(predicate::str::contains("sync"));
    }
}
