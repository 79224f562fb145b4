//! CLI integration tests for pkgstat.
//!
//! These tests exercise the binary end to end over local manifest files; no
//! network access is required.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use assert_cmd::prelude::*;
use flate2::write::GzEncoder;
use flate2::Compression;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the pkgstat binary command.
fn pkgstat() -> Command {
    Command::cargo_bin("pkgstat").unwrap()
}

/// Create a temporary directory for test manifests.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Write a plain-text manifest and return its path.
fn manifest(dir: &TempDir, text: &str) -> PathBuf {
    let path = dir.path().join("Contents-amd64");
    fs::write(&path, text).unwrap();
    path
}

/// One expected output row, matching the tool's column layout.
fn row(rank: usize, package: &str, files: u64) -> String {
    format!("{:>4}. {:<50}\t{}\n", rank, package, files)
}

// ============================================================================
// argument validation
// ============================================================================

#[test]
fn test_help_describes_architecture() {
    pkgstat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("architecture"));
}

#[test]
fn test_missing_arch_is_usage_error() {
    pkgstat()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_invalid_arch_lists_accepted_set() {
    pkgstat()
        .arg("sparc")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown architecture `sparc`"))
        .stderr(predicate::str::contains("amd64"))
        .stderr(predicate::str::contains("s390x"));
}

#[test]
fn test_mirror_and_input_conflict() {
    pkgstat()
        .args(["amd64", "--mirror", "http://deb.example.org/", "--input", "x"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

// ============================================================================
// ranking over local manifests
// ============================================================================

#[test]
fn test_ranks_packages_by_file_count() {
    let tmp = temp_dir();
    let path = manifest(
        &tmp,
        "usr/bin/foo   util-a,util-b\nusr/bin/bar   util-a\nusr/lib/baz   util-c\n",
    );

    let expected = format!(
        "{}{}{}",
        row(1, "util-a", 2),
        row(2, "util-b", 1),
        row(3, "util-c", 1)
    );

    pkgstat()
        .args(["amd64", "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn test_top_flag_limits_rows() {
    let tmp = temp_dir();
    let path = manifest(
        &tmp,
        "usr/bin/foo   util-a,util-b\nusr/bin/bar   util-a\nusr/lib/baz   util-c\n",
    );

    pkgstat()
        .args(["amd64", "-n", "1", "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff(row(1, "util-a", 2)));
}

#[test]
fn test_default_reports_ten_packages() {
    let tmp = temp_dir();
    let mut text = String::new();
    for i in 0..12 {
        text.push_str(&format!("usr/share/f{i} pkg{i:02}\n"));
    }
    let path = manifest(&tmp, &text);

    let output = pkgstat()
        .args(["amd64", "--input"])
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.lines().count(), 10);
}

#[test]
fn test_reads_gzipped_manifest() {
    let tmp = temp_dir();
    let path = tmp.path().join("Contents-amd64.gz");

    let mut encoder = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    encoder.write_all(b"usr/bin/foo util-a\n").unwrap();
    encoder.finish().unwrap();

    pkgstat()
        .args(["amd64", "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff(row(1, "util-a", 1)));
}

#[test]
fn test_empty_manifest_prints_nothing() {
    let tmp = temp_dir();
    let path = manifest(&tmp, "");

    pkgstat()
        .args(["amd64", "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff(""));
}

#[test]
fn test_missing_input_fails_with_fetch_code() {
    let tmp = temp_dir();
    let path = tmp.path().join("absent");

    pkgstat()
        .args(["amd64", "--input"])
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read manifest"));
}

// ============================================================================
// JSON output
// ============================================================================

#[test]
fn test_json_output() {
    let tmp = temp_dir();
    let path = manifest(&tmp, "usr/bin/foo util-a\nusr/bin/bar util-a\n");

    let output = pkgstat()
        .args(["amd64", "--json", "--input"])
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed[0]["package"], "util-a");
    assert_eq!(parsed[0]["files"], 2);
}

// ============================================================================
// completions
// ============================================================================

#[test]
fn test_completions_do_not_require_arch() {
    pkgstat()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pkgstat"));
}
