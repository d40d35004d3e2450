//! Common test utilities for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Returns the path of a file under `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Creates a temporary directory for testing.
///
/// The directory is removed when the returned `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Writes `content` to `dir/filename` and returns the full path.
#[allow(dead_code)]
pub fn write_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).expect("failed to write config file");
    path
}
