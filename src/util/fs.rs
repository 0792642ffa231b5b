//! Filesystem utilities.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read file: {}", path.display()))
}

/// Canonicalize a path, falling back to the path as-is if it doesn't exist.
///
/// Discovery uses the result as a dedup key, so the same file reached
/// through different relative routes must normalize identically.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Get the relative path from `base` to `path`.
pub fn relative_path(base: &Path, path: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_collapses_dot_segments() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("a");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("f.txt"), "x").unwrap();

        let direct = normalize_path(&dir.join("f.txt"));
        let indirect = normalize_path(&tmp.path().join("a/../a/f.txt"));
        assert_eq!(direct, indirect);
    }

    #[test]
    fn test_normalize_missing_path_is_identity() {
        let path = Path::new("/definitely/not/here");
        assert_eq!(normalize_path(path), path);
    }

    #[test]
    fn test_relative_path() {
        let rel = relative_path(Path::new("/repo"), Path::new("/repo/pkgs/a/package.json"));
        assert_eq!(rel, Path::new("pkgs/a/package.json"));
    }
}
