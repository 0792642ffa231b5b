//! Concurrent package.json discovery.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Sender};

use crate::core::manifest::MANIFEST_FILE;
use crate::util::fs::normalize_path;

/// Directory names never descended into.
///
/// Covers dependency installs, VCS metadata, CI and editor configuration,
/// and test fixture/snapshot/mock directories. Read-only and shared by all
/// walk tasks.
pub const IGNORED_DIRS: &[&str] = &[
    "node_modules",
    "bower_components",
    ".git",
    ".hg",
    ".svn",
    ".github",
    ".gitlab",
    ".circleci",
    ".vscode",
    ".idea",
    "__snapshots__",
    "__mocks__",
    "__fixtures__",
];

fn is_ignored(name: &str) -> bool {
    IGNORED_DIRS.contains(&name)
}

/// Find every root-level package.json under `root`.
///
/// A directory that contains a manifest is a package boundary: its manifest
/// is emitted and nothing beneath it is searched. Every other subdirectory
/// not in [`IGNORED_DIRS`] is walked as its own rayon task; the scope join
/// is the fan-in. Unreadable directories are skipped, so a permission error
/// costs at most one subtree.
pub fn locate_manifests(root: &Path) -> Vec<PathBuf> {
    let (tx, rx) = mpsc::channel();
    rayon::scope(|scope| {
        walk(scope, root.to_path_buf(), tx);
    });
    rx.into_iter().collect()
}

fn walk<'s>(scope: &rayon::Scope<'s>, dir: PathBuf, tx: Sender<PathBuf>) {
    let manifest = dir.join(MANIFEST_FILE);
    if manifest.is_file() {
        // Package boundary: emit and stop descending.
        let _ = tx.send(normalize_path(&manifest));
        return;
    }

    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("skipping unreadable directory {}: {}", dir.display(), e);
            return;
        }
    };

    for entry in entries.flatten() {
        if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        if entry.file_name().to_str().is_some_and(is_ignored) {
            continue;
        }
        let tx = tx.clone();
        scope.spawn(move |scope| walk(scope, entry.path(), tx));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch_manifest(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(MANIFEST_FILE), "{}").unwrap();
    }

    #[test]
    fn test_finds_manifests_in_nested_tree() {
        let tmp = TempDir::new().unwrap();
        touch_manifest(&tmp.path().join("apps/web"));
        touch_manifest(&tmp.path().join("apps/api"));
        touch_manifest(&tmp.path().join("tools/nested/cli"));

        let found = locate_manifests(tmp.path());
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_manifest_directory_is_a_package_boundary() {
        let tmp = TempDir::new().unwrap();
        touch_manifest(&tmp.path().join("web"));
        // Beneath a package root, further manifests are build output or
        // vendored code and must not be reported.
        touch_manifest(&tmp.path().join("web/dist/inner"));

        let found = locate_manifests(tmp.path());
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("web/package.json"));
    }

    #[test]
    fn test_root_with_manifest_emits_only_root() {
        let tmp = TempDir::new().unwrap();
        touch_manifest(tmp.path());
        touch_manifest(&tmp.path().join("packages/a"));

        let found = locate_manifests(tmp.path());
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_ignored_directories_are_pruned() {
        let tmp = TempDir::new().unwrap();
        touch_manifest(&tmp.path().join("app"));
        touch_manifest(&tmp.path().join("node_modules/leftpad"));
        touch_manifest(&tmp.path().join(".git/hooks"));
        touch_manifest(&tmp.path().join("src/__mocks__/pkg"));

        let found = locate_manifests(tmp.path());
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("app/package.json"));
    }

    #[test]
    fn test_empty_tree_finds_nothing() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a/b/c")).unwrap();

        assert!(locate_manifests(tmp.path()).is_empty());
    }

    #[test]
    fn test_each_manifest_found_exactly_once() {
        let tmp = TempDir::new().unwrap();
        for name in ["a", "b", "c", "d"] {
            touch_manifest(&tmp.path().join("pkgs").join(name));
        }

        let mut found = locate_manifests(tmp.path());
        found.sort();
        let before = found.len();
        found.dedup();
        assert_eq!(found.len(), before);
        assert_eq!(found.len(), 4);
    }
}
