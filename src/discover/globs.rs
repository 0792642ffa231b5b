//! Workspace glob resolution.
//!
//! Expands the include/exclude patterns of a workspace-manifest file against
//! the filesystem. Exclusion is a set subtraction: every include pattern is
//! expanded first, then exact matches of the exclude patterns are removed.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A workspace pattern that is not valid glob syntax.
#[derive(Debug, Error)]
#[error("invalid workspace pattern `{pattern}`: {source}")]
pub struct PatternError {
    /// The offending pattern as written, `!` prefix stripped.
    pub pattern: String,
    #[source]
    source: glob::PatternError,
}

/// True if the pattern needs glob expansion rather than a literal join.
pub fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Expand one pattern relative to `base`, returning every filesystem match.
pub fn expand_pattern(base: &Path, pattern: &str) -> Result<Vec<PathBuf>, PatternError> {
    let full = base.join(pattern);
    let matches = glob::glob(&full.to_string_lossy()).map_err(|source| PatternError {
        pattern: pattern.to_string(),
        source,
    })?;

    Ok(matches
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::debug!("skipping unreadable glob match: {}", e);
                None
            }
        })
        .collect())
}

/// Resolve workspace-file patterns to the deduplicated set of matching paths.
///
/// A leading `!` marks an exclusion. An invalid pattern skips only itself;
/// the remaining patterns still apply. Duplicate matches across include
/// patterns collapse in the set.
pub fn resolve(base: &Path, patterns: &[String]) -> BTreeSet<PathBuf> {
    let mut included = BTreeSet::new();
    let mut excluded = BTreeSet::new();

    for pattern in patterns {
        let (target, pattern) = match pattern.strip_prefix('!') {
            Some(rest) => (&mut excluded, rest),
            None => (&mut included, pattern.as_str()),
        };
        match expand_pattern(base, pattern) {
            Ok(matches) => target.extend(matches),
            Err(e) => tracing::warn!("{}", e),
        }
    }

    &included - &excluded
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn mkdirs(base: &Path, dirs: &[&str]) {
        for dir in dirs {
            std::fs::create_dir_all(base.join(dir)).unwrap();
        }
    }

    fn patterns(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_is_glob() {
        assert!(is_glob("packages/*"));
        assert!(is_glob("apps/v?"));
        assert!(is_glob("libs/[ab]"));
        assert!(!is_glob("tools/cli"));
    }

    #[test]
    fn test_excludes_subtract_from_includes() {
        let tmp = TempDir::new().unwrap();
        mkdirs(tmp.path(), &["apps/web", "apps/api", "apps/legacy"]);

        let resolved = resolve(tmp.path(), &patterns(&["apps/*", "!apps/legacy"]));

        let names: Vec<_> = resolved
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["api", "web"]);
    }

    #[test]
    fn test_overlapping_includes_collapse() {
        let tmp = TempDir::new().unwrap();
        mkdirs(tmp.path(), &["pkgs/a", "pkgs/b"]);

        let resolved = resolve(tmp.path(), &patterns(&["pkgs/*", "pkgs/a"]));
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn test_invalid_pattern_skips_only_itself() {
        let tmp = TempDir::new().unwrap();
        mkdirs(tmp.path(), &["pkgs/a"]);

        // "[" never closes, which is a syntax error in glob.
        let resolved = resolve(tmp.path(), &patterns(&["pkgs/[", "pkgs/*"]));
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = expand_pattern(tmp.path(), "pkgs/[").unwrap_err();
        assert_eq!(err.pattern, "pkgs/[");
    }

    #[test]
    fn test_no_matches_is_empty_not_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(resolve(tmp.path(), &patterns(&["nothing/*"])).is_empty());
    }
}
