//! Recursive concurrent script extraction.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::sync::Mutex;

use crate::core::manifest::{PackageManifest, MANIFEST_FILE};
use crate::core::script::ScriptEntry;
use crate::core::workspace_file::WorkspaceFile;
use crate::discover::globs;
use crate::util::fs::normalize_path;

/// State shared by every extraction task of one catalog build.
#[derive(Debug, Default)]
pub(crate) struct ExtractState {
    /// Manifests already claimed this run. Check-then-insert happens under
    /// the lock so two racing tasks cannot both extract the same manifest.
    visited: Mutex<HashSet<PathBuf>>,
}

impl ExtractState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Claim `path` for extraction; false if another task already has it.
    fn claim(&self, path: &Path) -> bool {
        self.visited
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .insert(path.to_path_buf())
    }
}

/// Extract scripts from one manifest and fan out to its workspace members.
///
/// Never fails loudly: I/O and parse problems make this manifest contribute
/// nothing and the rest of the run proceeds. `leaf` is set when the manifest
/// was reached as a workspace member, which bounds the recursion - members
/// are not re-scanned for their own workspace declarations.
pub(crate) fn extract<'s>(
    scope: &rayon::Scope<'s>,
    state: &'s ExtractState,
    manifest_path: PathBuf,
    leaf: bool,
    tx: Sender<ScriptEntry>,
) {
    let manifest_path = normalize_path(&manifest_path);
    if !state.claim(&manifest_path) {
        return;
    }

    let manifest = match PackageManifest::load(&manifest_path) {
        Ok(manifest) => manifest,
        Err(e) => {
            tracing::debug!("skipping {}: {:#}", manifest_path.display(), e);
            return;
        }
    };

    let package_name = manifest.package_name().to_string();
    for (script_name, command) in manifest.scripts() {
        // The drain side outliving the send side is the only failure mode
        // here, and it cannot happen before the scope joins.
        let _ = tx.send(ScriptEntry {
            package_name: package_name.clone(),
            script_name,
            command,
            manifest_path: manifest_path.clone(),
        });
    }

    if leaf {
        return;
    }

    let Some(base) = manifest_path.parent().map(Path::to_path_buf) else {
        return;
    };

    // Members named by this manifest's own `workspaces` field. Overlapping
    // patterns are deduplicated locally; the global visited set catches the
    // rest.
    let mut seen_here = HashSet::new();
    for pattern in manifest.workspace_patterns() {
        let candidates = if globs::is_glob(&pattern) {
            match globs::expand_pattern(&base, &pattern) {
                Ok(paths) => paths,
                Err(e) => {
                    tracing::warn!("{}", e);
                    continue;
                }
            }
        } else {
            vec![base.join(&pattern)]
        };

        for dir in candidates {
            let member = normalize_path(&dir.join(MANIFEST_FILE));
            if member == manifest_path || !member.is_file() {
                continue;
            }
            if !seen_here.insert(member.clone()) {
                continue;
            }
            let tx = tx.clone();
            scope.spawn(move |scope| extract(scope, state, member, true, tx));
        }
    }

    // A sibling pnpm-workspace.yaml is an independent membership source.
    if let Some(ws) = WorkspaceFile::load_sibling(&manifest_path) {
        for dir in globs::resolve(&base, &ws.packages) {
            let member = normalize_path(&dir.join(MANIFEST_FILE));
            // Self-reference guard: a pattern matching the workspace root's
            // own directory must not recurse into this manifest.
            if member == manifest_path || !member.is_file() {
                continue;
            }
            let tx = tx.clone();
            scope.spawn(move |scope| extract(scope, state, member, true, tx));
        }
    }
}
