//! Catalog assembly.

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use thiserror::Error;

use crate::core::script::ScriptEntry;
use crate::discover::extract::{extract, ExtractState};
use crate::discover::locator::locate_manifests;

/// Fatal discovery failures.
#[derive(Debug, Error)]
pub enum DiscoverError {
    /// The search root contains no package.json anywhere.
    #[error("no package.json files found under {}", root.display())]
    NoManifests { root: PathBuf },
}

/// Every script discovered in one run.
#[derive(Debug)]
pub struct Catalog {
    /// Entries in task-completion order; ordering carries no meaning.
    pub entries: Vec<ScriptEntry>,

    /// Number of root-level manifests the filesystem walk located.
    pub manifest_count: usize,
}

/// Walk `root`, extract scripts from every reachable manifest, and collect
/// them into one catalog.
///
/// Each located manifest seeds one extraction task; workspace members run as
/// recursively spawned children of those tasks, all inside one rayon scope.
/// One shared visited set guarantees a manifest contributes scripts at most
/// once no matter how many workspace declarations reach it. The channel is
/// drained after the scope joins, once every sender clone is gone.
pub fn build_catalog(root: &Path) -> Result<Catalog, DiscoverError> {
    let manifests = locate_manifests(root);
    if manifests.is_empty() {
        return Err(DiscoverError::NoManifests {
            root: root.to_path_buf(),
        });
    }
    let manifest_count = manifests.len();
    tracing::debug!("located {} root-level manifests", manifest_count);

    let state = ExtractState::new();
    let (tx, rx) = mpsc::channel();
    rayon::scope(|scope| {
        for path in manifests {
            let state = &state;
            let tx = tx.clone();
            scope.spawn(move |scope| extract(scope, state, path, false, tx));
        }
        drop(tx);
    });

    let entries: Vec<ScriptEntry> = rx.into_iter().collect();
    tracing::debug!("catalog holds {} scripts", entries.len());

    Ok(Catalog {
        entries,
        manifest_count,
    })
}
