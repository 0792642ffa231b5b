//! Workspace-manifest file (pnpm-workspace.yaml) parsing.
//!
//! This is the second workspace mechanism, independent of the manifest's own
//! `workspaces` field; both can apply to the same directory.

use std::path::Path;

use serde::Deserialize;

/// Workspace-manifest file name checked next to every package.json.
pub const WORKSPACE_FILE: &str = "pnpm-workspace.yaml";

/// Declared workspace membership from a pnpm-workspace.yaml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkspaceFile {
    /// Member patterns; a leading `!` marks an exclusion.
    #[serde(default)]
    pub packages: Vec<String>,
}

impl WorkspaceFile {
    /// Load the workspace file sitting next to `manifest_path`, if any.
    ///
    /// Missing and malformed files both read as absent; a broken workspace
    /// file must not abort discovery elsewhere in the tree.
    pub fn load_sibling(manifest_path: &Path) -> Option<Self> {
        let path = manifest_path.parent()?.join(WORKSPACE_FILE);
        let text = std::fs::read_to_string(&path).ok()?;
        match serde_yaml_ng::from_str(&text) {
            Ok(ws) => Some(ws),
            Err(e) => {
                tracing::warn!("ignoring malformed {}: {}", path.display(), e);
                None
            }
        }
    }
}
