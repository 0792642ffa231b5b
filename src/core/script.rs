//! Script catalog entries.

use std::path::{Path, PathBuf};

/// One runnable script discovered in a package manifest.
///
/// Duplicate (package, script) pairs from different manifests are legal and
/// stay distinct through `manifest_path`; entries are never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScriptEntry {
    /// Name of the declaring package (`"unknown"` if the manifest has none)
    pub package_name: String,

    /// Script key from the `scripts` map
    pub script_name: String,

    /// Shell command the script runs
    pub command: String,

    /// Absolute path to the declaring package.json
    pub manifest_path: PathBuf,
}

impl ScriptEntry {
    /// Label shown in the selection list.
    pub fn label(&self) -> String {
        format!("{} > ({})", self.package_name, self.script_name)
    }

    /// Directory the script must be run in.
    pub fn package_dir(&self) -> &Path {
        self.manifest_path.parent().unwrap_or(Path::new("."))
    }
}
