//! package.json parsing.
//!
//! Manifests in the wild are frequently hand-edited, so the document is kept
//! loosely typed: every field of interest is coerced independently and a
//! shape mismatch reads as "field absent" rather than a parse failure.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

/// Canonical manifest file name.
pub const MANIFEST_FILE: &str = "package.json";

/// A parsed package.json document.
#[derive(Debug)]
pub struct PackageManifest {
    path: PathBuf,
    doc: Value,
}

impl PackageManifest {
    /// Load and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = crate::util::fs::read_to_string(path)?;
        let doc: Value = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(PackageManifest {
            path: path.to_path_buf(),
            doc,
        })
    }

    /// Path this manifest was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Package name, `"unknown"` when absent or not a string.
    pub fn package_name(&self) -> &str {
        self.doc
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
    }

    /// The `scripts` map as (name, command) pairs.
    ///
    /// Non-string values are skipped; a missing or mistyped `scripts` field
    /// yields no pairs.
    pub fn scripts(&self) -> Vec<(String, String)> {
        let Some(map) = self.doc.get("scripts").and_then(Value::as_object) else {
            return Vec::new();
        };
        map.iter()
            .filter_map(|(name, value)| {
                value.as_str().map(|cmd| (name.clone(), cmd.to_string()))
            })
            .collect()
    }

    /// Workspace member patterns from the `workspaces` field.
    ///
    /// Accepts both the plain array form and the object form carrying a
    /// `packages` array. Non-string elements are skipped.
    pub fn workspace_patterns(&self) -> Vec<String> {
        let arr = match self.doc.get("workspaces") {
            Some(Value::Array(arr)) => Some(arr),
            Some(Value::Object(obj)) => obj.get("packages").and_then(Value::as_array),
            _ => None,
        };
        let Some(arr) = arr else {
            return Vec::new();
        };
        arr.iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()
    }
}
