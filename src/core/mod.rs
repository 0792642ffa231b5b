//! Core domain types.

pub mod manifest;
pub mod script;
pub mod workspace_file;

pub use manifest::{PackageManifest, MANIFEST_FILE};
pub use script::ScriptEntry;
pub use workspace_file::{WorkspaceFile, WORKSPACE_FILE};
