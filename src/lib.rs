//! Runsel - discover and run package.json scripts across a monorepo
//!
//! This crate provides the core library functionality for runsel:
//! concurrent manifest discovery, workspace resolution, and script
//! catalog assembly. The binary in `src/bin/runsel` wires it to a
//! selection prompt and the package-manager invocation.

pub mod core;
pub mod discover;
pub mod ops;
pub mod util;

pub use core::{PackageManifest, ScriptEntry, WorkspaceFile};
pub use discover::{build_catalog, Catalog, DiscoverError};
pub use ops::{infer_package_manager, run_script, PackageManager};
