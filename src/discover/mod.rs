//! Workspace discovery and script aggregation.
//!
//! The engine walks a directory tree for root-level package.json files,
//! expands workspace declarations (the manifest's own `workspaces` field and
//! sibling pnpm-workspace.yaml files) into member packages, and aggregates
//! every declared script into one catalog. All of it runs as a fan-out of
//! rayon tasks; the only cross-task state is the results channel and the
//! shared visited set.

pub mod catalog;
mod extract;
pub mod globs;
pub mod locator;

pub use catalog::{build_catalog, Catalog, DiscoverError};
pub use globs::PatternError;
pub use locator::locate_manifests;
