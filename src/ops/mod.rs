//! High-level operations.

pub mod run_script;

pub use run_script::{infer_package_manager, run_script, PackageManager};
