//! Implementation of script execution.
//!
//! Infers which package manager owns the selected script's directory from
//! lockfile presence, then runs `<manager> run <script>` in the foreground.

use std::fmt;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::core::script::ScriptEntry;
use crate::util::process::{find_executable, ProcessBuilder};

/// Package managers recognized by lockfile inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Binary name used to invoke the manager.
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// Lockfiles that identify which manager owns a directory.
const LOCKFILES: &[(&str, PackageManager)] = &[
    ("package-lock.json", PackageManager::Npm),
    ("yarn.lock", PackageManager::Yarn),
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("bun.lock", PackageManager::Bun),
    ("bun.lockb", PackageManager::Bun),
];

/// Infer the package manager for a manifest by walking upward from its
/// directory until a recognized lockfile turns up. Defaults to npm at the
/// filesystem root.
pub fn infer_package_manager(manifest_path: &Path) -> PackageManager {
    let mut dir = manifest_path.parent();
    while let Some(current) = dir {
        for (lockfile, manager) in LOCKFILES {
            if current.join(lockfile).is_file() {
                return *manager;
            }
        }
        dir = current.parent();
    }
    PackageManager::Npm
}

/// Run the selected script in the foreground with its package manager.
///
/// The child inherits the terminal's stdio and runs with no timeout; the
/// return value is its exit code (1 when killed by a signal). A launch
/// failure is an error for the caller to surface.
pub fn run_script(entry: &ScriptEntry) -> Result<i32> {
    let manager = infer_package_manager(&entry.manifest_path);

    if find_executable(manager.command()).is_none() {
        bail!(
            "`{}` is not installed or not on PATH (needed to run `{}`)",
            manager,
            entry.script_name
        );
    }

    let dir = entry.package_dir();
    tracing::info!(
        "running `{} run {}` in {}",
        manager,
        entry.script_name,
        dir.display()
    );

    let process = ProcessBuilder::new(manager.command())
        .arg("run")
        .arg(&entry.script_name)
        .cwd(dir);
    let status = process
        .status()
        .with_context(|| format!("failed to launch `{}`", process.display_command()))?;

    Ok(status.code().unwrap_or(1))
}
