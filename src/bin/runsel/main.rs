//! Runsel CLI - discover and run package.json scripts across a monorepo

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;
use runsel::discover::build_catalog;
use runsel::ops::run_script;
use runsel::util::diagnostic::{self, suggestions, Diagnostic};
use runsel::util::fs::{normalize_path, relative_path};
use runsel::util::prompt::{Picker, StdinPicker};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("runsel=debug")
    } else {
        EnvFilter::new("runsel=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    if let Some(jobs) = cli.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok(); // Ignore if already set
    }

    let root = normalize_path(&cli.path);

    let spinner = if cli.verbose {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(format!("scanning {}", root.display()));
        pb.enable_steady_tick(Duration::from_millis(80));
        Some(pb)
    };

    let started = Instant::now();
    let catalog = build_catalog(&root);
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            diagnostic::emit(
                &Diagnostic::error(e.to_string()).with_suggestion(suggestions::NO_MANIFESTS),
                !cli.no_color,
            );
            std::process::exit(1);
        }
    };

    eprintln!(
        "Found {} packages in {:.2?}",
        catalog.manifest_count,
        started.elapsed()
    );

    if cli.list {
        for entry in &catalog.entries {
            println!(
                "{:<36} {:<32} {}",
                entry.label(),
                relative_path(&root, &entry.manifest_path).display(),
                entry.command
            );
        }
        return Ok(());
    }

    if catalog.entries.is_empty() {
        eprintln!("No scripts declared in any discovered package.");
        return Ok(());
    }

    let labels: Vec<String> = catalog.entries.iter().map(|e| e.label()).collect();
    let Some(index) = StdinPicker.pick(&labels)? else {
        // Cancelled selection is a normal early return.
        return Ok(());
    };

    let code = run_script(&catalog.entries[index])?;
    std::process::exit(code);
}
