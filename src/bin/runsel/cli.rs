//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// Runsel - discover and run package.json scripts across a monorepo
#[derive(Parser)]
#[command(name = "runsel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to search for package.json files
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Print the script catalog instead of picking one to run
    #[arg(short, long)]
    pub list: bool,

    /// Number of parallel discovery tasks
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
