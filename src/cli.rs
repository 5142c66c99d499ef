//! Command line arguments

// standard library
use std::path::PathBuf;

// external crates
use clap::{ArgAction, Args, Parser, Subcommand};

/// Build the isotope decay and abundance dataset for isochart
#[derive(Parser, Debug)]
#[command(name = "isochart")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Process every nuclide into the final dataset
    Build(BuildArgs),

    /// Download all nuclide level data into a local archive
    Prefetch(PrefetchArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Periodic table metadata (JSON array)
    #[arg(long, value_name = "JSON")]
    pub elements: PathBuf,

    /// Natural abundance table (JSON object of symbol to percent)
    #[arg(long, value_name = "JSON")]
    pub abundance: PathBuf,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Output path for the dataset
    #[arg(short, long, default_value = "data.json")]
    pub output: PathBuf,

    /// Pretty print the output JSON
    #[arg(long)]
    pub pretty: bool,

    /// Allowed deviation of alpha + beta from 1
    #[arg(long, default_value_t = 0.1)]
    pub tolerance: f64,

    /// Levels with both alpha and beta below this fraction are skipped
    #[arg(long, default_value_t = 0.01)]
    pub min_branch: f64,

    /// Number of worker threads (defaults to all cores)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// Where nuclide level data comes from
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Pre-fetched archive (.json, or .bin for binary)
    #[arg(long, value_name = "PATH")]
    pub archive: Option<PathBuf>,

    /// Query the IAEA chart of nuclides directly
    #[arg(long)]
    pub iaea: bool,
}

#[derive(Args, Debug)]
pub struct PrefetchArgs {
    /// Output path for the archive
    #[arg(short, long, default_value = "nuclides.json")]
    pub output: PathBuf,

    /// Write a compact binary archive instead of JSON
    #[arg(long)]
    pub binary: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}
