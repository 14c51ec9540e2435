//! Command-line interface definitions for dupefind.
//!
//! # Example
//!
//! ```bash
//! # Print duplicate groups found under two directories
//! dupefind ~/Photos /mnt/backup/Photos
//!
//! # Write the report to a file, overwriting without asking
//! dupefind ~/Downloads -o dupes.txt --yes
//!
//! # JSON for scripting, without following symlinked directories
//! dupefind ~/src -f json -L
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Find duplicate files by size and content.
///
/// Files are first grouped by size; only files sharing a size with another
/// file are hashed (BLAKE3) to confirm identical content.
#[derive(Debug, Parser)]
#[command(name = "dupefind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directories (or files) to search for duplicates
    #[arg(value_name = "INPUT_DIRS", required = true, num_args = 1..)]
    pub input_dirs: Vec<PathBuf>,

    /// Write the report to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Do not descend into symbolic links to directories
    #[arg(short = 'L', long)]
    pub no_follow_links: bool,

    /// Skip symbolic links to regular files instead of sizing their targets
    #[arg(long)]
    pub no_follow_file_links: bool,

    /// Number of I/O threads for hashing (default: 4)
    ///
    /// Lower values reduce disk thrashing on HDDs.
    #[arg(long, value_name = "N", value_parser = parse_io_threads)]
    pub io_threads: Option<usize>,

    /// Overwrite an existing output file without asking
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Increase verbosity level (-v for debug, -vv for trace)
    ///
    /// With --output, the report is also echoed to stdout.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable progress bars
    #[arg(long)]
    pub no_progress: bool,

    /// Print fatal errors as JSON on stderr
    #[arg(long)]
    pub json_errors: bool,

    /// Read configuration from FILE instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One bracketed group of paths per line
    #[default]
    Text,
    /// JSON document for scripting
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Parse a hashing thread count (at least 1).
///
/// # Examples
///
/// ```
/// use dupefind::cli::parse_io_threads;
///
/// assert_eq!(parse_io_threads("8").unwrap(), 8);
/// assert!(parse_io_threads("0").is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the value is not a positive integer.
pub fn parse_io_threads(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid thread count: '{s}'"))?;
    if n == 0 {
        return Err("Thread count must be at least 1".to_string());
    }
    Ok(n)
}
