//! dupefind - Duplicate File Finder
//!
//! Finds files with identical content under one or more directories. Files
//! are grouped by size first; only files that share a size with another
//! file are hashed in full (BLAKE3) to confirm duplication.
//!
//! # Library use
//!
//! ```no_run
//! use dupefind::duplicates::{DuplicateFinder, FinderConfig};
//! use std::path::PathBuf;
//!
//! let finder = DuplicateFinder::new(FinderConfig::default());
//! let (groups, summary) = finder.find_duplicates(&[PathBuf::from(".")]).unwrap();
//! for group in &groups {
//!     println!("{:?}", group.paths());
//! }
//! for skipped in &summary.scan_errors {
//!     eprintln!("{}", skipped);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod progress;
pub mod scanner;
pub mod signal;

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::duplicates::{DuplicateFinder, FinderConfig};
use crate::error::ExitCode;
use crate::output::{text, AlwaysOverwrite, OutputTarget, OverwritePolicy, PromptOverwrite};
use crate::progress::Progress;

/// Run the application with parsed CLI arguments.
///
/// An existing output file is confirmed interactively unless `--yes` is given.
///
/// # Errors
///
/// Returns an error for invalid roots, an unusable output file, bad
/// configuration, or an interrupted scan.
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    if cli.yes {
        run_app_with(cli, &AlwaysOverwrite)
    } else {
        run_app_with(cli, &PromptOverwrite)
    }
}

/// Run the application with an explicit overwrite policy.
///
/// # Errors
///
/// See [`run_app`].
pub fn run_app_with(cli: Cli, policy: &dyn OverwritePolicy) -> anyhow::Result<ExitCode> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_cli(&cli);
    log::debug!("Effective configuration: {:?}", config);

    // Open the destination first so the user can back out before scanning.
    let Some(mut target) = OutputTarget::open(cli.output.as_deref(), policy)? else {
        return Ok(ExitCode::Success);
    };

    let shutdown = signal::install_handler()?;

    let mut finder_config = FinderConfig::default()
        .with_io_threads(config.io_threads)
        .with_walker_config(config.walker_config())
        .with_shutdown_flag(shutdown.get_flag());
    if config.progress {
        finder_config = finder_config.with_progress_callback(Arc::new(Progress::new(false)));
    }

    let finder = DuplicateFinder::new(finder_config);
    let (groups, summary) = finder.find_duplicates(&cli.input_dirs)?;

    let exit_code = if summary.has_errors() {
        ExitCode::PartialSuccess
    } else if groups.is_empty() {
        ExitCode::NoDuplicates
    } else {
        ExitCode::Success
    };

    target
        .write_with(|out| output::write_report(out, config.format, &groups, &summary, exit_code))
        .with_context(|| match target.path() {
            Some(path) => format!("Failed to write report to {}", path.display()),
            None => "Failed to write report to stdout".to_string(),
        })?;

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    if target.is_file() && cli.verbose > 0 && config.format == OutputFormat::Text {
        text::write_groups(&groups, &mut stdout)?;
    }

    if target.is_file() || config.format == OutputFormat::Text {
        writeln!(stdout)?;
        writeln!(stdout, "{}", text::summary_line(groups.len()))?;
        if let (Some(path), OutputFormat::Text) = (target.path(), config.format) {
            writeln!(stdout, "{}", text::sort_hint(path))?;
        }
    } else {
        log::info!("{}", text::summary_line(groups.len()));
    }

    log::info!(
        "Scanned {} files ({}), {} reclaimable in {:.2?}",
        summary.total_files,
        summary.total_size_display(),
        summary.reclaimable_display(),
        summary.scan_duration
    );
    if summary.has_errors() {
        log::warn!("{} file(s) were skipped", summary.scan_errors.len());
    }

    Ok(exit_code)
}
