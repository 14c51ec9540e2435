//! Output formatters for duplicate scan results.
//!
//! - [`text`]: one bracketed group per line, suitable for `sort`
//! - [`json`]: machine-readable document for scripting
//! - [`target`]: stdout or an output file, with overwrite confirmation
//!
//! # Example
//!
//! ```no_run
//! use dupefind::duplicates::DuplicateFinder;
//! use dupefind::output::text;
//! use std::path::PathBuf;
//!
//! let finder = DuplicateFinder::with_defaults();
//! let (groups, _summary) = finder.find_duplicates(&[PathBuf::from(".")]).unwrap();
//!
//! text::write_groups(&groups, &mut std::io::stdout()).unwrap();
//! println!("{}", text::summary_line(groups.len()));
//! ```

pub mod json;
pub mod target;
pub mod text;

use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::duplicates::{DuplicateGroup, ScanSummary};
use crate::error::ExitCode;

pub use json::JsonOutput;
pub use target::{AlwaysOverwrite, OutputError, OutputTarget, OverwritePolicy, PromptOverwrite};

/// Render a report in the requested format.
///
/// # Errors
///
/// Propagates serialization and write errors.
pub fn write_report<W: Write + ?Sized>(
    out: &mut W,
    format: OutputFormat,
    groups: &[DuplicateGroup],
    summary: &ScanSummary,
    exit_code: ExitCode,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => text::write_groups(groups, out),
        OutputFormat::Json => {
            JsonOutput::new(groups, summary, exit_code).write_to(out, true)?;
            Ok(())
        }
    }
}
