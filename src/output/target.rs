//! Where the report goes.
//!
//! The output file is opened before scanning starts, so a user who declines
//! to overwrite an existing file (or lacks permission) finds out immediately
//! instead of after a long scan.

use std::fs::File;
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Errors opening the report destination.
#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    /// The file cannot be created or truncated for lack of permission.
    #[error("Couldn't write to {0}. Check that you have write permissions.")]
    PermissionDenied(PathBuf),

    /// Any other failure opening the file.
    #[error("Unknown error in opening {path}: {source}")]
    Io {
        /// Output file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The overwrite question could not be asked.
    #[error("Output file {path} exists and no answer could be read ({reason}); pass --yes to overwrite")]
    Prompt {
        /// Output file path
        path: PathBuf,
        /// Why prompting failed
        reason: String,
    },
}

/// Decides whether an existing output file may be replaced.
pub trait OverwritePolicy {
    /// Return `true` to overwrite `path`, `false` to stop without scanning.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Prompt`] if no decision can be obtained.
    fn confirm_overwrite(&self, path: &Path) -> Result<bool, OutputError>;
}

/// Overwrite without asking (`--yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOverwrite;

impl OverwritePolicy for AlwaysOverwrite {
    fn confirm_overwrite(&self, _path: &Path) -> Result<bool, OutputError> {
        Ok(true)
    }
}

/// Ask on the terminal, defaulting to "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptOverwrite;

impl OverwritePolicy for PromptOverwrite {
    fn confirm_overwrite(&self, path: &Path) -> Result<bool, OutputError> {
        dialoguer::Confirm::new()
            .with_prompt(format!(
                "Output file {} exists and will be overwritten: continue?",
                path.display()
            ))
            .default(false)
            .interact()
            .map_err(|e| OutputError::Prompt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }
}

/// An open report destination.
#[derive(Debug)]
pub enum OutputTarget {
    /// Standard output.
    Stdout,
    /// A file opened for writing (truncated).
    File {
        /// Path as given on the command line
        path: PathBuf,
        /// Buffered handle
        writer: BufWriter<File>,
    },
}

impl OutputTarget {
    /// Open the destination for a report.
    ///
    /// `None` means stdout. Returns `Ok(None)` when the file exists and the
    /// policy declined to overwrite it.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError`] if the file cannot be opened or the policy
    /// cannot decide.
    pub fn open(
        path: Option<&Path>,
        policy: &dyn OverwritePolicy,
    ) -> Result<Option<Self>, OutputError> {
        let Some(path) = path else {
            return Ok(Some(Self::Stdout));
        };

        if path.exists() && !policy.confirm_overwrite(path)? {
            log::info!("Not overwriting {}, exiting", path.display());
            return Ok(None);
        }

        let file = File::create(path).map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => OutputError::PermissionDenied(path.to_path_buf()),
            _ => OutputError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        log::debug!("Writing report to {}", path.display());
        Ok(Some(Self::File {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        }))
    }

    /// Output file path, if not stdout.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdout => None,
            Self::File { path, .. } => Some(path),
        }
    }

    /// Whether the report goes to a file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    /// Run `f` with a writer for this destination and flush afterwards.
    ///
    /// # Errors
    ///
    /// Propagates write and flush errors.
    pub fn write_with<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        match self {
            Self::Stdout => {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                f(&mut lock)?;
                lock.flush()
            }
            Self::File { writer, .. } => {
                f(writer)?;
                writer.flush()
            }
        }
    }
}
