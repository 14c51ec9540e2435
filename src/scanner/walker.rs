//! Directory walker implementation using jwalk for parallel traversal.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing a directory
//! tree and collecting the size of every regular file in it, and
//! [`MultiWalker`] for doing the same over several roots at once.
//!
//! # Features
//!
//! - Parallel directory reads using jwalk's rayon pool
//! - Independent policies for directory and file symlinks
//! - Best-effort: unreadable entries are yielded as [`ScanError`] values
//! - Graceful shutdown via atomic flag
//!
//! # Example
//!
//! ```no_run
//! use dupefind::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let config = WalkerConfig {
//!     follow_dir_symlinks: false,
//!     ..Default::default()
//! };
//!
//! let walker = Walker::new(Path::new("/home/user/Downloads"), config);
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(file) => println!("{}: {} bytes", file.path.display(), file.size),
//!         Err(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use jwalk::WalkDir;

use super::{FileEntry, ScanError, WalkerConfig};

/// Directory walker for parallel file discovery.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Walker configuration
    config: WalkerConfig,
    /// Optional shutdown flag for graceful termination
    shutdown_flag: Option<Arc<AtomicBool>>,
}

impl Walker {
    /// Create a new walker for the given path.
    ///
    /// # Arguments
    ///
    /// * `path` - Root directory (or single file) to scan
    /// * `config` - Walker configuration options
    #[must_use]
    pub fn new(path: &Path, config: WalkerConfig) -> Self {
        Self {
            root: path.to_path_buf(),
            config,
            shutdown_flag: None,
        }
    }

    /// Set the shutdown flag for graceful termination.
    ///
    /// When the flag is set to `true`, the walker stops yielding entries.
    #[must_use]
    pub fn with_shutdown_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.shutdown_flag = Some(flag);
        self
    }

    /// Root this walker starts from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check if shutdown has been requested.
    fn is_shutdown_requested(&self) -> bool {
        self.shutdown_flag
            .as_ref()
            .is_some_and(|f| f.load(Ordering::SeqCst))
    }

    /// Walk the directory tree, yielding one result per regular file.
    ///
    /// Errors are yielded as [`ScanError::StatFailure`] values rather than
    /// stopping iteration. Zero-byte files are yielded like any other file;
    /// filtering them is the caller's job.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dupefind::scanner::{Walker, WalkerConfig};
    /// use std::path::Path;
    ///
    /// let walker = Walker::new(Path::new("."), WalkerConfig::default());
    /// let files: Vec<_> = walker.walk().filter_map(Result::ok).collect();
    /// println!("Found {} files", files.len());
    /// ```
    pub fn walk(&self) -> impl Iterator<Item = Result<FileEntry, ScanError>> + '_ {
        // jwalk hides dotfiles by default; a storage audit has to see them.
        let walk_dir = WalkDir::new(&self.root)
            .follow_links(self.config.follow_dir_symlinks)
            .skip_hidden(false)
            .sort(true);

        walk_dir
            .into_iter()
            .take_while(move |_| {
                if self.is_shutdown_requested() {
                    log::debug!("Walker: Shutdown requested, stopping iteration");
                    false
                } else {
                    true
                }
            })
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => {
                    if entry.file_type().is_dir() {
                        return None;
                    }
                    self.process_entry(entry.path())
                }
                Err(e) => {
                    let path = e
                        .path()
                        .map_or_else(|| self.root.clone(), std::borrow::ToOwned::to_owned);
                    // Following directory links makes jwalk stat every link
                    // itself, so a dangling file link surfaces here.
                    if !self.config.follow_file_symlinks && is_file_symlink(&path) {
                        log::trace!("Skipping symlink: {}", path.display());
                        return None;
                    }
                    let kind = e
                        .io_error()
                        .map_or(io::ErrorKind::Other, io::Error::kind);
                    Some(Err(stat_failure(path, io::Error::new(kind, e.to_string()))))
                }
            })
    }

    /// Size a non-directory entry, applying the file symlink policy.
    fn process_entry(&self, path: PathBuf) -> Option<Result<FileEntry, ScanError>> {
        let link_metadata = match fs::symlink_metadata(&path) {
            Ok(m) => m,
            Err(e) => return Some(Err(stat_failure(path, e))),
        };

        let is_symlink = link_metadata.file_type().is_symlink();
        if is_symlink && !self.config.follow_file_symlinks {
            log::trace!("Skipping symlink: {}", path.display());
            return None;
        }

        let metadata = if is_symlink {
            match fs::metadata(&path) {
                Ok(m) => m,
                Err(e) => return Some(Err(stat_failure(path, e))),
            }
        } else {
            link_metadata
        };

        // Sockets, fifos, devices, and directory links we were told not to follow.
        if !metadata.is_file() {
            log::trace!("Skipping non-regular entry: {}", path.display());
            return None;
        }

        Some(Ok(FileEntry {
            path,
            size: metadata.len(),
            is_symlink,
        }))
    }
}

/// True for a symlink whose target is missing or is not a directory.
fn is_file_symlink(path: &Path) -> bool {
    let is_link = fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink());
    is_link && !fs::metadata(path).is_ok_and(|m| m.is_dir())
}

/// Build a [`ScanError::StatFailure`], logging it once.
fn stat_failure(path: PathBuf, error: io::Error) -> ScanError {
    match error.kind() {
        io::ErrorKind::NotFound => {
            log::warn!(
                "Skipping file: couldn't get filesize of {} (missing or dangling link)",
                path.display()
            );
        }
        _ => {
            log::warn!(
                "Skipping file: couldn't get filesize of {}: {}",
                path.display(),
                error
            );
        }
    }
    ScanError::StatFailure {
        path,
        source: error,
    }
}

/// Walker over several roots.
///
/// Roots that repeat, or that sit inside another supplied root, are dropped
/// so no file is visited twice. The remaining roots keep the caller's
/// spelling so reported paths stay caller-relative.
#[derive(Debug)]
pub struct MultiWalker {
    roots: Vec<PathBuf>,
    config: WalkerConfig,
    shutdown_flag: Option<Arc<AtomicBool>>,
}

impl MultiWalker {
    /// Create a walker for the given roots.
    ///
    /// Roots are expected to exist; non-existent roots are filtered out by
    /// the caller before this point.
    #[must_use]
    pub fn new(roots: Vec<PathBuf>, config: WalkerConfig) -> Self {
        Self {
            roots: prune_overlapping_roots(roots),
            config,
            shutdown_flag: None,
        }
    }

    /// Set the shutdown flag for graceful termination.
    #[must_use]
    pub fn with_shutdown_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.shutdown_flag = Some(flag);
        self
    }

    /// Roots that will actually be walked.
    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Walk every root in order.
    pub fn walk(&self) -> impl Iterator<Item = Result<FileEntry, ScanError>> + '_ {
        self.roots.iter().flat_map(move |root| {
            let mut walker = Walker::new(root, self.config.clone());
            if let Some(ref flag) = self.shutdown_flag {
                walker = walker.with_shutdown_flag(Arc::clone(flag));
            }
            // Each walker is consumed inside this closure, so collect its
            // entries; the iterator cannot outlive the borrowed walker.
            walker.walk().collect::<Vec<_>>()
        })
    }
}

/// Drop repeated roots and roots nested inside another root.
///
/// Comparison uses canonical paths; a root that cannot be canonicalized is
/// kept as-is and compared by its literal spelling.
#[must_use]
pub fn prune_overlapping_roots(roots: Vec<PathBuf>) -> Vec<PathBuf> {
    let canonical: Vec<PathBuf> = roots
        .iter()
        .map(|r| fs::canonicalize(r).unwrap_or_else(|_| r.clone()))
        .collect();

    let mut kept = Vec::with_capacity(roots.len());
    for (i, root) in roots.into_iter().enumerate() {
        let this = &canonical[i];
        let shadowed = canonical.iter().enumerate().any(|(j, other)| {
            if i == j {
                return false;
            }
            // Identical roots: keep the first occurrence only.
            if this == other {
                return j < i;
            }
            this.starts_with(other)
        });

        if shadowed {
            log::debug!("Skipping root nested in another root: {}", root.display());
        } else {
            kept.push(root);
        }
    }
    kept
}
