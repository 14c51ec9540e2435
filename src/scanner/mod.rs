//! Scanner module for directory traversal and file hashing.
//!
//! This module provides functionality for:
//! - Parallel directory walking using jwalk
//! - Full-content hashing with BLAKE3
//! - Per-file error reporting for best-effort scans
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory traversal and file discovery
//! - [`hasher`]: BLAKE3 file hashing (streaming)
//!
//! # Example
//!
//! ```no_run
//! use dupefind::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("."), WalkerConfig::default());
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(file) => println!("{}: {} bytes", file.path.display(), file.size),
//!         Err(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

pub mod hasher;
pub mod walker;

use std::path::PathBuf;

// Re-export main types
pub use hasher::{hash_to_hex, hex_to_hash, Hash, HashError, Hasher};
pub use walker::Walker;

/// A regular file discovered during the walk.
///
/// The path is the walk root as supplied by the caller joined with the
/// path below it, so it is absolute only if the root was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path to the file
    pub path: PathBuf,
    /// File size in bytes at scan time
    pub size: u64,
    /// Whether the path itself is a symbolic link to a regular file
    pub is_symlink: bool,
}

impl FileEntry {
    /// Create a new FileEntry.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the file
    /// * `size` - File size in bytes
    #[must_use]
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self {
            path,
            size,
            is_symlink: false,
        }
    }
}

/// Configuration for directory walking.
///
/// Symlinks to directories and symlinks to regular files are controlled
/// separately. Both are followed by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Descend into symbolic links that point at directories.
    /// Symlink cycles are reported as scan errors, not followed forever.
    pub follow_dir_symlinks: bool,

    /// Size and hash symbolic links that point at regular files through
    /// their target. When disabled such links are skipped silently.
    pub follow_file_symlinks: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_dir_symlinks: true,
            follow_file_symlinks: true,
        }
    }
}

impl WalkerConfig {
    /// Create a new configuration from CLI arguments.
    #[must_use]
    pub fn new(follow_dir_symlinks: bool, follow_file_symlinks: bool) -> Self {
        Self {
            follow_dir_symlinks,
            follow_file_symlinks,
        }
    }
}

/// A recoverable per-file failure.
///
/// The affected file is dropped from further processing; the scan carries on.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// The size of a file (or the listing of a directory) could not be read.
    #[error("Skipping file: couldn't get filesize of {path}: {source}")]
    StatFailure {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The content of a size-matched file could not be read.
    #[error("Can't open {path}: {source}")]
    ReadFailure {
        /// Absolute path of the unreadable file
        path: PathBuf,
        /// The underlying hashing error
        #[source]
        source: HashError,
    },
}

impl ScanError {
    /// Path of the file this error refers to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::StatFailure { path, .. } | Self::ReadFailure { path, .. } => path,
        }
    }

    /// Whether the failure happened while reading content (as opposed to sizing).
    #[must_use]
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::ReadFailure { .. })
    }
}
