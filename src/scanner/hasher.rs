//! BLAKE3 file hasher with streaming support.
//!
//! # Overview
//! This module provides the [`Hasher`] struct for computing BLAKE3 hashes
//! of complete file contents. Files are read once, front to back, through a
//! fixed-size buffer so memory use does not grow with file size.
//!
//! # Example
//!
//! ```no_run
//! use dupefind::scanner::{hash_to_hex, Hasher};
//! use std::path::Path;
//!
//! let hasher = Hasher::new();
//! let hash = hasher.full_hash(Path::new("photo.jpg")).unwrap();
//! println!("{}", hash_to_hex(&hash));
//! ```

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A 256-bit BLAKE3 content digest.
pub type Hash = [u8; 32];

/// Default read buffer size (64 KiB).
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Errors that can occur during file hashing.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The specified file was not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Hashing was abandoned because shutdown was requested.
    #[error("Hashing interrupted: {0}")]
    Interrupted(PathBuf),
}

impl HashError {
    fn from_io(path: &Path, error: std::io::Error) -> Self {
        match error.kind() {
            ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }
}

/// Streaming BLAKE3 hasher.
///
/// Cheap to share between threads behind an `Arc`; each call opens its own
/// file handle and buffer.
#[derive(Debug, Clone)]
pub struct Hasher {
    buffer_size: usize,
    shutdown_flag: Option<Arc<AtomicBool>>,
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher {
    /// Create a hasher with the default buffer size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            shutdown_flag: None,
        }
    }

    /// Use a custom read buffer size (minimum 1 byte).
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size.max(1);
        self
    }

    /// Set the shutdown flag checked between read chunks.
    #[must_use]
    pub fn with_shutdown_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.shutdown_flag = Some(flag);
        self
    }

    /// Read buffer size in bytes.
    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    fn is_shutdown_requested(&self) -> bool {
        self.shutdown_flag
            .as_ref()
            .is_some_and(|f| f.load(Ordering::SeqCst))
    }

    /// Hash the entire content of a file.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if the file cannot be opened or read, or if
    /// shutdown is requested while reading.
    pub fn full_hash(&self, path: &Path) -> Result<Hash, HashError> {
        let file = File::open(path).map_err(|e| HashError::from_io(path, e))?;
        self.hash_reader(path, file)
    }

    /// Hash everything a reader yields. `path` is only used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] on read failure or shutdown.
    pub fn hash_reader<R: Read>(&self, path: &Path, mut reader: R) -> Result<Hash, HashError> {
        let mut hasher = blake3::Hasher::new();
        let mut buffer = vec![0u8; self.buffer_size];

        loop {
            if self.is_shutdown_requested() {
                return Err(HashError::Interrupted(path.to_path_buf()));
            }
            let n = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(HashError::from_io(path, e)),
            };
            hasher.update(&buffer[..n]);
        }

        Ok(*hasher.finalize().as_bytes())
    }
}

/// Render a hash as lowercase hexadecimal (64 characters).
#[must_use]
pub fn hash_to_hex(hash: &Hash) -> String {
    blake3::Hash::from(*hash).to_hex().to_string()
}

/// Parse a 64-character hexadecimal string back into a hash.
#[must_use]
pub fn hex_to_hash(hex: &str) -> Option<Hash> {
    blake3::Hash::from_hex(hex).ok().map(|h| *h.as_bytes())
}
