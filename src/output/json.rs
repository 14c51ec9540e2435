//! JSON output formatter for duplicate scan results.
//!
//! Provides machine-readable JSON output for scripting and automation.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "duplicates": [
//!     {
//!       "hash": "af1349b9...",
//!       "size": 1024,
//!       "files": ["/path/to/file1.txt", "/path/to/file2.txt"]
//!     }
//!   ],
//!   "summary": {
//!     "total_files": 100,
//!     "total_size": 1048576,
//!     "empty_files": 3,
//!     "eliminated_by_size": 80,
//!     "files_hashed": 17,
//!     "bytes_hashed": 40960,
//!     "duplicate_groups": 5,
//!     "duplicate_files": 10,
//!     "reclaimable_space": 51200,
//!     "scan_duration_ms": 1234,
//!     "exit_code": 0,
//!     "exit_code_name": "DF000",
//!     "skipped": [{ "path": "/secret", "reason": "Can't open /secret: ..." }]
//!   }
//! }
//! ```

use std::io::Write;

use serde::Serialize;

use crate::duplicates::{DuplicateGroup, ScanSummary};
use crate::error::ExitCode;
use crate::scanner::ScanError;

/// A single duplicate group in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonDuplicateGroup {
    /// BLAKE3 hash as hexadecimal string (64 characters)
    pub hash: String,
    /// File size in bytes
    pub size: u64,
    /// Member paths, sorted, as discovered during the walk
    pub files: Vec<String>,
}

impl JsonDuplicateGroup {
    /// Create a JSON duplicate group from a DuplicateGroup.
    #[must_use]
    pub fn from_duplicate_group(group: &DuplicateGroup) -> Self {
        Self {
            hash: group.hash_hex(),
            size: group.size,
            files: group
                .files
                .iter()
                .map(|f| f.path.to_string_lossy().into_owned())
                .collect(),
        }
    }
}

/// A file that was left out of the results.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSkippedFile {
    /// Path of the skipped file
    pub path: String,
    /// Diagnostic message
    pub reason: String,
}

impl From<&ScanError> for JsonSkippedFile {
    fn from(err: &ScanError) -> Self {
        Self {
            path: err.path().to_string_lossy().into_owned(),
            reason: err.to_string(),
        }
    }
}

/// Summary statistics in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// Total number of regular files found
    pub total_files: usize,
    /// Total size of all scanned files in bytes
    pub total_size: u64,
    /// Empty files ignored
    pub empty_files: usize,
    /// Files ruled out because no other file had their size
    pub eliminated_by_size: usize,
    /// Files whose content was hashed
    pub files_hashed: usize,
    /// Bytes read while hashing
    pub bytes_hashed: u64,
    /// Number of confirmed duplicate groups
    pub duplicate_groups: usize,
    /// Total number of duplicate files (excluding originals)
    pub duplicate_files: usize,
    /// Total space that can be reclaimed by removing duplicates (bytes)
    pub reclaimable_space: u64,
    /// Duration of the scan in milliseconds
    pub scan_duration_ms: u64,
    /// The exit code number
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "DF000")
    pub exit_code_name: String,
    /// Files skipped because they couldn't be sized or read
    pub skipped: Vec<JsonSkippedFile>,
}

impl JsonSummary {
    /// Create a JSON summary from a ScanSummary and an exit code.
    #[must_use]
    pub fn from_scan_summary(summary: &ScanSummary, exit_code: ExitCode) -> Self {
        Self {
            total_files: summary.total_files,
            total_size: summary.total_size,
            empty_files: summary.empty_files,
            eliminated_by_size: summary.eliminated_by_size,
            files_hashed: summary.hashed_files,
            bytes_hashed: summary.bytes_hashed,
            duplicate_groups: summary.duplicate_groups,
            duplicate_files: summary.duplicate_files,
            reclaimable_space: summary.reclaimable_space,
            scan_duration_ms: summary.scan_duration.as_millis() as u64,
            exit_code: exit_code.as_i32(),
            exit_code_name: exit_code.code_prefix().to_string(),
            skipped: summary.scan_errors.iter().map(JsonSkippedFile::from).collect(),
        }
    }
}

/// Complete JSON output structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// List of duplicate groups
    pub duplicates: Vec<JsonDuplicateGroup>,
    /// Scan summary statistics
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Create a new JSON output from duplicate groups, summary and exit code.
    ///
    /// # Example
    ///
    /// ```
    /// use dupefind::duplicates::{DuplicateGroup, ScanSummary};
    /// use dupefind::error::ExitCode;
    /// use dupefind::output::json::JsonOutput;
    /// use dupefind::scanner::FileEntry;
    /// use std::path::PathBuf;
    ///
    /// let groups = vec![DuplicateGroup::new(
    ///     [0u8; 32],
    ///     1024,
    ///     vec![
    ///         FileEntry::new(PathBuf::from("/file1.txt"), 1024),
    ///         FileEntry::new(PathBuf::from("/file2.txt"), 1024),
    ///     ],
    /// )];
    ///
    /// let output = JsonOutput::new(&groups, &ScanSummary::default(), ExitCode::Success);
    /// assert_eq!(output.duplicates.len(), 1);
    /// ```
    #[must_use]
    pub fn new(groups: &[DuplicateGroup], summary: &ScanSummary, exit_code: ExitCode) -> Self {
        Self {
            duplicates: groups
                .iter()
                .map(JsonDuplicateGroup::from_duplicate_group)
                .collect(),
            summary: JsonSummary::from_scan_summary(summary, exit_code),
        }
    }

    /// Serialize to compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (unlikely for valid data).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (unlikely for valid data).
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write JSON to a writer, followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        pretty: bool,
    ) -> Result<(), JsonOutputError> {
        let json = if pretty {
            self.to_json_pretty()?
        } else {
            self.to_json()?
        };
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Errors that can occur during JSON output.
#[derive(thiserror::Error, Debug)]
pub enum JsonOutputError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error during writing
    #[error("I/O error during JSON generation: {0}")]
    Io(#[from] std::io::Error),
}

impl From<JsonOutputError> for std::io::Error {
    fn from(err: JsonOutputError) -> Self {
        match err {
            JsonOutputError::Io(e) => e,
            JsonOutputError::Serialization(e) => std::io::Error::other(e),
        }
    }
}
