//! Duplicate finder implementation with two-phase detection.
//!
//! # Overview
//!
//! This module orchestrates the duplicate detection pipeline:
//! 1. **Phase 1 - Size indexing**: Walk the roots and group files by size
//!    (see [`crate::duplicates::groups`] module)
//! 2. **Phase 2 - Content resolution**: Hash the entire content of every
//!    size-matched file and group by digest
//!
//! Per-file failures in either phase are collected as [`ScanError`]
//! diagnostics; only an invalid root list or an interrupt aborts a run.
//!
//! # Example
//!
//! ```no_run
//! use dupefind::duplicates::{index_by_size, resolve_by_content, IndexConfig, ResolveConfig};
//! use dupefind::scanner::Hasher;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! // Phase 1: Collect and group files by size
//! let roots = vec![PathBuf::from(".")];
//! let (size_groups, index_stats) = index_by_size(&roots, &IndexConfig::default()).unwrap();
//!
//! // Phase 2: Confirm by full-content hash
//! let hasher = Arc::new(Hasher::new());
//! let (digest_groups, stats) = resolve_by_content(size_groups, hasher, ResolveConfig::default());
//!
//! println!("{} distinct contents have duplicates", stats.duplicate_groups);
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::prelude::*;

use super::groups::{
    group_by_size, purge_uniques, sort_members, DigestGroups, DuplicateGroup,
    GroupingStats, SizeGroups,
};
use crate::progress::ProgressCallback;
use crate::scanner::{FileEntry, Hash, HashError, Hasher, ScanError, WalkerConfig};

/// Threshold for logging large files.
const LARGE_FILE_THRESHOLD: u64 = 100 * 1024 * 1024; // 100MB

/// Errors that abort a duplicate scan.
#[derive(thiserror::Error, Debug)]
pub enum FinderError {
    /// No root paths were supplied.
    #[error("No input paths given")]
    NoRoots,

    /// One or more root paths do not exist. Lists every bad root.
    #[error("Not an existing path: {}", join_paths(.0))]
    InvalidRoot(Vec<PathBuf>),

    /// The scan was interrupted by user (Ctrl+C or shutdown signal).
    #[error("Scan interrupted by user")]
    Interrupted,
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check that every root exists before any traversal.
///
/// Validation is exhaustive: all missing roots are reported together.
///
/// # Errors
///
/// [`FinderError::NoRoots`] for an empty list, [`FinderError::InvalidRoot`]
/// naming every root that does not exist.
pub fn validate_roots(roots: &[PathBuf]) -> Result<(), FinderError> {
    if roots.is_empty() {
        return Err(FinderError::NoRoots);
    }

    let missing: Vec<PathBuf> = roots
        .iter()
        .filter(|root| {
            let exists = root.exists();
            if !exists {
                log::debug!("Root does not exist: {}", root.display());
            }
            !exists
        })
        .cloned()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(FinderError::InvalidRoot(missing))
    }
}

fn flag_is_set(flag: &Option<Arc<AtomicBool>>) -> bool {
    flag.as_ref().is_some_and(|f| f.load(Ordering::SeqCst))
}

// ============================================================================
// Phase 1 - Candidate indexing
// ============================================================================

/// Configuration for the size indexing phase.
#[derive(Clone, Default)]
pub struct IndexConfig {
    /// Symlink policy for traversal.
    pub walker_config: WalkerConfig,
    /// Optional shutdown flag for graceful termination.
    pub shutdown_flag: Option<Arc<AtomicBool>>,
    /// Optional progress callback.
    pub progress_callback: Option<Arc<dyn ProgressCallback>>,
}

impl std::fmt::Debug for IndexConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexConfig")
            .field("walker_config", &self.walker_config)
            .field("shutdown_flag", &self.shutdown_flag)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<callback>"),
            )
            .finish()
    }
}

/// Statistics from the size indexing phase.
#[derive(Debug, Default)]
pub struct IndexStats {
    /// Roots actually walked after overlap pruning
    pub roots_walked: usize,
    /// Size grouping statistics
    pub grouping: GroupingStats,
    /// Files that could not be sized
    pub errors: Vec<ScanError>,
}

/// Walk the roots and group every regular file by size (Phase 1).
///
/// Roots are validated up front; a missing root fails the whole call
/// before anything is read. Files that cannot be sized are skipped and
/// returned in [`IndexStats::errors`].
///
/// # Errors
///
/// Returns [`FinderError::NoRoots`], [`FinderError::InvalidRoot`], or
/// [`FinderError::Interrupted`].
pub fn index_by_size(
    roots: &[PathBuf],
    config: &IndexConfig,
) -> Result<(SizeGroups, IndexStats), FinderError> {
    validate_roots(roots)?;

    let mut multi_walker =
        crate::scanner::walker::MultiWalker::new(roots.to_vec(), config.walker_config.clone());
    if let Some(ref flag) = config.shutdown_flag {
        multi_walker = multi_walker.with_shutdown_flag(Arc::clone(flag));
    }

    log::info!(
        "Creating candidates for duplicates based on filesize in {} root(s)",
        multi_walker.roots().len()
    );

    if let Some(ref callback) = config.progress_callback {
        callback.on_phase_start("walking", 0);
    }

    let mut files = Vec::new();
    let mut errors = Vec::new();
    for result in multi_walker.walk() {
        match result {
            Ok(file) => {
                if let Some(ref callback) = config.progress_callback {
                    callback.on_progress(files.len() + 1, file.path.to_string_lossy().as_ref());
                }
                files.push(file);
            }
            Err(e) => errors.push(e),
        }
    }

    if let Some(ref callback) = config.progress_callback {
        callback.on_phase_end("walking");
    }

    if flag_is_set(&config.shutdown_flag) {
        log::info!("Phase 1: Interrupted by shutdown signal");
        return Err(FinderError::Interrupted);
    }

    let (groups, grouping) = group_by_size(files);

    log::info!(
        "Found {} unique filesizes that are duplicate candidates.",
        groups.len()
    );

    Ok((
        groups,
        IndexStats {
            roots_walked: multi_walker.roots().len(),
            grouping,
            errors,
        },
    ))
}

// ============================================================================
// Phase 2 - Content resolution
// ============================================================================

/// Configuration for the content resolution phase.
#[derive(Clone)]
pub struct ResolveConfig {
    /// Number of I/O threads for parallel hashing.
    /// Default is 4 to prevent disk thrashing; 1 hashes sequentially.
    pub io_threads: usize,
    /// Optional shutdown flag for graceful termination.
    pub shutdown_flag: Option<Arc<AtomicBool>>,
    /// Optional progress callback.
    pub progress_callback: Option<Arc<dyn ProgressCallback>>,
}

impl std::fmt::Debug for ResolveConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolveConfig")
            .field("io_threads", &self.io_threads)
            .field("shutdown_flag", &self.shutdown_flag)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<callback>"),
            )
            .finish()
    }
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            io_threads: 4,
            shutdown_flag: None,
            progress_callback: None,
        }
    }
}

impl ResolveConfig {
    /// Create a new configuration with custom I/O thread count.
    #[must_use]
    pub fn with_io_threads(mut self, threads: usize) -> Self {
        self.io_threads = threads.max(1);
        self
    }

    /// Set the shutdown flag for graceful termination.
    #[must_use]
    pub fn with_shutdown_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.shutdown_flag = Some(flag);
        self
    }

    /// Set the progress callback.
    #[must_use]
    pub fn with_progress_callback(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    fn is_shutdown_requested(&self) -> bool {
        flag_is_set(&self.shutdown_flag)
    }
}

/// Statistics from the content resolution phase.
#[derive(Debug, Default)]
pub struct ResolveStats {
    /// Total files that entered Phase 2
    pub input_files: usize,
    /// Number of files successfully hashed
    pub hashed_files: usize,
    /// Number of files that could not be read
    pub failed_files: usize,
    /// Read failures, one per skipped file
    pub errors: Vec<ScanError>,
    /// Total bytes hashed across all files
    pub bytes_hashed: u64,
    /// Number of confirmed duplicate groups
    pub duplicate_groups: usize,
    /// Number of confirmed duplicate files (excluding originals)
    pub duplicate_files: usize,
    /// Whether phase was interrupted by shutdown
    pub interrupted: bool,
}

/// What happened to one candidate during hashing.
enum HashOutcome {
    Hashed(Hash),
    Failed(HashError),
    Skipped,
}

/// Hash every size-matched file and group by digest (Phase 2).
///
/// The size keys are discarded; only group membership matters. Each file is
/// read in full exactly once. Unreadable files are skipped with one
/// [`ScanError::ReadFailure`] naming the absolute path. Buckets left with
/// fewer than two members are dropped and survivors are sorted by path.
///
/// When shutdown is requested the returned map is empty and
/// [`ResolveStats::interrupted`] is set.
///
/// # Performance
///
/// - Runs on a dedicated rayon pool of `io_threads` workers
/// - Results are merged on the calling thread, so the map needs no lock
#[must_use]
pub fn resolve_by_content(
    size_groups: SizeGroups,
    hasher: Arc<Hasher>,
    config: ResolveConfig,
) -> (DigestGroups, ResolveStats) {
    let candidates: Vec<FileEntry> = size_groups.into_values().flatten().collect();
    let mut stats = ResolveStats {
        input_files: candidates.len(),
        ..Default::default()
    };

    if candidates.is_empty() {
        log::debug!("Phase 2: No files to process");
        return (DigestGroups::new(), stats);
    }

    if let Some(ref callback) = config.progress_callback {
        callback.on_phase_start("hashing", candidates.len());
    }

    log::info!(
        "Building content hashes of {} files (this may take a while)",
        candidates.len()
    );

    let processed = AtomicUsize::new(0);
    let hash_all = || -> Vec<(FileEntry, HashOutcome)> {
        candidates
            .into_par_iter()
            .map(|file| {
                if config.is_shutdown_requested() {
                    return (file, HashOutcome::Skipped);
                }

                if file.size > LARGE_FILE_THRESHOLD {
                    log::debug!(
                        "Hashing large file ({} MB): {}",
                        file.size / (1024 * 1024),
                        file.path.display()
                    );
                }

                if let Some(ref callback) = config.progress_callback {
                    let current = processed.fetch_add(1, Ordering::Relaxed) + 1;
                    callback.on_progress(current, file.path.to_string_lossy().as_ref());
                }

                match hasher.full_hash(&file.path) {
                    Ok(hash) => {
                        log::trace!("Hash computed: {}", file.path.display());
                        if let Some(ref callback) = config.progress_callback {
                            callback.on_item_completed(file.size);
                        }
                        (file, HashOutcome::Hashed(hash))
                    }
                    Err(HashError::Interrupted(_)) => (file, HashOutcome::Skipped),
                    Err(e) => (file, HashOutcome::Failed(e)),
                }
            })
            .collect()
    };

    let results = match rayon::ThreadPoolBuilder::new()
        .num_threads(config.io_threads.max(1))
        .build()
    {
        Ok(pool) => pool.install(hash_all),
        Err(e) => {
            log::warn!(
                "Failed to create hashing thread pool ({}), using global pool with {} threads",
                e,
                rayon::current_num_threads()
            );
            hash_all()
        }
    };

    if let Some(ref callback) = config.progress_callback {
        callback.on_phase_end("hashing");
    }

    if config.is_shutdown_requested() {
        stats.interrupted = true;
        log::info!("Phase 2: Interrupted by shutdown signal");
        return (DigestGroups::new(), stats);
    }

    let mut digest_groups = DigestGroups::new();
    for (file, outcome) in results {
        match outcome {
            HashOutcome::Hashed(hash) => {
                stats.hashed_files += 1;
                stats.bytes_hashed += file.size;
                digest_groups.entry(hash).or_default().push(file);
            }
            HashOutcome::Failed(e) => {
                stats.failed_files += 1;
                stats.errors.push(read_failure(&file.path, e));
            }
            HashOutcome::Skipped => {}
        }
    }

    let (mut digest_groups, purged) = purge_uniques(digest_groups);
    sort_members(&mut digest_groups);

    stats.duplicate_groups = digest_groups.len();
    stats.duplicate_files = digest_groups
        .values()
        .map(|files| files.len().saturating_sub(1))
        .sum();

    log::info!(
        "Phase 2 complete: {} hashed, {} unique contents discarded, {} duplicate groups",
        stats.hashed_files,
        purged,
        stats.duplicate_groups
    );

    (digest_groups, stats)
}

/// Build a read failure diagnostic naming the absolute path, logging it once.
fn read_failure(path: &Path, error: HashError) -> ScanError {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    log::warn!("Can't open {}: {}", absolute.display(), error);
    ScanError::ReadFailure {
        path: absolute,
        source: error,
    }
}

/// Turn the digest map into groups ordered by first member path.
#[must_use]
pub fn into_duplicate_groups(digest_groups: DigestGroups) -> Vec<DuplicateGroup> {
    let mut groups: Vec<DuplicateGroup> = digest_groups
        .into_iter()
        .map(|(hash, files)| {
            let size = files.first().map_or(0, |f| f.size);
            log::debug!(
                "Duplicate group {}: {} files, {} bytes each",
                crate::scanner::hash_to_hex(&hash),
                files.len(),
                size
            );
            DuplicateGroup::new(hash, size, files)
        })
        .collect();

    groups.sort_by(|a, b| first_path(a).cmp(&first_path(b)));
    groups
}

fn first_path(group: &DuplicateGroup) -> Option<&OsStr> {
    group.files.first().map(|f| f.path.as_os_str())
}

// ============================================================================
// DuplicateFinder - Pipeline Orchestrator
// ============================================================================

/// Configuration for the duplicate finder.
#[derive(Clone)]
pub struct FinderConfig {
    /// Number of I/O threads for parallel hashing.
    /// Default is 4 to prevent disk thrashing.
    pub io_threads: usize,
    /// Walker configuration for directory traversal.
    pub walker_config: WalkerConfig,
    /// Optional shutdown flag for graceful termination.
    pub shutdown_flag: Option<Arc<AtomicBool>>,
    /// Optional progress callback for reporting.
    pub progress_callback: Option<Arc<dyn ProgressCallback>>,
}

impl std::fmt::Debug for FinderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinderConfig")
            .field("io_threads", &self.io_threads)
            .field("walker_config", &self.walker_config)
            .field("shutdown_flag", &self.shutdown_flag)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<callback>"),
            )
            .finish()
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            io_threads: 4,
            walker_config: WalkerConfig::default(),
            shutdown_flag: None,
            progress_callback: None,
        }
    }
}

impl FinderConfig {
    /// Create a new configuration with custom I/O thread count.
    #[must_use]
    pub fn with_io_threads(mut self, threads: usize) -> Self {
        self.io_threads = threads.max(1);
        self
    }

    /// Set the walker configuration.
    #[must_use]
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    /// Set the shutdown flag for graceful termination.
    #[must_use]
    pub fn with_shutdown_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.shutdown_flag = Some(flag);
        self
    }

    /// Set the progress callback.
    #[must_use]
    pub fn with_progress_callback(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Check if shutdown has been requested.
    fn is_shutdown_requested(&self) -> bool {
        flag_is_set(&self.shutdown_flag)
    }

    fn index_config(&self) -> IndexConfig {
        IndexConfig {
            walker_config: self.walker_config.clone(),
            shutdown_flag: self.shutdown_flag.clone(),
            progress_callback: self.progress_callback.clone(),
        }
    }

    fn resolve_config(&self) -> ResolveConfig {
        ResolveConfig {
            io_threads: self.io_threads,
            shutdown_flag: self.shutdown_flag.clone(),
            progress_callback: self.progress_callback.clone(),
        }
    }
}

/// Summary statistics from a duplicate scan.
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// Number of roots walked after overlap pruning
    pub roots_scanned: usize,
    /// Total number of regular files found (including empty ones)
    pub total_files: usize,
    /// Total size of all scanned files in bytes
    pub total_size: u64,
    /// Number of empty files skipped
    pub empty_files: usize,
    /// Number of files eliminated by size grouping (unique sizes)
    pub eliminated_by_size: usize,
    /// Number of size-matched files that entered content hashing
    pub candidates: usize,
    /// Number of files whose content was hashed
    pub hashed_files: usize,
    /// Total bytes read while hashing
    pub bytes_hashed: u64,
    /// Number of confirmed duplicate groups
    pub duplicate_groups: usize,
    /// Total number of duplicate files (excluding originals)
    pub duplicate_files: usize,
    /// Total space that could be reclaimed by removing duplicates
    pub reclaimable_space: u64,
    /// Duration of the entire scan
    pub scan_duration: Duration,
    /// Whether the scan was interrupted
    pub interrupted: bool,
    /// Per-file diagnostics: files skipped because they couldn't be sized or read
    pub scan_errors: Vec<ScanError>,
}

impl ScanSummary {
    /// Whether any file was skipped.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.scan_errors.is_empty()
    }

    /// Format reclaimable space as human-readable string.
    #[must_use]
    pub fn reclaimable_display(&self) -> String {
        format_size(self.reclaimable_space)
    }

    /// Format total size as human-readable string.
    #[must_use]
    pub fn total_size_display(&self) -> String {
        format_size(self.total_size)
    }

    fn absorb_index(&mut self, stats: IndexStats) {
        self.roots_scanned = stats.roots_walked;
        self.total_files = stats.grouping.total_files;
        self.total_size = stats.grouping.total_size;
        self.empty_files = stats.grouping.empty_files;
        self.eliminated_by_size = stats.grouping.eliminated_unique;
        self.candidates = stats.grouping.potential_duplicates;
        self.scan_errors.extend(stats.errors);
    }

    fn absorb_resolve(&mut self, stats: ResolveStats, groups: &[DuplicateGroup]) {
        self.hashed_files = stats.hashed_files;
        self.bytes_hashed = stats.bytes_hashed;
        self.duplicate_groups = groups.len();
        self.duplicate_files = groups.iter().map(DuplicateGroup::duplicate_count).sum();
        self.reclaimable_space = groups.iter().map(DuplicateGroup::wasted_space).sum();
        self.scan_errors.extend(stats.errors);
    }
}

/// Format a byte size as a human-readable string.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Duplicate finder that orchestrates the two-phase detection pipeline.
///
/// # Example
///
/// ```no_run
/// use dupefind::duplicates::{DuplicateFinder, FinderConfig};
/// use std::path::PathBuf;
///
/// let finder = DuplicateFinder::new(FinderConfig::default().with_io_threads(2));
/// let (groups, summary) = finder
///     .find_duplicates(&[PathBuf::from("/backups"), PathBuf::from("/media")])
///     .unwrap();
///
/// println!("Found {} unique files with at least 1 duplicate", groups.len());
/// println!("Reclaimable space: {}", summary.reclaimable_display());
/// ```
pub struct DuplicateFinder {
    config: FinderConfig,
    hasher: Arc<Hasher>,
}

impl DuplicateFinder {
    /// Create a new duplicate finder with the given configuration.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        let mut hasher = Hasher::new();
        if let Some(ref flag) = config.shutdown_flag {
            hasher = hasher.with_shutdown_flag(Arc::clone(flag));
        }
        Self {
            config,
            hasher: Arc::new(hasher),
        }
    }

    /// Create a new duplicate finder with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(FinderConfig::default())
    }

    /// Find all duplicate files under the given roots.
    ///
    /// # Errors
    ///
    /// Returns `FinderError` if:
    /// - No roots are given
    /// - Any root does not exist (all missing roots are listed)
    /// - The scan is interrupted by shutdown signal
    pub fn find_duplicates(
        &self,
        roots: &[PathBuf],
    ) -> Result<(Vec<DuplicateGroup>, ScanSummary), FinderError> {
        let start_time = Instant::now();
        let mut summary = ScanSummary::default();

        log::info!("Starting duplicate scan of {} path(s)", roots.len());

        if self.config.is_shutdown_requested() {
            return Err(FinderError::Interrupted);
        }

        let (size_groups, index_stats) = index_by_size(roots, &self.config.index_config())?;
        summary.absorb_index(index_stats);

        self.resolve(size_groups, summary, start_time)
    }

    /// Find duplicates among a pre-collected list of files.
    ///
    /// Use this when files come from another source than the walker.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Interrupted`] if shutdown is requested.
    pub fn find_duplicates_from_files(
        &self,
        files: Vec<FileEntry>,
    ) -> Result<(Vec<DuplicateGroup>, ScanSummary), FinderError> {
        let start_time = Instant::now();
        let mut summary = ScanSummary::default();

        if self.config.is_shutdown_requested() {
            return Err(FinderError::Interrupted);
        }

        let (size_groups, grouping) = group_by_size(files);
        summary.absorb_index(IndexStats {
            roots_walked: 0,
            grouping,
            errors: Vec::new(),
        });

        self.resolve(size_groups, summary, start_time)
    }

    fn resolve(
        &self,
        size_groups: SizeGroups,
        mut summary: ScanSummary,
        start_time: Instant,
    ) -> Result<(Vec<DuplicateGroup>, ScanSummary), FinderError> {
        if self.config.is_shutdown_requested() {
            return Err(FinderError::Interrupted);
        }

        if size_groups.is_empty() {
            log::info!("No potential duplicates found after size grouping");
            summary.scan_duration = start_time.elapsed();
            return Ok((Vec::new(), summary));
        }

        let (digest_groups, resolve_stats) = resolve_by_content(
            size_groups,
            Arc::clone(&self.hasher),
            self.config.resolve_config(),
        );

        if resolve_stats.interrupted || self.config.is_shutdown_requested() {
            return Err(FinderError::Interrupted);
        }

        let groups = into_duplicate_groups(digest_groups);
        summary.absorb_resolve(resolve_stats, &groups);
        summary.scan_duration = start_time.elapsed();

        log::info!(
            "Scan complete: {} duplicate groups, {} duplicate files, {} reclaimable, {} file(s) skipped",
            summary.duplicate_groups,
            summary.duplicate_files,
            summary.reclaimable_display(),
            summary.scan_errors.len()
        );

        Ok((groups, summary))
    }
}
