//! Duplicate grouping and size-based file organization.
//!
//! # Overview
//!
//! This module holds the grouping primitives shared by both detection
//! phases: bucketing files by size, purging buckets that cannot hold a
//! duplicate, and putting bucket members into a canonical order.
//!
//! ## Size Grouping (Phase 1)
//!
//! Files with different sizes cannot be duplicates, so grouping by size
//! removes most files from consideration without reading any content.
//! Zero-byte files are dropped here: every empty file trivially matches
//! every other one, which tells the user nothing.
//!
//! # Example
//!
//! ```
//! use dupefind::scanner::FileEntry;
//! use dupefind::duplicates::group_by_size;
//! use std::path::PathBuf;
//!
//! let files = vec![
//!     FileEntry::new(PathBuf::from("/file1.txt"), 1024),
//!     FileEntry::new(PathBuf::from("/file2.txt"), 1024),
//!     FileEntry::new(PathBuf::from("/file3.txt"), 2048),
//! ];
//!
//! let (groups, stats) = group_by_size(files);
//!
//! assert_eq!(stats.total_files, 3);
//! assert_eq!(stats.potential_duplicates, 2);
//! assert_eq!(groups.len(), 1);
//! ```

use std::collections::HashMap;
use std::hash::Hash as StdHash;
use std::path::PathBuf;

use crate::scanner::{FileEntry, Hash};

/// Files keyed by size in bytes.
pub type SizeGroups = HashMap<u64, Vec<FileEntry>>;

/// Files keyed by full-content digest.
pub type DigestGroups = HashMap<Hash, Vec<FileEntry>>;

/// Owned view of one size bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeGroup {
    /// File size in bytes shared by every member
    pub size: u64,
    /// Members, sorted by path
    pub files: Vec<FileEntry>,
}

impl SizeGroup {
    /// Create a size group. Members are sorted by path.
    #[must_use]
    pub fn new(size: u64, mut files: Vec<FileEntry>) -> Self {
        sort_entries(&mut files);
        Self { size, files }
    }

    /// Split a size map into owned groups ordered by ascending size.
    #[must_use]
    pub fn from_size_groups(groups: SizeGroups) -> Vec<Self> {
        let mut out: Vec<Self> = groups
            .into_iter()
            .map(|(size, files)| Self::new(size, files))
            .collect();
        out.sort_unstable_by_key(|g| g.size);
        out
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Bytes that would have to be read to hash every member.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.size * self.files.len() as u64
    }
}

/// Confirmed duplicate group of files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// BLAKE3 hash of the file content
    pub hash: Hash,
    /// File size in bytes as seen during the size phase
    pub size: u64,
    /// Members, sorted by path
    pub files: Vec<FileEntry>,
}

impl DuplicateGroup {
    /// Create a new duplicate group. Members are sorted by path.
    #[must_use]
    pub fn new(hash: Hash, size: u64, mut files: Vec<FileEntry>) -> Self {
        sort_entries(&mut files);
        Self { hash, size, files }
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total wasted space (all copies minus one).
    #[must_use]
    pub fn wasted_space(&self) -> u64 {
        self.size * self.duplicate_count() as u64
    }

    /// Number of duplicate copies (total - 1 original).
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.files.len().saturating_sub(1)
    }

    /// Hash as hexadecimal string.
    #[must_use]
    pub fn hash_hex(&self) -> String {
        crate::scanner::hash_to_hex(&self.hash)
    }

    /// Get just the paths of files in this group.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| f.path.clone()).collect()
    }
}

/// Statistics from size grouping phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingStats {
    /// Total number of files processed
    pub total_files: usize,
    /// Total size of all files in bytes
    pub total_size: u64,
    /// Number of distinct non-zero file sizes
    pub unique_sizes: usize,
    /// Number of files that could be duplicates (in groups of 2+)
    pub potential_duplicates: usize,
    /// Number of files eliminated as unique (singleton groups)
    pub eliminated_unique: usize,
    /// Number of empty files skipped
    pub empty_files: usize,
    /// Number of size groups with 2+ files
    pub duplicate_groups: usize,
}

impl GroupingStats {
    /// Percentage of files eliminated by size grouping.
    #[must_use]
    pub fn elimination_rate(&self) -> f64 {
        if self.total_files == 0 {
            0.0
        } else {
            let eliminated = self.eliminated_unique + self.empty_files;
            (eliminated as f64 / self.total_files as f64) * 100.0
        }
    }
}

/// Remove every bucket holding fewer than two members.
///
/// Works for any key, so both the size phase and the digest phase share it.
/// Returns the map and the number of buckets removed.
///
/// # Example
///
/// ```
/// use dupefind::duplicates::purge_uniques;
/// use std::collections::HashMap;
///
/// let mut map: HashMap<u64, Vec<&str>> = HashMap::new();
/// map.insert(1, vec!["a", "b"]);
/// map.insert(2, vec!["c"]);
///
/// let (map, purged) = purge_uniques(map);
/// assert_eq!(map.len(), 1);
/// assert_eq!(purged, 1);
/// ```
#[must_use]
pub fn purge_uniques<K, V>(mut map: HashMap<K, Vec<V>>) -> (HashMap<K, Vec<V>>, usize)
where
    K: Eq + StdHash,
{
    let before = map.len();
    map.retain(|_, members| members.len() > 1);
    let purged = before - map.len();
    (map, purged)
}

/// Sort the members of every bucket by path string.
pub fn sort_members<K>(map: &mut HashMap<K, Vec<FileEntry>>) {
    for files in map.values_mut() {
        sort_entries(files);
    }
}

/// Sort entries by their path's raw string form, ascending.
///
/// Byte-wise `OsStr` order rather than `Path` component order, so
/// `a/b` sorts after `a.b` exactly as a plain string sort would.
pub fn sort_entries(files: &mut [FileEntry]) {
    files.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));
}

/// Group files by size (Phase 1 of duplicate detection).
///
/// Empty files are skipped; groups with fewer than two files are purged.
///
/// # Performance
///
/// - Time complexity: O(n) where n is the number of files
/// - No file I/O is performed (metadata only)
///
/// # Example
///
/// ```
/// use dupefind::scanner::FileEntry;
/// use dupefind::duplicates::group_by_size;
/// use std::path::PathBuf;
///
/// let files = vec![
///     FileEntry::new(PathBuf::from("/a.txt"), 100),
///     FileEntry::new(PathBuf::from("/b.txt"), 100),
///     FileEntry::new(PathBuf::from("/c.txt"), 200),
///     FileEntry::new(PathBuf::from("/empty1"), 0),
///     FileEntry::new(PathBuf::from("/empty2"), 0),
/// ];
///
/// let (groups, stats) = group_by_size(files);
///
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[&100].len(), 2);
/// assert_eq!(stats.eliminated_unique, 1);
/// assert_eq!(stats.empty_files, 2);
/// ```
#[must_use]
pub fn group_by_size(files: impl IntoIterator<Item = FileEntry>) -> (SizeGroups, GroupingStats) {
    let mut all_groups: SizeGroups = HashMap::new();
    let mut stats = GroupingStats::default();

    for file in files {
        stats.total_files += 1;
        stats.total_size += file.size;

        if file.size == 0 {
            stats.empty_files += 1;
            log::trace!("Skipping empty file: {}", file.path.display());
            continue;
        }

        all_groups.entry(file.size).or_default().push(file);
    }

    if stats.empty_files > 0 {
        log::debug!(
            "Skipped {} empty file(s) - all empty files have identical content",
            stats.empty_files
        );
    }

    stats.unique_sizes = all_groups.len();

    let (mut groups, purged) = purge_uniques(all_groups);
    stats.eliminated_unique = purged;
    stats.duplicate_groups = groups.len();
    stats.potential_duplicates = groups.values().map(Vec::len).sum();

    sort_members(&mut groups);

    log::debug!(
        "Size grouping: {} files → {} candidates in {} groups ({:.1}% eliminated)",
        stats.total_files,
        stats.potential_duplicates,
        stats.duplicate_groups,
        stats.elimination_rate()
    );

    (groups, stats)
}
