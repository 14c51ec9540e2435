//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Size-based candidate indexing (Phase 1)
//! - Full-content hash confirmation (Phase 2)
//! - Duplicate group management

pub mod finder;
pub mod groups;

pub use finder::{
    format_size, index_by_size, into_duplicate_groups, resolve_by_content, validate_roots,
    DuplicateFinder, FinderConfig, FinderError, IndexConfig, IndexStats, ResolveConfig,
    ResolveStats, ScanSummary,
};
pub use groups::{
    group_by_size, purge_uniques, sort_entries, sort_members, DigestGroups, DuplicateGroup,
    GroupingStats, SizeGroup, SizeGroups,
};
