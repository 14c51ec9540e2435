#![cfg(unix)]

use dupefind::duplicates::{DuplicateFinder, FinderConfig};
use dupefind::scanner::{ScanError, WalkerConfig};
use std::fs::{self, File};
use std::io::Write;
use std::os::unix::fs::symlink;
use tempfile::tempdir;

fn finder(follow_dirs: bool, follow_files: bool) -> DuplicateFinder {
    DuplicateFinder::new(
        FinderConfig::default().with_walker_config(WalkerConfig::new(follow_dirs, follow_files)),
    )
}

#[test]
fn test_file_symlink_followed_by_default() {
    let dir = tempdir().unwrap();
    let original = dir.path().join("original.txt");
    File::create(&original)
        .unwrap()
        .write_all(b"linked content")
        .unwrap();
    symlink(&original, dir.path().join("link.txt")).unwrap();

    let (groups, _) = DuplicateFinder::with_defaults()
        .find_duplicates(&[dir.path().to_path_buf()])
        .unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 2);
    assert!(groups[0].files.iter().any(|f| f.is_symlink));
}

#[test]
fn test_file_symlink_skipped_when_disabled() {
    let dir = tempdir().unwrap();
    let original = dir.path().join("original.txt");
    File::create(&original)
        .unwrap()
        .write_all(b"linked content")
        .unwrap();
    symlink(&original, dir.path().join("link.txt")).unwrap();

    let (groups, summary) = finder(true, false)
        .find_duplicates(&[dir.path().to_path_buf()])
        .unwrap();

    assert!(groups.is_empty());
    assert_eq!(summary.total_files, 1);
    assert!(summary.scan_errors.is_empty());
}

#[test]
fn test_dir_symlink_followed_by_default() {
    let outside = tempdir().unwrap();
    File::create(outside.path().join("shared.bin"))
        .unwrap()
        .write_all(b"shared payload")
        .unwrap();

    let dir = tempdir().unwrap();
    File::create(dir.path().join("local.bin"))
        .unwrap()
        .write_all(b"shared payload")
        .unwrap();
    symlink(outside.path(), dir.path().join("linked_dir")).unwrap();

    let (groups, _) = DuplicateFinder::with_defaults()
        .find_duplicates(&[dir.path().to_path_buf()])
        .unwrap();

    assert_eq!(groups.len(), 1);
    assert!(groups[0]
        .files
        .iter()
        .any(|f| f.path.starts_with(dir.path().join("linked_dir"))));
}

#[test]
fn test_dir_symlink_not_descended_when_disabled() {
    let outside = tempdir().unwrap();
    File::create(outside.path().join("shared.bin"))
        .unwrap()
        .write_all(b"shared payload")
        .unwrap();

    let dir = tempdir().unwrap();
    File::create(dir.path().join("local.bin"))
        .unwrap()
        .write_all(b"shared payload")
        .unwrap();
    symlink(outside.path(), dir.path().join("linked_dir")).unwrap();

    let (groups, summary) = finder(false, true)
        .find_duplicates(&[dir.path().to_path_buf()])
        .unwrap();

    assert!(groups.is_empty());
    assert_eq!(summary.total_files, 1);
}

#[test]
fn test_dangling_symlink_reported_and_skipped() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("a"))
        .unwrap()
        .write_all(b"pair")
        .unwrap();
    File::create(dir.path().join("b"))
        .unwrap()
        .write_all(b"pair")
        .unwrap();
    symlink(dir.path().join("gone"), dir.path().join("dangling")).unwrap();

    let (groups, summary) = DuplicateFinder::with_defaults()
        .find_duplicates(&[dir.path().to_path_buf()])
        .unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(summary.scan_errors.len(), 1);
    assert!(matches!(
        summary.scan_errors[0],
        ScanError::StatFailure { .. }
    ));
    assert!(summary.scan_errors[0].path().ends_with("dangling"));
}

#[test]
fn test_dangling_symlink_ignored_when_file_links_disabled() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("a"))
        .unwrap()
        .write_all(b"pair")
        .unwrap();
    File::create(dir.path().join("b"))
        .unwrap()
        .write_all(b"pair")
        .unwrap();
    symlink(dir.path().join("gone"), dir.path().join("dangling")).unwrap();

    let (groups, summary) = finder(true, false)
        .find_duplicates(&[dir.path().to_path_buf()])
        .unwrap();

    assert_eq!(groups.len(), 1);
    assert!(summary.scan_errors.is_empty());
    assert!(!summary.has_errors());
}

#[test]
fn test_hardlinks_reported_as_duplicates() {
    let dir = tempdir().unwrap();
    let original = dir.path().join("original.txt");
    File::create(&original)
        .unwrap()
        .write_all(b"same inode")
        .unwrap();
    fs::hard_link(&original, dir.path().join("hardlink.txt")).unwrap();

    let (groups, _) = DuplicateFinder::with_defaults()
        .find_duplicates(&[dir.path().to_path_buf()])
        .unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 2);
}
