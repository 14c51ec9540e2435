use dupefind::duplicates::{DuplicateFinder, FinderConfig, FinderError};
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tempfile::tempdir;

fn write(path: PathBuf, content: &[u8]) -> PathBuf {
    File::create(&path).unwrap().write_all(content).unwrap();
    path
}

#[test]
fn test_scan_empty_directory() {
    let dir = tempdir().unwrap();
    let finder = DuplicateFinder::with_defaults();

    let (groups, summary) = finder.find_duplicates(&[dir.path().to_path_buf()]).unwrap();

    assert!(groups.is_empty());
    assert_eq!(summary.total_files, 0);
    assert_eq!(summary.duplicate_groups, 0);
    assert!(summary.scan_errors.is_empty());
}

#[test]
fn test_scan_unique_files() {
    let dir = tempdir().unwrap();
    write(dir.path().join("a.txt"), b"content a");
    write(dir.path().join("b.txt"), b"content bb");
    write(dir.path().join("c.txt"), b"content ccc");

    let finder = DuplicateFinder::with_defaults();
    let (groups, summary) = finder.find_duplicates(&[dir.path().to_path_buf()]).unwrap();

    assert!(groups.is_empty());
    assert_eq!(summary.total_files, 3);
    // distinct sizes: nothing needs hashing
    assert_eq!(summary.hashed_files, 0);
}

#[test]
fn test_scan_basic_groups() {
    // a == b, c same size as a but different bytes, d unique size
    let dir = tempdir().unwrap();
    let a = write(dir.path().join("a"), b"hello");
    let b = write(dir.path().join("b"), b"hello");
    write(dir.path().join("c"), b"world");
    write(dir.path().join("d"), b"hi");

    let finder = DuplicateFinder::with_defaults();
    let (groups, summary) = finder.find_duplicates(&[dir.path().to_path_buf()]).unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].paths(), vec![a, b]);
    assert_eq!(groups[0].size, 5);
    assert_eq!(summary.hashed_files, 3);
    assert_eq!(summary.eliminated_by_size, 1);
}

#[test]
fn test_scan_empty_files_never_grouped() {
    let dir = tempdir().unwrap();
    write(dir.path().join("e1"), b"");
    write(dir.path().join("e2"), b"");
    write(dir.path().join("e3"), b"");

    let finder = DuplicateFinder::with_defaults();
    let (groups, summary) = finder.find_duplicates(&[dir.path().to_path_buf()]).unwrap();

    assert!(groups.is_empty());
    assert_eq!(summary.empty_files, 3);
    assert_eq!(summary.hashed_files, 0);
}

#[test]
fn test_scan_nested_directories() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("x").join("y");
    fs::create_dir_all(&sub).unwrap();

    let top = write(dir.path().join("top.bin"), b"nested duplicate");
    let deep = write(sub.join("deep.bin"), b"nested duplicate");

    let finder = DuplicateFinder::with_defaults();
    let (groups, _) = finder.find_duplicates(&[dir.path().to_path_buf()]).unwrap();

    assert_eq!(groups.len(), 1);
    let mut expected = vec![top, deep];
    expected.sort();
    assert_eq!(groups[0].paths(), expected);
}

#[test]
fn test_scan_hidden_files_included() {
    let dir = tempdir().unwrap();
    write(dir.path().join(".hidden"), b"dotfile data");
    write(dir.path().join("visible"), b"dotfile data");

    let finder = DuplicateFinder::with_defaults();
    let (groups, _) = finder.find_duplicates(&[dir.path().to_path_buf()]).unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 2);
}

#[test]
fn test_scan_groups_sorted_by_first_path() {
    let dir = tempdir().unwrap();
    write(dir.path().join("z1"), b"zzz group");
    write(dir.path().join("z2"), b"zzz group");
    write(dir.path().join("a1"), b"aaa");
    write(dir.path().join("a2"), b"aaa");

    let finder = DuplicateFinder::with_defaults();
    let (groups, _) = finder.find_duplicates(&[dir.path().to_path_buf()]).unwrap();

    assert_eq!(groups.len(), 2);
    assert!(groups[0].files[0].path.ends_with("a1"));
    assert!(groups[1].files[0].path.ends_with("z1"));
}

#[test]
fn test_scan_many_copies_single_group() {
    let dir = tempdir().unwrap();
    for i in 0..10 {
        write(dir.path().join(format!("copy{i:02}")), b"repeated payload");
    }

    let finder = DuplicateFinder::new(FinderConfig::default().with_io_threads(3));
    let (groups, summary) = finder.find_duplicates(&[dir.path().to_path_buf()]).unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 10);
    assert_eq!(summary.duplicate_files, 9);
    assert_eq!(summary.reclaimable_space, 9 * 16);
}

#[test]
fn test_scan_large_same_size_files_differing_at_end() {
    let dir = tempdir().unwrap();
    let mut a = vec![7u8; 256 * 1024];
    let b = a.clone();
    let c = a.clone();
    write(dir.path().join("b"), &b);
    write(dir.path().join("c"), &c);
    if let Some(last) = a.last_mut() {
        *last = 8;
    }
    write(dir.path().join("a"), &a);

    let finder = DuplicateFinder::with_defaults();
    let (groups, _) = finder.find_duplicates(&[dir.path().to_path_buf()]).unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 2);
    assert!(groups[0].files[0].path.ends_with("b"));
}

#[test]
fn test_scan_single_threaded_matches_parallel() {
    let dir = tempdir().unwrap();
    for i in 0..6 {
        write(dir.path().join(format!("p{i}")), format!("pair {}", i / 2).as_bytes());
    }

    let roots = [dir.path().to_path_buf()];
    let (sequential, _) = DuplicateFinder::new(FinderConfig::default().with_io_threads(1))
        .find_duplicates(&roots)
        .unwrap();
    let (parallel, _) = DuplicateFinder::new(FinderConfig::default().with_io_threads(8))
        .find_duplicates(&roots)
        .unwrap();

    assert_eq!(sequential, parallel);
    assert_eq!(sequential.len(), 3);
}

#[test]
fn test_scan_file_root() {
    let dir = tempdir().unwrap();
    let a = write(dir.path().join("a"), b"single root file");
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    let b = write(sub.join("b"), b"single root file");

    let finder = DuplicateFinder::with_defaults();
    let (groups, summary) = finder.find_duplicates(&[a.clone(), sub]).unwrap();

    assert_eq!(summary.roots_scanned, 2);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].paths(), vec![a, b]);
}

#[test]
fn test_scan_invalid_root_lists_all() {
    let dir = tempdir().unwrap();
    let good = dir.path().to_path_buf();
    let bad1 = dir.path().join("missing1");
    let bad2 = dir.path().join("missing2");

    let finder = DuplicateFinder::with_defaults();
    let err = finder
        .find_duplicates(&[bad1.clone(), good, bad2.clone()])
        .unwrap_err();

    match err {
        FinderError::InvalidRoot(paths) => assert_eq!(paths, vec![bad1, bad2]),
        other => panic!("Expected InvalidRoot, got {:?}", other),
    }
}

#[test]
fn test_scan_no_roots() {
    let finder = DuplicateFinder::with_defaults();
    assert!(matches!(
        finder.find_duplicates(&[]),
        Err(FinderError::NoRoots)
    ));
}

#[test]
fn test_scan_is_deterministic() {
    let dir = tempdir().unwrap();
    for (name, content) in [("q", "one"), ("w", "one"), ("e", "two"), ("r", "two")] {
        write(dir.path().join(name), content.as_bytes());
    }

    let finder = DuplicateFinder::with_defaults();
    let roots = [dir.path().to_path_buf()];
    let (first, _) = finder.find_duplicates(&roots).unwrap();
    let (second, _) = finder.find_duplicates(&roots).unwrap();

    assert_eq!(first, second);
}
