use dupefind::duplicates::DuplicateFinder;
use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;

#[test]
fn test_duplicates_across_roots() {
    let dir1 = tempdir().unwrap();
    let dir2 = tempdir().unwrap();

    File::create(dir1.path().join("photo.jpg"))
        .unwrap()
        .write_all(b"jpeg bytes")
        .unwrap();
    File::create(dir2.path().join("backup.jpg"))
        .unwrap()
        .write_all(b"jpeg bytes")
        .unwrap();

    let finder = DuplicateFinder::with_defaults();
    let (groups, summary) = finder
        .find_duplicates(&[dir1.path().to_path_buf(), dir2.path().to_path_buf()])
        .unwrap();

    assert_eq!(summary.roots_scanned, 2);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 2);
}

#[test]
fn test_same_root_twice_not_double_counted() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("only.txt"))
        .unwrap()
        .write_all(b"just one file")
        .unwrap();

    let finder = DuplicateFinder::with_defaults();
    let (groups, summary) = finder
        .find_duplicates(&[dir.path().to_path_buf(), dir.path().to_path_buf()])
        .unwrap();

    assert!(groups.is_empty(), "a file must not duplicate itself");
    assert_eq!(summary.roots_scanned, 1);
    assert_eq!(summary.total_files, 1);
}

#[test]
fn test_nested_root_not_double_counted() {
    let dir = tempdir().unwrap();
    let child = dir.path().join("child");
    fs::create_dir(&child).unwrap();
    File::create(child.join("inner.txt"))
        .unwrap()
        .write_all(b"inner")
        .unwrap();

    let finder = DuplicateFinder::with_defaults();
    let (groups, summary) = finder
        .find_duplicates(&[child.clone(), dir.path().to_path_buf()])
        .unwrap();

    assert!(groups.is_empty());
    assert_eq!(summary.roots_scanned, 1);
    assert_eq!(summary.total_files, 1);
}

#[test]
fn test_sibling_roots_with_shared_prefix_both_walked() {
    let dir = tempdir().unwrap();
    let photos = dir.path().join("photos");
    let photos_old = dir.path().join("photos-old");
    fs::create_dir(&photos).unwrap();
    fs::create_dir(&photos_old).unwrap();

    File::create(photos.join("a.raw"))
        .unwrap()
        .write_all(b"raw image")
        .unwrap();
    File::create(photos_old.join("a.raw"))
        .unwrap()
        .write_all(b"raw image")
        .unwrap();

    let finder = DuplicateFinder::with_defaults();
    let (groups, summary) = finder.find_duplicates(&[photos, photos_old]).unwrap();

    assert_eq!(summary.roots_scanned, 2);
    assert_eq!(groups.len(), 1);
}

#[test]
fn test_root_order_does_not_change_result() {
    let dir1 = tempdir().unwrap();
    let dir2 = tempdir().unwrap();
    for (dir, name) in [(&dir1, "x"), (&dir1, "y"), (&dir2, "x"), (&dir2, "z")] {
        File::create(dir.path().join(name))
            .unwrap()
            .write_all(name.as_bytes())
            .unwrap();
    }

    let finder = DuplicateFinder::with_defaults();
    let (forward, _) = finder
        .find_duplicates(&[dir1.path().to_path_buf(), dir2.path().to_path_buf()])
        .unwrap();
    let (backward, _) = finder
        .find_duplicates(&[dir2.path().to_path_buf(), dir1.path().to_path_buf()])
        .unwrap();

    assert_eq!(forward, backward);
    assert_eq!(forward.len(), 1);
}
