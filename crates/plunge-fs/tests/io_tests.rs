use filetime::FileTime;
use plunge_fs::{Error, NormalizedPath, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_stat_reports_size_and_mtime() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("a.txt");
    fs::write(&file_path, "hello").unwrap();
    filetime::set_file_mtime(&file_path, FileTime::from_unix_time(1_600_000_000, 0)).unwrap();

    let stat = io::stat(&NormalizedPath::new(&file_path)).unwrap().unwrap();
    assert_eq!(stat.size, 5);
    assert_eq!(stat.mtime, 1_600_000_000);
    assert!(stat.is_regular);
}

#[test]
fn test_stat_missing_is_none() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("missing.txt"));
    assert!(io::stat(&path).unwrap().is_none());
}

#[test]
fn test_stat_directory_is_not_regular() {
    let temp = TempDir::new().unwrap();
    let stat = io::stat(&NormalizedPath::new(temp.path())).unwrap().unwrap();
    assert!(!stat.is_regular);
}

#[cfg(unix)]
#[test]
fn test_stat_symlink_is_not_regular() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("target.txt");
    fs::write(&target, "x").unwrap();
    let link = temp.path().join("link.txt");
    std::os::unix::fs::symlink(&target, &link).unwrap();

    let stat = io::stat(&NormalizedPath::new(&link)).unwrap().unwrap();
    assert!(!stat.is_regular);
}

#[test]
fn test_read_exact_size_returns_content() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("a.txt");
    fs::write(&file_path, "hello world").unwrap();

    let content = io::read_exact_size(&NormalizedPath::new(&file_path), 11).unwrap();
    assert_eq!(content, b"hello world");
}

#[test]
fn test_read_exact_size_detects_truncation() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("a.txt");
    fs::write(&file_path, "short").unwrap();

    let err = io::read_exact_size(&NormalizedPath::new(&file_path), 10).unwrap_err();
    assert!(matches!(
        err,
        Error::ShortRead {
            expected: 10,
            actual: 5,
            ..
        }
    ));
}

#[test]
fn test_read_exact_size_detects_growth() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("a.txt");
    fs::write(&file_path, "grown content").unwrap();

    let err = io::read_exact_size(&NormalizedPath::new(&file_path), 4).unwrap_err();
    assert!(matches!(err, Error::SourceChanged { expected: 4, .. }));
}

#[test]
fn test_read_exact_size_empty_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("empty");
    fs::write(&file_path, "").unwrap();

    let content = io::read_exact_size(&NormalizedPath::new(&file_path), 0).unwrap();
    assert!(content.is_empty());
}

#[test]
fn test_write_file_creates_parents() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("a").join("b").join("c.txt"));

    io::write_file(&path, b"deep").unwrap();

    assert_eq!(fs::read(path.to_native()).unwrap(), b"deep");
}

#[test]
fn test_write_file_truncates_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("a.txt");
    fs::write(&file_path, "a much longer original").unwrap();

    io::write_file(&NormalizedPath::new(&file_path), b"new").unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "new");
}

#[cfg(unix)]
#[test]
fn test_created_directories_allow_group_write() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("made").join("file.txt"));
    io::write_file(&path, b"x").unwrap();

    let mode = fs::metadata(temp.path().join("made"))
        .unwrap()
        .permissions()
        .mode();
    // umask may clear bits, but never adds any beyond the requested mode
    assert_eq!(mode & 0o002, 0);
    assert_eq!(mode & 0o700, 0o700);
}

#[test]
fn test_set_mtime_stamps_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("a.txt");
    fs::write(&file_path, "x").unwrap();
    let path = NormalizedPath::new(&file_path);

    io::set_mtime(&path, 1_234_567_890).unwrap();

    assert_eq!(io::stat(&path).unwrap().unwrap().mtime, 1_234_567_890);
}

#[test]
fn test_exists_follows_existing_and_missing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("a.txt");
    fs::write(&file_path, "x").unwrap();

    assert!(io::exists(&NormalizedPath::new(&file_path)).unwrap());
    assert!(!io::exists(&NormalizedPath::new(temp.path().join("nope"))).unwrap());
}
