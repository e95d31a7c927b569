#![cfg(test)]

use std::fs::{File, Permissions};
use std::io::Write;
use std::os::unix::fs::{PermissionsExt, symlink};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

use super::*;
use crate::path::Path;

fn scratch() -> (TempDir, Path) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let path = Path::from(dir.path().as_os_str());
    (dir, path)
}

fn write_file(path: &Path, content: &[u8]) {
    let mut file = File::create(path.as_os_str()).expect("failed to create file");
    file.write_all(content).expect("failed to write file");
}

#[test]
fn test_status_missing() {
    let (_dir, root) = scratch();
    let error = status(&root.joined("missing")).expect_err("status of a missing file should fail");

    assert_eq!(error.code(), libc::ENOENT);
    assert!(error.is_not_found());
    assert_eq!(error.category(), "system");
}

#[test]
fn test_status_regular_file() {
    let (_dir, root) = scratch();
    let path = root.joined("data.bin");
    write_file(&path, &[7; 1234]);

    let file_status = status(&path).expect("status of an existing file should succeed");
    assert!(file_status.is_regular_file());
    assert!(!file_status.is_dir());
    assert!(!file_status.is_char_device());
    assert!(!file_status.is_block_device());
    assert_eq!(file_status.kind(), FileType::Regular);
    assert_eq!(file_status.file_type(), libc::S_IFREG);
    assert_eq!(file_status.file_size(), 1234, "Size should match the bytes on disk.");
    assert_eq!(file_status.links(), 1);
}

#[test]
fn test_status_snapshot() {
    let (_dir, root) = scratch();
    let path = root.joined("grows");
    write_file(&path, b"abc");

    let before = status(&path).expect("status should succeed");
    write_file(&path, b"abcdef");

    assert_eq!(before.file_size(), 3, "A status shouldn't change after it was taken.");
    assert_eq!(status(&path).map(|s| s.file_size()), Ok(6));
}

#[test]
fn test_status_directory() {
    let (_dir, root) = scratch();
    let file_status = status(&root).expect("status of the temp dir should succeed");

    assert!(file_status.is_dir());
    assert!(!file_status.is_regular_file());
    assert!(file_status.kind().is_directory());
}

#[test]
fn test_status_char_device() {
    let file_status = status(&Path::from("/dev/null")).expect("/dev/null should exist");

    assert!(file_status.is_char_device());
    assert!(!file_status.is_block_device());
    assert_eq!(file_status.kind(), FileType::CharDevice);
}

#[test]
fn test_status_symlink() {
    let (_dir, root) = scratch();
    let target = root.joined("target");
    let link = root.joined("link");
    write_file(&target, b"x");
    symlink(target.as_os_str(), link.as_os_str()).expect("failed to create symlink");

    assert!(status(&link).is_ok_and(|s| s.is_regular_file()), "status should follow links.");
    assert!(
        status_no_follow(&link).is_ok_and(|s| s.is_symlink()),
        "status_no_follow should report the link itself."
    );
}

#[test]
fn test_status_interior_nul() {
    let error = status(&Path::from("/tmp/a\0b")).expect_err("a NUL byte can't reach the OS");
    assert_eq!(error.code(), libc::EINVAL);
}

#[test]
fn test_status_details() {
    let (_dir, root) = scratch();
    let path = root.joined("mode");
    write_file(&path, b"");
    std::fs::set_permissions(path.as_os_str(), Permissions::from_mode(0o640))
        .expect("failed to set permissions");

    let file_status = status(&path).expect("status should succeed");
    assert_eq!(file_status.permissions(), 0o640, "Permissions shouldn't include the type bits.");
    assert_ne!(file_status.inode(), 0);

    let age = SystemTime::now()
        .duration_since(file_status.modified())
        .unwrap_or(Duration::ZERO);
    assert!(age < Duration::from_secs(60), "A fresh file should have a recent mtime.");
}

#[test]
fn test_default_status() {
    let file_status = FileStatus::default();

    assert_eq!(file_status.file_size(), 0);
    assert_eq!(file_status.kind(), FileType::Other);
    assert!(!file_status.is_regular_file());
    assert!(!file_status.is_dir());
}

#[test]
fn test_exists() {
    let (_dir, root) = scratch();
    let path = root.joined("here");
    write_file(&path, b"1");

    assert!(exists(&path));
    assert!(exists(&root));
    assert!(!exists(&root.joined("not-here")));
}

#[test]
fn test_load() {
    let (_dir, root) = scratch();
    let path = root.joined("content");
    let content: Vec<u8> = (0..=255).cycle().take(10_000).collect();
    write_file(&path, &content);

    let loaded = load(&path).expect("loading an existing file should succeed");
    assert_eq!(loaded.len(), 10_000);
    assert_eq!(loaded, content, "Loaded bytes should match what is on disk.");
}

#[test]
fn test_load_empty() {
    let (_dir, root) = scratch();
    let path = root.joined("empty");
    write_file(&path, b"");

    assert_eq!(load(&path).ok(), Some(Vec::new()), "An empty file should load without error.");
}

#[test]
fn test_load_missing() {
    let (_dir, root) = scratch();
    let error = load(&root.joined("missing")).expect_err("loading a missing file should fail");

    assert_eq!(error.code(), libc::ENOENT);
    assert!(error.partial.is_none(), "Nothing should be read if the open fails.");
}

#[test]
fn test_load_directory() {
    let (_dir, root) = scratch();
    let size = status(&root).expect("status should succeed").file_size() as usize;

    // A directory opens and sizes fine, the read itself is what fails.
    if size > 0 {
        let error = load(&root).expect_err("reading a directory should fail");
        assert_eq!(error.code(), libc::EISDIR);

        let partial = error.partial.expect("the read buffer should be returned");
        assert_eq!(partial.len(), size);
        assert!(partial.iter().all(|b| *b == 0), "Unread bytes should be zeroed.");
    }
}

#[test]
fn test_load_huge_sparse() {
    // With unconditional overcommit the reservation could succeed and zero-filling would be fatal.
    if std::fs::read_to_string("/proc/sys/vm/overcommit_memory").is_ok_and(|mode| mode.trim() == "1") {
        return;
    }

    let (_dir, root) = scratch();
    let path = root.joined("sparse");
    let file = File::create(path.as_os_str()).expect("failed to create file");
    if file.set_len(1 << 43).is_err() {
        return;
    }

    let error = load(&path).expect_err("a file larger than memory shouldn't load");
    assert_eq!(error.code(), libc::ENOMEM);
    assert!(error.partial.is_none(), "Nothing should be read if the buffer can't be allocated.");
}

#[test]
fn test_load_short_read() {
    // sysfs reports a page-sized file but only hands back the few bytes of text it holds.
    let path = Path::from("/sys/devices/system/cpu/online");
    let Ok(file_status) = status(&path) else {
        return;
    };

    let error = load(&path).expect_err("a read shorter than the reported size should fail");
    assert_eq!(error.code(), libc::EIO, "A short read without an OS error should be EIO.");

    let partial = error.partial.expect("the read buffer should be returned");
    assert_eq!(partial.len() as u64, file_status.file_size());
    assert_ne!(partial[0], 0, "The text that was read should be at the start of the buffer.");

    let end = partial.iter().position(|b| *b == 0).expect("the buffer should have unread bytes");
    assert!(partial[end..].iter().all(|b| *b == 0), "Unread bytes should be zeroed.");
}

#[test]
fn test_load_string() {
    let (_dir, root) = scratch();
    let text = root.joined("text");
    let binary = root.joined("binary");
    write_file(&text, "héllo\n".as_bytes());
    write_file(&binary, &[0xc3, 0x28]);

    assert_eq!(load_string(&text).ok().as_deref(), Some("héllo\n"));
    assert_eq!(load_string(&binary).map_err(|e| e.code()), Err(libc::EILSEQ));
}

#[test]
fn test_is_readable() {
    let (_dir, root) = scratch();
    let path = root.joined("secret");
    write_file(&path, b"x");

    assert!(is_readable(&path));
    assert!(!is_readable(&root.joined("missing")));
    assert!(!is_readable(&Path::from("a\0b")));
    assert!(is_readable(&root), "The owner should be able to read their own directory.");

    std::fs::set_permissions(path.as_os_str(), Permissions::from_mode(0o000))
        .expect("failed to revoke permissions");
    // SAFETY: geteuid has no preconditions.
    if unsafe { libc::geteuid() } != 0 {
        assert!(!is_readable(&path), "A file with no permissions shouldn't be readable.");
    }
}

#[test]
fn test_error_display() {
    let error = SystemError::from_code(libc::ENOENT);

    assert!(error.to_string().contains("os error 2"), "got: {error}");
    assert_eq!(std::io::Error::from(error).kind(), std::io::ErrorKind::NotFound);

    let load_error = LoadError::from(error);
    assert_eq!(load_error.to_string(), error.to_string());
}
