use std::fmt::{self, Debug, Formatter};
use std::mem::{self, MaybeUninit};
use std::time::{Duration, SystemTime};

use libc::{mode_t, stat as Stat};
use tracing::{debug, trace};

use super::{FileType, SystemError};
use crate::fs;
use crate::path::Path;

/// A snapshot of the metadata the OS reported for a file at the time it was queried.
///
/// The raw record isn't exposed, only the accessors below. A `FileStatus` is never refreshed, query
/// again with [`status`] to see later changes.
#[derive(Clone, Copy)]
pub struct FileStatus {
    raw: Stat,
}

impl FileStatus {
    pub(crate) const fn from_stat(raw: Stat) -> FileStatus {
        FileStatus {
            raw,
        }
    }

    /// The type bits of the mode, i.e. one of the `S_IF*` constants.
    pub const fn file_type(&self) -> mode_t {
        self.raw.st_mode & libc::S_IFMT
    }

    pub const fn kind(&self) -> FileType {
        FileType::from_stat_mode(self.raw.st_mode)
    }

    /// The size in bytes. Zero for a default status.
    #[allow(clippy::unnecessary_cast)]
    pub const fn file_size(&self) -> u64 {
        self.raw.st_size as u64
    }

    /// The mode bits with the type bits masked out.
    pub const fn permissions(&self) -> mode_t {
        self.raw.st_mode & !libc::S_IFMT
    }

    #[allow(clippy::unnecessary_cast)]
    pub fn modified(&self) -> SystemTime {
        let nanos = Duration::from_nanos(self.raw.st_mtime_nsec as u64);
        let secs = self.raw.st_mtime as i64;

        if secs >= 0 {
            SystemTime::UNIX_EPOCH + Duration::from_secs(secs as u64) + nanos
        } else {
            SystemTime::UNIX_EPOCH - Duration::from_secs(secs.unsigned_abs()) + nanos
        }
    }

    #[allow(clippy::unnecessary_cast)]
    pub const fn links(&self) -> u64 {
        self.raw.st_nlink as u64
    }

    #[allow(clippy::unnecessary_cast)]
    pub const fn inode(&self) -> u64 {
        self.raw.st_ino as u64
    }

    pub const fn is_char_device(&self) -> bool {
        self.file_type() == libc::S_IFCHR
    }

    pub const fn is_block_device(&self) -> bool {
        self.file_type() == libc::S_IFBLK
    }

    pub const fn is_regular_file(&self) -> bool {
        self.file_type() == libc::S_IFREG
    }

    pub const fn is_dir(&self) -> bool {
        self.file_type() == libc::S_IFDIR
    }

    pub const fn is_fifo(&self) -> bool {
        self.file_type() == libc::S_IFIFO
    }

    /// Only ever true for a status from [`status_no_follow`].
    pub const fn is_symlink(&self) -> bool {
        self.file_type() == libc::S_IFLNK
    }

    pub const fn is_socket(&self) -> bool {
        self.file_type() == libc::S_IFSOCK
    }
}

impl Default for FileStatus {
    fn default() -> Self {
        // SAFETY: stat is plain old data, all zeroes is a valid value.
        FileStatus::from_stat(unsafe { mem::zeroed() })
    }
}

impl Debug for FileStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileStatus")
            .field("kind", &self.kind())
            .field("size", &self.file_size())
            .field("permissions", &format_args!("0o{:o}", self.permissions()))
            .field("inode", &self.inode())
            .finish()
    }
}

/// Queries the metadata of the file at `path`, following symlinks.
pub fn status(path: &Path) -> Result<FileStatus, SystemError> {
    stat_with(path, "stat", libc::stat)
}

/// Queries the metadata of the file at `path` itself, without following a final symlink.
pub fn status_no_follow(path: &Path) -> Result<FileStatus, SystemError> {
    stat_with(path, "lstat", libc::lstat)
}

/// Returns `true` if [`status`] succeeds for `path`. Any error, not just "not found", counts as
/// nonexistence.
pub fn exists(path: &Path) -> bool {
    status(path).is_ok()
}

fn stat_with(
    path: &Path,
    call: &'static str,
    stat_fn: unsafe extern "C" fn(*const libc::c_char, *mut Stat) -> libc::c_int,
) -> Result<FileStatus, SystemError> {
    let pathname = fs::c_path(path)?;
    trace!(%path, call, "querying file status");

    let mut raw_meta: MaybeUninit<Stat> = MaybeUninit::uninit();
    // SAFETY: pathname is NUL-terminated and raw_meta is valid for writes of one stat struct.
    if unsafe { stat_fn(pathname.as_ptr(), raw_meta.as_mut_ptr()) } == -1 {
        let error = SystemError::last();
        debug!(%path, call, %error, "file status query failed");
        Err(error)?
    }
    // SAFETY: stat initializes raw_meta whenever it doesn't return -1.
    let raw = unsafe { raw_meta.assume_init() };

    Ok(FileStatus::from_stat(raw))
}
