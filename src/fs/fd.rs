use std::fmt::{self, Debug, Formatter};
use std::mem::MaybeUninit;
use std::thread;

use derive_more::{Display, Error};
use libc::{EBADF, O_CLOEXEC, O_RDONLY, c_int, stat as Stat};
use tracing::{trace, warn};

use crate::fs::{self, FileStatus, SystemError};
use crate::path::Path;

#[derive(Debug, Display, Error)]
#[display("file descriptor corruption")]
pub(crate) struct BadFdPanic;

/// An open file descriptor, closed when dropped.
pub(crate) struct Fd(pub c_int);

impl Fd {
    pub fn open_read_only(file_path: &Path) -> Result<Fd, SystemError> {
        let pathname = fs::c_path(file_path)?;
        trace!(path = %file_path, "open");

        // SAFETY: pathname is a valid NUL-terminated string for the duration of the call.
        match unsafe { libc::open(pathname.as_ptr(), O_RDONLY | O_CLOEXEC) } {
            -1 => Err(SystemError::last()),
            fd => Ok(Fd(fd)),
        }
    }

    pub fn status(&self) -> Result<FileStatus, SystemError> {
        let mut raw_meta: MaybeUninit<Stat> = MaybeUninit::uninit();
        // SAFETY: raw_meta is valid for writes of one stat struct.
        if unsafe { libc::fstat(self.0, raw_meta.as_mut_ptr()) } == -1 {
            Err(SystemError::last())?
        }
        // SAFETY: fstat initializes raw_meta whenever it doesn't return -1.
        let raw = unsafe { raw_meta.assume_init() };

        Ok(FileStatus::from_stat(raw))
    }

    /// Makes a single read request for up to `buf.len()` bytes.
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, SystemError> {
        // SAFETY: buf is valid for writes of buf.len() bytes.
        match unsafe { libc::read(self.0, buf.as_mut_ptr().cast(), buf.len()) } {
            -1 => Err(SystemError::last()),
            count => Ok(count as usize),
        }
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        // SAFETY: After this, the file descriptor is invalidated but we are dropping self so it
        // doesn't matter.
        if unsafe { libc::close(self.0) } == -1 {
            let error = SystemError::last();
            // Panic only if we aren't already, to prevent aborting an existing unwind.
            if error.code() == EBADF && !thread::panicking() {
                panic!("{}", BadFdPanic)
            }
            warn!(fd = self.0, %error, "error while closing file descriptor");
        }
    }
}

impl Debug for Fd {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fd({})", self.0)
    }
}
