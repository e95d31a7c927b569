use std::ffi::CString;
use std::io;

use crate::fs::{RawOsError, SystemError};
use crate::path::Path;

pub fn err_no() -> RawOsError {
    // SAFETY: raw_os_error guarantees Some if constructed from last_os_error.
    unsafe { io::Error::last_os_error().raw_os_error().unwrap_unchecked() }
}

/// Copies `path` into a NUL-terminated string for the OS. A path with an interior NUL can't be
/// represented and is rejected with `EINVAL`.
pub fn c_path(path: &Path) -> Result<CString, SystemError> {
    CString::new(path.as_bytes()).map_err(|_| SystemError::from_code(libc::EINVAL))
}
