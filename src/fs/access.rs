use libc::{AT_EACCESS, AT_FDCWD, R_OK};
use tracing::trace;

use crate::fs;
use crate::path::Path;

/// Asks the OS whether the current process may read `path`.
///
/// This is a point-in-time check against the effective user and group ids, a `true` result doesn't
/// guarantee that opening the file later will succeed.
pub fn is_readable(path: &Path) -> bool {
    let Ok(pathname) = fs::c_path(path) else {
        return false;
    };
    trace!(%path, "faccessat");

    // SAFETY: pathname is a valid NUL-terminated string for the duration of the call.
    unsafe { libc::faccessat(AT_FDCWD, pathname.as_ptr(), R_OK, AT_EACCESS) == 0 }
}
