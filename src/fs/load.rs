use tracing::{debug, trace};

use super::{Fd, LoadError, SystemError};
use crate::path::Path;

/// Reads the whole file at `path` into memory.
///
/// The file is opened read-only and sized with `fstat`, then read with a single request for exactly
/// that many bytes. A read that comes back short is an error: the buffer is handed back through
/// [`LoadError::partial`] and the error code is the one the read reported, or `EIO` if it reported
/// none (the file shrank or grew between the two calls).
///
/// A file too large to fit in memory fails with `ENOMEM` before anything is read.
///
/// The descriptor is closed before returning on every path.
pub fn load(path: &Path) -> Result<Vec<u8>, LoadError> {
    let fd = Fd::open_read_only(path).inspect_err(|error| {
        debug!(%path, %error, "failed to open file for loading");
    })?;

    let size = fd.status().inspect_err(|error| {
        debug!(%path, %error, "failed to query size of open file");
    })?.file_size();
    let size = usize::try_from(size).map_err(|_| SystemError::from_code(libc::EFBIG))?;
    trace!(%path, size, "loading file");

    let mut content: Vec<u8> = Vec::new();
    content.try_reserve_exact(size).map_err(|_| {
        debug!(%path, size, "not enough memory to load file");
        SystemError::from_code(libc::ENOMEM)
    })?;
    content.resize(size, 0);
    match fd.read(&mut content) {
        Ok(count) if count == size => Ok(content),
        Ok(count) => {
            debug!(%path, expected = size, count, "short read while loading file");
            Err(LoadError {
                error: SystemError::from_code(libc::EIO),
                partial: Some(content),
            })
        },
        Err(error) => {
            debug!(%path, %error, "read failed while loading file");
            Err(LoadError {
                error,
                partial: Some(content),
            })
        },
    }
}

/// Like [`load`], but also checks the content is UTF-8. Invalid UTF-8 fails with `EILSEQ`.
pub fn load_string(path: &Path) -> Result<String, LoadError> {
    String::from_utf8(load(path)?).map_err(|_| SystemError::from_code(libc::EILSEQ).into())
}
