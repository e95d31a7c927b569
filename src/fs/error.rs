use std::fmt::{self, Display, Formatter};
use std::io;

use derive_more::{Display, Error};

/// A raw errno value as reported by the OS.
pub type RawOsError = i32;

/// The single error kind produced by this module: a platform-defined error code in the "system"
/// category.
///
/// The code is taken straight from errno after the call that failed, so its meaning is whatever the
/// platform says it is (on Linux, the `E*` constants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub struct SystemError {
    code: RawOsError,
}

impl SystemError {
    pub const CATEGORY: &'static str = "system";

    pub const fn from_code(code: RawOsError) -> SystemError {
        SystemError {
            code,
        }
    }

    /// Captures the current thread's errno. Only meaningful right after a failed call.
    pub(crate) fn last() -> SystemError {
        SystemError::from_code(super::err_no())
    }

    pub const fn code(&self) -> RawOsError {
        self.code
    }

    pub const fn category(&self) -> &'static str {
        Self::CATEGORY
    }

    pub const fn is_not_found(&self) -> bool {
        self.code == libc::ENOENT
    }
}

impl Display for SystemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // io::Error already knows how to turn a code into strerror text.
        write!(f, "{}", io::Error::from_raw_os_error(self.code))
    }
}

impl From<SystemError> for io::Error {
    fn from(value: SystemError) -> Self {
        io::Error::from_raw_os_error(value.code)
    }
}

/// The error returned by [`load`](super::load).
///
/// If the file was opened and sized but the read came up short, `partial` holds the buffer that
/// was being read into. It is sized to the reported file length and zero-filled past whatever the
/// read wrote, its content should not be relied upon.
#[derive(Debug, Display, Error)]
#[display("{error}")]
pub struct LoadError {
    #[error(not(source))]
    pub error: SystemError,
    pub partial: Option<Vec<u8>>,
}

impl LoadError {
    pub const fn code(&self) -> RawOsError {
        self.error.code()
    }
}

impl From<SystemError> for LoadError {
    fn from(value: SystemError) -> Self {
        LoadError {
            error: value,
            partial: None,
        }
    }
}

impl From<LoadError> for io::Error {
    fn from(value: LoadError) -> Self {
        value.error.into()
    }
}
