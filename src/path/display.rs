use std::fmt::{self, Display, Formatter};

use super::Path;

/// Renders a [`Path`] as its plain text, replacing invalid UTF-8 with `U+FFFD`.
pub struct DisplayPath<'a> {
    pub(crate) inner: &'a Path,
}

impl<'a> Display for DisplayPath<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.as_os_str().to_string_lossy())
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
