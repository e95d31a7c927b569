use std::ffi::{OsStr, OsString};
use std::ops::{Div, DivAssign};
use std::os::unix::ffi::{OsStrExt, OsStringExt};

use super::{Components, DisplayPath};

/// The only separator understood by [`Path`].
pub const SEPARATOR: u8 = b'/';

/// An owned filesystem path using `/` as its sole separator.
///
/// An empty `Path` means "no path". Apart from the separator handling done by [`Path::join`], the
/// content is kept exactly as given: `.` and `..` components and repeated separators are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path {
    pub(crate) inner: OsString,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Path {
        Path {
            inner: OsString::new(),
        }
    }

    pub fn root() -> Path {
        Path {
            inner: OsString::from("/"),
        }
    }

    pub fn as_os_str(&self) -> &OsStr {
        &self.inner
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    pub fn into_os_string(self) -> OsString {
        self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if this path holds no text, which is the only case in which a path is "unset".
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn is_absolute(&self) -> bool {
        self.as_bytes().first() == Some(&SEPARATOR)
    }

    /// Returns `true` for any non-absolute path, including the empty one.
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Returns this path with its final `/`-delimited suffix removed.
    ///
    /// If nothing would be left, either because there is no separator or because the only one is
    /// the leading `/`, the root path is returned instead.
    ///
    /// ```
    /// # use slash_fs::path::Path;
    /// assert_eq!(Path::from("/a/b").parent_path(), Path::from("/a"));
    /// assert_eq!(Path::from("/a").parent_path(), Path::root());
    /// assert_eq!(Path::from("a").parent_path(), Path::root());
    /// ```
    pub fn parent_path(&self) -> Path {
        let bytes = self.as_bytes();

        match bytes.iter().rposition(|ch| *ch == SEPARATOR) {
            Some(index) if index > 0 => Path {
                inner: OsStr::from_bytes(&bytes[..index]).to_owned(),
            },
            _ => Path::root(),
        }
    }

    /// Appends `component` to this path in place, returning `self` for chaining.
    ///
    /// - An empty `component` leaves the path untouched.
    /// - If `component` starts with `/`, or this path is empty, the path is replaced by `component`.
    /// - Otherwise exactly one `/` ends up between the old content and `component`: one is inserted
    ///   unless the path already ends with one.
    ///
    /// ```
    /// # use slash_fs::path::Path;
    /// let mut path = Path::from("/usr");
    /// path.join("local").join("bin");
    /// assert_eq!(path, Path::from("/usr/local/bin"));
    ///
    /// path.join("/etc");
    /// assert_eq!(path, Path::from("/etc"));
    /// ```
    pub fn join<C: AsRef<OsStr>>(&mut self, component: C) -> &mut Self {
        let component = component.as_ref();
        let bytes = component.as_bytes();

        if bytes.is_empty() {
            return self;
        }

        if bytes[0] == SEPARATOR || self.is_empty() {
            self.inner.clear();
            self.inner.push(component);
        } else if self.as_bytes().last() == Some(&SEPARATOR) {
            self.inner.reserve_exact(bytes.len());
            self.inner.push(component);
        } else {
            self.inner.reserve_exact(bytes.len() + 1);
            self.inner.push("/");
            self.inner.push(component);
        }
        self
    }

    /// Like [`Path::join`], but leaves `self` alone and returns the result as a new path.
    pub fn joined<C: AsRef<OsStr>>(&self, component: C) -> Path {
        let mut path = self.clone();
        path.join(component);
        path
    }

    /// Returns the text after the last `/`, or [`None`] if there is nothing there.
    pub fn file_name(&self) -> Option<&OsStr> {
        let bytes = self.as_bytes();
        let start = bytes
            .iter()
            .rposition(|ch| *ch == SEPARATOR)
            .map_or(0, |index| index + 1);

        match &bytes[start..] {
            [] => None,
            name => Some(OsStr::from_bytes(name)),
        }
    }

    /// Iterates over the non-empty components of this path, skipping all separators.
    pub fn components(&self) -> Components<'_> {
        Components {
            path: self.as_bytes(),
            head: 0,
        }
    }

    pub const fn display(&self) -> DisplayPath<'_> {
        DisplayPath {
            inner: self,
        }
    }
}

impl From<&str> for Path {
    fn from(value: &str) -> Self {
        Path {
            inner: OsString::from(value),
        }
    }
}

impl From<String> for Path {
    fn from(value: String) -> Self {
        Path {
            inner: OsString::from(value),
        }
    }
}

impl From<&OsStr> for Path {
    fn from(value: &OsStr) -> Self {
        Path {
            inner: value.to_owned(),
        }
    }
}

impl From<OsString> for Path {
    fn from(value: OsString) -> Self {
        Path {
            inner: value,
        }
    }
}

impl From<Vec<u8>> for Path {
    fn from(value: Vec<u8>) -> Self {
        Path {
            inner: OsString::from_vec(value),
        }
    }
}

impl AsRef<OsStr> for Path {
    fn as_ref(&self) -> &OsStr {
        &self.inner
    }
}

impl<C: AsRef<OsStr>> Div<C> for Path {
    type Output = Path;

    fn div(mut self, rhs: C) -> Self::Output {
        self.join(rhs);
        self
    }
}

impl<C: AsRef<OsStr>> Div<C> for &Path {
    type Output = Path;

    fn div(self, rhs: C) -> Self::Output {
        self.joined(rhs)
    }
}

impl<C: AsRef<OsStr>> DivAssign<C> for Path {
    fn div_assign(&mut self, rhs: C) {
        self.join(rhs);
    }
}
