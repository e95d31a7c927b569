use std::ffi::OsStr;
use std::iter::FusedIterator;
use std::os::unix::ffi::OsStrExt;

use super::SEPARATOR;

pub struct Components<'a> {
    pub(crate) path: &'a [u8],
    pub(crate) head: usize,
}

impl<'a> Iterator for Components<'a> {
    type Item = &'a OsStr;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ch) = self.path.get(self.head) && *ch == SEPARATOR {
            self.head += 1;
        }
        if self.head >= self.path.len() {
            None?
        }

        let mut tail = self.head + 1;
        while let Some(ch) = self.path.get(tail) && *ch != SEPARATOR {
            tail += 1;
        }

        let res = &self.path[self.head..tail];
        self.head = tail;

        Some(OsStr::from_bytes(res))
    }
}

impl<'a> FusedIterator for Components<'a> {}
