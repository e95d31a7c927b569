#![cfg(target_os = "linux")]
//! File status queries and whole-file loading on top of the OS syscalls.
//!
//! Every function here takes a [`Path`](crate::path::Path) and makes a single attempt at the
//! underlying call, there are no retries. Failures come back as a [`SystemError`] holding the errno
//! captured right after the call.
//!
//! # Snapshots
//! A [`FileStatus`] is a copy of what the OS reported at the time of the query. It isn't refreshed
//! and holds no reference to the path it came from.
//!
//! # Races
//! [`is_readable`] and [`load`] are subject to the usual time-of-check / time-of-use races. A
//! `true` from `is_readable` doesn't mean a later open will succeed, and a file that changes size
//! between the size query and the read in `load` shows up as a short read error.

mod access;
mod error;
mod fd;
mod file_type;
mod load;
mod status;
mod syscall;

pub use access::*;
pub use error::*;
pub use file_type::*;
pub use load::*;
pub use status::*;
pub(crate) use fd::*;
pub(crate) use syscall::*;

mod tests;
