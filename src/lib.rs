//! A small filesystem layer: an owned `/`-separated [`Path`](path::Path) value, a snapshot of the
//! OS metadata for a path and a whole-file loader.
//!
//! # Paths
//! [`path::Path`] is a plain string with join semantics. It doesn't resolve `.` or `..` and doesn't
//! collapse repeated separators, the only rewriting it does is inserting (or not inserting) a `/`
//! when joining. Joining an absolute component replaces the whole path.
//!
//! # Error Handling
//! Every call that reaches the OS returns a [`Result`] whose error is a
//! [`SystemError`](fs::SystemError), the raw errno captured right after the failing call. There is
//! no finer taxonomy, if a caller needs to tell "not found" from "permission denied" it inspects the
//! code. Pure functions, like predicates on a [`FileStatus`](fs::FileStatus) or
//! [`parent_path`](path::Path::parent_path), can't fail.
//!
//! # Dependencies
//! The [`fs`] module relies on `libc` for its thin syscall wrappers and is only built on Linux, with
//! the `fs` feature (on by default). [`path`] never calls into the OS.
//!
//! Failures are reported through `tracing`, it's up to the application to install a subscriber.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "fs")]
pub mod fs;
pub mod path;
