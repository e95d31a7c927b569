//! An owned, `/`-separated filesystem path and the lexical operations on it.
//!
//! Nothing in this module touches the filesystem. The OS-backed operations that accept a
//! [`Path`] live in [`fs`](crate::fs).

mod display;
mod iter;
mod path;

pub use display::*;
pub use iter::*;
pub use path::*;
