#![forbid(unsafe_code)]

//! Whitespace Sweeper (wsw) — strips trailing whitespace from text files in
//! place, preserving each line's ending style.
//!
//! Three components composed linearly:
//! 1. **Classifier** — extension/name allow-lists plus a NUL-byte sniff decide
//!    whether a path is text
//! 2. **Trimmer** — removes trailing spaces and tabs per line, rewriting a
//!    file only when at least one line changed
//! 3. **Sweeper** — single-threaded walk over a directory tree that drives the
//!    other two and returns an explicit run report
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use whitespace_sweeper::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use whitespace_sweeper::sweep::walker::{DirectorySweeper, SweepConfig};
//! ```

pub mod prelude;

pub mod core;
pub mod sweep;
