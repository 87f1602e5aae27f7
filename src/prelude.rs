//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use whitespace_sweeper::prelude::*;
//! ```

// Core
pub use crate::core::errors::{Result, SweepError};
pub use crate::core::paths::resolve_absolute_path;

// Sweep
pub use crate::sweep::classify::is_text_file;
pub use crate::sweep::trim::{trim_file, trimmed};
pub use crate::sweep::walker::{
    DirectorySweeper, FileOutcome, SweepConfig, SweepReport, SweepStatus, SweepSummary,
};
