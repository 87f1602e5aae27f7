//! Single-threaded directory sweep: enumerate, classify, trim, report.
//!
//! The sweeper is the driver of the pipeline: it discovers candidate files
//! under the root, prunes excluded subtrees, and funnels every text file
//! through the trimmer while accumulating an explicit [`SweepReport`]. All
//! run state lives in that report; nothing is global.

#![allow(missing_docs)]

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::errors::{Result, SweepError};
use crate::core::paths::resolve_absolute_path;
use crate::sweep::classify::is_text_file;
use crate::sweep::trim::trim_file;

/// Directory names whose entire subtree is skipped during traversal.
///
/// The same list applies to plain file names (`.DS_Store` is a file).
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    "__pycache__",
    "node_modules",
    ".venv",
    "venv",
    "env",
    ".env",
    "build",
    "dist",
    ".idea",
    ".vscode",
    ".DS_Store",
];

/// Sweeper configuration: the root to walk and the entry names to skip.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub root: PathBuf,
    pub excluded_dirs: HashSet<String>,
}

impl SweepConfig {
    /// Config for `root` with the default exclusion list.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
        }
    }
}

/// What happened to one examined file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepStatus {
    /// At least one line changed and the file was rewritten.
    Modified,
    /// The file was already clean; it was never reopened for writing.
    Unchanged,
    /// Reading or rewriting failed; the message says why.
    Failed(String),
}

/// Per-file result, with the path relative to the sweep root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: SweepStatus,
}

/// Run counters accumulated over one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Text files examined: modified + unchanged. Failed files count toward
    /// neither this nor `files_modified`.
    pub files_processed: usize,
    /// Files actually rewritten.
    pub files_modified: usize,
    /// Whether the walk stopped early on an interrupt request.
    pub interrupted: bool,
}

/// Summary plus the ordered per-file outcomes of one sweep.
#[derive(Debug, Clone, Default)]
pub struct SweepReport {
    pub summary: SweepSummary,
    pub outcomes: Vec<FileOutcome>,
}

/// Single-threaded sweeper over one directory tree.
///
/// Invariants:
/// - Each path is visited exactly once, in name order within a directory
/// - Symlinks are never followed
/// - A per-file failure becomes that file's outcome; the walk goes on
pub struct DirectorySweeper {
    config: SweepConfig,
    interrupt: Option<Arc<AtomicBool>>,
    observer: Option<Box<dyn Fn(&FileOutcome)>>,
}

impl DirectorySweeper {
    #[must_use]
    pub fn new(config: SweepConfig) -> Self {
        Self {
            config,
            interrupt: None,
            observer: None,
        }
    }

    /// Set a flag polled before each entry; once true the walk stops and the
    /// report is marked interrupted.
    #[must_use]
    pub fn with_interrupt_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Set a callback invoked with each outcome as it is produced.
    #[must_use]
    pub fn with_observer<F>(mut self, callback: F) -> Self
    where
        F: Fn(&FileOutcome) + 'static,
    {
        self.observer = Some(Box::new(callback));
        self
    }

    /// Walk the tree and trim every text file under the root.
    ///
    /// Fails only for an invalid root; everything downstream is recovered
    /// into per-file outcomes.
    pub fn sweep(&self) -> Result<SweepReport> {
        let root = &self.config.root;
        if !root.exists() {
            return Err(SweepError::RootMissing { path: root.clone() });
        }
        if !root.is_dir() {
            return Err(SweepError::RootNotADirectory { path: root.clone() });
        }
        let root = resolve_absolute_path(root);

        let mut report = SweepReport::default();
        let mut pending = vec![root.clone()];

        'walk: while let Some(dir) = pending.pop() {
            // Unreadable directories are skipped, not fatal.
            let Ok(entries) = fs::read_dir(&dir) else {
                continue;
            };

            let mut children: Vec<fs::DirEntry> = entries.flatten().collect();
            children.sort_by_key(fs::DirEntry::file_name);

            let mut subdirs = Vec::new();
            for entry in children {
                if self.interrupt_requested() {
                    report.summary.interrupted = true;
                    break 'walk;
                }

                let name = entry.file_name();
                if self.config.excluded_dirs.contains(&*name.to_string_lossy()) {
                    continue;
                }

                let Ok(file_type) = entry.file_type() else {
                    continue;
                };
                if file_type.is_symlink() {
                    continue;
                }
                if file_type.is_dir() {
                    subdirs.push(entry.path());
                    continue;
                }

                let path = entry.path();
                if !is_text_file(&path) {
                    continue;
                }

                let outcome = process_file(&path, &root, &mut report.summary);
                if let Some(observer) = &self.observer {
                    observer(&outcome);
                }
                report.outcomes.push(outcome);
            }

            // Reverse push so the stack pops subdirectories in name order.
            pending.extend(subdirs.into_iter().rev());
        }

        Ok(report)
    }

    fn interrupt_requested(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Trim one file and fold the result into the summary.
fn process_file(path: &Path, root: &Path, summary: &mut SweepSummary) -> FileOutcome {
    let status = match trim_file(path) {
        Ok(true) => {
            summary.files_processed += 1;
            summary.files_modified += 1;
            SweepStatus::Modified
        }
        Ok(false) => {
            summary.files_processed += 1;
            SweepStatus::Unchanged
        }
        Err(err) => SweepStatus::Failed(err.to_string()),
    };

    let relative = path
        .strip_prefix(root)
        .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);
    FileOutcome {
        path: relative,
        status,
    }
}
