//! Per-line trailing whitespace removal that leaves line terminators intact.

use std::fs;
use std::path::Path;

use memchr::memchr_iter;

use crate::core::errors::{Result, SweepError};

/// Strip trailing spaces and tabs from every line of `content`.
///
/// Line terminators (`\n` or `\r\n`) pass through untouched; the final line
/// may be unterminated and is trimmed at end of input. Returns the rewritten
/// content only when at least one line changed.
#[must_use]
pub fn trimmed(content: &str) -> Option<String> {
    let bytes = content.as_bytes();
    let mut out = String::with_capacity(content.len());
    let mut changed = false;
    let mut line_start = 0;

    for newline in memchr_iter(b'\n', bytes) {
        // A `\r` directly before the `\n` belongs to the terminator, not the line.
        let body_end = if newline > line_start && bytes[newline - 1] == b'\r' {
            newline - 1
        } else {
            newline
        };
        changed |= push_trimmed(&mut out, &content[line_start..body_end]);
        out.push_str(&content[body_end..=newline]);
        line_start = newline + 1;
    }

    changed |= push_trimmed(&mut out, &content[line_start..]);
    changed.then_some(out)
}

/// Append `body` minus trailing spaces/tabs; report whether anything was cut.
fn push_trimmed(out: &mut String, body: &str) -> bool {
    let kept = body.trim_end_matches([' ', '\t']);
    out.push_str(kept);
    kept.len() != body.len()
}

/// Trim one file in place.
///
/// Reads the whole file as UTF-8 and rewrites it only when a line actually
/// changed; clean files are never reopened for writing. Returns whether the
/// file was modified. The rewrite is a single full-content write without a
/// temporary file, so a failure mid-write can leave the file partially
/// written while the caller sees an error outcome.
pub fn trim_file(path: &Path) -> Result<bool> {
    let raw = fs::read(path).map_err(|source| SweepError::io(path, source))?;
    let text = String::from_utf8(raw).map_err(|_| SweepError::NonUtf8 {
        path: path.to_path_buf(),
    })?;

    match trimmed(&text) {
        Some(clean) => {
            fs::write(path, clean).map_err(|source| SweepError::io(path, source))?;
            Ok(true)
        }
        None => Ok(false),
    }
}
