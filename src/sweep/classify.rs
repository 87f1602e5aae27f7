//! Text-file classification: extension/name allow-lists with a NUL-byte
//! sniff fallback.
//!
//! The heuristic is intentionally lenient. A binary file with a text-like
//! extension is misclassified as text; that is an accepted limitation, not
//! something to patch over with stricter detection.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Extensions (lowercase, without the dot) that are always treated as text.
const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "py", "js", "html", "css", "json", "xml", "csv", "md", "rst", "yml", "yaml", "ini",
    "cfg", "log", "sql", "sh", "bat", "ps1", "php", "rb", "java", "cpp", "c", "h", "hpp", "cs",
    "go", "rs", "swift", "kt", "scala", "r", "m", "pl", "lua", "tcl", "vb", "fs", "clj", "hs",
    "elm", "dart", "ts", "jsx", "tsx", "vue", "svelte",
];

/// Extensionless file names that are usually text. Matched case-sensitively.
const TEXT_NAMES: &[&str] = &[
    "README",
    "LICENSE",
    "CHANGELOG",
    "CONTRIBUTING",
    "AUTHORS",
    "INSTALL",
    "NEWS",
    "TODO",
    "COPYING",
    "Makefile",
    "Dockerfile",
];

/// Bytes sniffed from the head of a file when the name gives no verdict.
const SNIFF_LEN: usize = 1024;

/// Decide whether `path` should be treated as a text file.
///
/// Checks the extension allow-list first (ASCII case-insensitive), then the
/// extensionless-name list, and finally sniffs up to [`SNIFF_LEN`] bytes for
/// a NUL byte (the binary indicator). Unreadable files classify as non-text.
#[must_use]
pub fn is_text_file(path: &Path) -> bool {
    if let Some(ext) = path.extension().and_then(|e| e.to_str())
        && TEXT_EXTENSIONS.iter().any(|t| ext.eq_ignore_ascii_case(t))
    {
        return true;
    }

    if let Some(name) = path.file_name().and_then(|n| n.to_str())
        && TEXT_NAMES.contains(&name)
    {
        return true;
    }

    head_is_nul_free(path).unwrap_or(false)
}

/// Read up to [`SNIFF_LEN`] bytes and report whether no NUL byte appears.
///
/// A NUL survives any lenient text decoding unchanged, so scanning the raw
/// sample is equivalent to decoding leniently and searching for `'\0'`.
fn head_is_nul_free(path: &Path) -> std::io::Result<bool> {
    let mut file = File::open(path)?;
    let mut sample = [0u8; SNIFF_LEN];
    let mut filled = 0;
    loop {
        let n = file.read(&mut sample[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
        if filled == SNIFF_LEN {
            break;
        }
    }
    Ok(memchr::memchr(0, &sample[..filled]).is_none())
}
