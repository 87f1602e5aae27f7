//! Shared helpers for binary-driving integration tests.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Captured result of one `wsw` invocation.
pub struct CmdResult {
    pub code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Run the `wsw` binary with `args`, using `cwd` as the working directory.
///
/// `--no-color` is always appended so output assertions never meet ANSI
/// escapes.
pub fn run_wsw(cwd: &Path, args: &[&str]) -> CmdResult {
    let output = Command::new(env!("CARGO_BIN_EXE_wsw"))
        .args(args)
        .arg("--no-color")
        .current_dir(cwd)
        .output()
        .expect("failed to spawn wsw binary");

    CmdResult {
        code: output.status.code(),
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Create `rel` under `root` with the given bytes, creating parent dirs.
pub fn write_file(root: &Path, rel: &str, content: &[u8]) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(&path, content).expect("write fixture file");
    path
}
