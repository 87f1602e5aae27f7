//! Path resolution for the sweep root.

use std::env;
use std::path::{Component, Path, PathBuf};

/// Resolve a path to an absolute, normalized form.
///
/// Existing paths go through `fs::canonicalize`, which also resolves
/// symlinks. A path that cannot be canonicalized is anchored at the current
/// working directory with its `.` and `..` components squashed syntactically.
pub fn resolve_absolute_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
    };

    std::fs::canonicalize(&absolute).unwrap_or_else(|_| squash_components(&absolute))
}

/// Drop `.` components and resolve `..` against the preceding component.
/// A `..` at the filesystem root is dropped.
fn squash_components(path: &Path) -> PathBuf {
    let mut squashed = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                squashed.pop();
            }
            other => squashed.push(other),
        }
    }
    squashed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_relative_path_is_canonicalized() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(
            resolve_absolute_path(Path::new(".")),
            std::fs::canonicalize(cwd).unwrap()
        );
    }

    #[test]
    fn missing_path_is_squashed_syntactically() {
        #[cfg(unix)]
        let root = Path::new("/");
        #[cfg(windows)]
        let root = Path::new("C:\\");

        let input = root.join("no-such-dir").join("a").join("..").join("b");
        assert!(std::fs::canonicalize(&input).is_err());
        assert_eq!(
            resolve_absolute_path(&input),
            root.join("no-such-dir").join("b")
        );
    }

    #[test]
    fn relative_missing_path_is_anchored_at_cwd() {
        let cwd = env::current_dir().unwrap();
        let resolved = resolve_absolute_path(Path::new("no-such-dir/./sub"));
        assert_eq!(resolved, cwd.join("no-such-dir").join("sub"));
    }

    #[cfg(unix)]
    #[test]
    fn parent_of_root_is_dropped() {
        assert_eq!(
            squash_components(Path::new("/../etc")),
            PathBuf::from("/etc")
        );
    }
}
