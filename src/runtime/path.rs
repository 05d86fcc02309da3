//! Path helpers that never touch the filesystem.

use std::path::{Component, Path, PathBuf};

/// Fold `.` and `..` components lexically.
///
/// Symlinks are not followed. A `..` that would climb above the root (or above
/// the start of a relative path) is kept as-is.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    result.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    result.pop();
                } else if !result.has_root() {
                    result.push(component);
                }
            }
            _ => result.push(component),
        }
    }
    result
}

/// Replace a leading `~` with `home`.
///
/// Only the current user's home is understood; `~other/...` is returned
/// unchanged, as is everything when no home directory is known or the path
/// is not valid UTF-8.
pub fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(text) = path.to_str() else {
        return path.to_path_buf();
    };
    let expanded = shellexpand::tilde_with_context(text, || home.and_then(Path::to_str));
    PathBuf::from(expanded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_simple() {
        assert_eq!(
            normalize_path(Path::new("/opt/tools/tools.yml")),
            PathBuf::from("/opt/tools/tools.yml")
        );
    }

    #[test]
    fn test_normalize_path_with_dot() {
        assert_eq!(
            normalize_path(Path::new("/opt/./tools/./tools.yml")),
            PathBuf::from("/opt/tools/tools.yml")
        );
    }

    #[test]
    fn test_normalize_path_with_parent_dir() {
        assert_eq!(
            normalize_path(Path::new("/opt/tools/../hosttools/tools.yml")),
            PathBuf::from("/opt/hosttools/tools.yml")
        );
    }

    #[test]
    fn test_normalize_path_parent_at_root() {
        assert_eq!(
            normalize_path(Path::new("/../../etc/tools.yml")),
            PathBuf::from("/etc/tools.yml")
        );
    }

    #[test]
    fn test_normalize_path_relative_keeps_leading_parent() {
        assert_eq!(
            normalize_path(Path::new("../scripts/./tools.yml")),
            PathBuf::from("../scripts/tools.yml")
        );
        assert_eq!(
            normalize_path(Path::new("a/../../b")),
            PathBuf::from("../b")
        );
    }

    #[test]
    fn test_expand_home_with_rest() {
        let home = PathBuf::from("/home/user");
        assert_eq!(
            expand_home(Path::new("~/hosttools/tools.yml"), Some(&home)),
            PathBuf::from("/home/user/hosttools/tools.yml")
        );
    }

    #[test]
    fn test_expand_home_bare_tilde() {
        let home = PathBuf::from("/home/user");
        assert_eq!(expand_home(Path::new("~"), Some(&home)), home);
    }

    #[test]
    fn test_expand_home_leaves_other_paths_alone() {
        let home = PathBuf::from("/home/user");
        assert_eq!(
            expand_home(Path::new("tools.yml"), Some(&home)),
            PathBuf::from("tools.yml")
        );
        assert_eq!(
            expand_home(Path::new("~other/tools.yml"), Some(&home)),
            PathBuf::from("~other/tools.yml")
        );
        assert_eq!(
            expand_home(Path::new("/etc/~/tools.yml"), Some(&home)),
            PathBuf::from("/etc/~/tools.yml")
        );
    }

    #[test]
    fn test_expand_home_without_home_dir() {
        assert_eq!(
            expand_home(Path::new("~/tools.yml"), None),
            PathBuf::from("~/tools.yml")
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_expand_home_non_utf8_untouched() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = Path::new(OsStr::from_bytes(b"~/tools-\xff.yml"));
        let home = PathBuf::from("/home/user");
        assert_eq!(expand_home(raw, Some(&home)), raw.to_path_buf());
    }
}
