//! Path predicates used by buckets: resolved containment and glob matching.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;

/// True when `candidate` resolves to `root` or to something nested under it.
///
/// Both operands are canonicalized first, so symlinks and `..` segments are
/// seen through before the ancestor walk. An operand that cannot be resolved
/// (typically: it does not exist) yields `false` rather than an error.
pub fn is_under(candidate: &Path, root: &Path) -> bool {
    let (Ok(candidate), Ok(root)) = (fs::canonicalize(candidate), fs::canonicalize(root)) else {
        return false;
    };
    candidate.ancestors().any(|ancestor| ancestor == root)
}

/// Shell-style glob match (`*`, `?`, `[...]`) for a discovered file path.
///
/// A pattern containing `/` is matched against the whole path string; a bare
/// pattern like `*.log` is matched against the file name, so it hits files
/// at any depth. Invalid patterns never match.
pub fn matches_glob(candidate: &Path, pattern: &str) -> bool {
    let Ok(glob) = Pattern::new(pattern) else {
        return false;
    };
    if pattern.contains('/') {
        glob.matches(&candidate.to_string_lossy())
    } else {
        candidate
            .file_name()
            .map(|name| glob.matches(&name.to_string_lossy()))
            .unwrap_or(false)
    }
}

/// Canonicalize when possible, otherwise keep the path as configured.
///
/// A bucket rooted at a directory that does not exist yet still gets
/// registered; it simply never matches anything during the walk.
pub fn resolve_lenient(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_is_under_same_directory() {
        let dir = TempDir::new().unwrap();
        assert!(is_under(dir.path(), dir.path()));
    }

    #[test]
    fn test_is_under_nested_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        let file = dir.path().join("a/b/c.txt");
        File::create(&file).unwrap();
        assert!(is_under(&file, dir.path()));
        assert!(is_under(&file, &dir.path().join("a")));
    }

    #[test]
    fn test_is_under_sibling_is_false() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        let file = dir.path().join("a/f.txt");
        File::create(&file).unwrap();
        assert!(!is_under(&file, &dir.path().join("b")));
    }

    #[test]
    fn test_is_under_missing_operand_is_false() {
        let dir = TempDir::new().unwrap();
        assert!(!is_under(&dir.path().join("missing"), dir.path()));
        assert!(!is_under(dir.path(), &dir.path().join("missing")));
    }

    #[cfg(unix)]
    #[test]
    fn test_is_under_sees_through_symlinks() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        let file = dir.path().join("real/f.txt");
        File::create(&file).unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(dir.path().join("real"), &link).unwrap();
        assert!(is_under(&link.join("f.txt"), &dir.path().join("real")));
    }

    #[test]
    fn test_bare_glob_matches_file_name_at_any_depth() {
        assert!(matches_glob(Path::new("/data/sub/b.log"), "*.log"));
        assert!(matches_glob(Path::new("b.log"), "*.log"));
        assert!(!matches_glob(Path::new("/data/sub/b.txt"), "*.log"));
    }

    #[test]
    fn test_glob_with_separator_matches_full_path() {
        assert!(matches_glob(Path::new("/data/sub/b.log"), "/data/*/*.log"));
        assert!(!matches_glob(Path::new("/other/sub/b.log"), "/data/*/*.log"));
    }

    #[test]
    fn test_glob_character_classes() {
        assert!(matches_glob(Path::new("/x/a.txt"), "[abc].txt"));
        assert!(!matches_glob(Path::new("/x/d.txt"), "[abc].txt"));
        assert!(matches_glob(Path::new("/x/test1.rs"), "test?.rs"));
        assert!(!matches_glob(Path::new("/x/test12.rs"), "test?.rs"));
    }

    #[test]
    fn test_invalid_pattern_never_matches() {
        assert!(!matches_glob(Path::new("/x/a.txt"), "[unclosed"));
    }

    #[test]
    fn test_resolve_lenient_keeps_missing_paths() {
        let missing = Path::new("/definitely/not/here");
        assert_eq!(resolve_lenient(missing), missing);
    }
}
