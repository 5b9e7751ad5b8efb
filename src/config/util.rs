//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/site/partials/  ← start
/// /home/user/site/share-studio.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Expand `~` and resolve relative paths against `root`.
pub fn expand_path(path: &str, root: &Path) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(path).into_owned());
    if expanded.is_relative() {
        root.join(expanded)
    } else {
        expanded
    }
}

/// Whether `value` is an absolute http(s) URL.
pub fn is_http_url(value: &str) -> bool {
    url::Url::parse(value)
        .is_ok_and(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("share-studio.toml"), "").unwrap();

        let found = find_config_file(Path::new("share-studio.toml"), &nested).unwrap();
        assert_eq!(found, dir.path().join("share-studio.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = TempDir::new().unwrap();
        assert!(find_config_file(Path::new("no-such-config-file.toml"), dir.path()).is_none());
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        assert!(find_config_file(&path, Path::new("/")).is_none());
        std::fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path, Path::new("/")), Some(path));
    }

    #[test]
    fn test_expand_path() {
        let root = Path::new("/project");
        assert_eq!(expand_path("state.json", root), root.join("state.json"));
        assert_eq!(expand_path("/tmp/state.json", root), PathBuf::from("/tmp/state.json"));
        if std::env::var_os("HOME").is_some() {
            assert!(!expand_path("~/state.json", root).starts_with("~"));
        }
    }

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://cdn.example.com/share-buttons.js"));
        assert!(is_http_url("http://localhost:8080/share-buttons.js"));
        assert!(!is_http_url("/share-buttons.js"));
        assert!(!is_http_url("ftp://example.com/share-buttons.js"));
        assert!(!is_http_url("not a url"));
    }
}
