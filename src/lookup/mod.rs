//! Executable lookup on the search path.
//!
//! Resolution iterates PATH entries directly rather than shelling out to
//! `which` — `which` behavior varies across systems and is sometimes a shell
//! builtin with inconsistent error handling.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Derive a package manager's install prefix from its executable location.
///
/// Resolves the executable on the search path, follows symbolic links to the
/// canonical location, and requires that location to end in `bin/<manager>`.
/// The prefix is everything before that suffix. A binary that resolves
/// somewhere else (a shim, a rename, a differently-rooted install) yields
/// `None` rather than a bogus prefix.
pub fn manager_prefix(manager: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let located = resolve_tool_path(manager, path_entries)?;
    let resolved = std::fs::canonicalize(&located).ok()?;
    let expected_suffix = Path::new("bin").join(manager);
    if !resolved.ends_with(&expected_suffix) {
        tracing::debug!(
            "'{}' resolves to {}, not under a bin/ prefix",
            manager,
            resolved.display()
        );
        return None;
    }
    resolved.parent()?.parent().map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Create a fake binary at a path (creates parent dirs as needed).
    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[test]
    fn resolve_tool_path_finds_first_match() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        create_fake_binary(&dir_a.join("port"));
        create_fake_binary(&dir_b.join("port"));

        let result = resolve_tool_path("port", &[dir_a.clone(), dir_b]);
        assert_eq!(result, Some(dir_a.join("port")));
    }

    #[test]
    fn resolve_tool_path_returns_none_when_not_found() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("empty");
        fs::create_dir_all(&dir).unwrap();

        assert!(resolve_tool_path("port", &[dir]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_skips_non_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        fs::create_dir_all(&dir_a).unwrap();
        fs::write(dir_a.join("port"), "not executable").unwrap();
        fs::set_permissions(dir_a.join("port"), fs::Permissions::from_mode(0o644)).unwrap();
        create_fake_binary(&dir_b.join("port"));

        let result = resolve_tool_path("port", &[dir_a, dir_b.clone()]);
        assert_eq!(result, Some(dir_b.join("port")));
    }

    #[test]
    fn manager_prefix_derives_from_bin_location() {
        let temp = TempDir::new().unwrap();
        let prefix = temp.path().join("opt/local");
        create_fake_binary(&prefix.join("bin/port"));

        let result = manager_prefix("port", &[prefix.join("bin")]);
        // Canonicalization may expand symlinked temp roots (e.g. /tmp on
        // macOS), so compare canonical forms.
        assert_eq!(result, Some(fs::canonicalize(&prefix).unwrap()));
    }

    #[test]
    fn manager_prefix_rejects_non_bin_location() {
        let temp = TempDir::new().unwrap();
        let odd = temp.path().join("tools");
        create_fake_binary(&odd.join("port"));

        assert!(manager_prefix("port", &[odd]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn manager_prefix_follows_symlinks() {
        let temp = TempDir::new().unwrap();
        let prefix = temp.path().join("sw");
        create_fake_binary(&prefix.join("bin/fink"));
        let link_dir = temp.path().join("links");
        fs::create_dir_all(&link_dir).unwrap();
        std::os::unix::fs::symlink(prefix.join("bin/fink"), link_dir.join("fink")).unwrap();

        let result = manager_prefix("fink", &[link_dir]);
        assert_eq!(result, Some(fs::canonicalize(&prefix).unwrap()));
    }

    #[cfg(unix)]
    #[test]
    fn manager_prefix_rejects_symlink_to_renamed_binary() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("bin/actual-tool"));
        let link_dir = temp.path().join("links");
        fs::create_dir_all(&link_dir).unwrap();
        std::os::unix::fs::symlink(
            temp.path().join("bin/actual-tool"),
            link_dir.join("port"),
        )
        .unwrap();

        // Resolves to bin/actual-tool, which does not end in bin/port.
        assert!(manager_prefix("port", &[link_dir]).is_none());
    }

    #[test]
    fn parse_system_path_returns_entries() {
        // PATH is set in any reasonable test environment.
        assert!(!parse_system_path().is_empty());
    }
}
