use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Resolves `path` against the current directory unless it is already
/// absolute.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::path::absolute(path)
        .with_context(|| format!("Failed to resolve absolute path of {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_is_unchanged() {
        let path = Path::new("/tmp/model/user.go");
        assert_eq!(absolute_path(path).unwrap(), PathBuf::from("/tmp/model/user.go"));
    }

    #[test]
    fn test_relative_path_is_resolved_against_cwd() {
        let resolved = absolute_path(Path::new("model/user.go")).unwrap();
        assert!(resolved.is_absolute());
        assert_eq!(resolved, std::env::current_dir().unwrap().join("model/user.go"));
    }
}
