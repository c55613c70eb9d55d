//! Resolution of the per-user data directory.

use crate::constants::DATA_DIR_NAME;
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the default data root, `~/.bplate-data`.
///
/// # Errors
/// * `Error::ConfigError` if the home directory cannot be determined
pub fn default_data_root() -> Result<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR_NAME)).ok_or_else(|| {
        Error::ConfigError("cannot determine path to home directory".to_string())
    })
}

/// Picks the explicitly given data root, falling back to [`default_data_root`].
/// Relative overrides are made absolute against the working directory.
pub fn resolve_data_root(data_dir: Option<PathBuf>) -> Result<PathBuf> {
    match data_dir {
        Some(path) => Ok(std::path::absolute(path)?),
        None => default_data_root(),
    }
}

/// Ensures that the data root, or a subdirectory of it, exists.
///
/// # Arguments
/// * `root` - The data root
/// * `subdir` - Optional subdirectory of the root
///
/// # Returns
/// * `Result<PathBuf>` - Path to the (now existing) directory
///
/// Calling it again for an existing directory changes nothing.
pub fn ensure_data_dir<P: AsRef<Path>>(root: P, subdir: Option<&str>) -> Result<PathBuf> {
    let mut path = root.as_ref().to_path_buf();
    if let Some(subdir) = subdir {
        path.push(subdir);
    }

    if !path.is_dir() {
        debug!("Creating data directory '{}'.", path.display());
        fs::create_dir_all(&path)?;
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_data_dir_creates_every_segment() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("a").join("b");

        let path = ensure_data_dir(&root, Some("boilerplates")).unwrap();
        assert_eq!(path, root.join("boilerplates"));
        assert!(path.is_dir());
    }

    #[test]
    fn test_ensure_data_dir_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let first = ensure_data_dir(temp_dir.path(), None).unwrap();
        let second = ensure_data_dir(temp_dir.path(), None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_data_root_prefers_override() {
        let temp_dir = TempDir::new().unwrap();
        let resolved = resolve_data_root(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(resolved, temp_dir.path());
    }
}
