//! Regenerating a stored boilerplate at a destination (`bplate init`).

use crate::config::BoilerplateInfo;
use crate::constants::CONFIG_FILE;
use crate::copy::{copy_file, is_dir_symlink};
use crate::error::{Error, Result};
use crate::storage::Storage;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of a successful materialization.
#[derive(Debug)]
pub struct MaterializeReport {
    pub info: BoilerplateInfo,
    pub destination: PathBuf,
    pub files_copied: usize,
}

/// Copies the boilerplate `name` into `destination`, which is created if it
/// does not exist. Files already present at the destination are overwritten.
///
/// # Errors
/// * `Error::BoilerplateNotFound` if nothing is stored under `name`
/// * `Error::MissingConfig` if the stored boilerplate has no sidecar
pub fn materialize<P: AsRef<Path>>(
    storage: &Storage,
    name: &str,
    destination: P,
) -> Result<MaterializeReport> {
    let info = storage.get(name)?;
    let destination = destination.as_ref().to_path_buf();
    fs::create_dir_all(&destination)?;

    debug!("Copying files from '{}' to '{}'", info.path.display(), destination.display());

    let mut files_copied = 0;
    for entry in WalkDir::new(&info.path).min_depth(1) {
        let entry = entry?;
        if entry.file_type().is_dir() || is_dir_symlink(&entry) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(&info.path)
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        if relative == Path::new(CONFIG_FILE) {
            continue;
        }

        copy_file(entry.path(), destination.join(relative))?;
        files_copied += 1;
    }

    Ok(MaterializeReport { info, destination, files_copied })
}
