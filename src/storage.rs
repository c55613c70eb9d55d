//! Storage of captured boilerplates and the inventory operations over it.
//!
//! Every boilerplate lives in `<root>/boilerplates/<name>/` next to its
//! `bplate_config.json` sidecar. The root is passed in explicitly so nothing
//! here depends on the user's home directory.

use crate::config::{validate_name, BoilerplateInfo};
use crate::constants::{BOILERPLATES_DIR, HIDDEN_PREFIX};
use crate::error::{Error, Result};
use crate::paths::ensure_data_dir;
use crate::prompt::Prompter;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Handle to a data root.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Creates a handle for `root`. Nothing is created on disk until an
    /// operation needs it.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the `boilerplates` directory, creating it if needed.
    pub fn boilerplates_dir(&self) -> Result<PathBuf> {
        ensure_data_dir(&self.root, Some(BOILERPLATES_DIR))
    }

    /// Returns the storage directory for `name`, whether or not it exists.
    pub fn boilerplate_path(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.boilerplates_dir()?.join(name))
    }

    pub fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.boilerplate_path(name)?.is_dir())
    }

    /// Loads a stored boilerplate.
    ///
    /// # Errors
    /// * `Error::BoilerplateNotFound` if no storage directory exists for `name`
    /// * `Error::MissingConfig` / `Error::ConfigError` if its sidecar is absent or invalid
    pub fn get(&self, name: &str) -> Result<BoilerplateInfo> {
        let path = self.boilerplate_path(name)?;
        if !path.is_dir() {
            return Err(Error::BoilerplateNotFound { name: name.to_string() });
        }
        BoilerplateInfo::load(path)
    }

    /// Lists the stored boilerplates sorted by name. Hidden entries and
    /// directories without a valid sidecar are left out.
    pub fn list(&self) -> Result<Vec<BoilerplateInfo>> {
        let mut boilerplates = Vec::new();

        for entry in fs::read_dir(self.boilerplates_dir()?)? {
            let path = entry?.path();
            let hidden = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_none_or(|n| n.starts_with(HIDDEN_PREFIX));
            if !path.is_dir() || hidden {
                debug!("Skipping '{}'", path.display());
                continue;
            }

            match BoilerplateInfo::load(&path) {
                Ok(info) => boilerplates.push(info),
                Err(e) => warn!("Skipping '{}': {}", path.display(), e),
            }
        }

        boilerplates.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(boilerplates)
    }

    /// Removes a stored boilerplate after the operator confirms.
    ///
    /// # Arguments
    /// * `prompt` - Asked for confirmation
    /// * `name` - Boilerplate to delete
    /// * `skip_confirm` - Treat the confirmation as already given
    ///
    /// # Errors
    /// * `Error::BoilerplateNotFound` if nothing is stored under `name`
    /// * `Error::Cancelled` if the operator declines
    pub fn delete(&self, prompt: &dyn Prompter, name: &str, skip_confirm: bool) -> Result<PathBuf> {
        let path = self.boilerplate_path(name)?;
        if !path.is_dir() {
            return Err(Error::BoilerplateNotFound { name: name.to_string() });
        }

        let confirmed = prompt.confirm(
            skip_confirm,
            "This action is irreversible, are you sure you want to proceed?".to_string(),
        )?;
        if !confirmed {
            return Err(Error::Cancelled);
        }

        debug!("Removing '{}'", path.display());
        fs::remove_dir_all(&path)?;
        Ok(path)
    }
}
