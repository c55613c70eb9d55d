//! Configuration handling for boilerplates.
//! This module loads and saves the `bplate_config.json` sidecar that describes a
//! boilerplate and the options used when capturing it.

use crate::constants::{CONFIG_FILE, HIDDEN_PREFIX};
use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder printed for metadata fields that are not set.
pub const NONE_AVAILABLE: &str = "None available";

/// Metadata and capture options of a boilerplate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoilerplateConfig {
    /// Unique identifier; also the name of the storage directory
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// File names or glob patterns skipped during capture
    #[serde(default, alias = "ignore_patterns", skip_serializing_if = "Vec::is_empty")]
    pub ignore_files: Vec<String>,
    /// Subdirectory of the source used as the capture root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest: Option<String>,
}

impl BoilerplateConfig {
    /// Creates a config holding only a name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), ..Default::default() }
    }
}

impl fmt::Display for BoilerplateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_none(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or(NONE_AVAILABLE)
        }

        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Description: {}", or_none(&self.description))?;
        writeln!(f, "Author: {}", or_none(&self.author))?;
        writeln!(f, "Version: {}", or_none(&self.version))?;
        write!(f, "URL: {}", or_none(&self.url))
    }
}

/// A boilerplate's config paired with its storage directory.
#[derive(Debug, Clone)]
pub struct BoilerplateInfo {
    pub config: BoilerplateConfig,
    pub path: PathBuf,
}

impl BoilerplateInfo {
    /// Loads the sidecar of the boilerplate stored in `path`.
    ///
    /// # Errors
    /// * `Error::MissingConfig` if the directory holds no sidecar
    /// * `Error::ConfigError` if the sidecar is malformed or lacks a name
    pub fn load<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let config_path = config_path(&path);
        if !config_path.is_file() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            return Err(Error::MissingConfig {
                name,
                config_path: config_path.display().to_string(),
            });
        }

        let config = read_config(&config_path)?;
        Ok(Self { config, path })
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }
}

/// The state of the sidecar found in a capture source.
#[derive(Debug)]
pub enum SourceSidecar {
    /// No sidecar exists yet
    Absent,
    /// A sidecar exists but does not name the boilerplate; the raw object is
    /// kept so unknown keys survive when the name is written back
    Unnamed(serde_json::Map<String, serde_json::Value>),
    /// A complete sidecar
    Named(BoilerplateConfig),
}

/// Returns the sidecar path inside `dir`.
pub fn config_path<P: AsRef<Path>>(dir: P) -> PathBuf {
    dir.as_ref().join(CONFIG_FILE)
}

/// Parses a sidecar's content read from `origin`. A missing `name` is an error.
pub fn parse_config<P: AsRef<Path>>(content: &str, origin: P) -> Result<BoilerplateConfig> {
    serde_json::from_str(content).map_err(|e| {
        Error::ConfigError(format!("Invalid {CONFIG_FILE} at '{}': {e}", origin.as_ref().display()))
    })
}

/// Reads and parses the sidecar at `config_path`.
pub fn read_config<P: AsRef<Path>>(config_path: P) -> Result<BoilerplateConfig> {
    let config_path = config_path.as_ref();
    debug!("Loading configuration from {}", config_path.display());
    let content = fs::read_to_string(config_path)?;
    parse_config(&content, config_path)
}

/// Writes `config` as the sidecar of `dir`.
pub fn save_config<P: AsRef<Path>>(dir: P, config: &BoilerplateConfig) -> Result<()> {
    write_sidecar(dir, &serde_json::to_value(config)?)
}

/// Inspects the sidecar of a capture source.
///
/// # Errors
/// * `Error::ConfigError` if the sidecar exists but is not a valid JSON object
pub fn read_source_sidecar<P: AsRef<Path>>(source_dir: P) -> Result<SourceSidecar> {
    let config_path = config_path(source_dir);
    if !config_path.exists() {
        return Ok(SourceSidecar::Absent);
    }

    let content = fs::read_to_string(&config_path)?;
    let value: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
        Error::ConfigError(format!("Invalid {CONFIG_FILE} at '{}': {e}", config_path.display()))
    })?;
    let serde_json::Value::Object(map) = value else {
        return Err(Error::ConfigError(format!(
            "{CONFIG_FILE} at '{}' must contain a JSON object",
            config_path.display()
        )));
    };

    if map.contains_key("name") {
        parse_config(&content, &config_path).map(SourceSidecar::Named)
    } else {
        Ok(SourceSidecar::Unnamed(map))
    }
}

/// Adds `name` to an unnamed sidecar object.
///
/// # Returns
/// * The parsed config and the completed JSON object to write back to the source
pub fn complete_sidecar(
    mut raw: serde_json::Map<String, serde_json::Value>,
    name: &str,
) -> Result<(BoilerplateConfig, serde_json::Value)> {
    raw.insert("name".to_string(), serde_json::Value::String(name.to_string()));
    let value = serde_json::Value::Object(raw);
    let config = serde_json::from_value(value.clone())
        .map_err(|e| Error::ConfigError(format!("Invalid {CONFIG_FILE}: {e}")))?;
    Ok((config, value))
}

/// Writes a raw sidecar object into `dir`.
pub fn write_sidecar<P: AsRef<Path>>(dir: P, value: &serde_json::Value) -> Result<()> {
    let config_path = config_path(dir);
    debug!("Writing configuration to {}", config_path.display());
    fs::write(config_path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Checks that `name` can be used as a storage directory name.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::ValidationError("boilerplate name cannot be empty".to_string()));
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(Error::ValidationError(format!(
            "'{name}' is not a valid boilerplate name"
        )));
    }
    if name.starts_with(HIDDEN_PREFIX) {
        return Err(Error::ValidationError(format!(
            "boilerplate names cannot start with '{HIDDEN_PREFIX}'"
        )));
    }
    Ok(())
}
