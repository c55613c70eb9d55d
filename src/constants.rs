//! Common constants used throughout the bplate application.

/// Name of the sidecar file stored at the root of every boilerplate
pub const CONFIG_FILE: &str = "bplate_config.json";

/// Name of the data directory created in the user's home directory
pub const DATA_DIR_NAME: &str = ".bplate-data";

/// Subdirectory of the data directory holding stored boilerplates
pub const BOILERPLATES_DIR: &str = "boilerplates";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "BPLATE_DATA_DIR";

/// Entries skipped on every capture: version control metadata and caches
pub const DEFAULT_IGNORED: [&str; 5] = [".git", ".hg", ".svn", "__pycache__", ".DS_Store"];

/// Prefix of storage entries reserved for internal use
pub const HIDDEN_PREFIX: char = '_';
