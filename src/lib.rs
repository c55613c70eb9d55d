//! bplate stores directory trees as named boilerplates and regenerates them
//! on demand. It provides capture of a source directory into per-user storage,
//! materialization of a stored tree and inventory of what is stored.

/// Capture of a source directory into storage (`bplate new`)
pub mod capture;

/// Command-line interface module for the bplate application
pub mod cli;

/// Sidecar (`bplate_config.json`) handling
pub mod config;

/// Common constants
pub mod constants;

/// File copy helpers
pub mod copy;

/// Error types and handling for the bplate application
pub mod error;

/// Default and user-defined ignore patterns
pub mod ignore;

/// Regeneration of stored boilerplates (`bplate init`)
pub mod materialize;

/// Data directory resolution
pub mod paths;

/// User input and interaction handling
pub mod prompt;

/// Stored boilerplates and inventory operations
pub mod storage;
