//! Error handling for the bplate application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for bplate operations.
///
/// This enum represents all possible errors that can occur within the bplate application.
/// It implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised while walking a directory tree
    #[error("Directory traversal error: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// Represents errors that occur while (de)serializing a sidecar file
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents invalid ignore patterns
    #[error("Ignore pattern error: {0}.")]
    GlobError(#[from] globset::Error),

    /// Represents failures of the interactive prompt
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// The referenced boilerplate has no storage directory.
    #[error("No boilerplate with name '{name}' exists.")]
    BoilerplateNotFound { name: String },

    /// A storage directory exists but holds no sidecar.
    #[error("Boilerplate '{name}' has no configuration file at '{config_path}'.")]
    MissingConfig { name: String, config_path: String },

    /// The capture source is missing or not a directory.
    #[error("Source '{source_dir}' is not a readable directory.")]
    SourceDirectoryError { source_dir: String },

    /// The operator declined a destructive action.
    #[error("Aborted.")]
    Cancelled,
}

/// Convenience type alias for Results with [`Error`] as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the process exit code for this error.
    ///
    /// Not-found and declined confirmations are reported but end the process cleanly.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::BoilerplateNotFound { .. } | Error::Cancelled => 0,
            _ => 1,
        }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with the code given by [`Error::exit_code`]
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(err.exit_code());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let not_found = Error::BoilerplateNotFound { name: "demo".to_string() };
        assert_eq!(not_found.exit_code(), 0);
        assert_eq!(Error::Cancelled.exit_code(), 0);
        assert_eq!(Error::ConfigError("bad".to_string()).exit_code(), 1);
    }
}
