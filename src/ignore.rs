//! File and directory ignore pattern handling for captures.
//! Combines the built-in ignore list with the `ignore_files` patterns of a
//! boilerplate's sidecar, similar to .gitignore functionality.

use crate::constants::DEFAULT_IGNORED;
use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::Path;

/// Compiled set of ignore patterns.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    glob_set: GlobSet,
}

impl IgnoreRules {
    /// Builds the rules from the default ignore list plus `patterns`.
    ///
    /// # Arguments
    /// * `patterns` - File names or glob patterns, e.g. `["*.log", "build/"]`
    ///
    /// # Errors
    /// * `Error::GlobError` if a pattern is not a valid glob
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in DEFAULT_IGNORED {
            builder.add(Glob::new(pattern)?);
        }
        for pattern in patterns {
            let pattern = pattern.as_ref().trim().trim_end_matches('/');
            if pattern.is_empty() {
                continue;
            }
            debug!("Adding ignore pattern '{pattern}'");
            builder.add(Glob::new(pattern)?);
        }

        Ok(Self { glob_set: builder.build()? })
    }

    /// Checks `relative_path` (relative to the capture root) against the rules.
    /// A pattern matches either the whole relative path or the bare entry name.
    pub fn is_ignored<P: AsRef<Path>>(&self, relative_path: P) -> bool {
        let relative_path = relative_path.as_ref();
        self.glob_set.is_match(relative_path)
            || relative_path.file_name().is_some_and(|name| self.glob_set.is_match(name))
    }
}
