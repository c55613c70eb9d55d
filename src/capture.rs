//! Capturing a source directory as a stored boilerplate (`bplate new`).

use crate::config::{
    complete_sidecar, read_source_sidecar, save_config, validate_name, write_sidecar,
    BoilerplateConfig, BoilerplateInfo, SourceSidecar,
};
use crate::constants::CONFIG_FILE;
use crate::copy::{copy_file, is_dir_symlink};
use crate::error::{Error, Result};
use crate::ignore::IgnoreRules;
use crate::prompt::Prompter;
use crate::storage::Storage;
use log::{debug, trace};
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Options of a capture that do not come from the sidecar.
#[derive(Debug, Default, Clone)]
pub struct CaptureOptions {
    /// Name to use when the source has no named sidecar
    pub name: Option<String>,
    /// Overwrite an existing boilerplate without asking
    pub skip_confirm: bool,
}

/// Outcome of a successful capture.
#[derive(Debug)]
pub struct CaptureReport {
    pub info: BoilerplateInfo,
    /// Directory the tree was copied from, after `dest` rebasing
    pub capture_root: PathBuf,
    pub files_copied: usize,
    /// Whether a sidecar was written into the source directory
    pub sidecar_written: bool,
    /// Whether an existing boilerplate was replaced
    pub replaced: bool,
}

/// Resolves the directory a capture starts from: `source` itself, or the
/// `dest` subdirectory of it.
///
/// # Errors
/// * `Error::ConfigError` if `dest` is absolute, leaves the source or is not a directory
pub fn resolve_capture_root<P: AsRef<Path>>(source: P, dest: Option<&str>) -> Result<PathBuf> {
    let source = source.as_ref();
    let Some(dest) = dest.filter(|d| !d.trim().is_empty()) else {
        return Ok(source.to_path_buf());
    };

    let dest_path = Path::new(dest);
    let escapes = dest_path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(Error::ConfigError(format!(
            "dest '{dest}' must be a relative path inside the source directory"
        )));
    }

    let root = source.join(dest_path);
    if !root.is_dir() {
        return Err(Error::ConfigError(format!(
            "dest '{}' is not a directory",
            root.display()
        )));
    }
    Ok(root)
}

/// Copies every non-ignored file under `capture_root` to the same relative
/// path under `target`. Returns the number of files copied.
///
/// Ignored directories are pruned whole. The sidecar at the top of
/// `capture_root` is never copied.
pub fn copy_tree<P: AsRef<Path>, Q: AsRef<Path>>(
    capture_root: P,
    target: Q,
    rules: &IgnoreRules,
) -> Result<usize> {
    let (capture_root, target) = (capture_root.as_ref(), target.as_ref());
    let mut files_copied = 0;

    let walker = WalkDir::new(capture_root).min_depth(1).into_iter().filter_entry(|entry| {
        let ignored = entry
            .path()
            .strip_prefix(capture_root)
            .is_ok_and(|relative| rules.is_ignored(relative));
        if ignored {
            trace!("Ignoring '{}'", entry.path().display());
        }
        !ignored
    });

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() || is_dir_symlink(&entry) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(capture_root)
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        if relative == Path::new(CONFIG_FILE) {
            continue;
        }

        copy_file(entry.path(), target.join(relative))?;
        files_copied += 1;
    }

    Ok(files_copied)
}

/// Captures `source` into `storage`.
///
/// # Flow
/// 1. Reads the source sidecar; a malformed one aborts before anything changes
/// 2. Resolves the name from the sidecar, the options or the operator
/// 3. Validates ignore patterns and `dest`
/// 4. Asks before replacing an existing boilerplate of the same name
/// 5. Writes the sidecar back to the source if it was missing or unnamed
/// 6. Copies the tree and stores the sidecar next to it
///
/// The previous boilerplate is removed before the new copy is made, so a
/// failure while copying leaves neither version complete.
pub fn capture<P: AsRef<Path>>(
    storage: &Storage,
    prompt: &dyn Prompter,
    source: P,
    options: &CaptureOptions,
) -> Result<CaptureReport> {
    let source = source.as_ref();
    if !source.is_dir() {
        return Err(Error::SourceDirectoryError { source_dir: source.display().to_string() });
    }

    let sidecar = read_source_sidecar(source)?;
    let name = match &sidecar {
        SourceSidecar::Named(config) => config.name.clone(),
        _ => match &options.name {
            Some(name) => name.trim().to_string(),
            None => prompt.input("Boilerplate name".to_string())?,
        },
    };
    validate_name(&name)?;

    let (config, pending_sidecar) = match sidecar {
        SourceSidecar::Named(config) => (config, None),
        SourceSidecar::Unnamed(raw) => {
            let (config, value) = complete_sidecar(raw, &name)?;
            (config, Some(value))
        }
        SourceSidecar::Absent => {
            let config = BoilerplateConfig::new(&name);
            let value = serde_json::to_value(&config)?;
            (config, Some(value))
        }
    };

    let rules = IgnoreRules::new(config.ignore_files.as_slice())?;
    let capture_root = resolve_capture_root(source, config.dest.as_deref())?;

    let target = storage.boilerplate_path(&name)?;
    let replaced = target.exists();
    if replaced {
        let confirmed = prompt.confirm(
            options.skip_confirm,
            format!("Another boilerplate with name '{name}' already exists. Overwrite it?"),
        )?;
        if !confirmed {
            return Err(Error::Cancelled);
        }
        debug!("Removing existing boilerplate '{}'", target.display());
        fs::remove_dir_all(&target)?;
    }

    let sidecar_written = pending_sidecar.is_some();
    if let Some(value) = pending_sidecar {
        write_sidecar(source, &value)?;
    }

    debug!("Copying files from '{}' to '{}'", capture_root.display(), target.display());
    fs::create_dir_all(&target)?;
    let files_copied = copy_tree(&capture_root, &target, &rules)?;
    save_config(&target, &config)?;

    Ok(CaptureReport {
        info: BoilerplateInfo { config, path: target },
        capture_root,
        files_copied,
        sidecar_written,
        replaced,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_capture_root() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("src")).unwrap();

        assert_eq!(resolve_capture_root(temp_dir.path(), None).unwrap(), temp_dir.path());
        assert_eq!(
            resolve_capture_root(temp_dir.path(), Some("src")).unwrap(),
            temp_dir.path().join("src")
        );
        assert!(resolve_capture_root(temp_dir.path(), Some("../src")).is_err());
        assert!(resolve_capture_root(temp_dir.path(), Some("missing")).is_err());
    }

    #[test]
    fn test_copy_tree_prunes_ignored_directories() {
        let source = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        fs::create_dir_all(source.path().join(".git")).unwrap();
        fs::create_dir_all(source.path().join("sub")).unwrap();
        fs::write(source.path().join(".git").join("config"), "").unwrap();
        fs::write(source.path().join("sub").join("b.txt"), "b").unwrap();
        fs::write(source.path().join(CONFIG_FILE), "{}").unwrap();

        let rules = IgnoreRules::new::<&str>(&[]).unwrap();
        let copied = copy_tree(source.path(), target.path(), &rules).unwrap();

        assert_eq!(copied, 1);
        assert!(target.path().join("sub").join("b.txt").is_file());
        assert!(!target.path().join(".git").exists());
        assert!(!target.path().join(CONFIG_FILE).exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_tree_skips_directory_symlinks() {
        let source = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        fs::create_dir_all(source.path().join("real")).unwrap();
        fs::write(source.path().join("real").join("a.txt"), "a").unwrap();
        fs::write(source.path().join("top.txt"), "top").unwrap();
        std::os::unix::fs::symlink(source.path().join("real"), source.path().join("link"))
            .unwrap();
        std::os::unix::fs::symlink(source.path().join("top.txt"), source.path().join("top-link"))
            .unwrap();

        let rules = IgnoreRules::new::<&str>(&[]).unwrap();
        let copied = copy_tree(source.path(), target.path(), &rules).unwrap();

        assert_eq!(copied, 3);
        assert!(target.path().join("real").join("a.txt").is_file());
        assert_eq!(fs::read_to_string(target.path().join("top-link")).unwrap(), "top");
        assert!(!target.path().join("link").exists());
    }
}
