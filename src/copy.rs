//! File copy helpers shared by capture and materialize.

use crate::error::Result;
use filetime::FileTime;
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::DirEntry;

/// Copies `source` to `dest`, creating the parent directories of `dest` and
/// keeping the source's modification time.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<()> {
    let (source, dest) = (source.as_ref(), dest.as_ref());

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    debug!("Copying '{}' to '{}'", source.display(), dest.display());
    fs::copy(source, dest)?;

    // Set through the path, so read-only copies keep their mtime too.
    let modified = FileTime::from_last_modification_time(&fs::metadata(source)?);
    filetime::set_file_mtime(dest, modified)?;

    Ok(())
}

/// Returns true for walk entries that are symlinks pointing at a directory.
/// They are neither descended into nor copied.
pub fn is_dir_symlink(entry: &DirEntry) -> bool {
    let linked_dir = entry.path_is_symlink() && entry.path().is_dir();
    if linked_dir {
        debug!("Skipping directory symlink '{}'", entry.path().display());
    }
    linked_dir
}
