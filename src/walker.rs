//! Deterministic directory traversal.

use crate::error::{Error, Result};
use log::debug;
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A regular file found under the embed root.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    /// Full path to the file on disk.
    pub path: PathBuf,
    /// Metadata captured during the walk (not following symlinks).
    pub metadata: Metadata,
}

/// Collect every regular file below `root` in lexical order.
///
/// Directories, symlinks and special files are skipped. Any traversal error
/// aborts the whole walk.
pub fn walk(root: &Path) -> Result<Vec<WalkedFile>> {
    if !root.is_dir() {
        return Err(Error::InvalidRoot(root.to_path_buf()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry?;

        if !entry.file_type().is_file() {
            continue;
        }

        let metadata = entry.metadata()?;
        debug!("walk: {} ({} bytes)", entry.path().display(), metadata.len());

        files.push(WalkedFile {
            path: entry.into_path(),
            metadata,
        });
    }

    Ok(files)
}
