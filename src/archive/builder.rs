//! Sequential tar container writer.

use crate::archive::ArchiveSummary;
use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::walker::WalkedFile;
use log::debug;
use std::fs::Metadata;
use std::path::{Component, Path};
use std::time::UNIX_EPOCH;
use tar::{EntryType, Header};

/// Compute the archive name of `path`: relative to `root`, `/`-separated,
/// with no leading separator.
pub fn relative_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| Error::OutsideRoot {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = part
                    .to_str()
                    .ok_or_else(|| Error::NonUtf8Path(path.to_path_buf()))?;
                parts.push(part);
            }
            Component::CurDir => {}
            _ => {
                return Err(Error::OutsideRoot {
                    path: path.to_path_buf(),
                    root: root.to_path_buf(),
                })
            }
        }
    }

    if parts.is_empty() {
        return Err(Error::OutsideRoot {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        });
    }

    Ok(parts.join("/"))
}

/// Writes header and content pairs into an in-memory tar container.
pub struct ArchiveBuilder<'a> {
    root: &'a Path,
    config: &'a BuildConfig,
    tar: tar::Builder<Vec<u8>>,
    summary: ArchiveSummary,
}

impl<'a> ArchiveBuilder<'a> {
    /// Start an empty container for files below `root`.
    pub fn new(root: &'a Path, config: &'a BuildConfig) -> Self {
        Self {
            root,
            config,
            tar: tar::Builder::new(Vec::new()),
            summary: ArchiveSummary::default(),
        }
    }

    /// Read one walked file and append its header and contents.
    pub fn append(&mut self, file: &WalkedFile) -> Result<()> {
        let name = relative_name(self.root, &file.path)?;
        let contents = std::fs::read(&file.path)?;

        let mut header = Header::new_gnu();
        header.set_entry_type(EntryType::Regular);
        header.set_size(contents.len() as u64);
        header.set_mode(self.config.header_mode(file_mode(&file.metadata)));
        header.set_mtime(self.config.header_mtime(file_mtime(&file.metadata)));

        self.tar.append_data(&mut header, &name, contents.as_slice())?;

        debug!("archive: {} ({} bytes)", name, contents.len());
        self.summary.files += 1;
        self.summary.content_bytes += contents.len() as u64;
        Ok(())
    }

    /// Write the trailer and return the finished container bytes.
    pub fn finish(self) -> Result<(Vec<u8>, ArchiveSummary)> {
        let mut summary = self.summary;
        let container = self.tar.into_inner()?;
        summary.container_bytes = container.len() as u64;
        Ok((container, summary))
    }
}

#[cfg(unix)]
fn file_mode(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode()
}

#[cfg(not(unix))]
fn file_mode(metadata: &Metadata) -> u32 {
    if metadata.permissions().readonly() {
        0o444
    } else {
        0o644
    }
}

fn file_mtime(metadata: &Metadata) -> u64 {
    metadata
        .modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
