//! Archive building: tar container plus gzip compression.
//!
//! The compressed blob produced here is exactly what the runtime in
//! [`crate::runtime`] expects to decode.

mod builder;
mod compress;

pub use builder::{relative_name, ArchiveBuilder};
pub use compress::compress;

use crate::config::BuildConfig;
use crate::error::Result;
use crate::walker::walk;
use log::info;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Size accounting for one archive build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveSummary {
    /// Number of regular files stored.
    pub files: usize,
    /// Sum of all file contents in bytes.
    pub content_bytes: u64,
    /// Size of the uncompressed tar container.
    pub container_bytes: u64,
    /// Size of the gzip blob.
    pub compressed_bytes: u64,
}

/// A finished, compressed archive ready for literal encoding.
#[derive(Debug, Clone)]
pub struct Archive {
    /// gzip(tar) bytes.
    pub blob: Vec<u8>,
    /// Build statistics.
    pub summary: ArchiveSummary,
}

impl Archive {
    /// Hex SHA-256 of the compressed blob.
    pub fn digest(&self) -> String {
        blob_digest(&self.blob)
    }
}

/// Hex SHA-256 of an arbitrary blob.
pub fn blob_digest(blob: &[u8]) -> String {
    hex::encode(Sha256::digest(blob))
}

/// Walk `root` and produce the compressed archive of every regular file in it.
///
/// Nothing is returned unless every file was read and written successfully.
pub fn build_archive(root: &Path, config: &BuildConfig) -> Result<Archive> {
    config.validate()?;

    let files = walk(root)?;

    let mut builder = ArchiveBuilder::new(root, config);
    for file in &files {
        builder.append(file)?;
    }
    let (container, mut summary) = builder.finish()?;

    let blob = compress(&container, config.compression_level)?;
    summary.compressed_bytes = blob.len() as u64;

    info!(
        "archived {} files from {}: {} content bytes, {} container bytes, {} compressed bytes",
        summary.files,
        root.display(),
        summary.content_bytes,
        summary.container_bytes,
        summary.compressed_bytes
    );

    Ok(Archive { blob, summary })
}
