//! Second pass: gzip over the finished tar container.

use crate::error::Result;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Compress a fully materialized container at the given gzip level.
pub fn compress(container: &[u8], level: u32) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::new(level));
    encoder.write_all(container)?;
    Ok(encoder.finish()?)
}
