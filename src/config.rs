//! Configuration constants and types for archive building.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default gzip level (maximum compression).
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 9;

/// Highest level accepted by the gzip encoder.
pub const MAX_COMPRESSION_LEVEL: u32 = 9;

/// Mode stored for regular files when modes are normalized.
pub const NORMALIZED_FILE_MODE: u32 = 0o644;

/// Mode stored for executable files when modes are normalized.
pub const NORMALIZED_EXEC_MODE: u32 = 0o755;

/// Source of the modification time written into each archive header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Timestamps {
    /// Use each file's own modification time.
    #[default]
    Preserve,
    /// Stamp every entry with the same time (seconds since the Unix epoch).
    Fixed(u64),
}

/// Configuration for building an embedded archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// gzip compression level, 0 to 9.
    pub compression_level: u32,

    /// Modification time policy.
    /// `Fixed` makes output byte-identical across checkouts.
    pub mtime: Timestamps,

    /// Store 0o644/0o755 instead of the on-disk permission bits.
    pub normalize_mode: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            mtime: Timestamps::Preserve,
            normalize_mode: false,
        }
    }
}

impl BuildConfig {
    /// Configuration whose output depends only on file names and contents.
    pub fn reproducible(epoch: u64) -> Self {
        Self {
            mtime: Timestamps::Fixed(epoch),
            normalize_mode: true,
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.compression_level > MAX_COMPRESSION_LEVEL {
            return Err(Error::InvalidConfig(format!(
                "compression level must be between 0 and {}, got {}",
                MAX_COMPRESSION_LEVEL, self.compression_level
            )));
        }
        Ok(())
    }

    /// Resolve the header mtime for a file whose on-disk mtime is `actual`.
    pub fn header_mtime(&self, actual: u64) -> u64 {
        match self.mtime {
            Timestamps::Preserve => actual,
            Timestamps::Fixed(epoch) => epoch,
        }
    }

    /// Resolve the header mode for a file whose on-disk mode is `actual`.
    pub fn header_mode(&self, actual: u32) -> u32 {
        let mode = actual & 0o7777;
        if !self.normalize_mode {
            mode
        } else if mode & 0o111 != 0 {
            NORMALIZED_EXEC_MODE
        } else {
            NORMALIZED_FILE_MODE
        }
    }
}
