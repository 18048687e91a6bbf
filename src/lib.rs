//! Embedded Virtual File System generator
//!
//! Packages a directory tree into a compressed blob and generates Rust source
//! that serves the tree as a read-only, in-memory file system.
//!
//! # Architecture
//!
//! ```text
//! Build time:  Walk → tar → gzip → byte-string literal → generated module
//! Run time:    literal → gunzip → untar (once, lazily) → open/read/seek/stat
//! ```
//!
//! The run-time half lives in [`runtime`]. Its source is copied verbatim into
//! every generated module, so the code that decodes the blob is the same code
//! tested here.
//!
//! # Example
//!
//! ```rust,no_run
//! use embed_vfs::{embed_dir, BuildConfig};
//! use std::path::Path;
//!
//! let source = embed_dir(Path::new("./static"), "assets", &BuildConfig::default()).unwrap();
//! std::fs::write("src/assets.rs", source).unwrap();
//!
//! // In the consuming crate (with `flate2` and `tar` as dependencies):
//! //
//! //     include!("assets.rs");
//! //     let page = assets::FILES.read("/index.html")?;
//! ```

pub mod archive;
pub mod codegen;
pub mod config;
pub mod error;
pub mod literal;
pub mod runtime;
pub mod walker;

pub use archive::{build_archive, Archive, ArchiveSummary};
pub use codegen::generate;
pub use config::{BuildConfig, Timestamps};
pub use error::{Error, Result};
pub use runtime::{EmbeddedFs, FileHandle, FileInfo};

use log::info;
use std::path::Path;

/// Archive `root` and return generated source for module `module_name`.
///
/// The module name is checked before any file is read. On error no source
/// is produced.
pub fn embed_dir(root: &Path, module_name: &str, config: &BuildConfig) -> Result<String> {
    codegen::validate_module_name(module_name)?;

    let archive = build_archive(root, config)?;
    let source = generate(module_name, &archive.blob)?;

    info!(
        "generated module {} ({} bytes of source, archive {})",
        module_name,
        source.len(),
        archive.digest()
    );

    Ok(source)
}
