// Read-only in-memory file system decoded from an embedded gzip(tar) blob.
//
// This file is emitted verbatim into generated modules, so it may only use
// `std`, `flate2` and `tar`, and must not name items by crate-root paths.

use std::collections::HashMap;
use std::io::{self, Read, Seek, SeekFrom};
use std::sync::OnceLock;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Metadata recorded for an embedded file at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    path: String,
    size: u64,
    mode: u32,
    mtime: u64,
}

impl FileInfo {
    /// Archive path, relative and `/`-separated.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Final path component.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Size in bytes.
    pub fn len(&self) -> u64 {
        self.size
    }

    /// Whether the file has no contents.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Permission bits.
    pub fn mode(&self) -> u32 {
        self.mode
    }

    /// Modification time as stored in the archive.
    pub fn modified(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(self.mtime)
    }

    /// Modification time in seconds since the Unix epoch.
    pub fn mtime(&self) -> u64 {
        self.mtime
    }

    /// Only regular files are embedded.
    pub fn is_dir(&self) -> bool {
        false
    }
}

/// One embedded file: metadata plus contents.
#[derive(Debug, Clone)]
pub struct EmbeddedFile {
    info: FileInfo,
    contents: Vec<u8>,
}

impl EmbeddedFile {
    /// Metadata recorded at build time.
    pub fn info(&self) -> &FileInfo {
        &self.info
    }

    /// Full file contents.
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }
}

/// Decode a gzip(tar) blob into a path to file mapping.
///
/// Non-regular entries are ignored. Keys are the stored paths with any
/// leading `/` removed.
pub fn decode_archive(data: &[u8]) -> io::Result<HashMap<String, EmbeddedFile>> {
    let mut archive = tar::Archive::new(flate2::read::GzDecoder::new(data));
    let mut files = HashMap::new();

    for entry in archive.entries()? {
        let mut entry = entry?;
        let header = entry.header();
        if !header.entry_type().is_file() {
            continue;
        }
        let size = header.size()?;
        let mode = header.mode()?;
        let mtime = header.mtime()?;

        let path = String::from_utf8(entry.path_bytes().into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let path = normalize(&path).to_string();

        let mut contents = Vec::new();
        entry.read_to_end(&mut contents)?;
        if contents.len() as u64 != size {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("{}: expected {} bytes, read {}", path, size, contents.len()),
            ));
        }

        let info = FileInfo {
            path: path.clone(),
            size,
            mode,
            mtime,
        };
        files.insert(path, EmbeddedFile { info, contents });
    }

    Ok(files)
}

fn normalize(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

fn not_found(path: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("{}: file does not exist", path))
}

fn not_supported() -> io::Error {
    io::Error::new(
        io::ErrorKind::PermissionDenied,
        "directory listing is not supported by embedded files",
    )
}

/// Lazily decoded, read-only file system over an embedded blob.
///
/// The blob is decoded on the first access and the result is shared for the
/// rest of the process. Concurrent first accesses block until the single
/// decode finishes.
pub struct EmbeddedFs {
    data: &'static [u8],
    files: OnceLock<HashMap<String, EmbeddedFile>>,
}

impl EmbeddedFs {
    /// Wrap an embedded blob without decoding it.
    pub const fn new(data: &'static [u8]) -> Self {
        Self {
            data,
            files: OnceLock::new(),
        }
    }

    /// Whether the blob has already been decoded.
    pub fn is_loaded(&self) -> bool {
        self.files.get().is_some()
    }

    /// Decode the blob if needed and return the file mapping.
    ///
    /// # Panics
    ///
    /// Panics if the blob is not a valid archive. The blob is produced by the
    /// generator that emitted this code, so this indicates a build bug.
    pub fn load(&self) -> &HashMap<String, EmbeddedFile> {
        self.files.get_or_init(|| {
            decode_archive(self.data)
                .unwrap_or_else(|e| panic!("embedded file system is corrupt: {}", e))
        })
    }

    fn lookup(&self, path: &str) -> io::Result<&EmbeddedFile> {
        self.load().get(normalize(path)).ok_or_else(|| not_found(path))
    }

    /// Open a file for reading. A single leading `/` is ignored.
    pub fn open(&self, path: &str) -> io::Result<FileHandle<'_>> {
        self.lookup(path).map(FileHandle::new)
    }

    /// Metadata of a file.
    pub fn stat(&self, path: &str) -> io::Result<&FileInfo> {
        self.lookup(path).map(EmbeddedFile::info)
    }

    /// Full contents of a file, borrowed for the life of the file system.
    pub fn read(&self, path: &str) -> io::Result<&[u8]> {
        self.lookup(path).map(EmbeddedFile::contents)
    }

    /// Whether `path` names an embedded file.
    pub fn contains(&self, path: &str) -> bool {
        self.load().contains_key(normalize(path))
    }

    /// All stored paths in sorted order.
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.load().keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    /// Number of embedded files.
    pub fn len(&self) -> usize {
        self.load().len()
    }

    /// Whether no files were embedded.
    pub fn is_empty(&self) -> bool {
        self.load().is_empty()
    }

    /// Always fails: the archive is a flat file list, not a directory tree.
    pub fn read_dir(&self, _path: &str) -> io::Result<Vec<FileInfo>> {
        self.load();
        Err(not_supported())
    }
}

/// Cursor over one embedded file.
///
/// Handles never modify the shared contents and closing one releases nothing.
#[derive(Debug, Clone)]
pub struct FileHandle<'a> {
    file: &'a EmbeddedFile,
    pos: u64,
}

impl<'a> FileHandle<'a> {
    fn new(file: &'a EmbeddedFile) -> Self {
        Self { file, pos: 0 }
    }

    /// Metadata of the open file.
    pub fn stat(&self) -> io::Result<&'a FileInfo> {
        Ok(&self.file.info)
    }

    /// Always fails with `PermissionDenied`.
    pub fn readdir(&self, _count: usize) -> io::Result<Vec<FileInfo>> {
        Err(not_supported())
    }

    /// Release the handle. The shared contents stay resident.
    pub fn close(self) -> io::Result<()> {
        Ok(())
    }

    /// Current cursor offset.
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// The whole file, independent of the cursor.
    pub fn contents(&self) -> &'a [u8] {
        &self.file.contents
    }
}

impl Read for FileHandle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let contents = &self.file.contents;
        let start = self.pos.min(contents.len() as u64) as usize;
        let n = buf.len().min(contents.len() - start);
        buf[..n].copy_from_slice(&contents[start..start + n]);
        self.pos += n as u64;
        Ok(n)
    }
}

impl Seek for FileHandle<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let (base, offset) = match pos {
            SeekFrom::Start(n) => {
                self.pos = n;
                return Ok(n);
            }
            SeekFrom::Current(n) => (self.pos, n),
            SeekFrom::End(n) => (self.file.contents.len() as u64, n),
        };
        match base.checked_add_signed(offset) {
            Some(n) => {
                self.pos = n;
                Ok(n)
            }
            None => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "invalid seek to a negative or overflowing position",
            )),
        }
    }
}
