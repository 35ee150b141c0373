//! Content hashing for scanned files using SHA-256
//!
//! Files are streamed through the digest in fixed-size chunks; a file is never
//! loaded into memory whole.

use crate::error::ReadFailure;
use crate::types::FileDigest;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

/// Chunk size for streaming file contents into the digest
pub const CHUNK_SIZE: usize = 4096;

/// Hashes the contents of one file.
///
/// Implementations must be safe to call from several hashing workers at once.
pub trait ContentHasher: Send + Sync {
    fn hash(&self, path: &Path) -> Result<FileDigest, ReadFailure>;
}

/// Default hasher: streaming SHA-256 over the file bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl ContentHasher for Sha256Hasher {
    fn hash(&self, path: &Path) -> Result<FileDigest, ReadFailure> {
        hash_file(path)
    }
}

/// Compute the digest of a file on disk
///
/// Any open or read error is reported as a `ReadFailure` for that path.
pub fn hash_file(path: &Path) -> Result<FileDigest, ReadFailure> {
    let file = File::open(path).map_err(|e| ReadFailure::new(path, e))?;
    hash_reader(file).map_err(|e| ReadFailure::new(path, e))
}

/// Compute the digest of everything a reader yields until end-of-stream
pub fn hash_reader<R: Read>(mut reader: R) -> io::Result<FileDigest> {
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(FileDigest::from_bytes(hasher.finalize().into()))
}

/// Compute the digest of in-memory content
pub fn digest_bytes(content: &[u8]) -> FileDigest {
    FileDigest::from_bytes(Sha256::digest(content).into())
}
