//! Filesystem scanning
//!
//! Walks a root directory under the exclusion and size policy, then hashes
//! every eligible file into a root-relative Snapshot.

pub mod hasher;
pub mod path;
pub mod scanner;
pub mod walker;
