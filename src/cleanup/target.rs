//! # Target Classification
//!
//! Decides what kind of filesystem entry a cleanup target is before anything
//! acts on it.

use std::{fs, path::Path};

/// What a cleanup target currently is on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Nothing exists at the path, or its metadata could not be read.
    Missing,
    /// A regular file, or any other entry that is not a directory.
    NotADirectory,
    /// A real directory.
    Directory,
    /// A symbolic link that resolves to a directory.
    SymbolicLink,
}

/// Classifies `path` into exactly one [`Target`].
///
/// Existence follows symbolic links, so a dangling link is [`Target::Missing`]
/// and a link to a file is [`Target::NotADirectory`]. Any error while reading
/// metadata is treated as the path not existing.
pub fn classify(path: &Path) -> Target {
    let Ok(metadata) = fs::metadata(path) else {
        return Target::Missing;
    };

    if !metadata.is_dir() {
        return Target::NotADirectory;
    }

    match fs::symlink_metadata(path) {
        Ok(link) if link.file_type().is_symlink() => Target::SymbolicLink,
        _ => Target::Directory,
    }
}
