//! # Remove Operations
//!
//! This module deletes a directory tree and reports the result as an
//! [`Outcome`] rather than an error.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use crate::cleanup::{
    errors::RemoveError,
    target::{Target, classify},
};

/// The result of a single cleanup attempt.
///
/// Only [`Outcome::Failed`] is a failure; a missing directory is not.
#[derive(Debug)]
pub enum Outcome {
    /// The directory and everything beneath it was removed.
    Deleted {
        /// The removed directory.
        path: PathBuf,
    },
    /// Nothing existed at the path.
    NotFound {
        /// The requested path.
        path: PathBuf,
    },
    /// The path exists but is not a directory, so it was left alone.
    NotADirectory {
        /// The requested path.
        path: PathBuf,
    },
    /// Removal was attempted or refused and the tree may still (partially)
    /// exist.
    Failed {
        /// The requested path.
        path: PathBuf,
        /// Why removal failed.
        error: RemoveError,
    },
}

impl Outcome {
    /// The path this outcome is about.
    pub fn path(&self) -> &Path {
        match self {
            Outcome::Deleted { path }
            | Outcome::NotFound { path }
            | Outcome::NotADirectory { path }
            | Outcome::Failed { path, .. } => path,
        }
    }

    /// True if the directory should have been removed but was not.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Deleted { path } => write!(
                f,
                "Successfully deleted directory and all its contents: {}",
                path.display()
            ),
            Outcome::NotFound { path } => write!(
                f,
                "Directory not found, nothing to delete: {}",
                path.display()
            ),
            Outcome::NotADirectory { path } => write!(
                f,
                "Error: {} is a file, not a directory. Cannot cleanup.",
                path.display()
            ),
            Outcome::Failed { path, error } => {
                write!(f, "Error: {error} - Could not delete {}.", path.display())
            }
        }
    }
}

/// Deletes the directory at `path` and all of its contents.
///
/// The path is classified first and only a real directory is removed. Files
/// and symbolic links are never deleted. OS errors during removal are caught
/// and returned as [`Outcome::Failed`]; this function never panics on them
/// and never returns an error.
///
/// # Arguments
///
/// - `path` - The directory to remove.
///
/// # Returns
///
/// The [`Outcome`] of the attempt.
pub fn remove_directory_tree(path: impl AsRef<Path>) -> Outcome {
    let path = path.as_ref().to_path_buf();

    match classify(&path) {
        Target::Missing => Outcome::NotFound { path },
        Target::NotADirectory => Outcome::NotADirectory { path },
        Target::SymbolicLink => Outcome::Failed {
            path,
            error: RemoveError::SymbolicLink,
        },
        Target::Directory => match fs::remove_dir_all(&path) {
            Ok(()) => Outcome::Deleted { path },
            Err(error) => Outcome::Failed {
                path,
                error: RemoveError::Io { error },
            },
        },
    }
}
