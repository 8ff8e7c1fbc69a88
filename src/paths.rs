//! # Paths
//!
//! Filesystem locations shared across the crate.

/// The directory removed when no path is given on the command line.
///
/// Matches the output directory of the companion file-generation script.
pub const DEFAULT_TARGET_DIRECTORY: &str = "test";
