//! # Error Types
//!
//! This module defines custom error types used throughout the [`cleanup`]
//! module.
//!
//! [`cleanup`]: crate::cleanup

use std::io;

/// Errors that occur while a directory tree is being removed.
///
/// These never escape [`remove_directory_tree`]; they are carried inside
/// [`Outcome::Failed`] instead. The `Display` text is the bare description
/// printed in the failure line, without the path.
///
/// [`remove_directory_tree`]: crate::cleanup::remove_directory_tree
/// [`Outcome::Failed`]: crate::cleanup::Outcome::Failed
#[derive(thiserror::Error, Debug)]
pub enum RemoveError {
    /// The operating system refused to remove part of the tree.
    ///
    /// Displays as the system's description (e.g. "Permission denied") with
    /// the `(os error N)` suffix stripped.
    #[error("{}", os_error_message(.error))]
    Io {
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// The path is a symbolic link to a directory, which is never followed.
    ///
    /// No OS error is involved, so there is no system description to print;
    /// this fixed message takes its place in the failure line.
    #[error("Cannot call rmtree on a symbolic link")]
    SymbolicLink,
}

/// Describes an I/O error the way the operating system does.
fn os_error_message(error: &io::Error) -> String {
    let message = error.to_string();
    match error.raw_os_error() {
        Some(code) => message
            .strip_suffix(&format!(" (os error {code})"))
            .map(str::to_string)
            .unwrap_or(message),
        None => message,
    }
}
