//! # Directory cleanup
//!
//! Deletes a directory and everything beneath it, reporting what happened
//! instead of failing.

mod cleanup;
mod cli;
mod paths;

use clap::Parser;

use crate::cli::Cli;

pub use cleanup::{Outcome, Target, classify, errors::RemoveError, remove_directory_tree};
pub use paths::DEFAULT_TARGET_DIRECTORY;

/// Removes the directory named on the command line.
///
/// Reads the command-line arguments supplied. If no path is given, the
/// [`DEFAULT_TARGET_DIRECTORY`] is removed. The outcome is printed to
/// standard output; a failed removal does not halt the caller.
pub fn run() {
    let cli = Cli::parse();
    println!("{}", cleanup::remove_directory_tree(&cli.path));
}
