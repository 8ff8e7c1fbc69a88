//! # CLI
//!
//! This module defines the data structures used to parse command line
//! arguments when running the program.

use std::path::PathBuf;

use clap::Parser;

use crate::paths::DEFAULT_TARGET_DIRECTORY;

/// This struct represents the top-level CLI entry point for the tool.
#[derive(Parser, Debug)]
#[command(about = "Deletes a directory and all of its contents", long_about = None)]
pub struct Cli {
    /// The directory to delete.
    #[arg(default_value = DEFAULT_TARGET_DIRECTORY)]
    pub path: PathBuf,
}
